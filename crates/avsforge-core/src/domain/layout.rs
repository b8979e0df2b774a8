//! The fixed project layout.
//!
//! Ordering matters: [`directory_tree`] is returned parent-before-child, and
//! the orchestrator creates every directory before any file beneath it. The
//! top-level project directory itself is created by the orchestrator after
//! the existence precondition passes; it is not part of this list.

use super::{RelativePath, TemplateKind, TemplateName};

/// The ordered set of directories a generated project contains.
///
/// Both template kinds currently share one skeleton.
pub fn directory_tree(template: TemplateKind) -> Vec<RelativePath> {
    let dirs: &[&str] = match template {
        TemplateKind::TaskBased | TemplateKind::Oracle => &[
            "contracts",
            "contracts/interfaces",
            "scripts",
            "test",
            "off-chain",
            "off-chain/aggregator",
            "off-chain/executor",
        ],
    };

    dirs.iter().map(|d| RelativePath::new(*d)).collect()
}

/// The fixed set of files every generation produces, in write order.
///
/// Excludes the bundled `contracts/interfaces/*` copies, which are optional
/// (skipped when the bundled resource root is absent). Used by dry-run
/// output and by tests asserting the generated file set.
pub fn generated_files(template: TemplateKind) -> Vec<RelativePath> {
    let names: &[TemplateName] = match template {
        TemplateKind::TaskBased | TemplateKind::Oracle => &[
            TemplateName::RootPackageJson,
            TemplateName::HardhatConfig,
            TemplateName::TaskMailboxContract,
            TemplateName::TaskAvsRegistrarContract,
            TemplateName::SlashingConditionsContract,
            TemplateName::DeployScript,
            TemplateName::TaskMailboxTest,
            TemplateName::AggregatorStub,
            TemplateName::ExecutorStub,
            TemplateName::OffchainPackageJson,
        ],
    };

    names
        .iter()
        .map(|n| RelativePath::new(n.relative_path()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_precede_children() {
        let dirs = directory_tree(TemplateKind::TaskBased);
        for (i, dir) in dirs.iter().enumerate() {
            if let Some(parent) = dir.as_path().parent() {
                if parent.as_os_str().is_empty() {
                    continue;
                }
                let parent_index = dirs
                    .iter()
                    .position(|d| d.as_path() == parent)
                    .unwrap_or_else(|| panic!("parent of {dir} missing from tree"));
                assert!(parent_index < i, "{dir} created before its parent");
            }
        }
    }

    #[test]
    fn tree_has_expected_entries() {
        let dirs = directory_tree(TemplateKind::TaskBased);
        let strs: Vec<_> = dirs.iter().map(|d| d.as_str()).collect();
        assert_eq!(
            strs,
            [
                "contracts",
                "contracts/interfaces",
                "scripts",
                "test",
                "off-chain",
                "off-chain/aggregator",
                "off-chain/executor",
            ]
        );
    }

    #[test]
    fn oracle_shares_the_task_based_skeleton() {
        assert_eq!(
            directory_tree(TemplateKind::Oracle),
            directory_tree(TemplateKind::TaskBased)
        );
        assert_eq!(
            generated_files(TemplateKind::Oracle),
            generated_files(TemplateKind::TaskBased)
        );
    }

    #[test]
    fn every_generated_file_lands_in_a_created_directory() {
        let dirs = directory_tree(TemplateKind::TaskBased);
        for file in generated_files(TemplateKind::TaskBased) {
            let parent = file.as_path().parent().unwrap();
            if parent.as_os_str().is_empty() {
                continue; // project root, created by the orchestrator
            }
            assert!(
                dirs.iter().any(|d| d.as_path() == parent),
                "no directory entry covers {file}"
            );
        }
    }

    #[test]
    fn generated_files_are_unique() {
        let files = generated_files(TemplateKind::TaskBased);
        let mut seen = std::collections::HashSet::new();
        for f in &files {
            assert!(seen.insert(f.as_str().to_string()), "duplicate path {f}");
        }
        assert_eq!(files.len(), 10);
    }
}

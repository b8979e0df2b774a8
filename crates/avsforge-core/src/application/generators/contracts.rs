//! Contracts generator.
//!
//! Emits the three fixed contract files verbatim, plus byte-for-byte copies
//! of whatever interface definitions are bundled under
//! `contracts/interfaces/`. The interface copies are optional: when the
//! bundled resource root is absent the static tree is empty and generation
//! proceeds without them.

use crate::application::ports::ResourceProvider;
use crate::domain::{Artifact, TemplateName};

use super::verbatim;

/// Subdirectory of the bundled root holding the interface definitions.
pub const INTERFACES_DIR: &str = "contracts/interfaces";

pub fn artifacts(resources: &dyn ResourceProvider) -> Vec<Artifact> {
    let mut artifacts = vec![
        verbatim(resources, TemplateName::TaskMailboxContract),
        verbatim(resources, TemplateName::TaskAvsRegistrarContract),
        verbatim(resources, TemplateName::SlashingConditionsContract),
    ];
    artifacts.extend(resources.static_tree(INTERFACES_DIR));
    artifacts
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::application::ports::MockResourceProvider;
    use crate::domain::{RelativePath, TemplateSource};

    #[test]
    fn emits_three_contracts_plus_bundled_interfaces() {
        let mut resources = MockResourceProvider::new();
        resources
            .expect_load_template()
            .returning(|name| TemplateSource::embedded(name.relative_path()));
        resources.expect_static_tree().returning(|_| {
            vec![Artifact::new(
                RelativePath::new("contracts/interfaces/ITaskMailbox.sol"),
                "interface ITaskMailbox {}",
            )]
        });

        let artifacts = artifacts(&resources);
        let paths: Vec<_> = artifacts.iter().map(|a| a.relative_path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "contracts/TaskMailbox.sol",
                "contracts/TaskAVSRegistrar.sol",
                "contracts/SlashingConditions.sol",
                "contracts/interfaces/ITaskMailbox.sol",
            ]
        );
    }

    #[test]
    fn missing_interface_tree_is_not_an_error() {
        let mut resources = MockResourceProvider::new();
        resources
            .expect_load_template()
            .returning(|name| TemplateSource::embedded(name.relative_path()));
        resources.expect_static_tree().returning(|_| Vec::new());

        let artifacts = artifacts(&resources);
        assert_eq!(artifacts.len(), 3);
    }
}

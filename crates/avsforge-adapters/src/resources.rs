//! Bundled resource provider.
//!
//! Resolves template bodies and static file copies from a bundled
//! `templates/` directory, with compiled-in defaults as the fallback tier.
//!
//! # Bundled root resolution order
//!
//! The bundled root is probed once, at construction, stopping at the first
//! directory that exists:
//!
//! 1. **`$AVSFORGE_TEMPLATES_DIR`** — environment variable override. Set
//!    this in `.env` or your shell profile to point at a custom payload
//!    collection.
//! 2. **`./templates`** — relative to the current working directory. This
//!    is the standard layout when running from a checkout root.
//! 3. **`<executable-dir>/templates`** — sibling to the installed binary.
//!
//! When no candidate exists the provider works purely from
//! [`embedded`](crate::embedded) defaults.
//!
//! # Failure semantics
//!
//! - [`load_template`](BundledResources::load_template) never fails: any
//!   read problem degrades to the embedded default for that name, with a
//!   `WARN` log.
//! - [`static_tree`](BundledResources::static_tree) returns an empty list
//!   when the root or subdirectory is absent; individual unreadable files
//!   are skipped. Those copies are optional extras with no embedded
//!   counterpart. The asymmetry between the two methods is part of the
//!   provider contract, not an accident.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, instrument, warn};

use avsforge_core::application::ports::ResourceProvider;
use avsforge_core::domain::{Artifact, RelativePath, TemplateName, TemplateSource};

use crate::embedded;

/// Production resource provider: bundled directory with embedded fallback.
#[derive(Debug, Clone)]
pub struct BundledResources {
    root: Option<PathBuf>,
}

impl BundledResources {
    /// Probe the candidate locations and use the first existing directory.
    #[instrument]
    pub fn discover() -> Self {
        for candidate in candidate_paths() {
            if candidate.is_dir() {
                debug!(root = %candidate.display(), "bundled resource root found");
                return Self {
                    root: Some(candidate),
                };
            }
            debug!(path = %candidate.display(), "candidate does not exist, skipping");
        }

        debug!("no bundled resource root found; using embedded defaults only");
        Self { root: None }
    }

    /// Use an explicit bundled root. The directory does not need to exist;
    /// a missing root simply means every lookup falls back.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// A provider with no bundled tier at all.
    pub fn embedded_only() -> Self {
        Self { root: None }
    }
}

impl ResourceProvider for BundledResources {
    fn load_template(&self, name: TemplateName) -> TemplateSource {
        if let Some(root) = &self.root {
            let path = root.join(name.relative_path());
            match fs::read_to_string(&path) {
                Ok(body) => return TemplateSource::bundled(path, body),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "bundled template unreadable, using embedded default"
                    );
                }
            }
        }

        TemplateSource::embedded(embedded::default_body(name))
    }

    #[instrument(skip(self))]
    fn static_tree(&self, subdir: &str) -> Vec<Artifact> {
        let Some(root) = &self.root else {
            warn!(subdir, "no bundled root; skipping optional static copies");
            return Vec::new();
        };

        let dir = root.join(subdir);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    dir = %dir.display(),
                    error = %e,
                    "static subdirectory unreadable; skipping optional copies"
                );
                return Vec::new();
            }
        };

        // Sort by file name so the copy order is stable across platforms.
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        let mut artifacts = Vec::new();
        for file_name in names {
            let path = dir.join(&file_name);
            match fs::read_to_string(&path) {
                Ok(content) => {
                    artifacts.push(Artifact::new(
                        RelativePath::new(format!("{subdir}/{file_name}")),
                        content,
                    ));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable static file");
                }
            }
        }

        debug!(subdir, count = artifacts.len(), "static tree collected");
        artifacts
    }
}

// ── Resolution helpers ────────────────────────────────────────────────────────

/// Build the ordered list of candidate bundled roots to probe.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    // 1. Explicit environment variable.
    if let Ok(env_dir) = std::env::var("AVSFORGE_TEMPLATES_DIR") {
        paths.push(PathBuf::from(env_dir));
    }

    // 2. ./templates (CWD-relative).
    paths.push(PathBuf::from("templates"));

    // 3. <executable-dir>/templates.
    if let Some(exe_sibling) = exe_sibling_templates() {
        paths.push(exe_sibling);
    }

    paths
}

/// Return `<directory of current executable>/templates`, or `None` if the
/// executable path cannot be determined (some platforms / test runners).
fn exe_sibling_templates() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use avsforge_core::domain::SourceOrigin;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_root_falls_back_to_embedded() {
        let provider = BundledResources::with_root("/absolutely/does/not/exist");
        let source = provider.load_template(TemplateName::RootPackageJson);
        assert!(source.is_fallback());
        assert!(source.body.contains("{{projectName}}"));
    }

    #[test]
    fn embedded_only_never_touches_disk() {
        let provider = BundledResources::embedded_only();
        let source = provider.load_template(TemplateName::DeployScript);
        assert_eq!(source.origin, SourceOrigin::EmbeddedDefault);
    }

    #[test]
    fn bundled_body_wins_over_embedded() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{\"name\": \"{{projectName}}\"}").unwrap();

        let provider = BundledResources::with_root(temp.path());
        let source = provider.load_template(TemplateName::RootPackageJson);

        assert!(!source.is_fallback());
        assert_eq!(source.body, "{\"name\": \"{{projectName}}\"}");
        match source.origin {
            SourceOrigin::Bundled(path) => assert!(path.ends_with("package.json")),
            other => panic!("expected Bundled origin, got {other:?}"),
        }
    }

    #[test]
    fn partially_bundled_root_mixes_tiers() {
        // Only one template bundled; every other name must still resolve.
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("scripts")).unwrap();
        fs::write(temp.path().join("scripts/deploy.ts"), "custom deploy").unwrap();

        let provider = BundledResources::with_root(temp.path());
        assert_eq!(
            provider.load_template(TemplateName::DeployScript).body,
            "custom deploy"
        );
        assert!(provider.load_template(TemplateName::HardhatConfig).is_fallback());
    }

    #[test]
    fn static_tree_is_empty_without_root() {
        let provider = BundledResources::embedded_only();
        assert!(provider.static_tree("contracts/interfaces").is_empty());
    }

    #[test]
    fn static_tree_is_empty_when_subdir_missing() {
        let temp = TempDir::new().unwrap();
        let provider = BundledResources::with_root(temp.path());
        assert!(provider.static_tree("contracts/interfaces").is_empty());
    }

    #[test]
    fn static_tree_copies_files_in_name_order() {
        let temp = TempDir::new().unwrap();
        let iface_dir = temp.path().join("contracts/interfaces");
        fs::create_dir_all(&iface_dir).unwrap();
        fs::write(iface_dir.join("ITaskMailbox.sol"), "interface ITaskMailbox {}").unwrap();
        fs::write(iface_dir.join("IAVSRegistrar.sol"), "interface IAVSRegistrar {}").unwrap();

        let provider = BundledResources::with_root(temp.path());
        let artifacts = provider.static_tree("contracts/interfaces");

        let paths: Vec<_> = artifacts.iter().map(|a| a.relative_path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "contracts/interfaces/IAVSRegistrar.sol",
                "contracts/interfaces/ITaskMailbox.sol",
            ]
        );
        assert_eq!(artifacts[1].content, "interface ITaskMailbox {}");
    }

    #[test]
    fn static_tree_ignores_nested_directories() {
        let temp = TempDir::new().unwrap();
        let iface_dir = temp.path().join("contracts/interfaces");
        fs::create_dir_all(iface_dir.join("nested")).unwrap();
        fs::write(iface_dir.join("ITaskMailbox.sol"), "interface ITaskMailbox {}").unwrap();

        let provider = BundledResources::with_root(temp.path());
        assert_eq!(provider.static_tree("contracts/interfaces").len(), 1);
    }
}

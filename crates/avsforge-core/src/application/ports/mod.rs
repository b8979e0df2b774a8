//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generation engine needs from external
//! systems. The `avsforge-adapters` crate provides the production
//! implementations; the CLI crate provides the interactive
//! [`ConfigProvider`].

use std::path::Path;

use crate::domain::{Artifact, ConfigDefaults, ProjectConfig, TemplateContext, TemplateName, TemplateSource};
use crate::error::AvsforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `avsforge_adapters::filesystem::LocalFilesystem` (production)
/// - `avsforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Creating an existing
    /// directory is a no-op, not an error.
    fn create_dir_all(&self, path: &Path) -> AvsforgeResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> AvsforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for bundled resource access.
///
/// Implemented by `avsforge_adapters::resources::BundledResources`.
///
/// The two methods fail differently:
/// - [`load_template`](Self::load_template) never fails — a missing or
///   unreadable bundled body degrades to the embedded default for that name.
/// - [`static_tree`](Self::static_tree) returns an empty list when the
///   bundled root or subdirectory is absent — those copies are optional and
///   generation proceeds without them.
#[cfg_attr(test, mockall::automock)]
pub trait ResourceProvider: Send + Sync {
    /// Resolve a template body, bundled first, embedded default on any
    /// read failure.
    fn load_template(&self, name: TemplateName) -> TemplateSource;

    /// Byte-for-byte copies of the bundled files under `subdir`, with
    /// artifact paths prefixed by `subdir`. Empty when nothing is bundled.
    fn static_tree(&self, subdir: &str) -> Vec<Artifact>;
}

/// Port for template rendering.
///
/// Implemented by `avsforge_adapters::renderer::SimpleRenderer`.
/// Rendering is pure and side-effect free; substitution is permissive
/// (unknown placeholders survive as literal text).
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, source: &TemplateSource, context: &TemplateContext) -> String;
}

/// Port for configuration collection.
///
/// The engine never talks to a prompt library directly; it asks this port
/// for a validated [`ProjectConfig`] and treats the answer as final.
/// Implementations:
/// - `avsforge_adapters::FixedConfigProvider` — deterministic, built from
///   the defaults (tests, `--yes`, non-TTY runs).
/// - The dialoguer prompt in `avsforge-cli` (feature `interactive`).
#[cfg_attr(test, mockall::automock)]
pub trait ConfigProvider: Send + Sync {
    /// Produce the final configuration, seeded with `defaults`.
    ///
    /// # Errors
    ///
    /// `ApplicationError::PromptCancelled` when the user aborts collection.
    fn collect(&self, defaults: &ConfigDefaults) -> AvsforgeResult<ProjectConfig>;
}

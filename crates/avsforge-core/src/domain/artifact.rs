//! Artifact and template resolution vocabulary.
//!
//! An [`Artifact`] is one generated or copied file, described by its
//! output-relative path and final content. Artifacts are write-once: the
//! orchestrator writes each exactly once and never reads it back.
//!
//! Template bodies reach the generators as a [`TemplateSource`], which
//! records where the body came from:
//!
//! - [`SourceOrigin::Bundled`] — read from the bundled resource directory.
//! - [`SourceOrigin::EmbeddedDefault`] — compiled-in fallback used when the
//!   bundled copy is missing or unreadable.
//!
//! The two-variant origin makes the fallback an explicit, inspectable
//! resolution result rather than an exception path.

use std::collections::HashMap;
use std::path::PathBuf;

use super::{ProjectConfig, RelativePath};

/// A single file to be written into the generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the project root (e.g. `contracts/TaskMailbox.sol`).
    pub relative_path: RelativePath,
    /// Fully resolved content, ready to write.
    pub content: String,
}

impl Artifact {
    pub fn new(relative_path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

/// The closed set of template bodies the resource provider can resolve.
///
/// Bundled copies live at the same relative path the artifact is generated
/// to, so [`relative_path`](Self::relative_path) serves both as the lookup
/// key under the bundled root and as the output location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    RootPackageJson,
    HardhatConfig,
    DeployScript,
    TaskMailboxTest,
    TaskMailboxContract,
    TaskAvsRegistrarContract,
    SlashingConditionsContract,
    OffchainPackageJson,
    AggregatorStub,
    ExecutorStub,
}

impl TemplateName {
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::RootPackageJson => "package.json",
            Self::HardhatConfig => "hardhat.config.ts",
            Self::DeployScript => "scripts/deploy.ts",
            Self::TaskMailboxTest => "test/TaskMailbox.test.ts",
            Self::TaskMailboxContract => "contracts/TaskMailbox.sol",
            Self::TaskAvsRegistrarContract => "contracts/TaskAVSRegistrar.sol",
            Self::SlashingConditionsContract => "contracts/SlashingConditions.sol",
            Self::OffchainPackageJson => "off-chain/package.json",
            Self::AggregatorStub => "off-chain/aggregator/index.ts",
            Self::ExecutorStub => "off-chain/executor/index.ts",
        }
    }
}

/// Where a resolved template body came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Read from the bundled resource directory at the given path.
    Bundled(PathBuf),
    /// Compiled-in default body.
    EmbeddedDefault,
}

/// A template body resolved once per render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub body: String,
    pub origin: SourceOrigin,
}

impl TemplateSource {
    pub fn bundled(path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            origin: SourceOrigin::Bundled(path.into()),
        }
    }

    pub fn embedded(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            origin: SourceOrigin::EmbeddedDefault,
        }
    }

    /// `true` when this body is the compiled-in fallback.
    pub fn is_fallback(&self) -> bool {
        self.origin == SourceOrigin::EmbeddedDefault
    }
}

/// Context for template rendering.
///
/// A value object mapping placeholder names to their replacement strings,
/// derived directly from [`ProjectConfig`]. Immutable after creation.
///
/// ## Recognised variables
///
/// | Variable      | Source                      |
/// |---------------|-----------------------------|
/// | `projectName` | `ProjectConfig.project_name` |
/// | `description` | `ProjectConfig.description`  |
#[derive(Debug, Clone)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Derive the render context from a collected configuration.
    pub fn from_config(config: &ProjectConfig) -> Self {
        let mut variables = HashMap::new();
        variables.insert("projectName".to_string(), config.project_name().to_string());
        variables.insert("description".to_string(), config.description().to_string());
        Self { variables }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{variable}}` placeholders.
    ///
    /// Substitution is permissive: placeholders whose name is not in the
    /// context are left as literal text, never an error.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        // Single-pass replacement. Order doesn't matter for independent variables.
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

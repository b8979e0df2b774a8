//! Project configuration: the single validated record shared by all
//! generators.
//!
//! [`ProjectConfig`] is collected once per invocation (interactively or from
//! CLI flags, behind the [`ConfigProvider`] port), validated at construction,
//! and never mutated afterwards. Generators only ever read it.
//!
//! [`ConfigProvider`]: crate::application::ports::ConfigProvider

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// The project skeleton variant to generate.
///
/// Both variants currently produce the same directory and file shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Operators pick up queued tasks and post results to the mailbox.
    TaskBased,
    /// Operators report external data on-chain.
    Oracle,
}

impl TemplateKind {
    /// All known templates, in display order.
    pub const ALL: [TemplateKind; 2] = [TemplateKind::TaskBased, TemplateKind::Oracle];

    /// Parse a user-supplied template name.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.to_ascii_lowercase().as_str() {
            "task-based" => Ok(Self::TaskBased),
            "oracle" => Ok(Self::Oracle),
            _ => Err(DomainError::UnknownTemplate(s.into())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskBased => "task-based",
            Self::Oracle => "oracle",
        }
    }

    /// One-line description shown by `avsforge list` and the template prompt.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::TaskBased => "Task mailbox AVS: operators execute queued tasks and post results",
            Self::Oracle => "Oracle AVS: operators report external data on-chain",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated, immutable project configuration.
///
/// The sole input to every generator. Fields are private so the record cannot
/// be mutated after collection; accessors hand out references only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project_name: String,
    template: TemplateKind,
    description: String,
}

impl ProjectConfig {
    /// Construct a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidProjectName`] if the name is empty,
    /// starts with `.`, or contains path separators.
    pub fn new(
        project_name: impl Into<String>,
        template: TemplateKind,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let project_name = project_name.into();
        validate_project_name(&project_name)?;

        Ok(Self {
            project_name,
            template,
            description: description.into(),
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Defaults handed to the configuration collector.
///
/// The collector may fill in or confirm the template and description, but the
/// project name is settled before collection starts: the existence
/// precondition has already been checked against it.
#[derive(Debug, Clone)]
pub struct ConfigDefaults {
    pub project_name: String,
    pub template: TemplateKind,
    pub description: Option<String>,
}

impl ConfigDefaults {
    pub fn new(project_name: impl Into<String>, template: TemplateKind) -> Self {
        Self {
            project_name: project_name.into(),
            template,
            description: None,
        }
    }

    /// Fluent variant for attaching a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

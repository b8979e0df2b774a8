//! Interactive configuration prompt.
//!
//! Implements the core [`ConfigProvider`] port with dialoguer. The project
//! name is settled before collection starts (the existence precondition has
//! already run against it), so only the template and description are asked;
//! the name is shown, never re-asked.
//!
//! Compiled only with the default `interactive` cargo feature.

use dialoguer::{Input, Select};

use avsforge_core::{
    application::{ApplicationError, ports::ConfigProvider},
    domain::{ConfigDefaults, ProjectConfig, TemplateKind},
    error::AvsforgeResult,
};

/// Dialoguer-backed [`ConfigProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractivePrompt;

impl InteractivePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigProvider for InteractivePrompt {
    fn collect(&self, defaults: &ConfigDefaults) -> AvsforgeResult<ProjectConfig> {
        let items: Vec<String> = TemplateKind::ALL
            .iter()
            .map(|kind| format!("{kind} — {}", kind.describe()))
            .collect();
        let default_index = TemplateKind::ALL
            .iter()
            .position(|kind| *kind == defaults.template)
            .unwrap_or(0);

        let selection = Select::new()
            .with_prompt(format!("Template for '{}'", defaults.project_name))
            .items(&items)
            .default(default_index)
            .interact()
            .map_err(|_| ApplicationError::PromptCancelled)?;
        let template = TemplateKind::ALL[selection];

        let description: String = Input::new()
            .with_prompt("Description")
            .allow_empty(true)
            .default(defaults.description.clone().unwrap_or_default())
            .interact_text()
            .map_err(|_| ApplicationError::PromptCancelled)?;

        ProjectConfig::new(defaults.project_name.clone(), template, description)
            .map_err(Into::into)
    }
}

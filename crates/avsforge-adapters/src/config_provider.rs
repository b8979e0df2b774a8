//! Non-interactive configuration provider.

use avsforge_core::{
    application::ports::ConfigProvider,
    domain::{ConfigDefaults, ProjectConfig},
    error::AvsforgeResult,
};

/// Deterministic [`ConfigProvider`]: builds the configuration straight from
/// the defaults, asking nothing.
///
/// Used by tests, `--yes` runs, and any invocation without a terminal. The
/// interactive counterpart lives in the CLI crate behind the `interactive`
/// feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedConfigProvider;

impl FixedConfigProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigProvider for FixedConfigProvider {
    fn collect(&self, defaults: &ConfigDefaults) -> AvsforgeResult<ProjectConfig> {
        ProjectConfig::new(
            defaults.project_name.clone(),
            defaults.template,
            defaults.description.clone().unwrap_or_default(),
        )
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avsforge_core::domain::TemplateKind;
    use avsforge_core::error::AvsforgeError;

    #[test]
    fn builds_config_from_defaults() {
        let defaults =
            ConfigDefaults::new("my-avs", TemplateKind::Oracle).with_description("an oracle");
        let config = FixedConfigProvider::new().collect(&defaults).unwrap();

        assert_eq!(config.project_name(), "my-avs");
        assert_eq!(config.template(), TemplateKind::Oracle);
        assert_eq!(config.description(), "an oracle");
    }

    #[test]
    fn missing_description_becomes_empty() {
        let defaults = ConfigDefaults::new("my-avs", TemplateKind::TaskBased);
        let config = FixedConfigProvider::new().collect(&defaults).unwrap();
        assert_eq!(config.description(), "");
    }

    #[test]
    fn invalid_name_propagates_as_domain_error() {
        let defaults = ConfigDefaults::new(".hidden", TemplateKind::TaskBased);
        let err = FixedConfigProvider::new().collect(&defaults).unwrap_err();
        assert!(matches!(err, AvsforgeError::Domain(_)));
    }
}

//! Root manifest generator: `package.json` and `hardhat.config.ts`.
//!
//! The root `package.json` is the one genuinely templated artifact — its
//! `name` and `description` come from the project context. The hardhat
//! config is fixed.

use crate::application::ports::{ResourceProvider, TemplateRenderer};
use crate::domain::{Artifact, TemplateContext, TemplateName};

use super::{rendered, verbatim};

pub fn artifacts(
    context: &TemplateContext,
    resources: &dyn ResourceProvider,
    renderer: &dyn TemplateRenderer,
) -> Vec<Artifact> {
    vec![
        rendered(resources, renderer, context, TemplateName::RootPackageJson),
        verbatim(resources, TemplateName::HardhatConfig),
    ]
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::application::ports::{MockResourceProvider, MockTemplateRenderer};
    use crate::domain::{ProjectConfig, TemplateKind, TemplateSource};

    fn context() -> TemplateContext {
        let config = ProjectConfig::new("demo", TemplateKind::TaskBased, "x").unwrap();
        TemplateContext::from_config(&config)
    }

    #[test]
    fn emits_package_json_and_hardhat_config() {
        let mut resources = MockResourceProvider::new();
        resources
            .expect_load_template()
            .returning(|name| TemplateSource::embedded(name.relative_path()));

        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|source, ctx| ctx.render(&source.body));

        let artifacts = artifacts(&context(), &resources, &renderer);
        let paths: Vec<_> = artifacts.iter().map(|a| a.relative_path.as_str()).collect();
        assert_eq!(paths, ["package.json", "hardhat.config.ts"]);
    }

    #[test]
    fn only_the_package_json_is_rendered() {
        let mut resources = MockResourceProvider::new();
        resources
            .expect_load_template()
            .returning(|_| TemplateSource::embedded("name={{projectName}}"));

        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|source, ctx| ctx.render(&source.body));

        let artifacts = artifacts(&context(), &resources, &renderer);
        assert_eq!(artifacts[0].content, "name=demo");
        // hardhat.config.ts passes through untouched
        assert_eq!(artifacts[1].content, "name={{projectName}}");
    }
}

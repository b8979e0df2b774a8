//! Off-chain generator.
//!
//! Emits the aggregator and executor service stubs — functionally inert
//! placeholders whose methods only log and return a constant — plus the
//! off-chain `package.json`, rendered so its `name` becomes
//! `<projectName>-off-chain`.

use crate::application::ports::{ResourceProvider, TemplateRenderer};
use crate::domain::{Artifact, TemplateContext, TemplateName};

use super::{rendered, verbatim};

pub fn artifacts(
    context: &TemplateContext,
    resources: &dyn ResourceProvider,
    renderer: &dyn TemplateRenderer,
) -> Vec<Artifact> {
    vec![
        verbatim(resources, TemplateName::AggregatorStub),
        verbatim(resources, TemplateName::ExecutorStub),
        rendered(resources, renderer, context, TemplateName::OffchainPackageJson),
    ]
}

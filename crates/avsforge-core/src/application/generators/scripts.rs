//! Scripts generator: one fixed deployment script.

use crate::application::ports::ResourceProvider;
use crate::domain::{Artifact, TemplateName};

use super::verbatim;

pub fn artifacts(resources: &dyn ResourceProvider) -> Vec<Artifact> {
    vec![verbatim(resources, TemplateName::DeployScript)]
}

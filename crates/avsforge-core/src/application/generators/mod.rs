//! Per-component artifact generators.
//!
//! Each generator is a pure function producing the fixed named file set for
//! one component of the generated project. Generators never touch the
//! filesystem; they return [`Artifact`]s for the orchestrator to write.
//!
//! Two content classes exist, mirroring how the payloads are authored:
//! - **verbatim** — the resolved template body is emitted unchanged
//!   (contracts, scripts, test, off-chain stubs, hardhat config).
//! - **rendered** — the body runs through the renderer with the project
//!   context (the two `package.json` manifests).

use crate::domain::{Artifact, RelativePath, TemplateContext, TemplateName};

use super::ports::{ResourceProvider, TemplateRenderer};

pub mod contracts;
pub mod manifest;
pub mod offchain;
pub mod scripts;

/// Emit a template body unchanged at its fixed output path.
fn verbatim(resources: &dyn ResourceProvider, name: TemplateName) -> Artifact {
    let source = resources.load_template(name);
    Artifact::new(RelativePath::new(name.relative_path()), source.body)
}

/// Render a template body with the project context.
fn rendered(
    resources: &dyn ResourceProvider,
    renderer: &dyn TemplateRenderer,
    context: &TemplateContext,
    name: TemplateName,
) -> Artifact {
    let source = resources.load_template(name);
    let content = renderer.render(&source, context);
    Artifact::new(RelativePath::new(name.relative_path()), content)
}

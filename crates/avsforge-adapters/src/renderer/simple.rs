//! Simple variable substitution renderer.

use avsforge_core::{
    application::ports::TemplateRenderer,
    domain::{TemplateContext, TemplateSource},
};

/// Renderer using basic `{{variable}}` substitution.
///
/// Substitution is permissive by design: a placeholder whose name is not in
/// the context stays in the output as literal text. The generated payloads
/// are inert boilerplate, so a stray placeholder is a visible oddity in the
/// scaffolded file rather than a generation failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    fn render(&self, source: &TemplateSource, context: &TemplateContext) -> String {
        context.render(&source.body)
    }
}

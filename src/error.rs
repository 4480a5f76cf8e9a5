//! Error type for template compilation and rendering.

use thiserror::Error;

/// Failures surfaced by the rendering facade.
///
/// The helpers themselves never fail on malformed input; the only faults
/// here come from the engine compiling or rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template compile failed: {0}")]
    Compile(#[from] handlebars::TemplateError),

    #[error("template render failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

//! Rendering facade for notification templates.
//!
//! Owns the engine registry with the notification helpers pre-registered.
//! The host compiles its subject and body templates once at startup, then
//! renders them against each event's bound values.

use handlebars::Handlebars;

use crate::error::TemplateError;
use crate::helpers::register_helpers;
use crate::value::TemplateValue;

/// Template engine facade with the notification helpers installed.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with `pretty`, `if_eq` and `substring` registered.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        register_helpers(&mut registry);
        Self { registry }
    }

    /// Compile and cache a named template (subject line, body, ...).
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<(), TemplateError> {
        self.registry.register_template_string(name, source)?;
        tracing::debug!(template = %name, "registered notification template");
        Ok(())
    }

    /// Render a registered template against an event value tree.
    pub fn render(&self, name: &str, event: &TemplateValue) -> Result<String, TemplateError> {
        let data = event.normalize();
        let rendered = self.registry.render(name, &data)?;
        tracing::debug!(template = %name, bytes = rendered.len(), "rendered notification template");
        Ok(rendered)
    }

    /// Render a one-shot template source without registering it.
    pub fn render_source(
        &self,
        source: &str,
        event: &TemplateValue,
    ) -> Result<String, TemplateError> {
        let data = event.normalize();
        Ok(self.registry.render_template(source, &data)?)
    }

    /// The underlying engine registry.
    ///
    /// Escaping policy belongs to the host; replace the escape function here
    /// before the first render if the default HTML escaping does not fit.
    pub fn registry_mut(&mut self) -> &mut Handlebars<'static> {
        &mut self.registry
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> TemplateValue {
        TemplateValue::mapping([
            ("level", TemplateValue::from("Error")),
            ("message", TemplateValue::from("disk full on volume /var")),
            (
                "properties",
                TemplateValue::mapping([
                    ("host", TemplateValue::from("db-01")),
                    ("retries", TemplateValue::from(3i64)),
                ]),
            ),
        ])
    }

    #[test]
    fn test_render_registered_template() {
        let mut renderer = TemplateRenderer::new();
        renderer
            .register_template("subject", "[{{level}}] {{substring message 0 9}}")
            .unwrap();

        let subject = renderer.render("subject", &sample_event()).unwrap();
        assert_eq!(subject, "[Error] disk full");
    }

    #[test]
    fn test_render_source_with_helpers() {
        let renderer = TemplateRenderer::new();
        let body = renderer
            .render_source(
                r#"{{#if_eq level "Error"}}ALERT: {{message}}{{else}}{{message}}{{/if_eq}}"#,
                &sample_event(),
            )
            .unwrap();
        assert_eq!(body, "ALERT: disk full on volume /var");
    }

    #[test]
    fn test_structured_property_renders_as_escaped_json() {
        let renderer = TemplateRenderer::new();
        let body = renderer
            .render_source("{{pretty properties}}", &sample_event())
            .unwrap();
        assert_eq!(body, "{&quot;host&quot;:&quot;db-01&quot;,&quot;retries&quot;:3}");
    }

    #[test]
    fn test_compile_failure_is_typed() {
        let mut renderer = TemplateRenderer::new();
        let err = renderer
            .register_template("bad", "{{#if_eq level}}unclosed")
            .unwrap_err();
        assert!(matches!(err, TemplateError::Compile(_)));
    }

    #[test]
    fn test_rendering_unknown_template_is_typed() {
        let renderer = TemplateRenderer::new();
        let err = renderer.render("nope", &sample_event()).unwrap_err();
        assert!(matches!(err, TemplateError::Render(_)));
    }
}

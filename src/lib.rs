//! Notification template helpers for structured event data.
//!
//! Extends the Handlebars engine with the helpers notification templates use
//! to format event properties:
//!
//! - `{{pretty value}}` renders a value for humans: structured values as
//!   compact JSON, blank text as `&nbsp;`, null as a literal `null`
//! - `{{#if_eq a b}}...{{else}}...{{/if_eq}}` branches on trimmed,
//!   case-sensitive string equality
//! - `{{substring value start length}}` writes a bounds-clamped slice of a
//!   value's string form
//!
//! The helpers are stateless. Register them once on the host's own engine
//! with [`register_helpers`], or use [`TemplateRenderer`], which comes with
//! them installed. Event data binds through [`TemplateValue`]; its
//! normalization preserves mapping key order through serialization.

mod error;
mod helpers;
mod renderer;
mod value;

pub use error::TemplateError;
pub use helpers::register_helpers;
pub use renderer::TemplateRenderer;
pub use value::TemplateValue;

//! Template helpers for notification rendering.
//!
//! Three helpers extend the engine for event formatting:
//!
//! - `pretty` renders a value for human consumption: structured values as
//!   compact JSON, blank text as a non-breaking space so table cells keep
//!   their height, null as a literal `null`
//! - `if_eq` selects the primary or `{{else}}` block by trimmed,
//!   case-sensitive string equality of its two arguments
//! - `substring` writes a bounds-clamped slice of a value's string form
//!
//! Helpers never fail on malformed input; missing values and unparseable
//! numeric arguments degrade to documented fallbacks. Helper output bypasses
//! the engine's automatic escaping, so each write below chooses between the
//! registry's escape function (the host-owned policy, HTML by default) and a
//! raw write for text that must reach the output untouched.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, JsonRender, Output, RenderContext,
    Renderable,
};
use serde_json::Value;

/// Register the notification helpers on the given engine registry.
///
/// Call once during host startup, before the first render.
pub fn register_helpers(registry: &mut Handlebars<'_>) {
    registry.register_helper("pretty", Box::new(pretty_helper));
    registry.register_helper("if_eq", Box::new(IfEqHelper));
    registry.register_helper("substring", Box::new(substring_helper));
}

/// `{{pretty value}}`
fn pretty_helper(
    h: &Helper,
    r: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let escape = r.get_escape_fn();
    let value = h.param(0).map(|p| p.value()).unwrap_or(&Value::Null);

    match value {
        Value::Null => out.write("null")?,
        Value::Object(_) | Value::Array(_) => {
            let json = serde_json::to_string(value).unwrap_or_default();
            out.write(&escape(&json))?;
        }
        scalar => {
            let text = scalar.render();
            if text.trim().is_empty() {
                // placeholder keeps table cells from collapsing in mail clients
                out.write("&nbsp;")?;
            } else {
                out.write(&escape(&text))?;
            }
        }
    }
    Ok(())
}

/// `{{#if_eq lhs rhs}}...{{else}}...{{/if_eq}}`
///
/// Anything other than exactly two arguments renders the else block.
struct IfEqHelper;

impl HelperDef for IfEqHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let branch = if h.params().len() == 2 {
            let lhs = h.param(0).map(|p| p.value().render()).unwrap_or_default();
            let rhs = h.param(1).map(|p| p.value().render()).unwrap_or_default();

            if lhs.trim() == rhs.trim() {
                h.template()
            } else {
                h.inverse()
            }
        } else {
            h.inverse()
        };

        if let Some(t) = branch {
            t.render(r, ctx, rc, out)?;
        }
        Ok(())
    }
}

/// `{{substring value start length}}`
///
/// `start` and `length` are optional. Positions count Unicode scalar values.
/// A start past the end of the string produces no output; a length past the
/// end is clamped to the remaining characters.
fn substring_helper(
    h: &Helper,
    r: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let escape = r.get_escape_fn();
    let value = match h.param(0) {
        Some(p) if !p.value().is_null() => p.value(),
        _ => return Ok(()),
    };

    let full = value.render();
    if h.params().len() < 2 {
        out.write(&escape(&full))?;
        return Ok(());
    }

    let chars: Vec<char> = full.chars().collect();
    let start = parse_offset(h.param(1).map(|p| p.value()));
    if start > chars.len() {
        return Ok(());
    }

    let slice: String = if h.params().len() < 3 {
        chars[start..].iter().collect()
    } else {
        let requested = parse_offset(h.param(2).map(|p| p.value()));
        let take = requested.min(chars.len() - start);
        chars[start..start + take].iter().collect()
    };
    out.write(&escape(&slice))?;
    Ok(())
}

/// Best-effort integer parse for offset arguments.
///
/// Templates pass non-numeric placeholders here; anything unparseable counts
/// as 0 rather than failing, and negative offsets clamp to 0.
fn parse_offset(value: Option<&Value>) -> usize {
    value
        .map(|v| v.render())
        .and_then(|s| s.trim().parse::<i64>().ok())
        .map(|n| n.max(0) as usize)
        .unwrap_or(0)
}

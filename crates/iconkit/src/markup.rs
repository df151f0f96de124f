//! Pure string transforms over SVG markup.
//!
//! Substitution is regex-based and first-match-only: only the first
//! `width`, `height` and `stroke-width` attribute in the document changes,
//! which for well-formed icon files is the root `<svg>` element.

use std::sync::OnceLock;

use regex::{Captures, NoExpand, Regex};

use crate::types::CustomizationOptions;

fn width_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"width="[^"]*""#).expect("valid regex"))
}

fn height_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"height="[^"]*""#).expect("valid regex"))
}

fn stroke_width_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"stroke-width="[^"]*""#).expect("valid regex"))
}

fn svg_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<svg([^>]*)>").expect("valid regex"))
}

fn path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<path[^>]*>").expect("valid regex"))
}

/// Apply customization options to raw SVG markup.
///
/// Attributes are rewritten in the order `width`, `height`, `stroke-width`.
/// A non-empty class name and `aria-hidden="true"` are appended to the first
/// `<svg>` tag, class first.
pub fn customize(markup: &str, options: &CustomizationOptions) -> String {
    let width = format!(r#"width="{}""#, options.width);
    let height = format!(r#"height="{}""#, options.height);
    let stroke = format!(r#"stroke-width="{}""#, options.stroke_width);

    let mut svg = width_re().replacen(markup, 1, NoExpand(&width)).into_owned();
    svg = height_re().replacen(&svg, 1, NoExpand(&height)).into_owned();
    svg = stroke_width_re()
        .replacen(&svg, 1, NoExpand(&stroke))
        .into_owned();

    if let Some(class) = options.class_name.as_deref().filter(|c| !c.is_empty()) {
        svg = append_root_attr(&svg, &format!(r#"class="{class}""#));
    }

    if options.aria_hidden {
        svg = append_root_attr(&svg, r#"aria-hidden="true""#);
    }

    svg
}

fn append_root_attr(markup: &str, attr: &str) -> String {
    svg_open_re()
        .replacen(markup, 1, |caps: &Captures| format!("<svg{} {attr}>", &caps[1]))
        .into_owned()
}

/// Extract every `<path ...>` element from the markup, in document order.
pub fn extract_paths(markup: &str) -> Vec<String> {
    path_re()
        .find_iter(markup)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Markup returned when an icon cannot be obtained: a circled "i" with the
/// requested name in its title.
pub fn fallback_icon(name: &str) -> String {
    let name = escape_text(name);
    format!(
        r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
  <path d="M12 12m-9 0a9 9 0 1 0 18 0a9 9 0 1 0 -18 0" />
  <path d="M12 8l0 4" />
  <path d="M12 16l.01 0" />
  <title>Icon "{name}" not found</title>
</svg>"#
    )
}

/// Escape `&`, `<`, `>` and `"` for use in element text or attribute values.
fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap markup in a container element.
pub fn wrap_html(markup: &str, tag: &str, class: Option<&str>) -> String {
    let class_attr = match class.filter(|c| !c.is_empty()) {
        Some(c) => format!(r#" class="{c}""#),
        None => String::new(),
    };
    format!("<{tag}{class_attr}>\n  {markup}\n</{tag}>")
}

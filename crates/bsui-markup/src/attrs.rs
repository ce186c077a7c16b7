//! HTML escaping and attribute formatting.

use std::borrow::Cow;
use std::fmt::Write;

use crate::options::{AttrValue, Options};

/// HTML5 boolean attributes, rendered in minimized form (`checked="checked"`) when true.
const MINIMIZED_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
    "truespeed",
];

/// Escape HTML special characters.
///
/// ```
/// use bsui_markup::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render options as an attribute string.
///
/// Every attribute is emitted as ` key="value"` with a leading space, so the
/// result can be placed directly after a tag name. Keys listed in `exclude`
/// are skipped, as are `false` values.
///
/// # Example
///
/// ```
/// use bsui_markup::{Options, format_attributes};
///
/// let options = Options::new()
///     .with("tag", "span")
///     .with("class", "badge")
///     .with("title", "a \"quote\"")
///     .with("disabled", true)
///     .with("hidden", false);
///
/// assert_eq!(
///     format_attributes(&options, &["tag"]),
///     r#" class="badge" title="a &quot;quote&quot;" disabled="disabled""#
/// );
/// ```
pub fn format_attributes(options: &Options, exclude: &[&str]) -> String {
    let mut out = String::new();
    for (key, value) in options.iter() {
        if exclude.contains(&key) {
            continue;
        }
        let minimized = MINIMIZED_ATTRIBUTES.contains(&key.to_ascii_lowercase().as_str());
        let key = format_key(key);
        match value {
            AttrValue::Bool(false) => {}
            AttrValue::Bool(true) if minimized => {
                write!(out, r#" {key}="{key}""#).unwrap();
            }
            AttrValue::Bool(true) => {
                write!(out, r#" {key}="true""#).unwrap();
            }
            AttrValue::Str(s) => {
                write!(out, r#" {key}="{}""#, escape_html(s)).unwrap();
            }
        }
    }
    out
}

/// Escape attribute names that contain anything besides word characters, `.` and `-`.
fn format_key(key: &str) -> Cow<'_, str> {
    if key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(escape_html(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("Hello world"), "Hello world");
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_attributes(&Options::new(), &[]), "");
    }

    #[test]
    fn test_format_preserves_order() {
        let options = Options::from([("id", "c1"), ("class", "carousel"), ("role", "listbox")]);
        assert_eq!(
            format_attributes(&options, &[]),
            r#" id="c1" class="carousel" role="listbox""#
        );
    }

    #[test]
    fn test_format_excludes_keys() {
        let options = Options::from([("tag", "i"), ("iconSet", "fa"), ("class", "fa fa-leaf")]);
        assert_eq!(
            format_attributes(&options, &["tag", "iconSet"]),
            r#" class="fa fa-leaf""#
        );
    }

    #[test]
    fn test_format_bool_values() {
        let options = Options::new()
            .with("checked", true)
            .with("data-wrap", true)
            .with("selected", false);
        assert_eq!(
            format_attributes(&options, &[]),
            r#" checked="checked" data-wrap="true""#
        );
    }

    #[test]
    fn test_format_minimizes_only_html5_boolean_attributes() {
        let options = Options::new()
            .with("playsinline", true)
            .with("READONLY", true)
            .with("compact", true);
        assert_eq!(
            format_attributes(&options, &[]),
            r#" playsinline="playsinline" READONLY="READONLY" compact="true""#
        );
    }

    #[test]
    fn test_format_escapes_values_and_odd_keys() {
        let options = Options::from([("data-x", "<&>"), ("a\"b", "v")]);
        assert_eq!(
            format_attributes(&options, &[]),
            r#" data-x="&lt;&amp;&gt;" a&quot;b="v""#
        );
    }
}

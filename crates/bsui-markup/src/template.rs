//! Named string templates with `{{var}}` placeholders.

use std::collections::HashMap;

use crate::error::MarkupError;

/// Built-in templates, keyed by name.
const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("tag", "<{{tag}}{{attrs}}>{{content}}</{{tag}}>"),
    ("image", r#"<img src="{{url}}"{{attrs}}/>"#),
    ("link", r#"<a href="{{url}}"{{attrs}}>{{content}}</a>"#),
    ("ul", "<ul{{attrs}}>{{content}}</ul>"),
    ("li", "<li{{attrs}}>{{content}}</li>"),
];

/// A set of named templates.
///
/// Placeholders are written as `{{name}}`. Placeholders without a matching
/// variable render as the empty string.
///
/// # Example
///
/// ```
/// use bsui_markup::StringTemplates;
///
/// let templates = StringTemplates::default();
/// let html = templates
///     .format("tag", &[("tag", "b"), ("attrs", ""), ("content", "bold")])
///     .unwrap();
/// assert_eq!(html, "<b>bold</b>");
/// ```
#[derive(Clone, Debug)]
pub struct StringTemplates {
    templates: HashMap<String, String>,
}

impl Default for StringTemplates {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|(name, template)| ((*name).to_owned(), (*template).to_owned()))
                .collect(),
        }
    }
}

impl StringTemplates {
    /// Look up the built-in template for a name.
    #[must_use]
    pub fn builtin(name: &str) -> Option<&'static str> {
        DEFAULT_TEMPLATES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, template)| *template)
    }

    /// Add or replace templates.
    #[must_use]
    pub fn with_overrides<K, V, I>(mut self, overrides: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, template) in overrides {
            self.templates.insert(name.into(), template.into());
        }
        self
    }

    /// Add or replace a single template.
    pub fn add(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(name.into(), template.into());
    }

    /// Remove a template.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.templates.remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Format a registered template.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownTemplate`] if `name` is not registered.
    pub fn format(&self, name: &str, vars: &[(&str, &str)]) -> Result<String, MarkupError> {
        let template = self
            .get(name)
            .ok_or_else(|| MarkupError::UnknownTemplate(name.to_owned()))?;
        Ok(substitute(template, vars))
    }
}

/// Replace `{{var}}` placeholders in `template`.
pub(crate) fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // Unterminated placeholder, keep the remainder verbatim
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after[..end].trim();
        if let Some((_, value)) = vars.iter().find(|(var, _)| *var == name) {
            out.push_str(value);
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

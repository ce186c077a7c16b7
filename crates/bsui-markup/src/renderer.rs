//! Tag rendering trait and its string-template implementation.

use crate::attrs::{escape_html, format_attributes};
use crate::error::MarkupError;
use crate::options::Options;
use crate::template::{StringTemplates, substitute};

/// Default prefix for relative image paths.
pub const DEFAULT_IMAGE_BASE: &str = "/img/";

/// Host rendering layer used by the helpers.
///
/// Implementors provide template formatting and image path resolution;
/// element, link, and image rendering are built on top of those.
pub trait TagRenderer {
    /// Format a named template.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownTemplate`] if the template is not registered.
    fn format_template(&self, name: &str, vars: &[(&str, &str)]) -> Result<String, MarkupError>;

    /// Resolve an image `src` to the URL placed in the `<img>` tag.
    fn image_url(&self, src: &str) -> String;

    /// Render options as an attribute string, skipping `exclude`.
    fn format_attributes(&self, options: &Options, exclude: &[&str]) -> String {
        format_attributes(options, exclude)
    }

    /// Format a template, falling back to the built-in one if the renderer
    /// no longer has it.
    fn render(&self, name: &str, vars: &[(&str, &str)]) -> String {
        match self.format_template(name, vars) {
            Ok(html) => html,
            Err(e) => {
                let Some(builtin) = StringTemplates::builtin(name) else {
                    tracing::warn!(error = %e, "Template missing, rendering nothing");
                    return String::new();
                };
                tracing::debug!(template = name, "Falling back to built-in template");
                substitute(builtin, vars)
            }
        }
    }

    /// Render an element around text content.
    ///
    /// The text is escaped unless the `escape` option is falsy. An empty
    /// `name` returns the content without a wrapper.
    fn tag(&self, name: &str, text: &str, options: &Options) -> String {
        let escape = options.get("escape").is_none_or(|v| v.is_truthy());
        if escape {
            self.tag_html(name, &escape_html(text), options)
        } else {
            self.tag_html(name, text, options)
        }
    }

    /// Render an element around an already-rendered HTML fragment.
    fn tag_html(&self, name: &str, html: &str, options: &Options) -> String {
        if name.is_empty() {
            return html.to_owned();
        }
        let attrs = self.format_attributes(options, &["escape"]);
        self.render("tag", &[("tag", name), ("attrs", &attrs), ("content", html)])
    }

    /// Render a hyperlink. The title is escaped unless `escape` is falsy.
    fn link(&self, title: &str, url: &str, options: &Options) -> String {
        let escape = options.get("escape").is_none_or(|v| v.is_truthy());
        let content = if escape {
            escape_html(title)
        } else {
            title.to_owned()
        };
        let attrs = self.format_attributes(options, &["escape"]);
        self.render(
            "link",
            &[
                ("url", &escape_html(url)),
                ("attrs", &attrs),
                ("content", &content),
            ],
        )
    }

    /// Render an `<img>`.
    ///
    /// `alt` defaults to empty. A `url` option wraps the image in a link.
    fn image(&self, src: &str, options: &Options) -> String {
        let options = options.clone().with_defaults([("alt", "")]);
        let src = escape_html(&self.image_url(src));
        let attrs = self.format_attributes(&options, &["url"]);
        let image = self.render("image", &[("url", &src), ("attrs", &attrs)]);

        match options.get_str("url") {
            Some(url) if !url.is_empty() => self.render(
                "link",
                &[("url", &escape_html(url)), ("attrs", ""), ("content", &image)],
            ),
            _ => image,
        }
    }
}

/// [`TagRenderer`] backed by [`StringTemplates`].
///
/// # Example
///
/// ```
/// use bsui_markup::{Options, StringTemplater, TagRenderer};
///
/// let renderer = StringTemplater::new();
/// let html = renderer.tag("p", "Fish & Chips", &Options::from([("class", "lead")]));
/// assert_eq!(html, r#"<p class="lead">Fish &amp; Chips</p>"#);
///
/// let image = renderer.image("logo.png", &Options::from([("url", "/")]));
/// assert_eq!(image, r#"<a href="/"><img src="/img/logo.png" alt=""/></a>"#);
/// ```
#[derive(Clone, Debug)]
pub struct StringTemplater {
    templates: StringTemplates,
    image_base: String,
}

impl Default for StringTemplater {
    fn default() -> Self {
        Self::new()
    }
}

impl StringTemplater {
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: StringTemplates::default(),
            image_base: DEFAULT_IMAGE_BASE.to_owned(),
        }
    }

    /// Replace the template set.
    #[must_use]
    pub fn with_templates(mut self, templates: StringTemplates) -> Self {
        self.templates = templates;
        self
    }

    /// Set the prefix used for relative image paths.
    #[must_use]
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = base.into();
        self
    }

    #[must_use]
    pub fn templates(&self) -> &StringTemplates {
        &self.templates
    }
}

impl TagRenderer for StringTemplater {
    fn format_template(&self, name: &str, vars: &[(&str, &str)]) -> Result<String, MarkupError> {
        self.templates.format(name, vars)
    }

    fn image_url(&self, src: &str) -> String {
        if src.is_empty() || is_absolute_url(src) {
            return src.to_owned();
        }
        if self.image_base.ends_with('/') {
            format!("{}{src}", self.image_base)
        } else {
            format!("{}/{src}", self.image_base)
        }
    }
}

/// Whether `src` should bypass the image base prefix.
fn is_absolute_url(src: &str) -> bool {
    src.starts_with('/') || src.starts_with("data:") || src.contains("://")
}

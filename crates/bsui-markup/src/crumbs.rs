//! Breadcrumb trail registry and list rendering.

use crate::attrs::escape_html;
use crate::options::{AttrValue, Options};
use crate::renderer::TagRenderer;

/// Options consumed by [`CrumbTrail::render_list`] and never emitted.
const LIST_PSEUDO_KEYS: &[&str] = &["separator", "firstClass", "lastClass", "escape"];

/// A registered breadcrumb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Text shown for the crumb.
    pub label: String,
    /// Link target. Crumbs without a URL render as plain text.
    pub url: Option<String>,
    /// Link attributes for this crumb.
    pub options: Options,
}

/// Leading crumb prepended at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StartText {
    /// No leading crumb.
    #[default]
    None,
    /// A crumb with this label linking to `/`.
    Text(String),
    /// A crumb with explicit text, URL and link options.
    Link {
        text: String,
        url: String,
        options: Options,
    },
}

impl StartText {
    fn to_crumb(&self) -> Option<Crumb> {
        match self {
            Self::None => None,
            Self::Text(text) => Some(Crumb {
                label: text.clone(),
                url: Some("/".to_owned()),
                options: Options::new(),
            }),
            Self::Link { text, url, options } => Some(Crumb {
                label: text.clone(),
                url: Some(url.clone()),
                options: options.clone(),
            }),
        }
    }
}

impl From<&str> for StartText {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Append-only list of breadcrumbs collected while handling a request.
///
/// # Example
///
/// ```
/// use bsui_markup::{CrumbTrail, Options, StartText, StringTemplater};
///
/// let mut trail = CrumbTrail::new();
/// trail.add("Docs", Some("/docs"), Options::new());
/// trail.add("Install", None, Options::new());
///
/// let html = trail
///     .render_list(&StringTemplater::new(), &Options::new(), &StartText::None)
///     .unwrap();
/// assert_eq!(
///     html,
///     r#"<ul><li class="first"><a href="/docs">Docs</a></li><li class="last">Install</li></ul>"#
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct CrumbTrail {
    crumbs: Vec<Crumb>,
}

impl CrumbTrail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a crumb.
    pub fn add(&mut self, label: impl Into<String>, url: Option<&str>, options: Options) {
        self.crumbs.push(Crumb {
            label: label.into(),
            url: url.map(str::to_owned),
            options,
        });
    }

    /// Insert a crumb at the front of the trail.
    pub fn prepend(&mut self, label: impl Into<String>, url: Option<&str>, options: Options) {
        self.crumbs.insert(
            0,
            Crumb {
                label: label.into(),
                url: url.map(str::to_owned),
                options,
            },
        );
    }

    #[must_use]
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Render the trail as a `<ul>` list.
    ///
    /// List options:
    /// - `separator`: raw HTML appended to every crumb except the last (default empty)
    /// - `firstClass`: class of the first `<li>` (default `first`, `false` disables)
    /// - `lastClass`: class of the last `<li>` (default `last`, `false` disables)
    /// - `escape`: escape crumb labels (default true)
    ///
    /// Remaining options become attributes of the `<ul>`. Returns `None` when
    /// there is nothing to render.
    pub fn render_list<R: TagRenderer + ?Sized>(
        &self,
        renderer: &R,
        options: &Options,
        start_text: &StartText,
    ) -> Option<String> {
        let crumbs: Vec<Crumb> = start_text
            .to_crumb()
            .into_iter()
            .chain(self.crumbs.iter().cloned())
            .collect();
        if crumbs.is_empty() {
            tracing::debug!("No breadcrumbs registered");
            return None;
        }

        let separator = options.get_str("separator").unwrap_or_default();
        let first_class = class_option(options, "firstClass", "first");
        let last_class = class_option(options, "lastClass", "last");
        let escape = options.get("escape").is_none_or(AttrValue::is_truthy);

        let count = crumbs.len();
        let mut items = String::new();
        for (index, crumb) in crumbs.iter().enumerate() {
            let mut content = match &crumb.url {
                Some(url) if !url.is_empty() => {
                    let link_options = crumb.options.clone().with_defaults([("escape", escape)]);
                    renderer.link(&crumb.label, url, &link_options)
                }
                _ if escape => escape_html(&crumb.label),
                _ => crumb.label.clone(),
            };

            let mut li_options = Options::new();
            if index == 0
                && let Some(class) = first_class
            {
                li_options.insert("class", class);
            } else if index == count - 1
                && let Some(class) = last_class
            {
                li_options.insert("class", class);
            }

            if !separator.is_empty() && index + 1 < count {
                content.push_str(separator);
            }

            let attrs = renderer.format_attributes(&li_options, &[]);
            items.push_str(&renderer.render("li", &[("content", &content), ("attrs", &attrs)]));
        }

        let attrs = renderer.format_attributes(options, LIST_PSEUDO_KEYS);
        Some(renderer.render("ul", &[("content", &items), ("attrs", &attrs)]))
    }
}

/// Read a class option that can be switched off with `false`.
fn class_option<'a>(options: &'a Options, key: &str, default: &'a str) -> Option<&'a str> {
    match options.get(key) {
        None => Some(default),
        Some(AttrValue::Bool(false)) => None,
        Some(AttrValue::Bool(true)) => Some(default),
        Some(AttrValue::Str(s)) => Some(s.as_str()),
    }
}

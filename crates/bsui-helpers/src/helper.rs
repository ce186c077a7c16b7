//! The Bootstrap HTML helper.

use bsui_markup::{CrumbTrail, Options, StartText, StringTemplater, TagRenderer};

use crate::carousel::CarouselDefaults;
use crate::classes::inject_classes;

/// Defaults applied when a call does not override them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelperDefaults {
    /// Element used by [`HtmlHelper::icon`].
    pub icon_tag: String,
    /// Icon set used by [`HtmlHelper::icon`] (`glyphicon`, `fa`, ...).
    pub icon_set: String,
    /// Separator placed between breadcrumbs.
    pub crumb_separator: String,
    /// Carousel data attributes and flags.
    pub carousel: CarouselDefaults,
}

impl Default for HelperDefaults {
    fn default() -> Self {
        Self {
            icon_tag: "i".to_owned(),
            icon_set: "glyphicon".to_owned(),
            crumb_separator: String::new(),
            carousel: CarouselDefaults::default(),
        }
    }
}

/// Options accepted by [`HtmlHelper::label`].
///
/// A bare string is shorthand for `{type: <variant>}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelOptions {
    Options(Options),
    Variant(String),
}

impl LabelOptions {
    /// Resolve to a canonical options mapping.
    fn into_options(self) -> Options {
        match self {
            Self::Options(options) => options,
            Self::Variant(variant) => Options::new().with("type", variant),
        }
    }
}

impl From<Options> for LabelOptions {
    fn from(options: Options) -> Self {
        Self::Options(options)
    }
}

impl From<&Options> for LabelOptions {
    fn from(options: &Options) -> Self {
        Self::Options(options.clone())
    }
}

impl From<&str> for LabelOptions {
    fn from(variant: &str) -> Self {
        Self::Variant(variant.to_owned())
    }
}

impl From<String> for LabelOptions {
    fn from(variant: String) -> Self {
        Self::Variant(variant)
    }
}

/// Generates Bootstrap markup on top of a [`TagRenderer`].
///
/// Every method is a pure function of its arguments: options are copied,
/// never mutated, and nothing is retained between calls.
///
/// # Example
///
/// ```
/// use bsui_helpers::HtmlHelper;
/// use bsui_markup::Options;
///
/// let helper = HtmlHelper::new();
/// assert_eq!(helper.badge("42", &Options::new()), r#"<span class="badge">42</span>"#);
/// assert_eq!(
///     helper.label("Danger", "danger"),
///     r#"<span class="label label-danger">Danger</span>"#
/// );
/// assert_eq!(
///     helper.icon("search", &Options::new()),
///     r#"<i class="glyphicon glyphicon-search"></i>"#
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HtmlHelper<R: TagRenderer = StringTemplater> {
    pub(crate) renderer: R,
    pub(crate) defaults: HelperDefaults,
}

impl HtmlHelper<StringTemplater> {
    /// Create a helper using the built-in string templates.
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(StringTemplater::new())
    }
}

impl Default for HtmlHelper<StringTemplater> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TagRenderer> HtmlHelper<R> {
    #[must_use]
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            renderer,
            defaults: HelperDefaults::default(),
        }
    }

    /// Replace the helper defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: HelperDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn defaults(&self) -> &HelperDefaults {
        &self.defaults
    }

    /// Bootstrap badge. Uses `<span>` unless `tag` is given.
    pub fn badge(&self, text: &str, options: &Options) -> String {
        let options = options.clone().with_defaults([("tag", "span")]);
        let tag = tag_name(&options, "span");
        let options = options.without(&["tag"]);

        self.renderer.tag(&tag, text, &inject_classes("badge", &options))
    }

    /// Bootstrap label with a semantic variant (`label-danger`, ...).
    ///
    /// `options` may be a variant name instead of a mapping.
    pub fn label(&self, text: &str, options: impl Into<LabelOptions>) -> String {
        let options = options
            .into()
            .into_options()
            .with_defaults([("tag", "span"), ("type", "default")]);
        let tag = tag_name(&options, "span");
        let variant = options.get_str("type").unwrap_or("default");
        let classes = vec!["label".to_owned(), format!("label-{variant}")];
        let options = options.without(&["tag", "type"]);

        self.renderer.tag(&tag, text, &inject_classes(classes, &options))
    }

    /// Empty icon element, e.g. `<i class="glyphicon glyphicon-search"></i>`.
    ///
    /// `tag` and `iconSet` override the configured defaults.
    pub fn icon(&self, name: &str, options: &Options) -> String {
        let options = options.clone().with_defaults([
            ("tag", self.defaults.icon_tag.as_str()),
            ("iconSet", self.defaults.icon_set.as_str()),
        ]);
        let tag = tag_name(&options, &self.defaults.icon_tag);
        let icon_set = options
            .get_str("iconSet")
            .unwrap_or(&self.defaults.icon_set)
            .to_owned();
        let classes = vec![icon_set.clone(), format!("{icon_set}-{name}")];
        let options = inject_classes(classes, &options);

        let attrs = self.renderer.format_attributes(&options, &["tag", "iconSet"]);
        self.renderer
            .render("tag", &[("tag", &tag), ("attrs", &attrs), ("content", "")])
    }

    /// Breadcrumb list with the `breadcrumb` class.
    ///
    /// Returns `None` when `trail` is empty and there is no start text.
    pub fn get_crumb_list(
        &self,
        trail: &CrumbTrail,
        options: &Options,
        start_text: &StartText,
    ) -> Option<String> {
        let options = options
            .clone()
            .with_defaults([("separator", self.defaults.crumb_separator.as_str())]);

        trail.render_list(
            &self.renderer,
            &inject_classes("breadcrumb", &options),
            start_text,
        )
    }
}

/// Resolve the `tag` pseudo-option, falling back when it is not a usable string.
fn tag_name(options: &Options, default: &str) -> String {
    options
        .get_str("tag")
        .filter(|tag| !tag.is_empty())
        .unwrap_or(default)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_badge() {
        let helper = HtmlHelper::new();
        assert_eq!(
            helper.badge("Hi", &Options::new()),
            r#"<span class="badge">Hi</span>"#
        );
    }

    #[test]
    fn test_badge_custom_tag_and_class() {
        let helper = HtmlHelper::new();
        let options = Options::from([("tag", "a"), ("class", "pull-right"), ("href", "#")]);
        assert_eq!(
            helper.badge("3", &options),
            r##"<a class="pull-right badge" href="#">3</a>"##
        );
    }

    #[test]
    fn test_badge_escapes_text() {
        let helper = HtmlHelper::new();
        assert_eq!(
            helper.badge("<3", &Options::new()),
            r#"<span class="badge">&lt;3</span>"#
        );
    }

    #[test]
    fn test_label_variant_shorthand() {
        let helper = HtmlHelper::new();
        assert_eq!(
            helper.label("Danger", "danger"),
            r#"<span class="label label-danger">Danger</span>"#
        );
    }

    #[test]
    fn test_label_default_variant() {
        let helper = HtmlHelper::new();
        assert_eq!(
            helper.label("Plain", Options::new()),
            r#"<span class="label label-default">Plain</span>"#
        );
    }

    #[test]
    fn test_label_options_mapping() {
        let helper = HtmlHelper::new();
        let options = Options::from([("type", "success"), ("tag", "div"), ("id", "ok")]);
        assert_eq!(
            helper.label("Saved", &options),
            r#"<div id="ok" class="label label-success">Saved</div>"#
        );
    }

    #[test]
    fn test_label_does_not_leak_pseudo_keys() {
        let helper = HtmlHelper::new();
        let html = helper.label("x", Options::from([("type", "info"), ("tag", "em")]));
        assert!(!html.contains("type="));
        assert!(!html.contains("tag="));
    }

    #[test]
    fn test_icon() {
        let helper = HtmlHelper::new();
        assert_eq!(
            helper.icon("search", &Options::new()),
            r#"<i class="glyphicon glyphicon-search"></i>"#
        );
    }

    #[test]
    fn test_icon_custom_set_and_tag() {
        let helper = HtmlHelper::new();
        let options = Options::from([("iconSet", "fa"), ("tag", "span"), ("class", "fa-lg")]);
        assert_eq!(
            helper.icon("leaf", &options),
            r#"<span class="fa-lg fa fa-leaf"></span>"#
        );
    }

    #[test]
    fn test_icon_configured_defaults() {
        let helper = HtmlHelper::new().with_defaults(HelperDefaults {
            icon_tag: "span".to_owned(),
            icon_set: "fa".to_owned(),
            ..HelperDefaults::default()
        });
        assert_eq!(
            helper.icon("home", &Options::new()),
            r#"<span class="fa fa-home"></span>"#
        );
    }

    #[test]
    fn test_icon_keeps_other_attributes() {
        let helper = HtmlHelper::new();
        let options = Options::from([("aria-hidden", "true")]);
        assert_eq!(
            helper.icon("star", &options),
            r#"<i aria-hidden="true" class="glyphicon glyphicon-star"></i>"#
        );
    }

    #[test]
    fn test_get_crumb_list_empty() {
        let helper = HtmlHelper::new();
        assert_eq!(
            helper.get_crumb_list(&CrumbTrail::new(), &Options::new(), &StartText::None),
            None
        );
    }

    #[test]
    fn test_get_crumb_list() {
        let helper = HtmlHelper::new();
        let mut trail = CrumbTrail::new();
        trail.add("Library", Some("/library"), Options::new());
        trail.add("Data", None, Options::new());

        let html = helper
            .get_crumb_list(&trail, &Options::new(), &StartText::from("Home"))
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="breadcrumb">"#,
                r#"<li class="first"><a href="/">Home</a></li>"#,
                r#"<li><a href="/library">Library</a></li>"#,
                r#"<li class="last">Data</li>"#,
                "</ul>",
            )
        );
    }

    #[test]
    fn test_get_crumb_list_keeps_user_classes() {
        let helper = HtmlHelper::new();
        let mut trail = CrumbTrail::new();
        trail.add("Only", None, Options::new());

        let html = helper
            .get_crumb_list(&trail, &Options::from([("class", "small")]), &StartText::None)
            .unwrap();
        assert!(html.starts_with(r#"<ul class="small breadcrumb">"#));
    }

    #[test]
    fn test_get_crumb_list_configured_separator() {
        let helper = HtmlHelper::new().with_defaults(HelperDefaults {
            crumb_separator: " / ".to_owned(),
            ..HelperDefaults::default()
        });
        let mut trail = CrumbTrail::new();
        trail.add("A", Some("/a"), Options::new());
        trail.add("B", None, Options::new());

        let html = helper
            .get_crumb_list(&trail, &Options::new(), &StartText::None)
            .unwrap();
        assert!(html.contains(r#"<a href="/a">A</a> / </li>"#));
        assert!(html.contains(r#"<li class="last">B</li>"#));
    }

    #[test]
    fn test_outputs_are_idempotent() {
        let helper = HtmlHelper::new();
        let options = Options::from([("class", "x")]);
        assert_eq!(helper.badge("a", &options), helper.badge("a", &options));
        assert_eq!(helper.label("a", "info"), helper.label("a", "info"));
        assert_eq!(helper.icon("a", &options), helper.icon("a", &options));
    }
}

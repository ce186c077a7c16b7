//! Bootstrap carousel markup.

use bsui_markup::{Options, TagRenderer};

use crate::classes::inject_classes;
use crate::helper::HtmlHelper;

/// One slide of a carousel. Missing fields default to empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselItem {
    /// Image source, resolved by the renderer.
    pub src: String,
    /// Image alt text.
    pub alt: String,
    /// Caption text. Empty means no caption block.
    pub caption: String,
    /// Link around the image. Empty means no link.
    pub link: String,
}

impl CarouselItem {
    /// Item showing only an image.
    #[must_use]
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }
}

/// Default carousel options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselDefaults {
    /// `data-ride` value.
    pub ride: String,
    /// `data-interval` in milliseconds.
    pub interval: u32,
    /// `data-pause` value (`hover` or `false`).
    pub pause: String,
    /// `data-wrap` value.
    pub wrap: bool,
    /// `data-keyboard` value.
    pub keyboard: bool,
    /// Use glyphicon chevrons for the controls.
    pub use_glyph: bool,
    /// Add the `slide` animation class.
    pub slide: bool,
}

impl Default for CarouselDefaults {
    fn default() -> Self {
        Self {
            ride: "carousel".to_owned(),
            interval: 5000,
            pause: "hover".to_owned(),
            wrap: true,
            keyboard: true,
            use_glyph: true,
            slide: true,
        }
    }
}

impl CarouselDefaults {
    fn to_options(&self) -> Options {
        Options::new()
            .with("data-ride", self.ride.as_str())
            .with("data-interval", self.interval)
            .with("data-pause", self.pause.as_str())
            .with("data-wrap", bool_str(self.wrap))
            .with("data-keyboard", bool_str(self.keyboard))
            .with("class", "carousel")
            .with("use-glyph", self.use_glyph)
            .with("slide", self.slide)
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[derive(Clone, Copy)]
enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn slide(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Prev => "left carousel-control",
            Self::Next => "right carousel-control",
        }
    }

    fn icon_class(self, use_glyph: bool) -> &'static str {
        match (self, use_glyph) {
            (Self::Prev, true) => "glyphicon glyphicon-chevron-left",
            (Self::Next, true) => "glyphicon glyphicon-chevron-right",
            (Self::Prev, false) => "icon-prev",
            (Self::Next, false) => "icon-next",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Prev => "Previous",
            Self::Next => "Next",
        }
    }
}

impl<R: TagRenderer> HtmlHelper<R> {
    /// Bootstrap carousel.
    ///
    /// Renders indicators, slides and prev/next controls inside `outer_tag`.
    /// The first item is the active slide. Returns an empty string when
    /// `items` is empty.
    ///
    /// Pseudo-options: `use-glyph` (glyphicon chevrons, default true) and
    /// `slide` (slide animation class, default true). Any other option is
    /// forwarded to the outer element, after `id` and `class`.
    ///
    /// # Example
    ///
    /// ```
    /// use bsui_helpers::{CarouselItem, HtmlHelper};
    /// use bsui_markup::Options;
    ///
    /// let helper = HtmlHelper::new();
    /// let items = [
    ///     CarouselItem::image("a.jpg").with_caption("First"),
    ///     CarouselItem::image("b.jpg").with_link("/b"),
    /// ];
    /// let html = helper.carousel("gallery", "div", &Options::new(), &items);
    ///
    /// assert!(html.starts_with(r#"<div id="gallery" class="carousel slide""#));
    /// assert_eq!(html.matches("<li ").count(), 2);
    /// assert!(html.contains(r#"<div class="carousel-caption">First</div>"#));
    /// assert!(html.contains(r#"<a href="/b"><img src="/img/b.jpg" alt=""/></a>"#));
    ///
    /// assert_eq!(helper.carousel("empty", "div", &Options::new(), &[]), "");
    /// ```
    pub fn carousel(
        &self,
        id: &str,
        outer_tag: &str,
        options: &Options,
        items: &[CarouselItem],
    ) -> String {
        if items.is_empty() {
            tracing::debug!(id, "Carousel has no items");
            return String::new();
        }

        let mut options = options
            .clone()
            .with_defaults(self.defaults.carousel.to_options());
        let use_glyph = options.remove("use-glyph").is_some_and(|v| v.is_truthy());
        let slide = options.remove("slide").is_some_and(|v| v.is_truthy());

        let classes: &[&str] = if slide {
            &["carousel", "slide"]
        } else {
            &["carousel"]
        };
        let options = inject_classes(classes, &options);

        // The formatter escapes every attribute, so the raw id is used for
        // the outer element and for all references to it.
        let target = format!("#{id}");

        let mut outer = Options::new().with("id", id);
        if let Some(class) = options.get("class") {
            outer.insert("class", class.clone());
        }
        outer.extend(options.without(&["id", "class"]));

        let mut indicators = String::new();
        let mut slides = String::new();
        for (index, item) in items.iter().enumerate() {
            indicators.push_str(&self.carousel_indicator(&target, index));
            slides.push_str(&self.carousel_slide(item, index == 0));
        }

        let mut content = self.renderer.tag_html(
            "div",
            &indicators,
            &Options::from([("class", "carousel-indicators")]),
        );
        content.push_str(&self.renderer.tag_html(
            "div",
            &slides,
            &Options::from([("class", "carousel-inner"), ("role", "listbox")]),
        ));
        content.push_str(&self.carousel_control(&target, Direction::Prev, use_glyph));
        content.push_str(&self.carousel_control(&target, Direction::Next, use_glyph));

        tracing::debug!(id, items = items.len(), "Rendered carousel");
        self.renderer.tag_html(outer_tag, &content, &outer)
    }

    fn carousel_indicator(&self, target: &str, index: usize) -> String {
        let mut options = Options::new()
            .with("data-target", target)
            .with("data-slide-to", index);
        if index == 0 {
            options.insert("class", "active");
        }
        self.renderer.tag("li", "", &options)
    }

    fn carousel_slide(&self, item: &CarouselItem, active: bool) -> String {
        let mut image_options = Options::new().with("alt", item.alt.as_str());
        if !item.link.is_empty() {
            image_options.insert("url", item.link.as_str());
        }
        let mut content = self.renderer.image(&item.src, &image_options);

        if !item.caption.is_empty() {
            content.push_str(&self.renderer.tag(
                "div",
                &item.caption,
                &Options::from([("class", "carousel-caption")]),
            ));
        }

        let class = if active { "item active" } else { "item" };
        self.renderer.tag_html("div", &content, &Options::from([("class", class)]))
    }

    fn carousel_control(&self, target: &str, direction: Direction, use_glyph: bool) -> String {
        let icon = Options::new()
            .with("class", direction.icon_class(use_glyph))
            .with("aria-hidden", "true");
        let mut content = self.renderer.tag("span", "", &icon);
        content.push_str(&self.renderer.tag(
            "span",
            direction.label(),
            &Options::from([("class", "sr-only")]),
        ));

        let options = Options::new()
            .with("href", target)
            .with("role", "button")
            .with("data-slide", direction.slide())
            .with("class", direction.class());
        self.renderer.tag_html("a", &content, &options)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::helper::HelperDefaults;

    fn two_items() -> Vec<CarouselItem> {
        vec![CarouselItem::image("a.jpg"), CarouselItem::image("b.jpg")]
    }

    #[test]
    fn test_empty_items() {
        let helper = HtmlHelper::new();
        assert_eq!(helper.carousel("c1", "div", &Options::new(), &[]), "");
    }

    #[test]
    fn test_two_items_full_markup() {
        let helper = HtmlHelper::new();
        let html = helper.carousel("c1", "div", &Options::new(), &two_items());

        let expected = concat!(
            r#"<div id="c1" class="carousel slide" data-ride="carousel" data-interval="5000" "#,
            r#"data-pause="hover" data-wrap="true" data-keyboard="true">"#,
            r#"<div class="carousel-indicators">"#,
            r##"<li data-target="#c1" data-slide-to="0" class="active"></li>"##,
            r##"<li data-target="#c1" data-slide-to="1"></li>"##,
            "</div>",
            r#"<div class="carousel-inner" role="listbox">"#,
            r#"<div class="item active"><img src="/img/a.jpg" alt=""/></div>"#,
            r#"<div class="item"><img src="/img/b.jpg" alt=""/></div>"#,
            "</div>",
            r##"<a href="#c1" role="button" data-slide="prev" class="left carousel-control">"##,
            r#"<span class="glyphicon glyphicon-chevron-left" aria-hidden="true"></span>"#,
            r#"<span class="sr-only">Previous</span></a>"#,
            r##"<a href="#c1" role="button" data-slide="next" class="right carousel-control">"##,
            r#"<span class="glyphicon glyphicon-chevron-right" aria-hidden="true"></span>"#,
            r#"<span class="sr-only">Next</span></a>"#,
            "</div>",
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_indicators_container() {
        let helper = HtmlHelper::new();
        let html = helper.carousel("c1", "div", &Options::new(), &two_items());

        assert!(html.contains(concat!(
            r#"<div class="carousel-indicators">"#,
            r##"<li data-target="#c1" data-slide-to="0" class="active"></li>"##,
        )));
        assert!(!html.contains("<ol"));
    }

    #[test]
    fn test_exactly_one_active() {
        let helper = HtmlHelper::new();
        let items: Vec<_> = (0..5)
            .map(|i| CarouselItem::image(format!("{i}.jpg")))
            .collect();
        let html = helper.carousel("c", "div", &Options::new(), &items);

        assert_eq!(html.matches(r#"class="active""#).count(), 1);
        assert_eq!(html.matches(r#"class="item active""#).count(), 1);
        assert_eq!(html.matches(r#"class="item""#).count(), 4);
        assert!(html.contains(r#"data-slide-to="4""#));
    }

    #[test]
    fn test_caption_and_link() {
        let helper = HtmlHelper::new();
        let items = [CarouselItem::image("a.jpg")
            .with_alt("A")
            .with_caption("Hello & welcome")
            .with_link("/a")];
        let html = helper.carousel("c", "div", &Options::new(), &items);

        assert!(html.contains(concat!(
            r#"<div class="item active"><a href="/a"><img src="/img/a.jpg" alt="A"/></a>"#,
            r#"<div class="carousel-caption">Hello &amp; welcome</div></div>"#,
        )));
    }

    #[test]
    fn test_no_caption_no_link() {
        let helper = HtmlHelper::new();
        let html = helper.carousel("c", "div", &Options::new(), &two_items());
        assert!(!html.contains("carousel-caption"));
        assert!(!html.contains("<a href=\"/"));
    }

    #[test]
    fn test_without_glyph() {
        let helper = HtmlHelper::new();
        let html = helper.carousel(
            "c",
            "div",
            &Options::new().with("use-glyph", false),
            &two_items(),
        );

        assert!(!html.contains("glyphicon"));
        assert!(html.contains(r#"<span class="icon-prev" aria-hidden="true"></span>"#));
        assert!(html.contains(r#"<span class="icon-next" aria-hidden="true"></span>"#));
    }

    #[test]
    fn test_without_slide() {
        let helper = HtmlHelper::new();
        let html = helper.carousel(
            "c",
            "section",
            &Options::new().with("slide", false),
            &two_items(),
        );
        assert!(html.starts_with(r#"<section id="c" class="carousel" "#));
        assert!(html.ends_with("</section>"));
    }

    #[test]
    fn test_pseudo_options_not_forwarded() {
        let helper = HtmlHelper::new();
        let options = Options::new().with("use-glyph", true).with("slide", true);
        let html = helper.carousel("c", "div", &options, &two_items());
        assert!(!html.contains("use-glyph"));
        assert!(!html.contains(" slide=\""));
    }

    #[test]
    fn test_user_options_override_defaults() {
        let helper = HtmlHelper::new();
        let options = Options::new()
            .with("data-interval", "false")
            .with("class", "wide")
            .with("data-theme", "dark");
        let html = helper.carousel("c", "div", &options, &two_items());

        assert!(html.starts_with(concat!(
            r#"<div id="c" class="wide carousel slide" data-interval="false" data-theme="dark" "#,
            r#"data-ride="carousel" data-pause="hover" data-wrap="true" data-keyboard="true">"#,
        )));
    }

    #[test]
    fn test_id_argument_wins_over_option() {
        let helper = HtmlHelper::new();
        let options = Options::new().with("id", "other");
        let html = helper.carousel("c", "div", &options, &two_items());
        assert!(html.starts_with(r#"<div id="c" "#));
        assert!(!html.contains("other"));
    }

    #[test]
    fn test_id_escaped_consistently() {
        let helper = HtmlHelper::new();
        let html = helper.carousel("a\"b", "div", &Options::new(), &two_items());

        assert!(html.starts_with(r#"<div id="a&quot;b""#));
        assert_eq!(html.matches(r##"data-target="#a&quot;b""##).count(), 2);
        assert_eq!(html.matches(r##"href="#a&quot;b""##).count(), 2);
    }

    #[test]
    fn test_configured_defaults() {
        let helper = HtmlHelper::new().with_defaults(HelperDefaults {
            carousel: CarouselDefaults {
                interval: 8000,
                pause: "false".to_owned(),
                use_glyph: false,
                slide: false,
                ..CarouselDefaults::default()
            },
            ..HelperDefaults::default()
        });
        let html = helper.carousel("c", "div", &Options::new(), &two_items());

        assert!(html.starts_with(concat!(
            r#"<div id="c" class="carousel" data-ride="carousel" "#,
            r#"data-interval="8000" data-pause="false""#,
        )));
        assert!(html.contains("icon-prev"));
    }

    #[test]
    fn test_idempotent() {
        let helper = HtmlHelper::new();
        let items = two_items();
        assert_eq!(
            helper.carousel("c", "div", &Options::new(), &items),
            helper.carousel("c", "div", &Options::new(), &items)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_item_defaults() {
        let items: Vec<CarouselItem> =
            serde_json::from_str(r#"[{"src": "a.jpg"}, {"caption": "Only caption"}]"#).unwrap();
        assert_eq!(items[0], CarouselItem::image("a.jpg"));
        assert_eq!(items[1].src, "");
        assert_eq!(items[1].caption, "Only caption");
    }
}

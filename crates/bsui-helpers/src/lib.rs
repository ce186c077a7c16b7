//! Bootstrap markup helpers.
//!
//! [`HtmlHelper`] renders Bootstrap 3 components (badges, labels, icons,
//! breadcrumbs and carousels) through a [`TagRenderer`](bsui_markup::TagRenderer).
//! Options are flat [`Options`](bsui_markup::Options) mappings; pseudo-options
//! such as `tag`, `type` or `iconSet` configure generation and never reach
//! the emitted attributes.
//!
//! # Example
//!
//! ```
//! use bsui_helpers::{CarouselItem, HtmlHelper};
//! use bsui_markup::{CrumbTrail, Options, StartText};
//!
//! let helper = HtmlHelper::new();
//!
//! let mut trail = CrumbTrail::new();
//! trail.add("Guides", Some("/guides"), Options::new());
//! let crumbs = helper.get_crumb_list(&trail, &Options::new(), &StartText::from("Home"));
//! assert!(crumbs.unwrap().starts_with(r#"<ul class="breadcrumb">"#));
//!
//! let html = helper.carousel("hero", "div", &Options::new(), &[CarouselItem::image("a.jpg")]);
//! assert!(html.contains(r#"class="item active""#));
//! ```

mod carousel;
mod classes;
mod helper;

pub use carousel::{CarouselDefaults, CarouselItem};
pub use classes::{ClassList, has_any_class, inject_classes, rename_classes};
pub use helper::{HelperDefaults, HtmlHelper, LabelOptions};

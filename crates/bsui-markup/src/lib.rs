//! Host rendering layer for the Bootstrap markup helpers.
//!
//! This crate provides the pieces the helpers compose:
//! - [`Options`]: insertion-ordered attribute mapping
//! - [`format_attributes`] and [`escape_html`]
//! - [`StringTemplates`]: named `{{var}}` templates
//! - [`TagRenderer`]: element, link and image rendering, with the
//!   [`StringTemplater`] implementation
//! - [`CrumbTrail`]: breadcrumb registry rendered as a list
//!
//! # Example
//!
//! ```
//! use bsui_markup::{Options, StringTemplater, TagRenderer};
//!
//! let renderer = StringTemplater::new();
//! let html = renderer.tag("span", "New", &Options::from([("class", "badge")]));
//! assert_eq!(html, r#"<span class="badge">New</span>"#);
//! ```

mod attrs;
mod crumbs;
mod error;
mod options;
mod renderer;
mod template;

pub use attrs::{escape_html, format_attributes};
pub use crumbs::{Crumb, CrumbTrail, StartText};
pub use error::MarkupError;
pub use options::{AttrValue, Options};
pub use renderer::{DEFAULT_IMAGE_BASE, StringTemplater, TagRenderer};
pub use template::StringTemplates;

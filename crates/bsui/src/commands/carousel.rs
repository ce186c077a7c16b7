//! `bsui carousel` command implementation.

use std::path::PathBuf;

use bsui_config::CliSettings;
use bsui_helpers::{CarouselItem, HtmlHelper};
use clap::Args;

use super::{AttrArgs, read_json};
use crate::error::CliError;

/// Arguments for the carousel command.
#[derive(Args)]
pub(crate) struct CarouselArgs {
    /// JSON file with an array of `{src, alt, caption, link}` items.
    items: PathBuf,

    /// Carousel element id.
    #[arg(long, default_value = "MyCarousel")]
    id: String,

    /// Outer element.
    #[arg(long, default_value = "div")]
    tag: String,

    /// Use `icon-prev`/`icon-next` instead of glyphicon chevrons.
    #[arg(long)]
    no_glyph: bool,

    /// Disable the slide animation.
    #[arg(long)]
    no_slide: bool,

    /// Slide interval in milliseconds (overrides config).
    #[arg(long)]
    interval: Option<u32>,

    #[command(flatten)]
    attrs: AttrArgs,
}

impl CarouselArgs {
    /// Copy config overrides into `settings`.
    pub(crate) fn apply_overrides(&self, settings: &mut CliSettings) {
        if self.no_glyph {
            settings.use_glyph = Some(false);
        }
        if self.no_slide {
            settings.slide = Some(false);
        }
        if self.interval.is_some() {
            settings.interval = self.interval;
        }
    }

    pub(crate) fn execute(self, helper: &HtmlHelper) -> Result<String, CliError> {
        if self.id.trim().is_empty() {
            return Err(CliError::Validation("carousel id cannot be empty".to_owned()));
        }

        let items: Vec<CarouselItem> = read_json(&self.items)?;
        if items.is_empty() {
            tracing::warn!(path = %self.items.display(), "No carousel items");
        }

        let options = self.attrs.to_options();
        Ok(helper.carousel(&self.id, &self.tag, &options, &items))
    }
}

//! CLI command implementations.

mod badge;
mod carousel;
mod crumbs;
mod icon;
mod label;

use std::path::Path;

use bsui_config::Config;
use bsui_helpers::{CarouselDefaults, HelperDefaults, HtmlHelper};
use bsui_markup::{Options, StringTemplater, StringTemplates};
use clap::Args;
use serde::de::DeserializeOwned;

use crate::error::CliError;

pub(crate) use badge::BadgeArgs;
pub(crate) use carousel::CarouselArgs;
pub(crate) use crumbs::CrumbsArgs;
pub(crate) use icon::IconArgs;
pub(crate) use label::LabelArgs;

/// Attribute arguments shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct AttrArgs {
    /// Extra CSS classes for the element.
    #[arg(long)]
    class: Option<String>,

    /// Extra attribute as `key=value` (repeatable).
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,
}

impl AttrArgs {
    /// Build the options mapping passed to the helper.
    pub(crate) fn to_options(&self) -> Options {
        let mut options = Options::new();
        if let Some(class) = &self.class {
            options.insert("class", class.as_str());
        }
        options.extend(self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        options
    }
}

/// Parse a `key=value` attribute argument.
fn parse_attr(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("attribute name cannot be empty in `{s}`"));
    }
    Ok((key.to_owned(), value.to_owned()))
}

/// Read and deserialize a JSON input file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the helper from loaded configuration.
pub(crate) fn build_helper(config: &Config) -> HtmlHelper {
    let templates = StringTemplates::default().with_overrides(&config.templates);
    let renderer = StringTemplater::new()
        .with_templates(templates)
        .with_image_base(config.images.base_url.as_str());

    HtmlHelper::with_renderer(renderer).with_defaults(HelperDefaults {
        icon_tag: config.icons.tag.clone(),
        icon_set: config.icons.icon_set.clone(),
        crumb_separator: config.breadcrumbs.separator.clone(),
        carousel: CarouselDefaults {
            ride: config.carousel.ride.clone(),
            interval: config.carousel.interval,
            pause: config.carousel.pause.clone(),
            wrap: config.carousel.wrap,
            keyboard: config.carousel.keyboard,
            use_glyph: config.carousel.use_glyph,
            slide: config.carousel.slide,
        },
    })
}

/// Build a helper from an empty config file with `settings` applied.
#[cfg(test)]
pub(crate) fn helper_with_settings(
    settings: &bsui_config::CliSettings,
) -> Result<HtmlHelper, CliError> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bsui.toml");
    std::fs::write(&path, "").unwrap();

    let config = Config::load(Some(&path), Some(settings))?;
    Ok(build_helper(&config))
}

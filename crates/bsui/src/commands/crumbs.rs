//! `bsui crumbs` command implementation.

use std::path::PathBuf;

use bsui_config::CliSettings;
use bsui_helpers::HtmlHelper;
use bsui_markup::{CrumbTrail, Options, StartText};
use clap::Args;
use serde::Deserialize;

use super::{AttrArgs, read_json};
use crate::error::CliError;

/// One breadcrumb entry in the input file.
#[derive(Debug, Deserialize)]
struct CrumbEntry {
    label: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    options: Options,
}

/// Arguments for the crumbs command.
#[derive(Args)]
pub(crate) struct CrumbsArgs {
    /// JSON file with an array of `{label, url, options}` entries.
    crumbs: PathBuf,

    /// Leading crumb linking to `/`.
    #[arg(long)]
    start_text: Option<String>,

    /// Separator between crumbs (overrides config).
    #[arg(long)]
    separator: Option<String>,

    #[command(flatten)]
    attrs: AttrArgs,
}

impl CrumbsArgs {
    /// Copy config overrides into `settings`.
    pub(crate) fn apply_overrides(&self, settings: &mut CliSettings) {
        settings.separator.clone_from(&self.separator);
    }

    /// Render the trail. Returns `None` when there is nothing to render.
    pub(crate) fn execute(self, helper: &HtmlHelper) -> Result<Option<String>, CliError> {
        let entries: Vec<CrumbEntry> = read_json(&self.crumbs)?;

        let mut trail = CrumbTrail::new();
        for entry in entries {
            trail.add(entry.label, entry.url.as_deref(), entry.options);
        }

        let options = self.attrs.to_options();
        let start_text = self.start_text.map_or(StartText::None, StartText::Text);

        Ok(helper.get_crumb_list(&trail, &options, &start_text))
    }
}

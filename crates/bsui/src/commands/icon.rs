//! `bsui icon` command implementation.

use bsui_config::CliSettings;
use bsui_helpers::HtmlHelper;
use clap::Args;

use super::AttrArgs;

/// Arguments for the icon command.
#[derive(Args)]
pub(crate) struct IconArgs {
    /// Icon name (search, leaf, ...).
    name: String,

    /// Icon set (overrides config).
    #[arg(long)]
    icon_set: Option<String>,

    /// Element to render (overrides config).
    #[arg(long)]
    tag: Option<String>,

    #[command(flatten)]
    attrs: AttrArgs,
}

impl IconArgs {
    /// Copy config overrides into `settings`.
    pub(crate) fn apply_overrides(&self, settings: &mut CliSettings) {
        settings.icon_set.clone_from(&self.icon_set);
    }

    pub(crate) fn execute(self, helper: &HtmlHelper) -> String {
        let mut options = self.attrs.to_options();
        if let Some(tag) = self.tag {
            options.insert("tag", tag);
        }
        helper.icon(&self.name, &options)
    }
}

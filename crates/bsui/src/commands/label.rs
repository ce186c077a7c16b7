//! `bsui label` command implementation.

use bsui_helpers::HtmlHelper;
use clap::Args;

use super::AttrArgs;

/// Arguments for the label command.
#[derive(Args)]
pub(crate) struct LabelArgs {
    /// Label text.
    text: String,

    /// Semantic variant (default, primary, success, info, warning, danger).
    #[arg(long, default_value = "default")]
    variant: String,

    /// Element to render (default: span).
    #[arg(long)]
    tag: Option<String>,

    #[command(flatten)]
    attrs: AttrArgs,
}

impl LabelArgs {
    pub(crate) fn execute(self, helper: &HtmlHelper) -> String {
        let mut options = self.attrs.to_options().with("type", self.variant);
        if let Some(tag) = self.tag {
            options.insert("tag", tag);
        }
        helper.label(&self.text, options)
    }
}

//! `bsui badge` command implementation.

use bsui_helpers::HtmlHelper;
use clap::Args;

use super::AttrArgs;

/// Arguments for the badge command.
#[derive(Args)]
pub(crate) struct BadgeArgs {
    /// Badge text.
    text: String,

    /// Element to render (default: span).
    #[arg(long)]
    tag: Option<String>,

    #[command(flatten)]
    attrs: AttrArgs,
}

impl BadgeArgs {
    pub(crate) fn execute(self, helper: &HtmlHelper) -> String {
        let mut options = self.attrs.to_options();
        if let Some(tag) = self.tag {
            options.insert("tag", tag);
        }
        helper.badge(&self.text, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_with_tag() {
        let args = BadgeArgs {
            text: "4".to_owned(),
            tag: Some("em".to_owned()),
            attrs: AttrArgs::default(),
        };
        assert_eq!(
            args.execute(&HtmlHelper::new()),
            r#"<em class="badge">4</em>"#
        );
    }
}

//! bsui CLI - Bootstrap markup helpers.
//!
//! Provides commands for:
//! - `badge`: Render a badge
//! - `label`: Render a label with a semantic variant
//! - `icon`: Render an icon element
//! - `carousel`: Render a carousel from a JSON list of slides
//! - `crumbs`: Render a breadcrumb list from a JSON trail

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use bsui_config::{CliSettings, Config};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BadgeArgs, CarouselArgs, CrumbsArgs, IconArgs, LabelArgs, build_helper};
use error::CliError;
use output::Output;

/// bsui - Bootstrap markup helpers.
#[derive(Parser)]
#[command(name = "bsui", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover bsui.toml).
    #[arg(short, long, global = true, env = "BSUI_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL for relative image paths (overrides config).
    #[arg(long, global = true)]
    image_base: Option<String>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a badge.
    Badge(BadgeArgs),
    /// Render a label.
    Label(LabelArgs),
    /// Render an icon.
    Icon(IconArgs),
    /// Render a carousel.
    Carousel(CarouselArgs),
    /// Render a breadcrumb list.
    Crumbs(CrumbsArgs),
}

impl Cli {
    /// Config overrides from global and command flags.
    fn cli_settings(&self) -> CliSettings {
        let mut settings = CliSettings {
            image_base_url: self.image_base.clone(),
            ..CliSettings::default()
        };
        match &self.command {
            Commands::Icon(args) => args.apply_overrides(&mut settings),
            Commands::Carousel(args) => args.apply_overrides(&mut settings),
            Commands::Crumbs(args) => args.apply_overrides(&mut settings),
            Commands::Badge(_) | Commands::Label(_) => {}
        }
        settings
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &Output) -> Result<(), CliError> {
    let cli_settings = cli.cli_settings();
    let config = Config::load(cli.config.as_deref(), Some(&cli_settings))?;
    let helper = build_helper(&config);

    let html = match cli.command {
        Commands::Badge(args) => args.execute(&helper),
        Commands::Label(args) => args.execute(&helper),
        Commands::Icon(args) => args.execute(&helper),
        Commands::Carousel(args) => args.execute(&helper)?,
        Commands::Crumbs(args) => match args.execute(&helper)? {
            Some(html) => html,
            None => {
                output.warning("No breadcrumbs to render");
                return Ok(());
            }
        },
    };

    output.html(&html);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(args: &[&str]) -> CliSettings {
        Cli::try_parse_from(args.iter().copied()).unwrap().cli_settings()
    }

    #[test]
    fn test_global_image_base() {
        let settings = settings(&["bsui", "badge", "1", "--image-base", "/static/"]);
        assert_eq!(settings.image_base_url.as_deref(), Some("/static/"));
        assert_eq!(settings.icon_set, None);
    }

    #[test]
    fn test_icon_set_flag_reaches_config() {
        let settings = settings(&["bsui", "icon", "leaf", "--icon-set", "fa"]);
        assert_eq!(settings.icon_set.as_deref(), Some("fa"));
    }

    #[test]
    fn test_carousel_flags_reach_config() {
        let settings = settings(&[
            "bsui",
            "carousel",
            "items.json",
            "--no-glyph",
            "--no-slide",
            "--interval",
            "3000",
        ]);
        assert_eq!(settings.use_glyph, Some(false));
        assert_eq!(settings.slide, Some(false));
        assert_eq!(settings.interval, Some(3000));
    }

    #[test]
    fn test_separator_flag_reaches_config() {
        let settings = settings(&["bsui", "crumbs", "trail.json", "--separator", " / "]);
        assert_eq!(settings.separator.as_deref(), Some(" / "));
    }
}

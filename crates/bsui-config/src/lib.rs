//! Configuration management for the Bootstrap markup helpers.
//!
//! Parses `bsui.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `images.base_url` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the image base URL.
    pub image_base_url: Option<String>,
    /// Override the icon set.
    pub icon_set: Option<String>,
    /// Override the carousel glyph controls flag.
    pub use_glyph: Option<bool>,
    /// Override the carousel slide animation flag.
    pub slide: Option<bool>,
    /// Override the carousel slide interval.
    pub interval: Option<u32>,
    /// Override the breadcrumb separator.
    pub separator: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "bsui.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image path resolution.
    pub images: ImagesConfig,
    /// Icon defaults.
    pub icons: IconsConfig,
    /// Carousel defaults.
    pub carousel: CarouselConfig,
    /// Breadcrumb defaults.
    pub breadcrumbs: BreadcrumbsConfig,
    /// Template overrides, keyed by template name.
    pub templates: HashMap<String, String>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Image configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Prefix for relative image paths.
    pub base_url: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            base_url: "/img/".to_owned(),
        }
    }
}

/// Icon configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Element used for icons.
    pub tag: String,
    /// Icon set class prefix.
    pub icon_set: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            tag: "i".to_owned(),
            icon_set: "glyphicon".to_owned(),
        }
    }
}

/// Carousel configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// `data-ride` value.
    pub ride: String,
    /// Slide interval in milliseconds.
    pub interval: u32,
    /// `data-pause` value.
    pub pause: String,
    /// Cycle continuously.
    pub wrap: bool,
    /// React to keyboard events.
    pub keyboard: bool,
    /// Glyphicon chevrons for the controls.
    pub use_glyph: bool,
    /// Slide animation.
    pub slide: bool,
}

impl Default for CarouselConfig {
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

/// Breadcrumb configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsConfig {
    /// Separator placed between crumbs.
    pub separator: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`images.base_url`").
        field: String,
        /// Error message (e.g., "${`CDN_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `bsui.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or parsing or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.image_base_url {
            self.images.base_url.clone_from(base_url);
        }
        if let Some(icon_set) = &settings.icon_set {
            self.icons.icon_set.clone_from(icon_set);
        }
        if let Some(use_glyph) = settings.use_glyph {
            self.carousel.use_glyph = use_glyph;
        }
        if let Some(slide) = settings.slide {
            self.carousel.slide = slide;
        }
        if let Some(interval) = settings.interval {
            self.carousel.interval = interval;
        }
        if let Some(separator) = &settings.separator {
            self.breadcrumbs.separator.clone_from(separator);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.images.base_url, "images.base_url")?;
        require_non_empty(&self.icons.tag, "icons.tag")?;
        require_non_empty(&self.icons.icon_set, "icons.icon_set")?;
        self.validate_carousel()?;
        self.validate_templates()?;
        Ok(())
    }

    fn validate_carousel(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.carousel.ride, "carousel.ride")?;

        if self.carousel.interval == 0 {
            return Err(ConfigError::Validation(
                "carousel.interval must be greater than 0".to_owned(),
            ));
        }

        if !matches!(self.carousel.pause.as_str(), "hover" | "false") {
            return Err(ConfigError::Validation(format!(
                "carousel.pause must be \"hover\" or \"false\", got \"{}\"",
                self.carousel.pause
            )));
        }

        Ok(())
    }

    fn validate_templates(&self) -> Result<(), ConfigError> {
        for (name, template) in &self.templates {
            require_non_empty(template, &format!("templates.{name}"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.images.base_url = expand::expand_env(&self.images.base_url, "images.base_url")?;
        Ok(())
    }
}

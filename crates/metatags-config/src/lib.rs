//! Configuration management for metatags.
//!
//! Parses `metatags.toml` files with serde and provides auto-discovery of
//! the config file in parent directories.
//!
//! ```toml
//! [render]
//! display_title = true
//! rel_prefix = "literal"
//!
//! [defaults]
//! "og:site_name" = "${SITE_NAME:-Example}"
//! keywords = ["news", "daily"]
//!
//! [defaults.twitter]
//! card = "summary_large_image"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! Every string under `[defaults]` and `render.og_image_suffix` supports:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! A bare `$` is kept as written.

mod expand;

use std::path::{Path, PathBuf};

use metatags::{AttributeStore, RenderError, RenderOptions, TagRenderer};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "metatags.toml";

/// Renderer configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Rendering behaviour.
    pub render: RenderConfig,
    /// Default attributes rendered under every page's own attributes.
    pub defaults: AttributeStore,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[render]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Append a `<title>` element when a `title` attribute is present.
    pub display_title: bool,
    /// Tag formatting options.
    #[serde(flatten)]
    pub options: RenderOptions,
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
        /// Config field path (e.g., "`defaults.og:site_name`").
        field: String,
        /// Error message (e.g., "${`SITE_NAME`} not set").
        message: String,
    },
}

impl RendererConfig {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `metatags.toml` in the current directory and its parents, falling
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from TOML text.
    ///
    /// Environment variables are expanded and the result validated.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The suffix is embedded unescaped inside a quoted attribute.
        if self.render.options.og_image_suffix.contains('"') {
            return Err(ConfigError::Validation(
                "render.og_image_suffix cannot contain '\"'".to_owned(),
            ));
        }
        Ok(())
    }

    /// Create a renderer using the configured formatting options.
    #[must_use]
    pub fn renderer(&self) -> TagRenderer {
        TagRenderer::with_options(self.render.options.clone())
    }

    /// Render `renderer`'s attributes over the configured defaults.
    pub fn display(&self, renderer: &TagRenderer) -> Result<String, RenderError> {
        renderer.display(&self.defaults, self.render.display_title)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.render.options.og_image_suffix = expand::expand_env(
            &self.render.options.og_image_suffix,
            "render.og_image_suffix",
        )?;

        for (key, value) in &mut self.defaults {
            expand::expand_attribute(value, &format!("defaults.{key}"))?;
        }
        Ok(())
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

//! Demo configuration
//!
//! Configuration is optional. When `THEME_TOGGLE_CONFIG` names a JSON file it
//! is loaded from there; otherwise defaults apply. Missing fields take their
//! defaults too.
//!
//! ```json
//! {
//!   "preferredTheme": "dark",
//!   "colorSchemeSource": "env",
//!   "logFilter": "debug"
//! }
//! ```

use std::path::Path;

use app_platform::{ColorSchemeSource, EnvColorScheme, FixedColorScheme, SystemColorScheme};
use app_ui::ThemeName;
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file
pub const CONFIG_PATH_VAR: &str = "THEME_TOGGLE_CONFIG";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`DemoConfig`]
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the platform color scheme comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeSourceKind {
    /// Operating system appearance setting
    #[default]
    System,
    /// `THEME_TOGGLE_COLOR_SCHEME` environment variable
    Env,
    /// No platform preference
    None,
}

impl ColorSchemeSourceKind {
    /// Build the source
    pub fn source(&self) -> Box<dyn ColorSchemeSource> {
        match self {
            ColorSchemeSourceKind::System => Box::new(SystemColorScheme),
            ColorSchemeSourceKind::Env => Box::new(EnvColorScheme::default()),
            ColorSchemeSourceKind::None => Box::new(FixedColorScheme::none()),
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    /// Theme to start with, overriding the platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_theme: Option<ThemeName>,
    /// Platform color-scheme source
    pub color_scheme_source: ColorSchemeSourceKind,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            preferred_theme: None,
            color_scheme_source: ColorSchemeSourceKind::System,
            log_filter: "info".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load from the file named by [`CONFIG_PATH_VAR`], or use defaults
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Set the preferred theme
    pub fn with_preferred_theme(mut self, theme: ThemeName) -> Self {
        self.preferred_theme = Some(theme);
        self
    }

    /// Set the color-scheme source
    pub fn with_color_scheme_source(mut self, kind: ColorSchemeSourceKind) -> Self {
        self.color_scheme_source = kind;
        self
    }
}

//! Host color-scheme detection
//!
//! A [`ColorSchemeSource`] reports the color scheme the host platform prefers,
//! if it reports one at all. Absence of a preference is a normal case.
//!
//! # Sources
//!
//! - [`SystemColorScheme`] - asks the operating system via `dark-light`
//! - [`EnvColorScheme`] - reads an environment variable
//! - [`FixedColorScheme`] - a constant answer, handy for tests and config

use serde::{Deserialize, Serialize};

/// Environment variable read by [`EnvColorScheme::default`]
pub const DEFAULT_COLOR_SCHEME_VAR: &str = "THEME_TOGGLE_COLOR_SCHEME";

/// Color scheme reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light appearance
    Light,
    /// Dark appearance
    Dark,
}

impl ColorScheme {
    /// Lowercase name as used by style sheets
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known color scheme
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color scheme: {0}")]
pub struct ColorSchemeParseError(pub String);

impl std::str::FromStr for ColorScheme {
    type Err = ColorSchemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(ColorSchemeParseError(s.to_string())),
        }
    }
}

/// Something that can report the host's preferred color scheme
#[cfg_attr(test, mockall::automock)]
pub trait ColorSchemeSource {
    /// The preferred scheme, or `None` when the host does not say
    fn color_scheme(&self) -> Option<ColorScheme>;
}

/// Operating system appearance setting
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSource for SystemColorScheme {
    fn color_scheme(&self) -> Option<ColorScheme> {
        let scheme = match dark_light::detect() {
            dark_light::Mode::Dark => ColorScheme::Dark,
            dark_light::Mode::Light => ColorScheme::Light,
        };
        tracing::debug!("System color scheme detected: {}", scheme);
        Some(scheme)
    }
}

/// Color scheme taken from an environment variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvColorScheme {
    var: String,
}

impl Default for EnvColorScheme {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR_SCHEME_VAR)
    }
}

impl EnvColorScheme {
    /// Read the scheme from the named variable
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this source reads
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl ColorSchemeSource for EnvColorScheme {
    fn color_scheme(&self) -> Option<ColorScheme> {
        let value = std::env::var(&self.var).ok()?;
        match value.parse() {
            Ok(scheme) => Some(scheme),
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", self.var, e);
                None
            }
        }
    }
}

/// A source that always gives the same answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedColorScheme(pub Option<ColorScheme>);

impl FixedColorScheme {
    /// A host that reports no preference
    pub fn none() -> Self {
        Self(None)
    }
}

impl ColorSchemeSource for FixedColorScheme {
    fn color_scheme(&self) -> Option<ColorScheme> {
        self.0
    }
}

impl<T: ColorSchemeSource + ?Sized> ColorSchemeSource for &T {
    fn color_scheme(&self) -> Option<ColorScheme> {
        (**self).color_scheme()
    }
}

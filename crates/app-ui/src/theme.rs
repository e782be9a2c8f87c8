//! Color palettes and theme names
//!
//! Two themes are supported, each with a fixed palette of semantic color
//! roles. Palettes are `'static` constants and are never mutated; the active
//! one is selected by the [`ThemeStore`](crate::provider::ThemeStore).
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{palette_for, ThemeName};
//!
//! let palette = palette_for(ThemeName::Dark);
//! assert_eq!(palette.background, "#0f172a");
//! assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
//! ```

use app_platform::ColorScheme;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color as used in component styles (hex string or `rgba(...)`)
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Rough perceived brightness (0-255) of a hex color
pub fn luminance(hex: &str) -> Option<u8> {
    let (r, g, b) = parse_hex_color(hex)?;
    Some(((r as u32 + g as u32 + b as u32) / 3) as u8)
}

// =============================================================================
// Palette
// =============================================================================

/// Semantic color roles shared by both themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Screen background
    pub background: &'static str,
    /// Cards and elevated surfaces
    pub surface: &'static str,
    /// Alternate surface (chips, wells)
    pub surface_variant: &'static str,
    /// Primary text
    pub text: &'static str,
    /// Secondary/muted text
    pub text_secondary: &'static str,
    /// Very muted text
    pub text_tertiary: &'static str,
    /// Brand color
    pub primary: &'static str,
    /// Lighter brand variant
    pub primary_light: &'static str,
    /// Darker brand variant
    pub primary_dark: &'static str,
    /// Accent (success) color
    pub accent: &'static str,
    /// Borders and dividers
    pub border: &'static str,
}

impl Palette {
    /// All role names in declaration order
    pub const ROLES: [&'static str; 11] = [
        "background",
        "surface",
        "surfaceVariant",
        "text",
        "textSecondary",
        "textTertiary",
        "primary",
        "primaryLight",
        "primaryDark",
        "accent",
        "border",
    ];

    /// Look up a color by role name (camelCase or snake_case)
    pub fn get(&self, role: &str) -> Option<&'static str> {
        match role {
            "background" => Some(self.background),
            "surface" => Some(self.surface),
            "surfaceVariant" | "surface_variant" => Some(self.surface_variant),
            "text" => Some(self.text),
            "textSecondary" | "text_secondary" => Some(self.text_secondary),
            "textTertiary" | "text_tertiary" => Some(self.text_tertiary),
            "primary" => Some(self.primary),
            "primaryLight" | "primary_light" => Some(self.primary_light),
            "primaryDark" | "primary_dark" => Some(self.primary_dark),
            "accent" => Some(self.accent),
            "border" => Some(self.border),
            _ => None,
        }
    }

    /// Iterate over `(role, color)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        Self::ROLES
            .into_iter()
            .filter_map(move |role| self.get(role).map(|color| (role, color)))
    }
}

/// Light palette (slate neutrals, indigo brand, emerald accent)
pub const LIGHT_PALETTE: Palette = Palette {
    background: "#f8fafc",
    surface: "#ffffff",
    surface_variant: "#f1f5f9",
    text: "#1e293b",
    text_secondary: "#64748b",
    text_tertiary: "#94a3b8",
    primary: "#6366f1",
    primary_light: "#818cf8",
    primary_dark: "#4f46e5",
    accent: "#10b981",
    border: "#e2e8f0",
};

/// Dark palette
pub const DARK_PALETTE: Palette = Palette {
    background: "#0f172a",
    surface: "#1e293b",
    surface_variant: "#334155",
    text: "#f1f5f9",
    text_secondary: "#cbd5e1",
    text_tertiary: "#94a3b8",
    primary: "#818cf8",
    primary_light: "#a5b4fc",
    primary_dark: "#6366f1",
    accent: "#34d399",
    border: "#334155",
};

// =============================================================================
// Theme Name
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Every theme, light first
    pub const ALL: [ThemeName; 2] = [ThemeName::Light, ThemeName::Dark];

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Whether this is the dark theme
    pub fn is_dark(self) -> bool {
        self == ThemeName::Dark
    }

    /// Palette for this theme
    pub fn palette(self) -> &'static Palette {
        palette_for(self)
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

/// Error returned when parsing an unknown theme name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0}")]
pub struct ThemeParseError(pub String);

impl std::str::FromStr for ThemeName {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

impl From<ColorScheme> for ThemeName {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemeName::Light,
            ColorScheme::Dark => ThemeName::Dark,
        }
    }
}

/// Palette table lookup
pub fn palette_for(name: ThemeName) -> &'static Palette {
    match name {
        ThemeName::Light => &LIGHT_PALETTE,
        ThemeName::Dark => &DARK_PALETTE,
    }
}

// =============================================================================
// Gradients
// =============================================================================

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// A point in unit coordinates, used for gradient direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    /// Horizontal position (0.0 - 1.0)
    pub x: f32,
    /// Vertical position (0.0 - 1.0)
    pub y: f32,
}

/// A linear gradient definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient stops
    pub stops: Vec<GradientStop>,
    /// Start point
    pub start: UnitPoint,
    /// End point
    pub end: UnitPoint,
}

impl Gradient {
    /// Evenly spaced diagonal gradient (top-left to bottom-right)
    pub fn diagonal(colors: &[&str]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self {
            stops: colors
                .iter()
                .enumerate()
                .map(|(i, color)| GradientStop {
                    position: i as f32 / last,
                    color: color.to_string(),
                })
                .collect(),
            start: UnitPoint { x: 0.0, y: 0.0 },
            end: UnitPoint { x: 1.0, y: 1.0 },
        }
    }

    /// Brand header gradient for a palette
    pub fn header(palette: &Palette) -> Self {
        Self::diagonal(&[palette.primary, palette.primary_light])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#6366f1"), Some((99, 102, 241)));
        assert_eq!(parse_hex_color("0f172a"), Some((15, 23, 42)));
        assert_eq!(parse_hex_color("#FF"), None);
        assert_eq!(parse_hex_color("rgba(255, 255, 255, 0.2)"), None);
    }

    // ==========================================================================
    // Theme Name Tests
    // ==========================================================================

    #[test]
    fn test_theme_name_display() {
        assert_eq!(ThemeName::Light.to_string(), "Light");
        assert_eq!(ThemeName::Dark.to_string(), "Dark");
    }

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!("light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert_eq!("DARK".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert_eq!(
            "dim".parse::<ThemeName>(),
            Err(ThemeParseError("dim".to_string()))
        );
    }

    #[test]
    fn test_theme_name_toggled() {
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
        for name in ThemeName::ALL {
            assert_eq!(name.toggled().toggled(), name);
        }
    }

    #[test]
    fn test_theme_name_from_color_scheme() {
        assert_eq!(ThemeName::from(ColorScheme::Dark), ThemeName::Dark);
        assert_eq!(ThemeName::from(ColorScheme::Light), ThemeName::Light);
    }

    #[test]
    fn test_theme_name_serialization() {
        let json = serde_json::to_string(&ThemeName::Dark).unwrap();
        assert_eq!(json, "\"dark\"");

        let deserialized: ThemeName = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(deserialized, ThemeName::Light);
    }

    // ==========================================================================
    // Palette Tests
    // ==========================================================================

    #[test]
    fn test_palette_table() {
        assert_eq!(palette_for(ThemeName::Light), &LIGHT_PALETTE);
        assert_eq!(palette_for(ThemeName::Dark), &DARK_PALETTE);
        assert_eq!(ThemeName::Dark.palette().primary, "#818cf8");
    }

    #[test]
    fn test_palette_get_by_role() {
        assert_eq!(LIGHT_PALETTE.get("textSecondary"), Some("#64748b"));
        assert_eq!(LIGHT_PALETTE.get("text_secondary"), Some("#64748b"));
        assert_eq!(DARK_PALETTE.get("primaryDark"), Some("#6366f1"));
        assert_eq!(DARK_PALETTE.get("shadow"), None);
    }

    #[test]
    fn test_palette_entries_cover_all_roles() {
        let entries: Vec<_> = DARK_PALETTE.entries().collect();
        assert_eq!(entries.len(), Palette::ROLES.len());
        assert_eq!(entries[0], ("background", "#0f172a"));
    }

    #[test]
    fn test_all_colors_are_valid_hex() {
        for name in ThemeName::ALL {
            for (role, color) in palette_for(name).entries() {
                assert!(
                    parse_hex_color(color).is_some(),
                    "Invalid {} color in {:?} palette",
                    role,
                    name
                );
            }
        }
    }

    #[test]
    fn test_text_background_contrast() {
        for name in ThemeName::ALL {
            let palette = palette_for(name);
            let bg = luminance(palette.background).unwrap() as i32;
            let text = luminance(palette.text).unwrap() as i32;
            assert!(
                (bg - text).abs() > 100,
                "{:?} palette has insufficient text contrast",
                name
            );
        }
    }

    #[test]
    fn test_dark_background_darker_than_light() {
        let light = luminance(LIGHT_PALETTE.background).unwrap();
        let dark = luminance(DARK_PALETTE.background).unwrap();
        assert!(dark < light);
    }

    #[test]
    fn test_palette_serializes_camel_case() {
        let json = serde_json::to_value(LIGHT_PALETTE).unwrap();
        assert_eq!(json["surfaceVariant"], "#f1f5f9");
        assert_eq!(json["primaryLight"], "#818cf8");
    }

    // ==========================================================================
    // Gradient Tests
    // ==========================================================================

    #[test]
    fn test_header_gradient() {
        let gradient = Gradient::header(&DARK_PALETTE);
        assert_eq!(gradient.stops.len(), 2);
        assert_eq!(gradient.stops[0].color, "#818cf8");
        assert_eq!(gradient.stops[1].color, "#a5b4fc");
        assert_eq!(gradient.stops[1].position, 1.0);
        assert_eq!(gradient.end, UnitPoint { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_gradient_stops_valid_positions() {
        let gradient = Gradient::diagonal(&["#000000", "#777777", "#FFFFFF"]);
        for stop in &gradient.stops {
            assert!(stop.position >= 0.0 && stop.position <= 1.0);
        }
        assert_eq!(gradient.stops[1].position, 0.5);
    }
}

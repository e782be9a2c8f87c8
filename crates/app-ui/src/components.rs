//! UI component primitives
//!
//! Components are plain Rust structs with serializable properties that a
//! frontend renders. Each one offers:
//!
//! - Type-safe props with builder methods
//! - A [`StyleProps`] bundle for layout and color
//!
//! # Available Components
//!
//! - [`Text`] - Text run with font size, weight and color
//! - [`Container`] - Layout container with flex properties
//! - [`Icon`] - Named glyph from the icon set

use crate::theme::Color;
use crate::tokens::{font_size, font_weight};
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Style properties that can be applied to any component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    /// Padding inside the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Positioning scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Offset from the top edge (absolute positioning)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    /// Offset from the right edge (absolute positioning)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    /// Elevation (drop shadow depth)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f32>,
}

impl StyleProps {
    /// Overlay `overrides` on top of `self`; set fields in `overrides` win
    pub fn merged(&self, overrides: &StyleProps) -> StyleProps {
        StyleProps {
            padding: overrides.padding.clone().or_else(|| self.padding.clone()),
            background_color: overrides
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            border_radius: overrides.border_radius.or(self.border_radius),
            border_width: overrides.border_width.or(self.border_width),
            border_color: overrides
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            opacity: overrides.opacity.or(self.opacity),
            position: overrides.position.or(self.position),
            top: overrides.top.or(self.top),
            right: overrides.right.or(self.right),
            elevation: overrides.elevation.or(self.elevation),
        }
    }

    /// Absolutely positioned at the given top/right offsets
    pub fn absolute(top: f32, right: f32) -> Self {
        Self {
            position: Some(Position::Absolute),
            top: Some(top),
            right: Some(right),
            ..Default::default()
        }
    }

    /// Whether no property is set
    pub fn is_empty(&self) -> bool {
        self == &StyleProps::default()
    }
}

/// Padding values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Individual spacing per side
    Individual {
        /// Top spacing
        top: f32,
        /// Right spacing
        right: f32,
        /// Bottom spacing
        bottom: f32,
        /// Left spacing
        left: f32,
    },
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create individual spacing
    pub fn individual(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Spacing::Individual {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Positioning scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Laid out in flow
    #[default]
    Relative,
    /// Taken out of flow, placed by offsets
    Absolute,
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Row (horizontal)
    Row,
    /// Column (vertical)
    #[default]
    Column,
}

// =============================================================================
// Text Component
// =============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned (default)
    #[default]
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
}

/// Font family selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Platform default font
    #[default]
    System,
    /// Fixed-width font for code
    Monospace,
}

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// Text content
    pub content: String,
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (100-900)
    pub font_weight: u16,
    /// Font family
    #[serde(default)]
    pub font_family: FontFamily,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Text alignment
    #[serde(default)]
    pub align: TextAlign,
    /// Additional style props
    #[serde(default, skip_serializing_if = "StyleProps::is_empty")]
    pub style: StyleProps,
}

impl Text {
    /// Create new text at the body size
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: font_size::SM,
            font_weight: font_weight::REGULAR,
            font_family: FontFamily::System,
            color: None,
            align: TextAlign::Left,
            style: StyleProps::default(),
        }
    }

    /// Create a heading
    pub fn heading(content: impl Into<String>, size: f32) -> Self {
        Self {
            font_size: size,
            font_weight: font_weight::BOLD,
            ..Self::new(content)
        }
    }

    /// Create monospace code text
    pub fn code(content: impl Into<String>) -> Self {
        Self {
            font_family: FontFamily::Monospace,
            ..Self::new(content)
        }
    }

    /// Set font size
    pub fn with_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set font weight
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set text alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

// =============================================================================
// Container Component
// =============================================================================

/// Container/View component for layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Flex direction
    #[serde(default)]
    pub direction: FlexDirection,
    /// Justify content (main axis alignment)
    #[serde(default)]
    pub justify: JustifyContent,
    /// Align items (cross axis alignment)
    #[serde(default)]
    pub align: Alignment,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Style props
    #[serde(default, skip_serializing_if = "StyleProps::is_empty")]
    pub style: StyleProps,
}

impl Container {
    /// Create a new container
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row container
    pub fn row() -> Self {
        Self {
            direction: FlexDirection::Row,
            ..Default::default()
        }
    }

    /// Create a column container
    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    /// Set align items
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.style.padding = Some(padding);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    /// Set border radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.style.border_radius = Some(radius);
        self
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name (from icon set)
    pub name: String,
    /// Glyph size in pixels
    pub size: f32,
    /// Icon color
    pub color: Color,
}

impl Icon {
    /// Create a new icon
    pub fn new(name: impl Into<String>, size: f32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_merge_overrides_win() {
        let base = StyleProps {
            padding: Some(Spacing::uniform(10.0)),
            border_radius: Some(20.0),
            background_color: Some("#000000".to_string()),
            ..Default::default()
        };
        let overrides = StyleProps {
            border_radius: Some(4.0),
            opacity: Some(0.5),
            ..Default::default()
        };

        let merged = base.merged(&overrides);
        assert_eq!(merged.padding, Some(Spacing::uniform(10.0)));
        assert_eq!(merged.border_radius, Some(4.0));
        assert_eq!(merged.opacity, Some(0.5));
        assert_eq!(merged.background_color.as_deref(), Some("#000000"));
    }

    #[test]
    fn test_style_merge_with_empty_is_identity() {
        let base = StyleProps::absolute(20.0, 20.0);
        assert_eq!(base.merged(&StyleProps::default()), base);
        assert_eq!(StyleProps::default().merged(&base), base);
    }

    #[test]
    fn test_style_is_empty() {
        assert!(StyleProps::default().is_empty());
        assert!(!StyleProps::absolute(0.0, 0.0).is_empty());
    }

    #[test]
    fn test_style_serialization_skips_unset() {
        let json = serde_json::to_value(StyleProps::absolute(20.0, 10.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "position": "absolute", "top": 20.0, "right": 10.0 })
        );
    }

    #[test]
    fn test_spacing_constructors() {
        assert_eq!(Spacing::default(), Spacing::Uniform(0.0));
        assert_eq!(
            Spacing::individual(60.0, 20.0, 40.0, 20.0),
            Spacing::Individual {
                top: 60.0,
                right: 20.0,
                bottom: 40.0,
                left: 20.0
            }
        );
        let json = serde_json::to_string(&Spacing::uniform(12.0)).unwrap();
        assert_eq!(json, "12.0");
    }

    #[test]
    fn test_text_builders() {
        let text = Text::heading("Title", font_size::DISPLAY).with_color("white");
        assert_eq!(text.font_weight, font_weight::BOLD);
        assert_eq!(text.font_size, 32.0);
        assert_eq!(text.color.as_deref(), Some("white"));

        let code = Text::code("<ThemeToggle />");
        assert_eq!(code.font_family, FontFamily::Monospace);
        assert_eq!(code.font_size, font_size::SM);
    }

    #[test]
    fn test_container_builders() {
        let row = Container::row()
            .with_align(Alignment::Center)
            .with_gap(20.0)
            .with_background("#ffffff")
            .with_radius(20.0);
        assert_eq!(row.direction, FlexDirection::Row);
        assert_eq!(row.gap, Some(20.0));
        assert_eq!(row.style.background_color.as_deref(), Some("#ffffff"));
        assert_eq!(row.style.border_radius, Some(20.0));
        assert_eq!(Container::new().direction, FlexDirection::Column);
    }

    #[test]
    fn test_icon_new() {
        let icon = Icon::new("dark-mode", 28.0, "white");
        assert_eq!(icon.name, "dark-mode");
        assert_eq!(icon.size, 28.0);
        assert_eq!(icon.color, "white");
    }
}

//! Theme toggle control
//!
//! A pressable control showing the action it offers: while the dark theme is
//! active it shows the `light-mode` (sun) icon, and while light is active it
//! shows `dark-mode` (moon).
//!
//! The control does not own store mutation. Whoever composes it wires
//! `on_toggle`, typically to [`ThemeContext::toggle_handler`].
//!
//! ```rust
//! use app_ui::provider::ThemeStore;
//! use app_ui::theme::ThemeName;
//! use app_ui::theme_toggle::{ThemeToggle, ThemeToggleSize, ToggleIcon};
//!
//! let store = ThemeStore::new(ThemeName::Light);
//! let scope = store.scope();
//! let toggle = ThemeToggle::new()
//!     .with_size(ThemeToggleSize::Large)
//!     .on_toggle(scope.use_theme().unwrap().toggle_handler());
//!
//! assert_eq!(toggle.render(&scope).icon_kind, ToggleIcon::DarkMode);
//! toggle.press();
//! assert_eq!(toggle.render(&scope).icon_kind, ToggleIcon::LightMode);
//! ```
//!
//! [`ThemeContext::toggle_handler`]: crate::provider::ThemeContext::toggle_handler

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::components::{Alignment, Icon, JustifyContent, Spacing, StyleProps};
use crate::provider::{ThemeScope, ToggleCallback};
use crate::theme::{Color, ThemeName};
use crate::tokens::{opacity, OVERLAY_WHITE};

/// Glyph color; the control always sits on a brand-colored surface
pub const ICON_COLOR: &str = "white";

// =============================================================================
// Size
// =============================================================================

/// Size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeToggleSize {
    /// Compact (20px icon)
    Small,
    /// Standard (28px icon)
    #[default]
    Default,
    /// Prominent (36px icon)
    Large,
}

/// Fixed dimensions for a size variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSizeConfig {
    /// Icon glyph size
    pub icon_size: f32,
    /// Uniform padding around the icon
    pub padding: f32,
    /// Corner radius
    pub border_radius: f32,
}

impl ThemeToggleSize {
    /// All sizes, smallest first
    pub const ALL: [ThemeToggleSize; 3] = [
        ThemeToggleSize::Small,
        ThemeToggleSize::Default,
        ThemeToggleSize::Large,
    ];

    /// Dimensions for this size
    pub fn config(&self) -> ToggleSizeConfig {
        match self {
            ThemeToggleSize::Small => ToggleSizeConfig {
                icon_size: 20.0,
                padding: 8.0,
                border_radius: 16.0,
            },
            ThemeToggleSize::Default => ToggleSizeConfig {
                icon_size: 28.0,
                padding: 10.0,
                border_radius: 20.0,
            },
            ThemeToggleSize::Large => ToggleSizeConfig {
                icon_size: 36.0,
                padding: 12.0,
                border_radius: 24.0,
            },
        }
    }
}

// =============================================================================
// Icon
// =============================================================================

/// Icon shown by the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleIcon {
    /// Sun: "switch to light"
    LightMode,
    /// Moon: "switch to dark"
    DarkMode,
}

impl ToggleIcon {
    /// Icon offered while `theme` is active
    pub fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Dark => ToggleIcon::LightMode,
            ThemeName::Light => ToggleIcon::DarkMode,
        }
    }

    /// Name in the icon set
    pub fn name(&self) -> &'static str {
        match self {
            ToggleIcon::LightMode => "light-mode",
            ToggleIcon::DarkMode => "dark-mode",
        }
    }
}

// =============================================================================
// Control
// =============================================================================

/// Theme toggle component properties
#[derive(Clone, Default)]
pub struct ThemeToggle {
    size: ThemeToggleSize,
    theme: Option<ThemeName>,
    style: StyleProps,
    on_toggle: Option<ToggleCallback>,
}

impl std::fmt::Debug for ThemeToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeToggle")
            .field("size", &self.size)
            .field("theme", &self.theme)
            .field("style", &self.style)
            .field("on_toggle", &self.on_toggle.is_some())
            .finish()
    }
}

impl ThemeToggle {
    /// Create a default-sized toggle following the ambient theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size variant
    pub fn with_size(mut self, size: ThemeToggleSize) -> Self {
        self.size = size;
        self
    }

    /// Render for `theme` regardless of the ambient store
    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Extra style applied over the built-in style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Callback invoked on activation
    pub fn on_toggle(mut self, callback: ToggleCallback) -> Self {
        self.on_toggle = Some(callback);
        self
    }

    /// Callback from a closure
    pub fn on_toggle_fn<F>(self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_toggle(Arc::new(callback))
    }

    /// Size variant
    pub fn size(&self) -> ThemeToggleSize {
        self.size
    }

    /// Explicit theme override, if any
    pub fn theme_override(&self) -> Option<ThemeName> {
        self.theme
    }

    /// Whether an activation callback is wired
    pub fn has_callback(&self) -> bool {
        self.on_toggle.is_some()
    }

    /// Theme driving the icon: the override if set, else the scope's theme
    ///
    /// A detached scope without an override renders as light.
    pub fn effective_theme(&self, scope: &ThemeScope) -> ThemeName {
        self.theme
            .or_else(|| scope.current_theme())
            .unwrap_or_default()
    }

    /// Produce the view for the current state
    pub fn render(&self, scope: &ThemeScope) -> ThemeToggleView {
        let config = self.size.config();
        let icon_kind = ToggleIcon::for_theme(self.effective_theme(scope));

        let base = StyleProps {
            padding: Some(Spacing::uniform(config.padding)),
            border_radius: Some(config.border_radius),
            background_color: Some(OVERLAY_WHITE.to_string()),
            ..Default::default()
        };

        ThemeToggleView {
            size: self.size,
            icon_kind,
            icon: Icon::new(icon_kind.name(), config.icon_size, ICON_COLOR),
            styles: ThemeToggleStyles {
                background: OVERLAY_WHITE.to_string(),
                padding: config.padding,
                border_radius: config.border_radius,
                active_opacity: opacity::PRESSED,
                align: Alignment::Center,
                justify: JustifyContent::Center,
            },
            style: base.merged(&self.style),
        }
    }

    /// Activate the control
    ///
    /// Calls `on_toggle` if one is wired. Returns whether a callback ran.
    pub fn press(&self) -> bool {
        match &self.on_toggle {
            Some(callback) => {
                tracing::trace!(size = ?self.size, "Theme toggle pressed");
                callback();
                true
            }
            None => {
                tracing::trace!(size = ?self.size, "Theme toggle pressed with no callback");
                false
            }
        }
    }
}

/// Rendered toggle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeToggleView {
    /// Size variant
    pub size: ThemeToggleSize,
    /// Which action icon is shown
    pub icon_kind: ToggleIcon,
    /// Icon props for the icon renderer
    pub icon: Icon,
    /// Computed styles from the size variant
    pub styles: ThemeToggleStyles,
    /// Final style bundle with caller overrides applied
    pub style: StyleProps,
}

/// Computed toggle styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeToggleStyles {
    /// Background color
    pub background: Color,
    /// Uniform padding
    pub padding: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Opacity while pressed
    pub active_opacity: f32,
    /// Cross-axis alignment of the icon
    pub align: Alignment,
    /// Main-axis alignment of the icon
    pub justify: JustifyContent,
}

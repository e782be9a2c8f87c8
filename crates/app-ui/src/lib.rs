//! User interface for the theme toggle demo
//!
//! This crate provides the theme palettes, the theme store that distributes
//! the active palette, the theme toggle control, and the showcase screen.
//!
//! # Themes
//!
//! Two themes are supported:
//! - [`theme::ThemeName::Light`] - slate on near-white, indigo brand
//! - [`theme::ThemeName::Dark`] - light slate on deep navy
//!
//! # Modules
//!
//! - [`theme`] - Theme names, palettes and gradients
//! - [`provider`] - Theme store, scopes and listener registration
//! - [`tokens`] - Design tokens (spacing, radius, type scale)
//! - [`components`] - Component primitives
//! - [`theme_toggle`] - The theme toggle control
//! - [`screens`] - The showcase screen
//!
//! # Example
//!
//! ```rust
//! use app_platform::FixedColorScheme;
//! use app_ui::{ThemeName, ThemeStore, ThemeToggleScreen};
//!
//! let store = ThemeStore::initialize(None, &FixedColorScheme::none());
//! let screen = ThemeToggleScreen::new().render(&store.scope()).unwrap();
//! assert_eq!(screen.theme, ThemeName::Light);
//!
//! screen.press_toggle(0);
//! assert_eq!(store.theme(), ThemeName::Dark);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod provider;
pub mod screens;
pub mod theme;
pub mod theme_toggle;
pub mod tokens;

// Re-export commonly used types
pub use theme::{
    palette_for, Color, Gradient, Palette, ThemeName, ThemeParseError, DARK_PALETTE,
    LIGHT_PALETTE,
};

pub use provider::{
    ListenerId, ThemeContext, ThemeError, ThemeScope, ThemeSnapshot, ThemeStore, ToggleCallback,
};

pub use theme_toggle::{ThemeToggle, ThemeToggleSize, ThemeToggleView, ToggleIcon};

pub use screens::{ScreenView, StatusBarStyle, ThemeToggleScreen};

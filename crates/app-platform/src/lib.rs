//! Platform integration for the theme toggle demo
//!
//! This crate answers one question for the rest of the workspace: does the
//! host prefer a light or a dark color scheme? The answer is optional and is
//! consulted only once, when the theme store is created.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color_scheme;

pub use color_scheme::{
    ColorScheme, ColorSchemeParseError, ColorSchemeSource, EnvColorScheme, FixedColorScheme,
    SystemColorScheme, DEFAULT_COLOR_SCHEME_VAR,
};

//! Theme toggle demo application
//!
//! Wires the platform color-scheme query, the theme store and the showcase
//! screen together, driven by a small JSON configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;

pub use app::{init_tracing, DemoApp};
pub use config::{ColorSchemeSourceKind, ConfigError, DemoConfig, CONFIG_PATH_VAR};

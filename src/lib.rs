//! AutoFilm library
//!
//! This library provides the configuration backbone for AutoFilm, a
//! tool that mirrors remote media libraries into local strm/metadata
//! files. It resolves the application's directory layout, reads the
//! YAML configuration document on demand, and exposes typed accessors
//! over its sections.

pub mod config;
pub mod logging;
pub mod version;

pub use config::{ConfigError, Settings};
pub use version::{APP_NAME, APP_TIMEZONE, APP_VERSION};

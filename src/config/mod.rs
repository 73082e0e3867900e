//! Configuration for AutoFilm.
//!
//! This module resolves the application's directory layout, reads the
//! YAML configuration document, and exposes typed accessors over its
//! top-level sections.

pub mod error;
pub mod settings;
pub mod types;

pub use error::ConfigError;
pub use settings::*;
pub use types::*;

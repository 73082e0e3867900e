//! Error types for directory setup and configuration reads.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while resolving the directory layout or reading the
/// configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file was read but is not valid YAML of the
    /// expected shape.
    #[error("failed to parse config file {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The location of the running executable could not be resolved, so
    /// no base directory exists to root the layout in.
    #[error("failed to locate the running executable: {0}")]
    NoBaseDir(#[source] io::Error),
}

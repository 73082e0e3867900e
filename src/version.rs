//! Application identity constants.
//!
//! Surfaced unchanged to collaborators that need them for banners, log
//! file naming, and user-facing output.

/// Application name.
pub const APP_NAME: &str = "Autofilm";

/// Application version, taken from the crate manifest at build time.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timezone the application reports timestamps in.
pub const APP_TIMEZONE: &str = "Asia/Shanghai";

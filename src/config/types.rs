//! Typed view of the AutoFilm configuration document.

use serde::Deserialize;
use serde_yaml::Mapping;

/// Top-level layout of `config/config.yaml`.
///
/// Every key is optional; absent keys resolve to the defaults applied
/// by the [`Settings`](super::Settings) accessors. Unrecognized keys
/// are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigDocument {
    /// General application switches.
    #[serde(rename = "Settings")]
    pub settings: Option<GeneralSettings>,

    /// Alist server definitions consumed by the strm generator.
    #[serde(rename = "Alist2StrmList")]
    pub alist2strm_list: Option<Vec<Mapping>>,

    /// Ani2Alist source definitions.
    #[serde(rename = "Ani2AlistList")]
    pub ani2alist_list: Option<Vec<Mapping>>,

    /// Library poster task definitions.
    #[serde(rename = "LibraryPosterList")]
    pub library_poster_list: Option<Vec<Mapping>>,
}

/// The `Settings` section of the document.
///
/// Fields stay `Option` so that "absent" is distinguishable from an
/// explicit `false` or `0`; defaulting happens in the accessors.
#[derive(Debug, Default, Deserialize)]
pub struct GeneralSettings {
    /// Developer mode switch.
    #[serde(rename = "DEV")]
    pub dev: Option<bool>,

    /// Wait between rate-limited retries, in milliseconds.
    pub rate_limit_retry_wait: Option<f64>,
}

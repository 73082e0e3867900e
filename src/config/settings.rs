//! Directory layout resolution and configuration accessors.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde_yaml::Mapping;

use super::{error::ConfigError, types::ConfigDocument};

/// Directory under the base dir holding the configuration file.
const CONFIG_DIR_NAME: &str = "config";

/// Directory under the base dir holding log files.
const LOG_DIR_NAME: &str = "logs";

/// File name of the configuration document.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file used in debug mode.
const DEV_LOG_FILE: &str = "dev.log";

/// Log file used in production mode.
const PROD_LOG_FILE: &str = "AutoFilm.log";

/// Default wait between rate-limited retries, in milliseconds.
const DEFAULT_RATE_LIMIT_RETRY_WAIT_MS: f64 = 500.0;

/// Resolved directory layout and configuration accessors.
///
/// Construct exactly one `Settings` during process startup and hand it
/// (or a reference) to every collaborator that needs configuration.
/// The debug switch is read once at construction and fixed for the
/// instance's lifetime; every list and timing accessor re-reads the
/// file on each call so that callers always see the latest on-disk
/// content.
///
/// All operations are synchronous. The struct is immutable after
/// construction, so shared references can be read from any number of
/// threads; each accessor call owns its whole open/parse cycle.
#[derive(Debug, Clone)]
pub struct Settings {
    base_dir: PathBuf,
    debug: bool,
}

impl Settings {
    /// Creates the settings for the installed application.
    ///
    /// The base directory is the directory containing the running
    /// executable. `config/` and `logs/` are created under it if
    /// missing, then the configuration file is read once to fix the
    /// debug switch.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable location cannot be resolved,
    /// a required directory cannot be created, or the configuration
    /// file is missing or not valid YAML. Construction failure leaves
    /// no usable instance; the application should not start without
    /// one. Directories created before the failure are not removed.
    pub fn new() -> Result<Self, ConfigError> {
        let exe = env::current_exe().map_err(ConfigError::NoBaseDir)?;
        let base_dir = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            ConfigError::NoBaseDir(io::Error::new(
                io::ErrorKind::NotFound,
                "executable has no parent directory",
            ))
        })?;
        Self::from_base_dir(base_dir)
    }

    /// Creates the settings rooted at an explicit base directory.
    ///
    /// Same side effects and failure modes as [`Settings::new`], minus
    /// the executable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a required directory cannot be created or
    /// the configuration file is missing or not valid YAML.
    pub fn from_base_dir(base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut settings = Self {
            base_dir: base_dir.into(),
            debug: false,
        };
        settings.create_dirs()?;
        settings.debug = settings.load_debug_mode()?;
        Ok(settings)
    }

    /// Base directory of the installation.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the configuration file.
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.join(CONFIG_DIR_NAME)
    }

    /// Directory holding log files.
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join(LOG_DIR_NAME)
    }

    /// Path of the configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE_NAME)
    }

    /// Path of the active log file, chosen by the debug switch fixed
    /// at construction. Editing the file afterwards does not move the
    /// log.
    pub fn log_file(&self) -> PathBuf {
        let name = if self.debug { DEV_LOG_FILE } else { PROD_LOG_FILE };
        self.log_dir().join(name)
    }

    /// Whether the application runs in debug mode.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Alist server definitions from `Alist2StrmList`, in document
    /// order.
    ///
    /// Re-reads the configuration file on every call. Entries are
    /// passed through uninterpreted; validating their shape is the
    /// consumer's job. A missing or empty key yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or
    /// parsed at call time.
    pub fn alist_server_list(&self) -> Result<Vec<Mapping>, ConfigError> {
        Ok(self.read_document()?.alist2strm_list.unwrap_or_default())
    }

    /// Ani2Alist source definitions from `Ani2AlistList`.
    ///
    /// Same contract as [`Settings::alist_server_list`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or
    /// parsed at call time.
    pub fn ani2alist_list(&self) -> Result<Vec<Mapping>, ConfigError> {
        Ok(self.read_document()?.ani2alist_list.unwrap_or_default())
    }

    /// Library poster task definitions from `LibraryPosterList`.
    ///
    /// Same contract as [`Settings::alist_server_list`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or
    /// parsed at call time.
    pub fn library_poster_list(&self) -> Result<Vec<Mapping>, ConfigError> {
        Ok(self.read_document()?.library_poster_list.unwrap_or_default())
    }

    /// Wait between rate-limited retries.
    ///
    /// Stored in the document as milliseconds under
    /// `Settings.rate_limit_retry_wait`; a missing section or field
    /// yields 500 ms, while an explicit `0` stays zero. Re-reads the
    /// file on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or
    /// parsed at call time.
    pub fn rate_limit_retry_wait(&self) -> Result<Duration, ConfigError> {
        let wait_ms = self
            .read_document()?
            .settings
            .and_then(|s| s.rate_limit_retry_wait)
            .unwrap_or(DEFAULT_RATE_LIMIT_RETRY_WAIT_MS);
        Ok(Duration::from_secs_f64(wait_ms / 1000.0))
    }

    /// Creates `config/` and `logs/`, parents included. Must run
    /// before the first read of the configuration file. Safe to race
    /// with other processes creating the same directories.
    fn create_dirs(&self) -> Result<(), ConfigError> {
        for dir in [self.config_dir(), self.log_dir()] {
            fs::create_dir_all(&dir)
                .map_err(|source| ConfigError::CreateDir { path: dir, source })?;
        }
        Ok(())
    }

    fn load_debug_mode(&self) -> Result<bool, ConfigError> {
        Ok(self
            .read_document()?
            .settings
            .and_then(|s| s.dev)
            .unwrap_or(false))
    }

    /// Opens and parses the whole document. An empty file parses as a
    /// document with every key absent.
    fn read_document(&self) -> Result<ConfigDocument, ConfigError> {
        let path = self.config_file();
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable {
            path: path.clone(),
            source,
        })?;
        let doc: Option<ConfigDocument> =
            serde_yaml::from_str(&text).map_err(|source| ConfigError::Invalid { path, source })?;
        Ok(doc.unwrap_or_default())
    }
}

//! Layered settings: command-line flags and environment, then the config
//! file, then built-in defaults.
//!
//! # Example TOML
//!
//! ```toml
//! litra_path = "~/.cargo/bin/litra"
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use super::path::{expand_home, resolve_path};
use crate::error::{GlowError, Result};

/// Executable name searched on `PATH` when no path is configured.
pub const LITRA_BINARY: &str = "litra";

/// Fallback location when `litra` is not on `PATH` (Homebrew on Apple silicon).
pub const DEFAULT_LITRA_PATH: &str = "/opt/homebrew/bin/litra";

/// Default subprocess timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of the on-disk config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Path to the litra executable.
    #[serde(default)]
    pub litra_path: Option<PathBuf>,

    /// Seconds to wait for the tool; 0 waits forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SettingsFile {
    /// Parse a config file body.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| GlowError::ConfigParse(e.to_string()))
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        trace!(path = %path.display(), "Reading config file");
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GlowError::ConfigNotFound {
                    path: path.display().to_string(),
                }
            } else {
                GlowError::Io(e)
            }
        })?;
        Self::parse(&contents)
    }
}

/// Values supplied on the command line (or through their environment variables).
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config_file: Option<PathBuf>,
    pub litra_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Where the effective litra path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSource {
    CommandLine,
    ConfigFile,
    SearchPath,
    Default,
}

/// Fully resolved settings handed to the command delegator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub litra_path: PathBuf,
    pub litra_path_source: PathSource,
    pub timeout_secs: u64,
    /// Config file that was read, if any.
    pub config_file: Option<PathBuf>,
}

impl Settings {
    /// Settings pointing at an explicit executable with the default timeout.
    #[must_use]
    pub fn with_litra_path(path: impl Into<PathBuf>) -> Self {
        Self {
            litra_path: path.into(),
            litra_path_source: PathSource::CommandLine,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            config_file: None,
        }
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Subprocess timeout, or `None` to wait indefinitely.
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Resolve settings from overrides, the config file and defaults.
    ///
    /// An explicitly named config file must exist; the default location is
    /// optional.
    #[instrument(skip(overrides))]
    pub fn load(overrides: &SettingsOverrides) -> Result<Self> {
        let (file, config_file) = match &overrides.config_file {
            Some(path) => {
                let path = expand_home(path)?.unwrap_or_else(|| path.clone());
                (SettingsFile::load(&path)?, Some(path))
            }
            None => match default_config_path() {
                Some(path) if path.is_file() => (SettingsFile::load(&path)?, Some(path)),
                _ => (SettingsFile::default(), None),
            },
        };
        let settings = Self::merge(overrides, file, config_file)?;
        info!(
            litra_path = %settings.litra_path.display(),
            source = ?settings.litra_path_source,
            timeout_secs = settings.timeout_secs,
            "Settings resolved"
        );
        Ok(settings)
    }

    /// Merge already-loaded file contents with overrides.
    pub fn merge(
        overrides: &SettingsOverrides,
        file: SettingsFile,
        config_file: Option<PathBuf>,
    ) -> Result<Self> {
        let (litra_path, litra_path_source) = if let Some(path) = &overrides.litra_path {
            let path = expand_home(path)?.unwrap_or_else(|| path.clone());
            (path, PathSource::CommandLine)
        } else if let Some(path) = file.litra_path {
            let base = config_file
                .as_deref()
                .and_then(Path::parent)
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            (resolve_path(&path, &base)?, PathSource::ConfigFile)
        } else if let Ok(found) = which::which(LITRA_BINARY) {
            debug!(path = %found.display(), "Found litra on PATH");
            (found, PathSource::SearchPath)
        } else {
            (PathBuf::from(DEFAULT_LITRA_PATH), PathSource::Default)
        };

        let timeout_secs = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            litra_path,
            litra_path_source,
            timeout_secs,
            config_file,
        })
    }
}

/// Default config file location: `<config_dir>/glowctl/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("glowctl").join("config.toml"))
}

//! Environment variable helpers for tests.
#![allow(dead_code)]

use env_lock::{EnvGuard as LockedEnvGuard, lock_env};
use tracing::{instrument, trace};

/// RAII guard to restore environment variables on drop.
///
/// Holds the process-wide env lock, so tests touching the environment run
/// one at a time.
pub struct EnvGuard<'a> {
    _guard: LockedEnvGuard<'a>,
}

impl<'a> EnvGuard<'a> {
    #[must_use]
    #[instrument]
    pub fn set(key: &'a str, value: &str) -> Self {
        trace!(key, value, "Setting env var");
        let guard = lock_env([(key, Some(value))]);
        Self { _guard: guard }
    }

    #[must_use]
    #[instrument]
    pub fn remove(key: &'a str) -> Self {
        trace!(key, "Removing env var");
        let guard = lock_env([(key, None::<&str>)]);
        Self { _guard: guard }
    }

    /// Set `PATH` and `XDG_CONFIG_HOME` together under one lock.
    #[must_use]
    pub fn search_path_and_config_home(path: &str, config_home: &str) -> Self {
        trace!(path, config_home, "Isolating PATH and config home");
        let guard = lock_env([("PATH", Some(path)), ("XDG_CONFIG_HOME", Some(config_home))]);
        Self { _guard: guard }
    }
}

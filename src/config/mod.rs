//! Configuration for glowctl.
//!
//! The only device-facing setting is the location of the `litra`
//! executable; it is resolved once at startup and passed explicitly to the
//! command delegator.

mod path;
mod settings;

pub use path::{expand_home, home_dir, is_executable, resolve_path, validate_executable};
pub use settings::{
    DEFAULT_LITRA_PATH, DEFAULT_TIMEOUT_SECS, LITRA_BINARY, PathSource, Settings, SettingsFile,
    SettingsOverrides, default_config_path,
};

//! Settings precedence against a controlled PATH and config directory.

use std::fs;
use std::path::PathBuf;

use glowctl::config::{DEFAULT_LITRA_PATH, PathSource, Settings, SettingsOverrides};
use glowctl::error::GlowError;
use tempfile::TempDir;

use crate::common::env::EnvGuard;
use crate::common::fixtures::{FakeLitra, settings_file};

fn dir_str(dir: &TempDir) -> &str {
    dir.path().to_str().expect("temp path is UTF-8")
}

/// Write `<config_home>/glowctl/config.toml`.
fn default_config(config_home: &TempDir, contents: &str) -> PathBuf {
    let dir = config_home.path().join("glowctl");
    fs::create_dir_all(&dir).expect("create config dir");
    settings_file(&dir, contents)
}

#[test]
fn litra_on_search_path_is_preferred_over_fallback() {
    let fake = FakeLitra::connected();
    let config_home = TempDir::new().unwrap();
    let search = fake.dir.path().to_str().unwrap().to_string();
    let _env = EnvGuard::search_path_and_config_home(&search, dir_str(&config_home));

    let settings = Settings::load(&SettingsOverrides::default()).unwrap();

    assert_eq!(settings.litra_path, fake.path);
    assert_eq!(settings.litra_path_source, PathSource::SearchPath);
    assert_eq!(settings.timeout_secs, 30);
    assert!(settings.config_file.is_none());
}

#[test]
fn unrunnable_litra_on_search_path_is_skipped() {
    let blocked = FakeLitra::connected();
    blocked.strip_execute();
    let usable = FakeLitra::connected();
    let config_home = TempDir::new().unwrap();
    let search = format!("{}:{}", dir_str(&blocked.dir), dir_str(&usable.dir));
    let _env = EnvGuard::search_path_and_config_home(&search, dir_str(&config_home));

    let settings = Settings::load(&SettingsOverrides::default()).unwrap();

    assert_eq!(settings.litra_path, usable.path);
    assert_eq!(settings.litra_path_source, PathSource::SearchPath);
}

#[test]
fn only_unrunnable_litra_on_search_path_falls_back() {
    let blocked = FakeLitra::connected();
    blocked.strip_execute();
    let config_home = TempDir::new().unwrap();
    let _env = EnvGuard::search_path_and_config_home(dir_str(&blocked.dir), dir_str(&config_home));

    let settings = Settings::load(&SettingsOverrides::default()).unwrap();

    assert_eq!(settings.litra_path, PathBuf::from(DEFAULT_LITRA_PATH));
    assert_eq!(settings.litra_path_source, PathSource::Default);
}

#[test]
fn fallback_path_when_nothing_else_is_known() {
    let empty = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();
    let _env = EnvGuard::search_path_and_config_home(dir_str(&empty), dir_str(&config_home));

    let settings = Settings::load(&SettingsOverrides::default()).unwrap();

    assert_eq!(settings.litra_path, PathBuf::from(DEFAULT_LITRA_PATH));
    assert_eq!(settings.litra_path_source, PathSource::Default);
}

#[test]
fn default_config_file_is_read() {
    let empty = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();
    let file = default_config(
        &config_home,
        "litra_path = \"/usr/local/bin/litra\"\ntimeout_secs = 7\n",
    );
    let _env = EnvGuard::search_path_and_config_home(dir_str(&empty), dir_str(&config_home));

    let settings = Settings::load(&SettingsOverrides::default()).unwrap();

    assert_eq!(settings.litra_path, PathBuf::from("/usr/local/bin/litra"));
    assert_eq!(settings.litra_path_source, PathSource::ConfigFile);
    assert_eq!(settings.timeout_secs, 7);
    assert_eq!(settings.config_file, Some(file));
}

#[test]
fn relative_path_in_config_resolves_against_its_directory() {
    let empty = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();
    default_config(&config_home, "litra_path = \"bin/litra\"\n");
    let _env = EnvGuard::search_path_and_config_home(dir_str(&empty), dir_str(&config_home));

    let settings = Settings::load(&SettingsOverrides::default()).unwrap();

    assert_eq!(
        settings.litra_path,
        config_home.path().join("glowctl").join("bin").join("litra")
    );
}

#[test]
fn command_line_beats_config_file() {
    let empty = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();
    default_config(
        &config_home,
        "litra_path = \"/usr/local/bin/litra\"\ntimeout_secs = 7\n",
    );
    let _env = EnvGuard::search_path_and_config_home(dir_str(&empty), dir_str(&config_home));

    let overrides = SettingsOverrides {
        config_file: None,
        litra_path: Some(PathBuf::from("/custom/litra")),
        timeout_secs: Some(0),
    };
    let settings = Settings::load(&overrides).unwrap();

    assert_eq!(settings.litra_path, PathBuf::from("/custom/litra"));
    assert_eq!(settings.litra_path_source, PathSource::CommandLine);
    assert_eq!(settings.timeout(), None);
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    let overrides = SettingsOverrides {
        config_file: Some(dir.path().join("missing.toml")),
        ..SettingsOverrides::default()
    };

    let err = Settings::load(&overrides).unwrap_err();
    assert!(matches!(err, GlowError::ConfigNotFound { .. }), "{err}");
}

#[test]
fn malformed_default_config_is_an_error() {
    let empty = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();
    default_config(&config_home, "litra = \"typo\"\n");
    let _env = EnvGuard::search_path_and_config_home(dir_str(&empty), dir_str(&config_home));

    let err = Settings::load(&SettingsOverrides::default()).unwrap_err();
    assert!(matches!(err, GlowError::ConfigParse(_)), "{err}");
}

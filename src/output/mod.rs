//! Output mode abstraction for robot and human output.

use std::path::Path;

use serde::Serialize;

use crate::cli::Cli;
use crate::config::Settings;
use crate::device::DeviceStatus;
use crate::error::GlowError;
use crate::notify::{ActionOutcome, Notification};
use crate::presets::{Preset, PresetKind};

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

/// Heading of the status view when no light could be read.
pub const STATUS_FAILURE_TITLE: &str = "Failed to get device status";

/// Steps shown whenever the status view cannot reach a light.
pub const TROUBLESHOOTING_STEPS: [&str; 3] = [
    "Make sure your Litra Glow is connected via USB",
    "Check that the Litra CLI is installed at the configured path",
    "Try unplugging and reconnecting the device",
];

/// One row of a preset picker.
#[derive(Debug, Clone, Serialize)]
pub struct PresetRow {
    pub value: i64,
    pub label: &'static str,
    pub title: String,
    pub current: bool,
}

impl PresetRow {
    /// Build the rows for a picker, marking the entry equal to `current`.
    #[must_use]
    pub fn rows(kind: PresetKind, current: Option<i64>) -> Vec<Self> {
        kind.presets()
            .iter()
            .map(|preset: &Preset| Self {
                value: preset.value,
                label: preset.label,
                title: kind.title(preset),
                current: current == Some(preset.value),
            })
            .collect()
    }
}

/// Build metadata shown by `version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_sha: Option<&'static str>,
    pub git_dirty: bool,
    pub build_timestamp: Option<&'static str>,
    pub rustc_version: Option<&'static str>,
    pub target: Option<&'static str>,
}

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    /// JSON output for AI agents and scripting.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human { quiet: bool },
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human { quiet: cli.quiet }
        }
    }

    /// Returns true if output should be JSON.
    #[must_use]
    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    /// Convert into the appropriate Output implementation.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human { quiet } => Box::new(HumanOutput::new(quiet)),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    // Notifications
    /// Result of toggle / set-brightness / set-temperature.
    fn action_outcome(&self, outcome: &ActionOutcome);
    /// A standalone notification (e.g. status lookup failed).
    fn notification(&self, notification: &Notification);
    fn error(&self, error: &GlowError);

    // Status view
    fn device_status(&self, status: &DeviceStatus);
    /// The status view's fallback when no light could be read.
    fn troubleshooting(&self, message: &str);
    fn connection(&self, connected: bool);

    // Pickers
    fn presets(&self, kind: PresetKind, current: Option<i64>);

    // Configuration
    fn settings(&self, settings: &Settings, executable: bool);
    fn config_path(&self, path: Option<&Path>);

    // Metadata
    fn version_info(&self, info: &VersionInfo);
}

//! Command delegation to the external `litra` CLI.
//!
//! [`LitraCli`] is the only component that touches the light. It validates
//! the configured executable, invokes it with a discrete argument vector,
//! classifies failures and decodes status output. Process execution goes
//! through the [`CommandRunner`] trait so tests can script the tool.

pub mod mock;
mod runner;
mod status;

pub use runner::{CommandRunner, ProcessRunner, RawOutput};
pub use status::{DEFAULT_DEVICE_NAME, DeviceStatus, brightness_percentage, parse_devices_json};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::{Settings, validate_executable};
use crate::error::{GlowError, Result};
use crate::notify::ActionOutcome;

/// Device family passed to every mutating subcommand.
pub const DEVICE_TYPE: &str = "glow";

/// Captured output of a successful tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// `devices --json`
pub fn devices_args() -> Vec<String> {
    vec!["devices".to_string(), "--json".to_string()]
}

/// `toggle --device-type glow`
pub fn toggle_args() -> Vec<String> {
    vec![
        "toggle".to_string(),
        "--device-type".to_string(),
        DEVICE_TYPE.to_string(),
    ]
}

/// `brightness --device-type glow --percentage <pct>`
pub fn brightness_args(percentage: i64) -> Vec<String> {
    vec![
        "brightness".to_string(),
        "--device-type".to_string(),
        DEVICE_TYPE.to_string(),
        "--percentage".to_string(),
        percentage.to_string(),
    ]
}

/// `temperature --device-type glow --value <kelvin>`
pub fn temperature_args(kelvin: i64) -> Vec<String> {
    vec![
        "temperature".to_string(),
        "--device-type".to_string(),
        DEVICE_TYPE.to_string(),
        "--value".to_string(),
        kelvin.to_string(),
    ]
}

/// True if tool output signals that no light is attached.
pub fn mentions_no_device(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("no devices") || lower.contains("no device found")
}

/// Turn a non-zero exit into a typed error.
pub fn classify_failure(raw: &RawOutput) -> GlowError {
    if mentions_no_device(&raw.stderr) || mentions_no_device(&raw.stdout) {
        return GlowError::NoDeviceFound;
    }

    let stderr = raw.stderr.trim();
    let stdout = raw.stdout.trim();
    let message = if !stderr.is_empty() {
        stderr.to_string()
    } else if !stdout.is_empty() {
        stdout.to_string()
    } else {
        match raw.exit_code {
            Some(code) => format!("Litra CLI exited with status {code}"),
            None => "Litra CLI was terminated by a signal".to_string(),
        }
    };
    GlowError::Execution(message)
}

/// Delegates every light operation to the litra executable.
///
/// Holds its configuration explicitly; nothing is read from global state.
#[derive(Debug)]
pub struct LitraCli<R = ProcessRunner> {
    settings: Settings,
    runner: R,
}

impl LitraCli<ProcessRunner> {
    /// Delegator that spawns real processes.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_runner(settings, ProcessRunner)
    }
}

impl<R: CommandRunner> LitraCli<R> {
    #[must_use]
    pub fn with_runner(settings: Settings, runner: R) -> Self {
        Self { settings, runner }
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Confirm the configured executable exists and may be executed.
    pub fn validate_path(&self) -> Result<()> {
        validate_executable(&self.settings.litra_path)
    }

    /// Run the tool with exactly `args`.
    ///
    /// The path is validated first, so an invalid path never spawns a process.
    #[instrument(skip(self), fields(tool = %self.settings.litra_path.display()))]
    pub async fn run(&self, args: &[String]) -> Result<CommandResult> {
        self.validate_path()?;

        let raw = self
            .runner
            .execute(&self.settings.litra_path, args, self.settings.timeout())
            .await?;

        if raw.is_success() {
            debug!("Litra command succeeded");
            Ok(CommandResult {
                success: true,
                stdout: raw.stdout,
                stderr: raw.stderr,
            })
        } else {
            let error = classify_failure(&raw);
            warn!(exit_code = ?raw.exit_code, error = %error, "Litra command failed");
            Err(error)
        }
    }

    /// Current status of the first attached light.
    ///
    /// Every failure, including a missing tool or unparseable output, yields
    /// `None` so callers can show a "no device" view.
    #[instrument(skip(self))]
    pub async fn query_status(&self) -> Option<DeviceStatus> {
        let result = match self.run(&devices_args()).await {
            Ok(result) => result,
            Err(e) => {
                debug!(error = %e, "Status query failed");
                return None;
            }
        };

        match parse_devices_json(&result.stdout) {
            Ok(status) => {
                debug!(found = status.is_some(), "Status decoded");
                status
            }
            Err(e) => {
                debug!(error = %e, "Status output not understood");
                None
            }
        }
    }

    /// True if a light answers a status query.
    pub async fn is_connected(&self) -> bool {
        self.query_status().await.is_some()
    }

    /// Toggle the light on or off.
    pub async fn toggle(&self) -> ActionOutcome {
        self.run_action(&toggle_args(), "Light toggled", None).await
    }

    /// Set brightness in percent. The value is passed through unchecked.
    pub async fn set_brightness(&self, percentage: i64) -> ActionOutcome {
        self.run_action(
            &brightness_args(percentage),
            "Brightness set",
            Some(format!("{percentage}%")),
        )
        .await
    }

    /// Set color temperature in Kelvin. The value is passed through unchecked.
    pub async fn set_temperature(&self, kelvin: i64) -> ActionOutcome {
        self.run_action(
            &temperature_args(kelvin),
            "Temperature set",
            Some(format!("{kelvin}K")),
        )
        .await
    }

    async fn run_action(
        &self,
        args: &[String],
        title: &str,
        message: Option<String>,
    ) -> ActionOutcome {
        match self.run(args).await {
            Ok(_) => {
                info!(action = ?args.first(), "Action succeeded");
                ActionOutcome::succeeded(title, message)
            }
            Err(e) => ActionOutcome::failed(&e),
        }
    }
}

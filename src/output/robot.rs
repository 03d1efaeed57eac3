//! Robot mode JSON output implementation.

use std::path::Path;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, instrument, trace, warn};

use crate::config::Settings;
use crate::device::DeviceStatus;
use crate::error::GlowError;
use crate::notify::{ActionOutcome, Notification};
use crate::presets::PresetKind;

use super::{Output, PresetRow, RobotFormat, TROUBLESHOOTING_STEPS, VersionInfo};

/// JSON output implementation for AI agents and scripting.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    /// Serialize according to the configured format.
    fn to_json<T: Serialize + ?Sized>(&self, data: &T) -> Option<String> {
        let result = match self.format {
            RobotFormat::Json => {
                trace!("Serializing as pretty JSON");
                serde_json::to_string_pretty(data)
            }
            RobotFormat::JsonCompact => {
                trace!("Serializing as compact JSON");
                serde_json::to_string(data)
            }
        };
        match result {
            Ok(json) => {
                trace!(json_len = json.len(), "JSON serialized");
                Some(json)
            }
            Err(e) => {
                warn!(error = %e, "JSON serialization failed");
                None
            }
        }
    }

    /// Output any serializable data as JSON to stdout.
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        if let Some(json) = self.to_json(data) {
            println!("{json}");
        }
    }

    /// Output JSON to stderr.
    fn output_json_stderr<T: Serialize + ?Sized>(&self, data: &T) {
        if let Some(json) = self.to_json(data) {
            eprintln!("{json}");
        }
    }

    pub fn status_document(status: &DeviceStatus) -> Value {
        json!({
            "connected": true,
            "device": status,
        })
    }

    pub fn troubleshooting_document(message: &str) -> Value {
        json!({
            "connected": false,
            "error": message,
            "troubleshooting": TROUBLESHOOTING_STEPS,
        })
    }

    pub fn presets_document(kind: PresetKind, current: Option<i64>) -> Value {
        json!({
            "kind": kind.name(),
            "unit": kind.unit(),
            "current": current,
            "presets": PresetRow::rows(kind, current),
        })
    }

    pub fn error_document(error: &GlowError) -> Value {
        json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        })
    }
}

impl Output for RobotOutput {
    #[instrument(skip(self, outcome), fields(success = outcome.success))]
    fn action_outcome(&self, outcome: &ActionOutcome) {
        debug!("Robot: action outcome");
        self.output_json(outcome);
    }

    #[instrument(skip(self, notification), fields(title = %notification.title))]
    fn notification(&self, notification: &Notification) {
        debug!("Robot: notification");
        if notification.is_success() {
            self.output_json(notification);
        } else {
            self.output_json_stderr(notification);
        }
    }

    #[instrument(skip(self))]
    fn error(&self, error: &GlowError) {
        debug!(error = %error, "Robot: error");
        self.output_json_stderr(&Self::error_document(error));
    }

    #[instrument(skip(self, status), fields(name = %status.name))]
    fn device_status(&self, status: &DeviceStatus) {
        debug!("Robot: device status");
        self.output_json(&Self::status_document(status));
    }

    #[instrument(skip(self))]
    fn troubleshooting(&self, message: &str) {
        debug!("Robot: troubleshooting");
        self.output_json(&Self::troubleshooting_document(message));
    }

    #[instrument(skip(self))]
    fn connection(&self, connected: bool) {
        debug!("Robot: connection");
        self.output_json(&json!({ "connected": connected }));
    }

    #[instrument(skip(self))]
    fn presets(&self, kind: PresetKind, current: Option<i64>) {
        debug!("Robot: presets");
        self.output_json(&Self::presets_document(kind, current));
    }

    #[instrument(skip(self, settings))]
    fn settings(&self, settings: &Settings, executable: bool) {
        debug!("Robot: settings");
        self.output_json(&json!({
            "settings": settings,
            "executable": executable,
        }));
    }

    #[instrument(skip(self))]
    fn config_path(&self, path: Option<&Path>) {
        debug!("Robot: config path");
        self.output_json(&json!({ "path": path }));
    }

    #[instrument(skip(self, info))]
    fn version_info(&self, info: &VersionInfo) {
        debug!(version = info.version, "Robot: version info");
        self.output_json(info);
    }
}

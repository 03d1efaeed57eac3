//! Error types for glowctl operations.

use thiserror::Error;

/// User-facing message for a missing light.
pub const NO_DEVICE_MESSAGE: &str = "No Litra device found. Make sure it's connected via USB.";

/// Primary error type for glowctl operations.
#[derive(Error, Debug)]
pub enum GlowError {
    // Tool errors
    #[error("Litra CLI not found or not executable at: {path}")]
    PathInvalid { path: String },

    #[error("No Litra device found. Make sure it's connected via USB.")]
    NoDeviceFound,

    #[error("{0}")]
    Execution(String),

    #[error("Litra CLI did not finish within {secs}s")]
    Timeout { secs: u64 },

    #[error("Could not parse device status: {0}")]
    ParseFailure(String),

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl GlowError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PathInvalid { .. }
                | Self::NoDeviceFound
                | Self::Timeout { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParse(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::PathInvalid { .. } => {
                Some("Install the litra CLI or pass --litra-path <PATH> (env GLOWCTL_LITRA_PATH)")
            }
            Self::NoDeviceFound => Some("Try unplugging and reconnecting the device"),
            Self::Timeout { .. } => Some("Raise --timeout, or use --timeout 0 to wait indefinitely"),
            Self::ConfigNotFound { .. } => Some("Run: glowctl config --path"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using GlowError.
pub type Result<T> = std::result::Result<T, GlowError>;

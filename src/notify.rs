//! Action outcomes and the notification each action produces.
//!
//! Device actions return an [`ActionOutcome`] instead of printing anything;
//! the output layer decides how the [`Notification`] is shown.

use serde::Serialize;

use crate::error::GlowError;

/// Title used for every failed mutating action.
pub const FAILURE_TITLE: &str = "Command failed";

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    Success,
    Failure,
}

/// A one-shot toast-like message reported after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub style: NotificationStyle,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Notification {
    #[must_use]
    pub fn success(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            style: NotificationStyle::Success,
            title: title.into(),
            message,
        }
    }

    #[must_use]
    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: NotificationStyle::Failure,
            title: title.into(),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.style == NotificationStyle::Success
    }
}

/// Result of a device-affecting action: whether it worked, and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub success: bool,
    pub notification: Notification,
}

impl ActionOutcome {
    #[must_use]
    pub fn succeeded(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            success: true,
            notification: Notification::success(title, message),
        }
    }

    #[must_use]
    pub fn failed(error: &GlowError) -> Self {
        Self {
            success: false,
            notification: Notification::failure(FAILURE_TITLE, error.to_string()),
        }
    }
}

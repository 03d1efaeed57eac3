//! Human-friendly output implementation using console styling.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::config::Settings;
use crate::device::DeviceStatus;
use crate::error::GlowError;
use crate::notify::{ActionOutcome, Notification, NotificationStyle};
use crate::presets::PresetKind;
use crate::theme::GlowTheme;

use super::{Output, PresetRow, TROUBLESHOOTING_STEPS, VersionInfo};

/// Styled terminal output implementation for human users.
pub struct HumanOutput {
    theme: GlowTheme,
    quiet: bool,
}

impl HumanOutput {
    #[instrument]
    pub fn new(quiet: bool) -> Self {
        debug!("Creating HumanOutput");
        Self {
            theme: GlowTheme::default(),
            quiet,
        }
    }

    fn label(&self, name: &str) -> String {
        self.theme.label.apply_to(format!("  {name:<12}")).to_string()
    }

    /// Render a notification as a single line.
    pub fn render_notification(&self, notification: &Notification) -> String {
        let badge = match notification.style {
            NotificationStyle::Success => self.theme.success.apply_to("[OK]"),
            NotificationStyle::Failure => self.theme.error.apply_to("[FAILED]"),
        };
        match &notification.message {
            Some(message) => format!(
                "{badge} {}: {message}",
                self.theme.value.apply_to(&notification.title)
            ),
            None => format!("{badge} {}", self.theme.value.apply_to(&notification.title)),
        }
    }

    /// Render the status table.
    pub fn render_status(&self, status: &DeviceStatus) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.theme.header.apply_to(&status.name));

        let power = if status.is_on {
            self.theme.light_on.apply_to("On")
        } else {
            self.theme.light_off.apply_to("Off")
        };
        let _ = writeln!(out, "{}{power}", self.label("Status"));

        let brightness = status
            .brightness
            .map_or_else(|| "Unknown".to_string(), |b| format!("{b}%"));
        let _ = writeln!(
            out,
            "{}{}",
            self.label("Brightness"),
            self.theme.value.apply_to(brightness)
        );

        let temperature = status
            .temperature
            .map_or_else(|| "Unknown".to_string(), |t| format!("{t}K"));
        let _ = writeln!(
            out,
            "{}{}",
            self.label("Temperature"),
            self.theme.value.apply_to(temperature)
        );

        if let Some(serial) = status.serial.as_deref().filter(|s| !s.is_empty()) {
            let _ = writeln!(out, "{}{}", self.label("Serial"), self.theme.muted.apply_to(serial));
        }
        out
    }

    /// Render the troubleshooting panel shown when no status is available.
    pub fn render_troubleshooting(&self, message: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.theme.header.apply_to("Device Status"));
        let _ = writeln!(out);
        let _ = writeln!(out, "{} {message}", self.theme.error.apply_to("Error:"));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.theme.value.apply_to("Troubleshooting"));
        for (idx, step) in TROUBLESHOOTING_STEPS.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", idx + 1);
        }
        out
    }

    /// Render a preset picker with the current value marked.
    pub fn render_presets(&self, kind: PresetKind, current: Option<i64>) -> String {
        let mut out = String::new();
        let heading = match kind {
            PresetKind::Brightness => "Brightness presets",
            PresetKind::Temperature => "Temperature presets",
        };
        let _ = writeln!(out, "{}", self.theme.header.apply_to(heading));

        for row in PresetRow::rows(kind, current) {
            trace!(value = row.value, current = row.current, "Rendering preset row");
            if row.current {
                let _ = writeln!(
                    out,
                    "  {} {}  {}",
                    self.theme.current.apply_to("●"),
                    self.theme.current.apply_to(&row.title),
                    self.theme.current.apply_to("[Current]")
                );
            } else {
                let _ = writeln!(out, "  {} {}", self.theme.muted.apply_to("○"), row.title);
            }
        }

        let placeholder = match kind {
            PresetKind::Brightness => "<PERCENTAGE>",
            PresetKind::Temperature => "<KELVIN>",
        };
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} {}",
            self.theme.muted.apply_to("Set with:"),
            self.theme
                .accent
                .apply_to(format!("glowctl {} {placeholder}", kind.name()))
        );
        out
    }
}

impl Output for HumanOutput {
    #[instrument(skip(self, outcome), fields(success = outcome.success))]
    fn action_outcome(&self, outcome: &ActionOutcome) {
        self.notification(&outcome.notification);
    }

    #[instrument(skip(self, notification), fields(title = %notification.title))]
    fn notification(&self, notification: &Notification) {
        let line = self.render_notification(notification);
        if notification.is_success() {
            if !self.quiet {
                println!("{line}");
            }
        } else {
            eprintln!("{line}");
        }
    }

    #[instrument(skip(self))]
    fn error(&self, error: &GlowError) {
        debug!(
            error = %error,
            recoverable = error.is_user_recoverable(),
            "Outputting error"
        );
        eprintln!("{}: {error}", self.theme.error.apply_to("Error"));
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {suggestion}", self.theme.warning.apply_to("Hint"));
        }
    }

    #[instrument(skip(self, status), fields(name = %status.name))]
    fn device_status(&self, status: &DeviceStatus) {
        print!("{}", self.render_status(status));
    }

    #[instrument(skip(self))]
    fn troubleshooting(&self, message: &str) {
        print!("{}", self.render_troubleshooting(message));
    }

    #[instrument(skip(self))]
    fn connection(&self, connected: bool) {
        if self.quiet {
            return;
        }
        if connected {
            println!("{}", self.theme.success.apply_to("Litra device connected"));
        } else {
            println!("{}", self.theme.warning.apply_to("No Litra device connected"));
        }
    }

    #[instrument(skip(self))]
    fn presets(&self, kind: PresetKind, current: Option<i64>) {
        print!("{}", self.render_presets(kind, current));
    }

    #[instrument(skip(self, settings))]
    fn settings(&self, settings: &Settings, executable: bool) {
        let valid = if executable {
            self.theme.success.apply_to("executable")
        } else {
            self.theme.error.apply_to("not executable")
        };
        println!("{}", self.theme.header.apply_to("glowctl configuration"));
        println!(
            "{}{} ({valid})",
            self.label("Litra CLI"),
            settings.litra_path.display()
        );
        println!(
            "{}{}",
            self.label("Source"),
            self.theme.muted.apply_to(format!("{:?}", settings.litra_path_source))
        );
        let timeout = if settings.timeout_secs == 0 {
            "none".to_string()
        } else {
            format!("{}s", settings.timeout_secs)
        };
        println!("{}{timeout}", self.label("Timeout"));
        let file = settings
            .config_file
            .as_ref()
            .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
        println!("{}{file}", self.label("Config file"));
    }

    #[instrument(skip(self))]
    fn config_path(&self, path: Option<&Path>) {
        match path {
            Some(path) => println!("{}", path.display()),
            None => eprintln!(
                "{}: could not determine a configuration directory",
                self.theme.warning.apply_to("Warning")
            ),
        }
    }

    #[instrument(skip(self, info))]
    fn version_info(&self, info: &VersionInfo) {
        debug!(version = info.version, "Outputting version info");
        println!("glowctl {}", info.version);
        println!(
            "{}{}{}",
            self.label("Git SHA"),
            info.git_sha.unwrap_or("unknown"),
            if info.git_dirty {
                self.theme.warning.apply_to(" (dirty)").to_string()
            } else {
                String::new()
            }
        );
        println!("{}{}", self.label("Built"), info.build_timestamp.unwrap_or("unknown"));
        println!("{}{}", self.label("Rust"), info.rustc_version.unwrap_or("unknown"));
        println!("{}{}", self.label("Target"), info.target.unwrap_or("unknown"));
    }
}

//! Fake `litra` executables for exercising real process spawning.
//!
//! Each fake is a small `/bin/sh` script in a temporary directory that logs
//! its argument vector and answers `devices --json` and the mutating
//! subcommands with canned output.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// `devices --json` output for one Litra Glow at 150 of 20..250 lumen.
pub const GLOW_DEVICES_JSON: &str = r#"[{"device_type":"glow","device_type_display":"Litra Glow","has_back_side":false,"serial_number":"2231FE901234","device_path":"DevSrvsID:4296789687","is_on":true,"brightness_in_lumen":150,"temperature_in_kelvin":4500,"minimum_brightness_in_lumen":20,"maximum_brightness_in_lumen":250,"minimum_temperature_in_kelvin":2700,"maximum_temperature_in_kelvin":6500}]"#;

/// Absolute so a hanging fake does not depend on the caller's `PATH`.
const SLEEP: &str = "/bin/sleep";

/// Canned reply for one class of subcommand.
#[derive(Debug, Clone)]
pub struct Reply {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub sleep_secs: u64,
}

impl Reply {
    #[must_use]
    pub fn ok(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code: 0,
            sleep_secs: 0,
        }
    }

    #[must_use]
    pub fn fail(code: i32, stderr: &str) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.to_string(),
            exit_code: code,
            sleep_secs: 0,
        }
    }

    /// Never answer within `secs` seconds.
    #[must_use]
    pub fn hang(secs: u64) -> Self {
        Self {
            sleep_secs: secs,
            ..Self::ok("")
        }
    }

    fn script_body(&self) -> String {
        let mut body = String::new();
        if self.sleep_secs > 0 {
            let _ = writeln!(body, "    exec {SLEEP} {}", self.sleep_secs);
            return body;
        }
        if !self.stdout.is_empty() {
            let _ = writeln!(body, "    printf '%s\\n' {}", quote(&self.stdout));
        }
        if !self.stderr.is_empty() {
            let _ = writeln!(body, "    printf '%s\\n' {} >&2", quote(&self.stderr));
        }
        let _ = writeln!(body, "    exit {}", self.exit_code);
        body
    }
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// Builder for a fake litra executable.
#[derive(Debug, Clone)]
pub struct FakeLitraBuilder {
    devices: Reply,
    actions: Reply,
}

impl Default for FakeLitraBuilder {
    fn default() -> Self {
        Self {
            devices: Reply::ok(GLOW_DEVICES_JSON),
            actions: Reply::ok(""),
        }
    }
}

impl FakeLitraBuilder {
    /// Reply for `devices --json`.
    #[must_use]
    pub fn devices(mut self, reply: Reply) -> Self {
        self.devices = reply;
        self
    }

    /// Reply for `toggle`, `brightness` and `temperature`.
    #[must_use]
    pub fn actions(mut self, reply: Reply) -> Self {
        self.actions = reply;
        self
    }

    /// Write the script into a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or script cannot be created.
    #[must_use]
    pub fn install(self) -> FakeLitra {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("litra");
        let log = dir.path().join("invocations.log");

        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> {log}\ncase \"$1\" in\n  devices)\n{devices}    ;;\n  *)\n{actions}    ;;\nesac\n",
            log = quote(&log.to_string_lossy()),
            devices = self.devices.script_body(),
            actions = self.actions.script_body(),
        );
        fs::write(&path, script).expect("write fake litra");
        make_executable(&path);

        FakeLitra { dir, path, log }
    }
}

/// An installed fake litra executable.
pub struct FakeLitra {
    pub dir: TempDir,
    pub path: PathBuf,
    log: PathBuf,
}

impl FakeLitra {
    #[must_use]
    pub fn builder() -> FakeLitraBuilder {
        FakeLitraBuilder::default()
    }

    /// Fake with a connected Glow and succeeding actions.
    #[must_use]
    pub fn connected() -> Self {
        Self::builder().install()
    }

    #[must_use]
    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("temp path is UTF-8")
    }

    /// Clear every execute bit, leaving the script in place.
    pub fn strip_execute(&self) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&self.path, fs::Permissions::from_mode(0o644))
            .expect("chmod fake litra");
    }

    /// Argument lines recorded so far, oldest first.
    #[must_use]
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }
}

pub fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod fake litra");
}

/// A file that exists but lacks the execute bit.
#[must_use]
pub fn non_executable_file(dir: &Path) -> PathBuf {
    let path = dir.join("litra");
    fs::write(&path, "#!/bin/sh\nexit 0\n").expect("write file");
    path
}

/// Write a settings file into `dir`.
#[must_use]
pub fn settings_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("write settings file");
    path
}

//! Process execution for the litra CLI.
//!
//! The [`CommandRunner`] trait is the seam between the command delegator
//! and the operating system; [`ProcessRunner`] spawns real processes and
//! [`super::mock::MockRunner`] replays scripted output in tests.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument, trace, warn};

use crate::error::{GlowError, Result};

/// Captured output of one finished tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    /// Exit code, or `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RawOutput {
    /// A successful run that printed `stdout`.
    #[must_use]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A run that exited with `code`.
    #[must_use]
    pub fn exit(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs an executable with a discrete argument vector and waits for it.
///
/// Implementations must never route arguments through a shell.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Execute `program` with `args`, draining stdout and stderr.
    ///
    /// A non-zero exit is not an error at this level; only failures to
    /// spawn or wait (and timeouts) are.
    async fn execute(
        &self,
        program: &Path,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<RawOutput>;
}

/// Spawns real child processes through tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    #[instrument(skip(self, args), fields(program = %program.display(), argc = args.len()))]
    async fn execute(
        &self,
        program: &Path,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<RawOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        trace!(?args, ?timeout, "Spawning process");
        let output = match timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| {
                    warn!(secs = limit.as_secs(), "Process timed out and was killed");
                    GlowError::Timeout {
                        secs: limit.as_secs(),
                    }
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| GlowError::Execution(format!("Failed to run {}: {e}", program.display())))?;

        let raw = RawOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(
            exit_code = ?raw.exit_code,
            stdout_len = raw.stdout.len(),
            stderr_len = raw.stderr.len(),
            "Process finished"
        );
        Ok(raw)
    }
}

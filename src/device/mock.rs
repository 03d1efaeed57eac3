//! Scripted command runner for tests.
//!
//! Records every invocation and replays queued responses in order, so the
//! command delegator can be exercised without a litra binary or a light.
//!
//! # Example
//!
//! ```rust,ignore
//! use glowctl::device::mock::MockRunner;
//! use glowctl::device::{LitraCli, RawOutput};
//!
//! let runner = MockRunner::new().respond(RawOutput::ok(""));
//! let cli = LitraCli::with_runner(settings, runner);
//! assert!(cli.toggle().await.success);
//! cli.runner().assert_calls(&[&["toggle", "--device-type", "glow"]]);
//! ```

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};

use super::runner::{CommandRunner, RawOutput};
use crate::error::{GlowError, Result};

/// One recorded call to [`MockRunner::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

/// Mock runner returning queued responses.
///
/// When the queue is empty every call succeeds with empty output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Mutex<VecDeque<Result<RawOutput>>>,
    calls: Mutex<Vec<Invocation>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a finished-process response.
    #[must_use]
    pub fn respond(self, output: RawOutput) -> Self {
        self.push(Ok(output));
        self
    }

    /// Queue a runner-level failure (spawn error, timeout).
    #[must_use]
    pub fn fail_with(self, error: GlowError) -> Self {
        self.push(Err(error));
        self
    }

    /// Queue a response on a shared runner.
    pub fn push(&self, response: Result<RawOutput>) {
        trace!(ok = response.is_ok(), "Queueing mock response");
        lock(&self.responses).push_back(response);
    }

    /// All invocations so far, oldest first.
    pub fn calls(&self) -> Vec<Invocation> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Assert the exact argument vectors passed so far.
    ///
    /// # Panics
    ///
    /// Panics if the recorded calls differ from `expected`.
    pub fn assert_calls(&self, expected: &[&[&str]]) {
        let actual: Vec<Vec<String>> = self.calls().into_iter().map(|c| c.args).collect();
        let expected: Vec<Vec<String>> = expected
            .iter()
            .map(|args| args.iter().map(ToString::to_string).collect())
            .collect();
        assert_eq!(actual, expected, "Recorded litra invocations differ");
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn execute(
        &self,
        program: &Path,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<RawOutput> {
        debug!(?args, "Mock execute");
        lock(&self.calls).push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
            timeout,
        });
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(RawOutput::ok("")))
    }
}

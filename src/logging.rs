//! Structured logging initialization for glowctl.
//!
//! Logs always go to stderr so that stdout stays reserved for command
//! output (human text or robot JSON).

use std::io::{self, IsTerminal};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Shape of the log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event (robot mode).
    Json,
    /// Colored multi-field lines for an interactive terminal.
    Pretty,
    /// Plain single-line events for pipes and CI logs.
    Compact,
}

impl LogFormat {
    pub const fn select(robot_mode: bool, stderr_is_tty: bool) -> Self {
        if robot_mode {
            Self::Json
        } else if stderr_is_tty {
            Self::Pretty
        } else {
            Self::Compact
        }
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = fmt::layer()
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(io::stderr);

        match self {
            Self::Json => base.json().with_target(true).boxed(),
            Self::Pretty => base.with_target(false).boxed(),
            Self::Compact => base.with_ansi(false).with_target(false).compact().boxed(),
        }
    }
}

/// Default filter directive for the given verbosity flags.
///
/// `quiet` wins over `verbose`: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "glowctl=error";
    }
    match verbose {
        0 => "glowctl=warn",
        1 => "glowctl=info",
        2 => "glowctl=debug",
        _ => "glowctl=trace",
    }
}

/// Initialize the tracing subscriber based on CLI flags and environment.
///
/// # Environment Variables
///
/// * `RUST_LOG` - Override default filter (e.g., "glowctl=debug")
///
/// # Output Behavior
///
/// | Mode | TTY | Output |
/// |------|-----|--------|
/// | Robot | any | JSON lines to stderr |
/// | Human | yes | Pretty colored output to stderr |
/// | Human | no | Compact plain output to stderr |
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));
    let format = LogFormat::select(robot_mode, io::stderr().is_terminal());

    // try_init: a second initialisation (tests embedding the library) is not fatal
    let _ = tracing_subscriber::registry()
        .with(format.layer())
        .with(filter)
        .try_init();
}

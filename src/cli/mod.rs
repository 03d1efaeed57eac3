//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::SettingsOverrides;

/// glowctl - Control a Logitech Litra Glow light through the litra CLI.
///
/// Robot Mode: Use --robot or --format json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "glowctl", version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "GLOWCTL_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Path to the litra executable
    #[arg(long, global = true, env = "GLOWCTL_LITRA_PATH", value_name = "PATH")]
    pub litra_path: Option<PathBuf>,

    /// Settings file to read instead of the default location
    #[arg(long, global = true, env = "GLOWCTL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seconds to wait for the litra CLI (0 = wait forever)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }

    /// Settings overrides carried by the global flags.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            config_file: self.config.clone(),
            litra_path: self.litra_path.clone(),
            timeout_secs: self.timeout,
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // === Light Control ===
    /// Toggle the light on or off
    Toggle,

    /// Show power, brightness and temperature of the light
    Status,

    /// Set brightness, or list presets when no value is given
    Brightness(BrightnessArgs),

    /// Set color temperature, or list presets when no value is given
    Temperature(TemperatureArgs),

    /// Exit 0 if a Litra device is connected, 1 otherwise
    Check,

    // === Configuration ===
    /// Show resolved settings
    Config(ConfigArgs),

    // === Utilities ===
    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// === Argument Structs ===

#[derive(Parser, Debug)]
pub struct BrightnessArgs {
    /// Brightness percentage, passed through unchecked
    #[arg(allow_negative_numbers = true)]
    pub percentage: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct TemperatureArgs {
    /// Color temperature in Kelvin, passed through unchecked
    #[arg(allow_negative_numbers = true)]
    pub kelvin: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show configuration file path
    #[arg(long)]
    pub path: bool,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

//! glowctl - Control a Logitech Litra Glow light through the litra CLI.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use glowctl::cli::{self, Cli, Commands};
use glowctl::config::{self, Settings};
use glowctl::device::LitraCli;
use glowctl::error::{NO_DEVICE_MESSAGE, Result};
use glowctl::logging::init_logging;
use glowctl::notify::Notification;
use glowctl::output::{Output, OutputMode, STATUS_FAILURE_TITLE};
use glowctl::presets::PresetKind;

/// Build information embedded at compile time.
mod build_info {
    use glowctl::output::VersionInfo;

    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn version_info() -> VersionInfo {
        VersionInfo {
            version: VERSION,
            git_sha: option_env!("VERGEN_GIT_SHA"),
            git_dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP"),
            rustc_version: option_env!("VERGEN_RUSTC_SEMVER"),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle no-color flag or non-TTY
    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
    }
    if cli.no_color || !io::stderr().is_terminal() {
        console::set_colors_enabled_stderr(false);
    }

    let mode = OutputMode::from_cli(&cli);
    init_logging(mode.is_robot(), cli.verbose, cli.quiet);
    debug!(command = ?cli.command, "Starting glowctl");

    let output = mode.into_output();
    match run(&cli, output.as_ref()).await {
        Ok(code) => code,
        Err(e) => {
            output.error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, output: &dyn Output) -> Result<ExitCode> {
    match &cli.command {
        None => {
            print_quick_start(cli);
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Toggle) => cmd_toggle(cli, output).await,
        Some(Commands::Status) => cmd_status(cli, output).await,
        Some(Commands::Brightness(args)) => cmd_brightness(cli, output, args).await,
        Some(Commands::Temperature(args)) => cmd_temperature(cli, output, args).await,
        Some(Commands::Check) => cmd_check(cli, output).await,
        Some(Commands::Config(args)) => cmd_config(cli, output, args),
        Some(Commands::Version) => {
            output.version_info(&build_info::version_info());
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Completions(args)) => {
            cmd_completions(args);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn litra(cli: &Cli) -> Result<LitraCli> {
    let settings = Settings::load(&cli.overrides())?;
    Ok(LitraCli::new(settings))
}

const fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// === Quick Start (Robot Mode Optimized) ===

/// Prints quick-start help optimized for both humans and AI agents.
fn print_quick_start(cli: &Cli) {
    if cli.use_json() {
        print_robot_quick_start(cli.use_compact_json());
    } else {
        print_human_quick_start();
    }
}

fn print_robot_quick_start(compact: bool) {
    let help = RobotQuickStart {
        tool: "glowctl",
        version: build_info::VERSION,
        description: "Control a Logitech Litra Glow light through the litra CLI",
        control: RobotControl {
            toggle: "glowctl toggle",
            set_brightness: "glowctl brightness <PERCENTAGE>",
            set_temperature: "glowctl temperature <KELVIN>",
        },
        discovery: RobotDiscovery {
            status: "glowctl status --robot",
            check_connected: "glowctl check",
            brightness_presets: "glowctl brightness --robot",
            temperature_presets: "glowctl temperature --robot",
        },
        output_modes: OutputModes {
            human: "--format=text (default)",
            robot: "--robot or --format=json",
            compact: "--format=json-compact",
        },
        litra_path: "--litra-path <PATH> or GLOWCTL_LITRA_PATH",
    };

    let json = if compact {
        serde_json::to_string(&help)
    } else {
        serde_json::to_string_pretty(&help)
    };
    if let Ok(json) = json {
        println!("{json}");
    }
}

fn print_human_quick_start() {
    println!(
        "{} {} - Litra Glow control\n",
        style("glowctl").bold().cyan(),
        build_info::VERSION
    );

    println!("{}", style("QUICK START").bold().underlined());
    println!();
    println!("  {}  Toggle the light", style("glowctl toggle").green());
    println!("  {}  Show device status", style("glowctl status").green());
    println!("  {}  Set brightness", style("glowctl brightness 50").green());
    println!("  {}  Set temperature", style("glowctl temperature 4000").green());
    println!("  {}  List brightness presets", style("glowctl brightness").green());
    println!("  {}  Is a light connected?", style("glowctl check").green());
    println!();

    println!("{}", style("ROBOT MODE (for AI agents)").bold().underlined());
    println!();
    println!("  {}  JSON output", style("glowctl --robot <command>").cyan());
    println!("  {}  Quick-start JSON", style("glowctl --robot").cyan());
    println!();

    println!("Run {} for full help", style("glowctl --help").yellow());
}

// === Robot Mode JSON Structures ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    control: RobotControl,
    discovery: RobotDiscovery,
    output_modes: OutputModes,
    litra_path: &'static str,
}

#[derive(Serialize)]
struct RobotControl {
    toggle: &'static str,
    set_brightness: &'static str,
    set_temperature: &'static str,
}

#[derive(Serialize)]
struct RobotDiscovery {
    status: &'static str,
    check_connected: &'static str,
    brightness_presets: &'static str,
    temperature_presets: &'static str,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

// === Command Implementations ===

async fn cmd_toggle(cli: &Cli, output: &dyn Output) -> Result<ExitCode> {
    let outcome = litra(cli)?.toggle().await;
    output.action_outcome(&outcome);
    Ok(exit_code(outcome.success))
}

async fn cmd_status(cli: &Cli, output: &dyn Output) -> Result<ExitCode> {
    let litra = litra(cli)?;

    if let Err(e) = litra.validate_path() {
        info!(error = %e, "Litra CLI unusable");
        let message = e.to_string();
        output.notification(&Notification::failure(STATUS_FAILURE_TITLE, message.clone()));
        output.troubleshooting(&message);
        return Ok(ExitCode::FAILURE);
    }

    match litra.query_status().await {
        Some(status) => {
            output.device_status(&status);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            output.troubleshooting(NO_DEVICE_MESSAGE);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn cmd_brightness(
    cli: &Cli,
    output: &dyn Output,
    args: &cli::BrightnessArgs,
) -> Result<ExitCode> {
    let litra = litra(cli)?;
    if let Some(percentage) = args.percentage {
        let outcome = litra.set_brightness(percentage).await;
        output.action_outcome(&outcome);
        return Ok(exit_code(outcome.success));
    }

    let current = litra.query_status().await.and_then(|s| s.brightness);
    output.presets(PresetKind::Brightness, current);
    Ok(ExitCode::SUCCESS)
}

async fn cmd_temperature(
    cli: &Cli,
    output: &dyn Output,
    args: &cli::TemperatureArgs,
) -> Result<ExitCode> {
    let litra = litra(cli)?;
    if let Some(kelvin) = args.kelvin {
        let outcome = litra.set_temperature(kelvin).await;
        output.action_outcome(&outcome);
        return Ok(exit_code(outcome.success));
    }

    let current = litra.query_status().await.and_then(|s| s.temperature);
    output.presets(PresetKind::Temperature, current);
    Ok(ExitCode::SUCCESS)
}

async fn cmd_check(cli: &Cli, output: &dyn Output) -> Result<ExitCode> {
    let connected = litra(cli)?.is_connected().await;
    output.connection(connected);
    Ok(exit_code(connected))
}

fn cmd_config(cli: &Cli, output: &dyn Output, args: &cli::ConfigArgs) -> Result<ExitCode> {
    if args.path {
        let path = cli.config.clone().or_else(config::default_config_path);
        output.config_path(path.as_deref());
        return Ok(exit_code(path.is_some()));
    }

    let litra = litra(cli)?;
    output.settings(litra.settings(), litra.validate_path().is_ok());
    Ok(ExitCode::SUCCESS)
}

fn cmd_completions(args: &cli::CompletionsArgs) {
    use clap::CommandFactory;
    clap_complete::generate(args.shell, &mut Cli::command(), "glowctl", &mut io::stdout());
}

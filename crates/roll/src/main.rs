mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::qr::SlotArgs;
use commands::roster::{OpenArgs, RosterArgs};
use commands::window::{StatusArgs, WindowArgs};
use output::CommandOutput;
use roll_core::{RollConfig, RollError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roll", version, about = "Inspect attendance windows and rosters")]
struct Cli {
    /// Config file (default: $ROLL_CONFIG or .rollcall/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Phase of a window at an instant
    Phase(WindowArgs),
    /// Display status for one student
    Status(StatusArgs),
    /// Current QR rotation slot
    Slot(SlotArgs),
    /// Merge a roster with recorded marks
    Roster(RosterArgs),
    /// Find the session that is open for check-in
    Open(OpenArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<CommandOutput, RollError> {
    let config_path = RollConfig::resolve_path(cli.config.as_deref());
    let config = RollConfig::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), ?config, "config loaded");

    let output = match cli.command {
        Command::Phase(args) => {
            let now = commands::resolve_now(args.now.as_deref())?;
            CommandOutput::Phase(commands::window::handle_phase(&args, &config, now))
        }
        Command::Status(args) => {
            let now = commands::resolve_now(args.window.now.as_deref())?;
            CommandOutput::Status(commands::window::handle_status(&args, &config, now))
        }
        Command::Slot(args) => {
            let now = commands::resolve_now(args.now.as_deref())?;
            CommandOutput::Slot(commands::qr::handle_slot(&args, &config, now)?)
        }
        Command::Roster(args) => {
            let now = commands::resolve_now(args.now.as_deref())?;
            CommandOutput::Roster(commands::roster::handle_roster(&args, now)?)
        }
        Command::Open(args) => {
            let now = commands::resolve_now(args.now.as_deref())?;
            CommandOutput::Open(commands::roster::handle_open(&args, &config, now)?)
        }
    };
    Ok(output)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let json = cli.json;
    match run(cli).and_then(|output| output.render(json)) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

//! CLI entry point for the Waypost client registry.
//!
//! `interactive` (the default) runs the numbered menu on stdin/stdout.
//! `batch` reads a JSON request from stdin and writes a JSON result to stdout.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use waypost_core::WaypostConfig;
use waypost_pathfind::menu::{Menu, MenuOptions};
use waypost_pathfind::{batch, PathfindEngine};

#[derive(Parser)]
#[command(name = "waypost")]
#[command(about = "Client registry with weighted paths and shortest-route queries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file prefix (default: waypost).
    #[arg(short, long, default_value = "waypost", global = true)]
    config: String,

    /// Print shortest-path results as JSON.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive menu.
    Interactive,
    /// Replay a JSON batch request from stdin.
    Batch,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = WaypostConfig::load(&cli.config)?;
    if cli.json {
        config.json_output = true;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    if config.log_json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut menu = Menu::new(
                PathfindEngine::new(),
                stdin.lock(),
                stdout.lock(),
                MenuOptions::from(&config),
            );
            menu.run()?;
        }
        Command::Batch => {
            let input = std::io::read_to_string(std::io::stdin())?;
            let output = batch::run_json(&input)?;
            println!("{output}");
        }
    }

    Ok(())
}

//! Jokenpo CLI - Rock-paper-scissors-lizard-spock for any number of players
//!
//! Usage:
//!   jokenpo moves                          - List moves and what they beat
//!   jokenpo play ana=pedra bia=spock ...   - Play one game
//!   jokenpo simulate --config games.json   - Play every game of a config file

use clap::{Parser, Subcommand};
use cli::commands::{MovesCommand, PlayCommand, SimulateCommand};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser)]
#[command(name = "jokenpo")]
#[command(about = "Jokenpo - multiplayer rock-paper-scissors-lizard-spock")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the moves
    Moves(MovesCommand),
    /// Play a single game
    Play(PlayCommand),
    /// Play the games described in a config file
    Simulate(SimulateCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Moves(cmd) => {
            init_logging(DEFAULT_LOG_LEVEL);
            cmd.run(cli.json)
        }
        Commands::Play(cmd) => {
            init_logging(DEFAULT_LOG_LEVEL);
            cmd.run(cli.json)
        }
        Commands::Simulate(cmd) => {
            // The config file may set the log level, so it is read first.
            let config = cmd.load_config()?;
            init_logging(config.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL));
            cmd.run(config, cli.json).await
        }
    }
}

/// Logs go to stderr so `--json` output stays parseable. `RUST_LOG` wins
/// over `default_level`.
fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

//! Noughts - tic-tac-toe against an unbeatable opponent.

use anyhow::Result;
use clap::Parser;
use noughts_cli::app;
use noughts_cli::cli::{Cli, Command};
use noughts_cli::GameConfig;
use tracing::{debug, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Play { first, config } => {
            let config = GameConfig::load(config.as_deref())?.with_first(first.map(Into::into));
            debug!(?config, "Resolved configuration");
            app::play(&config)
        }
        Command::Solve { board, side, json } => {
            app::solve(&board, side, json, &mut stdout).map(|_| ())
        }
        Command::Selfplay { json } => app::selfplay(json, &mut stdout).map(|_| ()),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Tracing initialized");
}

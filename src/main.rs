//! Starlit Games - tic-tac-toe against a bot in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use starlit_games::{Cli, Command, GameConfig, Session, simulate};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let config = GameConfig::resolve(cli.config.as_deref(), cli.overrides())?;

    match cli.command() {
        Command::Play => run_play(config).await,
        Command::Simulate { games } => run_simulate(config, games),
    }
}

/// Logs go to stderr; stdout carries the board.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run an interactive game
#[instrument(skip(config))]
async fn run_play(config: GameConfig) -> Result<()> {
    info!(
        bot_delay_ms = config.bot_delay_ms(),
        policy = %config.bot_policy(),
        "Starting interactive session"
    );

    let session = Session::new(&config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    session.run(stdin, &mut stdout).await
}

/// Run headless games and print the tally
#[instrument(skip(config))]
fn run_simulate(config: GameConfig, games: usize) -> Result<()> {
    let report = simulate::run(games, config.engine_options());
    println!("{}", report);
    Ok(())
}

//! Starlit Games library - terminal front-end for the tic-tac-toe engine
//!
//! The rules live in [`starlit_tictactoe`]; this crate wires them to a
//! terminal, a bot delay timer, and a config file.
//!
//! # Architecture
//!
//! - **Session**: one task reading typed commands and due bot tickets
//! - **BotTimer**: the bot's thinking delay, cancelled when it goes stale
//! - **Config**: TOML settings with command-line overrides
//! - **Simulate**: headless games for tallying outcomes
//!
//! # Example
//!
//! ```no_run
//! use starlit_games::{GameConfig, Session};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let session = Session::new(&config);
//! let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//! session.run(stdin, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod bot_timer;
mod cli;
mod config;
mod input;
mod session;

// Public modules
pub mod cues;
pub mod render;
pub mod simulate;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigOverrides, GameConfig};

// Crate-level exports - Input
pub use input::{HELP, Input, InputError, parse};

// Crate-level exports - Session
pub use bot_timer::BotTimer;
pub use session::Session;

// Crate-level exports - Simulation
pub use simulate::SimulationReport;

//! Command-line interface for starlit_games.

use crate::config::ConfigOverrides;
use clap::{Parser, Subcommand};
use starlit_tictactoe::BotPolicy;
use std::path::PathBuf;

/// Starlit Games - tic-tac-toe against a bot in the terminal
#[derive(Parser, Debug)]
#[command(name = "starlit_games")]
#[command(about = "Play tic-tac-toe against a bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixed seed for hints and bot moves
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Bot thinking delay in milliseconds
    #[arg(long, global = true)]
    pub bot_delay_ms: Option<u64>,

    /// Bot policy: `random` or `heuristic`
    #[arg(long, global = true)]
    pub bot_policy: Option<BotPolicy>,

    /// Hide move hints
    #[arg(long, global = true)]
    pub no_hints: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Play hint-following games against the bot without delay and print a tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,
    },
}

impl Cli {
    /// Command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }

    /// Flag values that override the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bot_delay_ms: self.bot_delay_ms,
            seed: self.seed,
            bot_policy: self.bot_policy,
            no_hints: self.no_hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["starlit_games"]);
        assert_eq!(cli.command(), Command::Play);
        assert_eq!(cli.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "starlit_games",
            "simulate",
            "--games",
            "7",
            "--seed",
            "3",
            "--bot-policy",
            "heuristic",
            "--no-hints",
        ]);
        assert_eq!(cli.command(), Command::Simulate { games: 7 });
        let overrides = cli.overrides();
        assert_eq!(overrides.seed, Some(3));
        assert_eq!(overrides.bot_policy, Some(BotPolicy::Heuristic));
        assert!(overrides.no_hints);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["starlit_games", "--bot-policy", "genius"]).is_err());
    }
}

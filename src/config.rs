//! Game configuration loaded from TOML, with CLI overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use starlit_tictactoe::{BotPolicy, EngineOptions};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// User-facing settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// How long the bot "thinks" before moving, in milliseconds.
    #[serde(default = "default_bot_delay_ms")]
    bot_delay_ms: u64,

    /// Fixed seed for hints and bot moves. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Bot move policy.
    #[serde(default)]
    bot_policy: BotPolicy,

    /// Show the advisor's hint on the human's turn.
    #[serde(default = "default_show_hints")]
    show_hints: bool,
}

fn default_bot_delay_ms() -> u64 {
    2000
}

fn default_show_hints() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_delay_ms: default_bot_delay_ms(),
            seed: None,
            bot_policy: BotPolicy::default(),
            show_hints: default_show_hints(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `bot_delay_ms`.
    pub bot_delay_ms: Option<u64>,
    /// Replaces `seed`.
    pub seed: Option<u64>,
    /// Replaces `bot_policy`.
    pub bot_policy: Option<BotPolicy>,
    /// Forces hints off.
    pub no_hints: bool,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(bot_delay_ms = config.bot_delay_ms, policy = %config.bot_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, else the defaults, then applies overrides.
    #[instrument(skip(path))]
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(delay) = overrides.bot_delay_ms {
            self.bot_delay_ms = delay;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(policy) = overrides.bot_policy {
            self.bot_policy = policy;
        }
        if overrides.no_hints {
            self.show_hints = false;
        }
        self
    }

    /// Bot thinking delay.
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }

    /// Options for building the engine.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            seed: self.seed,
            bot_policy: self.bot_policy,
            hints_disabled: !self.show_hints,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

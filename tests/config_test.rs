//! Tests for loading game configuration.

use starlit_games::{ConfigOverrides, GameConfig};
use starlit_tictactoe::BotPolicy;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_without_file() {
    let config = GameConfig::resolve(None, ConfigOverrides::default()).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.bot_delay(), Duration::from_millis(2000));
    assert_eq!(*config.bot_policy(), BotPolicy::Random);
    assert!(*config.show_hints());
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
bot_delay_ms = 500
seed = 42
bot_policy = "heuristic"
show_hints = false
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.bot_delay_ms(), 500);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(*config.bot_policy(), BotPolicy::Heuristic);
    assert!(!*config.show_hints());

    let options = config.engine_options();
    assert_eq!(options.seed, Some(42));
    assert!(options.hints_disabled);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("seed = 7\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(*config.bot_delay_ms(), 2000);
    assert!(*config.show_hints());
}

#[test]
fn test_overrides_win_over_file() {
    let file = write_config("bot_delay_ms = 500\nseed = 1\n");
    let overrides = ConfigOverrides {
        bot_delay_ms: Some(10),
        seed: None,
        bot_policy: Some(BotPolicy::Heuristic),
        no_hints: true,
    };

    let config = GameConfig::resolve(Some(file.path()), overrides).unwrap();
    assert_eq!(*config.bot_delay_ms(), 10);
    assert_eq!(*config.seed(), Some(1));
    assert_eq!(*config.bot_policy(), BotPolicy::Heuristic);
    assert!(!*config.show_hints());
}

#[test]
fn test_unknown_key_rejected() {
    let err = GameConfig::from_toml("bot_speed = 3\n").unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_bad_policy_rejected() {
    assert!(GameConfig::from_toml("bot_policy = \"genius\"\n").is_err());
}

#[test]
fn test_missing_file_reports_location() {
    let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

//! Tests for loading session configuration from disk.

use noughts::{Difficulty, Opponent, SessionConfig, Symbol};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_from_file_builds_configured_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
player_x = "Ada"
player_o = "Babbage"
opponent = "computer"
difficulty = "medium"
bot_delay_ms = 250
"#
    )
    .unwrap();

    let config = SessionConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.bot_delay(), Duration::from_millis(250));

    let session = config.build_session();
    assert_eq!(session.players().name(Symbol::X), "Ada");
    assert_eq!(session.players().name(Symbol::O), "Babbage");
    assert_eq!(session.difficulty(), Difficulty::Medium);
    assert_eq!(session.opponent(), Opponent::Computer);
}

#[test]
fn test_missing_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_overrides_apply_on_top_of_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"difficulty = "hard""#).unwrap();

    let config = SessionConfig::from_file(file.path())
        .unwrap()
        .with_opponent(Opponent::Human)
        .with_bot_delay_ms(0);

    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(*config.opponent(), Opponent::Human);
    assert_eq!(config.bot_delay(), Duration::ZERO);
}

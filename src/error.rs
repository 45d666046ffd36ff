use std::path::PathBuf;

use crate::board::{Color, Pos};
use crate::rules::WinMode;

/// Errors from driving a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over: {winner} won by {}", mode.describe())]
    GameOver { winner: Color, mode: WinMode },

    #[error("illegal move {from} -> {to} for {color}")]
    Illegal { color: Color, from: Pos, to: Pos },

    #[error("no move to undo")]
    NothingToUndo,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::Illegal {
            color: Color::Red,
            from: Pos::new(0, 0),
            to: Pos::new(1, 1),
        };
        assert_eq!(err.to_string(), "illegal move a1 -> b2 for Red");

        let err = MoveError::GameOver {
            winner: Color::Blue,
            mode: WinMode::Lockout,
        };
        assert_eq!(err.to_string(), "game is over: Blue won by lockout");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai.depth must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: ai.depth must be > 0");
    }
}

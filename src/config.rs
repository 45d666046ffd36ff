//! Application configuration, loadable from TOML
//!
//! ```toml
//! [ai]
//! strategy = "minimax"   # random | greedy | minimax
//! depth = 3
//! seed = 42              # optional
//! time_limit_ms = 500    # optional
//!
//! [game]
//! human_color = "red"    # red | blue, omit for two humans
//! ```

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use crate::board::Color;
use crate::engine::{AIEngine, Strategy};
use crate::error::ConfigError;

/// Deepest minimax search the config accepts
pub const MAX_DEPTH: u8 = 8;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "TOWERS_CONFIG";

/// Config file used when `TOWERS_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "towers.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    Greedy,
    #[default]
    Minimax,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub strategy: StrategyKind,
    /// Plies searched by minimax, ignored by the other strategies
    pub depth: u8,
    /// Fixed RNG seed; entropy from the OS when absent
    pub seed: Option<u64>,
    pub time_limit_ms: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Minimax,
            depth: 3,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AiConfig {
    pub fn to_strategy(&self) -> Strategy {
        match self.strategy {
            StrategyKind::Random => Strategy::Random,
            StrategyKind::Greedy => Strategy::Greedy,
            StrategyKind::Minimax => Strategy::Minimax { depth: self.depth },
        }
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Engine configured with strategy, seed and time limit
    pub fn build_engine(&self) -> AIEngine {
        let strategy = self.to_strategy();
        let mut engine = match self.seed {
            Some(seed) => AIEngine::with_seed(strategy, seed),
            None => AIEngine::with_strategy(strategy),
        };
        engine.set_time_limit(self.time_limit());
        engine
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side the human plays against the AI; `None` for two humans
    pub human_color: Option<Color>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_color: Some(Color::Red),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("Config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Path from `TOWERS_CONFIG`, else `towers.toml` in the working directory
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_or_default(Path::new(&path))
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.strategy == StrategyKind::Minimax && self.ai.depth == 0 {
            return Err(ConfigError::Validation(
                "ai.depth must be > 0 for minimax".into(),
            ));
        }
        if self.ai.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai.depth must be <= {MAX_DEPTH}"
            )));
        }
        if self.ai.time_limit_ms == Some(0) {
            return Err(ConfigError::Validation(
                "ai.time_limit_ms must be > 0 when set".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ai.strategy, StrategyKind::Minimax);
        assert_eq!(config.ai.depth, 3);
        assert_eq!(config.ai.to_strategy(), Strategy::default());
        assert_eq!(config.game.human_color, Some(Color::Red));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_file() {
        let config = AppConfig::from_toml(
            r#"
            [ai]
            strategy = "greedy"
            depth = 2
            seed = 42
            time_limit_ms = 250

            [game]
            human_color = "blue"
            "#,
        )
        .unwrap();
        assert_eq!(config.ai.to_strategy(), Strategy::Greedy);
        assert_eq!(config.ai.seed, Some(42));
        assert_eq!(config.ai.time_limit(), Some(Duration::from_millis(250)));
        assert_eq!(config.game.human_color, Some(Color::Blue));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml("[ai]\ndepth = 5\n").unwrap();
        assert_eq!(config.ai.to_strategy(), Strategy::Minimax { depth: 5 });
        assert_eq!(config.ai.seed, None);
        assert_eq!(config.game, GameConfig::default());

        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_depth() {
        let err = AppConfig::from_toml("[ai]\ndepth = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        // Depth is irrelevant to random play
        assert!(AppConfig::from_toml("[ai]\nstrategy = \"random\"\ndepth = 0\n").is_ok());

        let err = AppConfig::from_toml("[ai]\ndepth = 9\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_parse_errors() {
        let err = AppConfig::from_toml("[ai]\nstrategy = \"mcts\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/towers.toml");
        assert_eq!(AppConfig::load_or_default(path).unwrap(), AppConfig::default());
        assert!(matches!(
            AppConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_seeded_engine_from_config() {
        let ai = AiConfig {
            strategy: StrategyKind::Random,
            seed: Some(5),
            ..AiConfig::default()
        };
        let board = crate::board::initial_board();
        let mut a = ai.build_engine();
        let mut b = ai.build_engine();
        assert_eq!(a.get_move(&board, Color::Red), b.get_move(&board, Color::Red));
        assert_eq!(a.strategy(), Strategy::Random);
    }
}

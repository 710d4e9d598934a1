use std::path::Path;

use crate::error::ConfigError;

/// Board dimensions for the connect game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 6, cols: 7 }
    }
}

/// Minimax search settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
    /// Optional wall-clock budget per move, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 5,
            deadline_ms: None,
        }
    }
}

/// Q-learning hyperparameters and training schedule for the card game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct QLearningConfig {
    pub alpha: f64,
    pub gamma: f64,
    pub epsilon_start: f64,
    pub epsilon_floor: f64,
    pub epsilon_decay: f64,
    pub episodes: usize,
    pub history_interval: usize,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        QLearningConfig {
            alpha: 0.1,
            gamma: 0.9,
            epsilon_start: 1.0,
            epsilon_floor: 0.01,
            epsilon_decay: 0.9995,
            episodes: 30_000,
            history_interval: 1_000,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub qlearning: QLearningConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < 4 {
            return Err(ConfigError::Validation("board.rows must be >= 4".into()));
        }
        if self.board.cols < 4 {
            return Err(ConfigError::Validation("board.cols must be >= 4".into()));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if let Some(0) = self.search.deadline_ms {
            return Err(ConfigError::Validation(
                "search.deadline_ms must be > 0 when set".into(),
            ));
        }
        if self.qlearning.alpha <= 0.0 || self.qlearning.alpha > 1.0 {
            return Err(ConfigError::Validation(
                "qlearning.alpha must be in (0, 1]".into(),
            ));
        }
        if self.qlearning.gamma < 0.0 || self.qlearning.gamma > 1.0 {
            return Err(ConfigError::Validation(
                "qlearning.gamma must be in [0, 1]".into(),
            ));
        }
        if self.qlearning.epsilon_start < 0.0 || self.qlearning.epsilon_start > 1.0 {
            return Err(ConfigError::Validation(
                "qlearning.epsilon_start must be in [0, 1]".into(),
            ));
        }
        if self.qlearning.epsilon_floor < 0.0 || self.qlearning.epsilon_floor > 1.0 {
            return Err(ConfigError::Validation(
                "qlearning.epsilon_floor must be in [0, 1]".into(),
            ));
        }
        if self.qlearning.epsilon_floor > self.qlearning.epsilon_start {
            return Err(ConfigError::Validation(
                "qlearning.epsilon_floor must be <= qlearning.epsilon_start".into(),
            ));
        }
        if self.qlearning.epsilon_decay <= 0.0 || self.qlearning.epsilon_decay > 1.0 {
            return Err(ConfigError::Validation(
                "qlearning.epsilon_decay must be in (0, 1]".into(),
            ));
        }
        if self.qlearning.episodes == 0 {
            return Err(ConfigError::Validation(
                "qlearning.episodes must be > 0".into(),
            ));
        }
        if self.qlearning.history_interval == 0 {
            return Err(ConfigError::Validation(
                "qlearning.history_interval must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

use std::path::{Path, PathBuf};

use crate::core::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TOP_N};
use crate::error::ConfigError;

/// Board dimensions every level is parsed into.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LevelsConfig {
    pub dir: PathBuf,
    pub start_level: u32,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        LevelsConfig {
            dir: PathBuf::from("levels"),
            start_level: 1,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HighscoresConfig {
    pub path: PathBuf,
    pub top_n: usize,
}

impl Default for HighscoresConfig {
    fn default() -> Self {
        HighscoresConfig {
            path: PathBuf::from("highscores.json"),
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: Option<String>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_file: PathBuf,
    pub grid: GridConfig,
    pub levels: LevelsConfig,
    pub highscores: HighscoresConfig,
    pub player: PlayerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_file: PathBuf::from("sokobox.log"),
            grid: GridConfig::default(),
            levels: LevelsConfig::default(),
            highscores: HighscoresConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
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
    /// does not exist. The returned source tells the caller which one happened,
    /// since logging is usually not set up yet at this point.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width < 1 {
            return Err(ConfigError::Validation("grid.width must be >= 1".into()));
        }
        if self.grid.height < 1 {
            return Err(ConfigError::Validation("grid.height must be >= 1".into()));
        }
        if self.levels.start_level < 1 {
            return Err(ConfigError::Validation("levels.start_level must be >= 1".into()));
        }
        if self.highscores.top_n == 0 {
            return Err(ConfigError::Validation("highscores.top_n must be >= 1".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}

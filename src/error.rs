use std::path::PathBuf;

/// Errors raised while turning level text into a playable board.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("level {0} not found")]
    NotFound(String),

    #[error("failed to read level file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("grid size {rows}x{columns} must be positive in both dimensions")]
    InvalidGridSize { rows: i32, columns: i32 },

    #[error("level has no player marker '@'")]
    MissingPlayer,

    #[error("level has more than one player marker (second at row {row}, column {column})")]
    MultiplePlayers { row: usize, column: usize },

    #[error("level has {rows} rows but the grid holds only {max}")]
    TooTall { rows: usize, max: usize },

    #[error("level row {row} is {columns} wide but the grid holds only {max}")]
    TooWide { row: usize, columns: usize, max: usize },
}

/// Errors raised by the highscore table.
#[derive(Debug, thiserror::Error)]
pub enum HighscoreError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("time must be a positive number of seconds, got {0}")]
    InvalidTime(f64),

    #[error("failed to access highscore store {path}: {source}")]
    Store {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse highscore store {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

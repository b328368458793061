use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a playable level from its description file.
///
/// A failed load never touches the running session: the caller keeps the
/// previous level until a load succeeds.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("level numbers start at 1, got {0}")]
    InvalidLevelNumber(u32),

    #[error("level {level} not found at '{}'", path.display())]
    MissingLevel { level: u32, path: PathBuf },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse level {level}")]
    Parse {
        level: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("level {level}: layer '{layer}' row {row} is {found} tiles wide, expected {expected}")]
    RaggedLayer {
        level: u32,
        layer: String,
        row: usize,
        found: usize,
        expected: u32,
    },

    #[error("level {level}: layer '{layer}' has {found} rows, expected {expected}")]
    LayerHeight {
        level: u32,
        layer: String,
        found: usize,
        expected: u32,
    },
}

/// Failure to read the game configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

use std::path::PathBuf;

/// Errors raised by the game core for caller mistakes.
///
/// Expected end-of-options conditions (a full column, a finished game) are not
/// errors; they come back as [`crate::game::MoveOutcome`] variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions {height}x{width} (both must be >= 4)")]
    InvalidDimensions { height: usize, width: usize },

    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },
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
    fn test_invalid_dimensions_display() {
        let err = GameError::InvalidDimensions {
            height: 3,
            width: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 3x7 (both must be >= 4)"
        );
    }

    #[test]
    fn test_invalid_column_display() {
        let err = GameError::InvalidColumn {
            column: 9,
            width: 7,
        };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be >= 4"
        );
    }
}

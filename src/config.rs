use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Player, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};

/// Largest board side the terminal view lays out.
pub const MAX_DIMENSION: usize = 16;

/// Board size for new games.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Who moves first and what the players are called on screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: Player,
    pub one_name: String,
    pub two_name: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: Player::One,
            one_name: "Red".into(),
            two_name: "Yellow".into(),
        }
    }
}

impl PlayersConfig {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one_name,
            Player::Two => &self.two_name,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("board.rows", self.board.rows), ("board.cols", self.board.cols)] {
            if value < MIN_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{name} must be >= {MIN_DIMENSION}"
                )));
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_DIMENSION}"
                )));
            }
        }
        if self.players.one_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one_name must not be empty".into(),
            ));
        }
        if self.players.two_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two_name must not be empty".into(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.players.first, Player::One);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
cols = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.cols, 9);
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.players, PlayersConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_first_player_parses_lowercase() {
        let config: AppConfig = toml::from_str("[players]\nfirst = \"two\"\n").unwrap();
        assert_eq!(config.players.first, Player::Two);
        assert!(toml::from_str::<AppConfig>("[players]\nfirst = \"three\"\n").is_err());
    }

    #[test]
    fn test_player_names() {
        let players = PlayersConfig::default();
        assert_eq!(players.name(Player::One), "Red");
        assert_eq!(players.name(Player::Two), "Yellow");
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.board.rows = 3;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be >= 4"
        );

        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.cols = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_names() {
        let mut config = AppConfig::default();
        config.players.two_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 5

[players]
one_name = "Ada"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 5);
        assert_eq!(config.players.one_name, "Ada");
        // Others are defaults
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.players.two_name, "Yellow");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 2\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}

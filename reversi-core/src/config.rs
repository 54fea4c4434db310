//! BoardConfig - board dimensions loaded from JSON

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::board::{validate_dimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::EngineError;
use crate::game::GameState;

/// Board size for a new session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: u8,
    pub height: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardConfig {
    pub fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Load from JSON file; missing fields fall back to the default size
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: BoardConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        validate_dimensions(self.width, self.height)
    }

    /// Start a game with these dimensions
    pub fn new_game(&self) -> Result<GameState, EngineError> {
        GameState::with_size(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("reversi-config-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_is_8x8() {
        let config = BoardConfig::default();
        assert_eq!((config.width, config.height), (8, 8));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let config = BoardConfig::new(10, 6);
        config.save(&path).unwrap();

        let loaded = BoardConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let game = loaded.new_game().unwrap();
        assert_eq!((game.board().width(), game.board().height()), (10, 6));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"width": 12}"#).unwrap();
        assert_eq!(config, BoardConfig::new(12, 8));
    }

    #[test]
    fn test_load_rejects_odd_size() {
        let path = temp_path("odd");
        std::fs::write(&path, r#"{"width": 7, "height": 8}"#).unwrap();
        let err = BoardConfig::load(&path).unwrap_err();
        assert!(err.downcast_ref::<EngineError>().is_some());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        assert!(BoardConfig::load(Path::new("/nonexistent/reversi.json")).is_err());
    }
}

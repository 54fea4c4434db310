//! Shared board options for all commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use reversi_core::{BoardConfig, GameState};

#[derive(Args, Clone, Debug, Default)]
pub struct BoardArgs {
    /// Board config JSON file ({"width": 8, "height": 8})
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board width, overrides the config file
    #[arg(long)]
    pub width: Option<u8>,

    /// Board height, overrides the config file
    #[arg(long)]
    pub height: Option<u8>,
}

impl BoardArgs {
    /// Config file first, then command-line overrides
    pub fn resolve(&self) -> Result<BoardConfig> {
        let mut config = match &self.config {
            Some(path) => BoardConfig::load(path)
                .with_context(|| format!("Failed to load board config: {}", path.display()))?,
            None => BoardConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn new_game(&self) -> Result<GameState> {
        let config = self.resolve()?;
        tracing::debug!("Starting {}x{} game", config.width, config.height);
        Ok(config.new_game()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_8x8() {
        let config = BoardArgs::default().resolve().unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = BoardArgs {
            width: Some(10),
            ..Default::default()
        };
        assert_eq!(args.resolve().unwrap(), BoardConfig::new(10, 8));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = BoardArgs {
            height: Some(9),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
        assert!(args.new_game().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let args = BoardArgs {
            config: Some(PathBuf::from("/nonexistent/board.json")),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }
}

use std::time::Duration;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub width: usize,
    /// Height of the game grid in cells
    pub height: usize,
    /// Time between simulation ticks
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            tick_interval: Duration::from_millis(200),
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Reject grids no game can be played on
    ///
    /// The starting snake covers rows 0 and 1, and the initial apple goes
    /// on a row >= 2, so at least three rows are needed.
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 {
            bail!("grid width must be at least 1, got {}", self.width);
        }
        if self.height < 3 {
            bail!("grid height must be at least 3, got {}", self.height);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 20);
        assert_eq!(config.tick_interval, Duration::from_millis(200));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.width, 15);
        assert_eq!(config.height, 12);
    }

    #[test]
    fn test_degenerate_grids_rejected() {
        assert!(GameConfig::new(0, 20).validate().is_err());
        assert!(GameConfig::new(20, 0).validate().is_err());
        assert!(GameConfig::new(20, 2).validate().is_err());
        assert!(GameConfig::new(1, 3).validate().is_ok());
    }
}

//! Session configuration - grid size and gravity period.

use thiserror::Error;

use crate::types::{GRAVITY_TICKS, MAX_GRID_HEIGHT, MAX_GRID_WIDTH, MIN_GRID_HEIGHT, MIN_GRID_WIDTH};

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("grid width {0} is too narrow (minimum {min})", min = MIN_GRID_WIDTH)]
    GridTooNarrow(usize),
    #[error("grid height {0} is too short (minimum {min})", min = MIN_GRID_HEIGHT)]
    GridTooShort(usize),
    #[error("grid width {0} is too wide (maximum {max})", max = MAX_GRID_WIDTH)]
    GridTooWide(usize),
    #[error("grid height {0} is too tall (maximum {max})", max = MAX_GRID_HEIGHT)]
    GridTooTall(usize),
    #[error("gravity period must be at least one frame")]
    ZeroGravity,
}

/// Fixed parameters of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    width: usize,
    height: usize,
    gravity_ticks: u32,
}

impl GameConfig {
    /// Validate and build a config.
    pub fn new(width: usize, height: usize, gravity_ticks: u32) -> Result<Self, ConfigError> {
        if width < MIN_GRID_WIDTH {
            return Err(ConfigError::GridTooNarrow(width));
        }
        if height < MIN_GRID_HEIGHT {
            return Err(ConfigError::GridTooShort(height));
        }
        if width > MAX_GRID_WIDTH {
            return Err(ConfigError::GridTooWide(width));
        }
        if height > MAX_GRID_HEIGHT {
            return Err(ConfigError::GridTooTall(height));
        }
        if gravity_ticks == 0 {
            return Err(ConfigError::ZeroGravity);
        }
        Ok(Self {
            width,
            height,
            gravity_ticks,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn gravity_ticks(&self) -> u32 {
        self.gravity_ticks
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 20,
            gravity_ticks: GRAVITY_TICKS,
        }
    }
}

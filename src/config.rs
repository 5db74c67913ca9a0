use std::time::Duration;
use thiserror::Error;

pub const SCREEN_WIDTH: u32 = 600;
pub const SCREEN_HEIGHT: u32 = 600;
pub const CELL_WIDTH: u32 = 30;
pub const CELL_HEIGHT: u32 = 30;
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be non-zero, got {0}x{1}")]
    ZeroCell(u32, u32),
    #[error("screen {screen}px is smaller than one {cell}px cell")]
    ScreenTooSmall { screen: u32, cell: u32 },
    #[error("tick interval must be non-zero")]
    ZeroTick,
}

/// Window and timing settings. The grid size is derived from them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub tick: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Snake".to_owned(),
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            tick: TICK_INTERVAL,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::ZeroCell(self.cell_width, self.cell_height));
        }
        if self.screen_width < self.cell_width {
            return Err(ConfigError::ScreenTooSmall {
                screen: self.screen_width,
                cell: self.cell_width,
            });
        }
        if self.screen_height < self.cell_height {
            return Err(ConfigError::ScreenTooSmall {
                screen: self.screen_height,
                cell: self.cell_height,
            });
        }
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }

    pub fn grid_width(&self) -> u32 {
        self.screen_width / self.cell_width
    }

    pub fn grid_height(&self) -> u32 {
        self.screen_height / self.cell_height
    }
}

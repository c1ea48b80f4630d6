use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// A milestone is reported every time the score reaches a multiple of this
    pub milestone_interval: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            initial_snake_length: 3,
            milestone_interval: 5,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Check that the grid can hold the starting snake
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }
        if self.grid_height == 0 || self.grid_width / 2 + 1 < self.initial_snake_length {
            return Err(format!(
                "a {}x{} grid is too small for a snake of length {}",
                self.grid_width, self.grid_height, self.initial_snake_length
            ));
        }
        if self.milestone_interval == 0 {
            return Err("milestone_interval must be positive".to_string());
        }
        Ok(())
    }
}

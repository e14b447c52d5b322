use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::Position;

/// Largest playable board, in cells per side
pub const MAX_CELLS_PER_SIDE: i32 = 200;

/// Linear speed-up applied each time food is eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedUp {
    /// Milliseconds removed from the tick interval per food
    pub decrement_ms: u64,
    /// The interval never drops below this
    pub min_interval_ms: u64,
}

impl Default for SpeedUp {
    fn default() -> Self {
        Self {
            decrement_ms: 5,
            min_interval_ms: 50,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board, in board units
    pub board_size: i32,
    /// Size of one cell; every coordinate is a multiple of it
    pub grid_unit: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Head of a fresh snake; the body trails to the left of it
    pub initial_head: Position,
    /// Points for eating food
    pub food_reward: u32,
    /// Tick interval of a fresh game
    pub tick_interval_ms: u64,
    /// Shrink the tick interval on every food when set
    pub speed_up: Option<SpeedUp>,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
    /// Pointer travel, in terminal columns, that turns a tap into a swipe
    pub swipe_threshold: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 400,
            grid_unit: 20,
            initial_snake_length: 5,
            initial_head: Position::new(160, 160),
            food_reward: 10,
            tick_interval_ms: 100,
            speed_up: None,
            seed: None,
            swipe_threshold: 4,
        }
    }
}

/// Reasons a configuration cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid_unit must be positive, got {0}")]
    InvalidGridUnit(i32),

    #[error("board_size must be a positive multiple of grid_unit {grid_unit}, got {board_size}")]
    BoardNotMultiple { board_size: i32, grid_unit: i32 },

    #[error("board has {cells} cells per side, at most {max} are supported")]
    BoardTooLarge { cells: i32, max: i32 },

    #[error("initial_snake_length must be at least 1")]
    EmptySnake,

    #[error("initial snake at ({x}, {y}) with length {length} does not fit on the board")]
    SnakeOutOfBounds { x: i32, y: i32, length: usize },

    #[error("board has {cells} cells, no room for food next to a snake of length {length}")]
    BoardTooSmall { cells: i64, length: usize },

    #[error("tick_interval_ms must be positive")]
    ZeroInterval,

    #[error("speed-up floor {min_interval_ms}ms must be in 1..={tick_interval_ms}ms")]
    InvalidSpeedFloor {
        min_interval_ms: u64,
        tick_interval_ms: u64,
    },
}

impl GameConfig {
    /// Create a new configuration with a custom board
    pub fn new(board_size: i32, grid_unit: i32) -> Self {
        Self {
            board_size,
            grid_unit,
            ..Default::default()
        }
    }

    /// Enable the linear speed-up with default steps
    pub fn with_speed_up(mut self) -> Self {
        self.speed_up = Some(SpeedUp::default());
        self
    }

    /// Fix the food placement seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config in {:?}", path))
    }

    /// Number of cells along one side of the board
    pub fn cells_per_side(&self) -> i32 {
        self.board_size / self.grid_unit
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_unit <= 0 {
            return Err(ConfigError::InvalidGridUnit(self.grid_unit));
        }

        if self.board_size <= 0 || self.board_size % self.grid_unit != 0 {
            return Err(ConfigError::BoardNotMultiple {
                board_size: self.board_size,
                grid_unit: self.grid_unit,
            });
        }

        if self.cells_per_side() > MAX_CELLS_PER_SIDE {
            return Err(ConfigError::BoardTooLarge {
                cells: self.cells_per_side(),
                max: MAX_CELLS_PER_SIDE,
            });
        }

        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }

        let head = self.initial_head;
        let tail_x =
            head.x as i64 - (self.initial_snake_length as i64 - 1) * self.grid_unit as i64;
        let on_grid = head.x % self.grid_unit == 0 && head.y % self.grid_unit == 0;
        let inside = tail_x >= 0
            && head.x < self.board_size
            && (0..self.board_size).contains(&head.y);
        if !on_grid || !inside {
            return Err(ConfigError::SnakeOutOfBounds {
                x: head.x,
                y: head.y,
                length: self.initial_snake_length,
            });
        }

        let cells = self.cells_per_side() as i64 * self.cells_per_side() as i64;
        if cells <= self.initial_snake_length as i64 {
            return Err(ConfigError::BoardTooSmall {
                cells,
                length: self.initial_snake_length,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if let Some(speed_up) = self.speed_up {
            if speed_up.min_interval_ms == 0 || speed_up.min_interval_ms > self.tick_interval_ms {
                return Err(ConfigError::InvalidSpeedFloor {
                    min_interval_ms: speed_up.min_interval_ms,
                    tick_interval_ms: self.tick_interval_ms,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 400);
        assert_eq!(config.grid_unit, 20);
        assert_eq!(config.initial_snake_length, 5);
        assert_eq!(config.food_reward, 10);
        assert_eq!(config.cells_per_side(), 20);
        assert!(config.speed_up.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_speed_up_defaults() {
        let config = GameConfig::default().with_speed_up();
        assert_eq!(
            config.speed_up,
            Some(SpeedUp {
                decrement_ms: 5,
                min_interval_ms: 50
            })
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_must_be_grid_multiple() {
        let config = GameConfig::new(410, 20);
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardNotMultiple {
                board_size: 410,
                grid_unit: 20
            })
        );
        assert_eq!(
            GameConfig::new(400, 0).validate(),
            Err(ConfigError::InvalidGridUnit(0))
        );
    }

    #[test]
    fn test_board_size_capped() {
        assert_eq!(
            GameConfig::new(40000, 1).validate(),
            Err(ConfigError::BoardTooLarge {
                cells: 40000,
                max: MAX_CELLS_PER_SIDE
            })
        );

        let mut config = GameConfig::new(200, 1);
        config.initial_head = Position::new(100, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_snake_must_fit() {
        let mut config = GameConfig::default();
        config.initial_head = Position::new(60, 160);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SnakeOutOfBounds { .. })
        ));

        config.initial_head = Position::new(170, 160);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SnakeOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_board_needs_room_for_food() {
        let mut config = GameConfig::new(40, 20);
        config.initial_snake_length = 2;
        config.initial_head = Position::new(20, 0);
        assert!(config.validate().is_ok());

        let mut config = GameConfig::new(20, 20);
        config.initial_snake_length = 1;
        config.initial_head = Position::new(0, 0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooSmall {
                cells: 1,
                length: 1
            })
        );
    }

    #[test]
    fn test_speed_floor_above_interval_rejected() {
        let mut config = GameConfig::default();
        config.speed_up = Some(SpeedUp {
            decrement_ms: 5,
            min_interval_ms: 150,
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSpeedFloor {
                min_interval_ms: 150,
                tick_interval_ms: 100
            })
        );
    }

    #[test]
    fn test_load_partial_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(
            &path,
            r#"{ "tick_interval_ms": 120, "speed_up": { "decrement_ms": 10, "min_interval_ms": 60 } }"#,
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.tick_interval_ms, 120);
        assert_eq!(config.board_size, 400);
        assert_eq!(config.speed_up.unwrap().decrement_ms, 10);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(GameConfig::load(&dir.path().join("nope.json")).is_err());
    }
}

use serde::{Deserialize, Serialize};

use super::action::{Direction, propose_direction};

/// Body cells before this index never count as a self collision.
///
/// A head turning tightly into segment 3 survives. This is the game's rule,
/// keep it at 4.
pub const SELF_COLLISION_SKIP: usize = 4;

/// A cell on the board, in board units (multiples of the grid unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one grid unit in a direction
    pub fn moved_in_direction(&self, direction: Direction, grid_unit: i32) -> Self {
        let (dx, dy) = direction.delta(grid_unit);
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake whose body trails behind `head`, opposite to `facing`
    pub fn new(head: Position, facing: Direction, length: usize, grid_unit: i32) -> Self {
        let (dx, dy) = facing.delta(grid_unit);
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self {
            body,
            direction: facing,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check whether `pos` hits the body at index 4 or later
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body
            .iter()
            .skip(SELF_COLLISION_SKIP)
            .any(|&segment| segment == pos)
    }

    /// Check if any segment, head included, occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Move snake one grid unit in its direction, growing if should_grow is true
    pub fn move_snake(&mut self, grid_unit: i32, should_grow: bool) {
        let new_head = self.head().moved_in_direction(self.direction, grid_unit);
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// Snake covers the whole board, nowhere left for food
    BoardFull,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Side length of the square board, in board units
    pub board_size: i32,
    pub grid_unit: i32,
    pub score: u32,
    pub steps: u32,
    /// Current tick interval in milliseconds
    pub tick_interval_ms: u64,
    /// Set once a turn was accepted in the current tick
    pub turn_locked: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(
        snake: Snake,
        food: Position,
        board_size: i32,
        grid_unit: i32,
        tick_interval_ms: u64,
    ) -> Self {
        Self {
            snake,
            food,
            board_size,
            grid_unit,
            score: 0,
            steps: 0,
            tick_interval_ms,
            turn_locked: false,
        }
    }

    /// Number of cells along one side of the board
    pub fn cells_per_side(&self) -> i32 {
        self.board_size / self.grid_unit
    }

    /// Check if a position is within the board bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        (0..self.board_size).contains(&pos.x) && (0..self.board_size).contains(&pos.y)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// Apply a turn request, honoring the one-turn-per-tick lock.
    ///
    /// Returns true if the heading changed.
    pub fn request_turn(&mut self, requested: Direction) -> bool {
        if self.turn_locked {
            return false;
        }

        match propose_direction(self.snake.direction, requested) {
            Some(direction) => {
                self.snake.direction = direction;
                self.turn_locked = true;
                true
            }
            None => false,
        }
    }
}

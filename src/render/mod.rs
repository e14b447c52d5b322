pub mod renderer;
pub mod terminal;

pub use renderer::{Hud, Renderer};
pub use terminal::TerminalSink;

use anyhow::Result;

use crate::game::{Phase, Position};

/// Read-only snapshot handed to a render sink
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// Head first
    pub snake: &'a [Position],
    pub food: Position,
    pub board_size: i32,
    pub grid_unit: i32,
    pub score: u32,
    pub high_score: u32,
    pub phase: Phase,
    pub tick_interval_ms: u64,
}

impl BoardView<'_> {
    pub fn cells_per_side(&self) -> i32 {
        self.board_size / self.grid_unit
    }
}

/// Where the session sends frames and the game over notice
pub trait RenderSink {
    /// Clear and redraw the whole board
    fn draw(&mut self, view: &BoardView<'_>) -> Result<()>;

    /// A run just ended. Must not block the tick loop.
    fn game_over(&mut self, score: u32, high_score: u32) -> Result<()>;
}

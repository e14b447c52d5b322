//! High score storage
//!
//! The game only ever persists one number. Reads never fail: anything
//! missing or unreadable counts as a high score of 0.

pub mod file_store;

pub use file_store::JsonFileStore;

use anyhow::Result;

/// Durable scalar store for the high score
pub trait HighScoreStore {
    /// Stored high score, 0 when absent
    fn high_score(&self) -> u32;

    fn set_high_score(&mut self, score: u32) -> Result<()>;
}

/// Store that lives as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    high_score: u32,
}

impl MemoryStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl HighScoreStore for MemoryStore {
    fn high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, score: u32) -> Result<()> {
        self.high_score = score;
        Ok(())
    }
}

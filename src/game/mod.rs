//! Core game logic module for Snake
//!
//! Everything here is synchronous and free of terminal I/O. The session
//! reaches rendering and storage only through the `RenderSink` and
//! `HighScoreStore` traits.

pub mod action;
pub mod config;
pub mod engine;
pub mod sampler;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction, propose_direction};
pub use config::{ConfigError, GameConfig, SpeedUp};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use sampler::FoodSampler;
pub use session::{Phase, Session, TickReport};
pub use state::{CollisionType, GameState, Position, SELF_COLLISION_SKIP, Snake};

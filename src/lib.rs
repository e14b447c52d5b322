//! Grid Snake - the classic arcade snake on a square grid
//!
//! This library provides:
//! - Core game logic and the Idle/Running session (game module)
//! - Terminal rendering behind a render sink (render module)
//! - Keyboard and pointer input mapping (input module)
//! - High score storage (persistence module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;

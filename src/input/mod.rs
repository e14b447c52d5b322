pub mod gesture;
pub mod handler;

pub use gesture::{GestureTracker, Point};
pub use handler::{InputHandler, KeyAction};

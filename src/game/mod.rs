//! Core game logic module
//!
//! All the game rules live here, with no I/O or rendering dependencies.
//! The engine exposes explicit entry points (`start`, `set_direction`,
//! `tick`, `end`) and holds no timers; the host loop owns scheduling.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickResult};
pub use state::{GameOutcome, GameState, Position, Snake};

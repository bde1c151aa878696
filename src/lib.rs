//! Grid snake for the terminal
//!
//! This library provides:
//! - Core game logic (game module): a tick-driven engine with no I/O
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session stats (metrics module)
//! - The tokio host loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;

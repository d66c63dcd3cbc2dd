//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Steering is
//! edge-triggered: the engine buffers one direction per tick, so key repeat
//! needs no special handling here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};

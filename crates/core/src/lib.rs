//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is reachable through `GameState` without a terminal
//! - **Portable**: Can run in any environment (terminal, headless, replays)
//!
//! # Module Structure
//!
//! - [`game_state`]: Complete game state: direction buffering, ticks, scoring, speed
//! - [`snake`]: Ordered body cells, head first
//! - [`food`]: Uniform food placement that always terminates
//! - [`rng`]: Small seeded LCG
//! - [`snapshot`]: Render-facing copy of the state
//!
//! # Game Rules
//!
//! - **Buffered steering**: the last legal request before a tick wins; reversing
//!   into the committed direction is ignored
//! - **Strict self collision**: the head may not enter the cell the tail is
//!   about to leave
//! - **Speed ramp**: each food shortens the tick interval by 2ms, down to 60ms
//! - **Cleared board**: filling every cell ends the run instead of stalling
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, TickOutcome};
//! use tui_snake_types::{Coordinate, Direction, INITIAL_SPEED_MS};
//!
//! let mut game = GameState::new(12345);
//! game.start(INITIAL_SPEED_MS);
//! game.set_food(Coordinate::new(0, 0));
//!
//! game.request_direction(Direction::Down);
//! assert_eq!(game.tick(), TickOutcome::Moved);
//! assert_eq!(game.snake().head(), Coordinate::new(10, 11));
//! ```

pub mod food;
pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::place_food;
pub use game_state::{CoreEvent, GameEnd, GameState, TickOutcome};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;

//! Session engine: runs the core game against wall-clock time.
//!
//! The core [`GameState`](tui_snake_core::GameState) knows nothing about time.
//! This crate adds:
//!
//! - [`TickScheduler`]: the single recurring tick schedule, replaced whenever
//!   the interval changes
//! - [`CommentaryDisplay`]: commentary lines that disappear after 3 seconds
//! - [`Session`]: owns both, applies player actions, and forwards core events to
//!   the [`AudioSink`] and [`Commentator`] collaborators
//!
//! The event loop only has to feed it actions and the current `Instant`, and
//! sleep for [`Session::next_deadline`] in between.

pub mod collab;
pub mod config;
pub mod display;
pub mod scheduler;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use collab::{AudioSink, Commentator, CommentaryReply, Silent};
pub use config::SessionConfig;
pub use display::CommentaryDisplay;
pub use scheduler::TickScheduler;
pub use session::Session;

//! Asynchronous game commentary.
//!
//! Providers ([`ScriptedProvider`], [`CommandProvider`]) produce announcer
//! lines and post-game reports. [`CommentaryClient`] runs them on a tokio
//! runtime without blocking the game loop and implements the engine's
//! [`Commentator`](tui_snake_engine::Commentator) seam.

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod provider;

pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use client::CommentaryClient;
pub use config::{CommentaryConfig, ProviderKind};
pub use error::CommentaryError;
pub use protocol::{debrief_fallback, parse_commentary, parse_debrief, Request};
pub use provider::{score_rating, CommandProvider, CommentaryProvider, ScriptedProvider};

//! Terminal rendering for the snake game.
//!
//! Renders into a simple framebuffer that is diffed and flushed to the
//! terminal, rather than going through a widget toolkit. Board cells are two
//! columns wide to keep them roughly square.

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use audio::BellSink;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

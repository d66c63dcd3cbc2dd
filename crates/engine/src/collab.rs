//! Collaborator seams: audio cues and commentary.
//!
//! Both are fire-and-forget from the session's point of view. A commentator
//! hands replies back through `poll_reply`, which must never block.

use crate::types::{Commentary, Debrief, GameEvent, GameStats};

/// Receives one-shot sound cues.
pub trait AudioSink {
    fn play(&mut self, event: GameEvent);
}

/// A reply produced asynchronously by a [`Commentator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentaryReply {
    Line(Commentary),
    /// Report for the run numbered `run` (see [`GameStats::run`]).
    Debrief { run: u32, report: Debrief },
}

/// Asynchronous commentary service as seen from the game loop.
pub trait Commentator {
    /// Ask for a line about `event` at `score`. Must return immediately.
    fn request_commentary(&mut self, event: GameEvent, score: u32);

    /// Ask for a post-game report. Must return immediately.
    fn request_debrief(&mut self, stats: GameStats);

    /// Next finished reply, if any.
    fn poll_reply(&mut self) -> Option<CommentaryReply>;
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _event: GameEvent) {}
}

impl Commentator for Silent {
    fn request_commentary(&mut self, _event: GameEvent, _score: u32) {}

    fn request_debrief(&mut self, _stats: GameStats) {}

    fn poll_reply(&mut self) -> Option<CommentaryReply> {
        None
    }
}

impl<T: AudioSink> AudioSink for Option<T> {
    fn play(&mut self, event: GameEvent) {
        if let Some(inner) = self {
            inner.play(event);
        }
    }
}

impl<T: Commentator> Commentator for Option<T> {
    fn request_commentary(&mut self, event: GameEvent, score: u32) {
        if let Some(inner) = self {
            inner.request_commentary(event, score);
        }
    }

    fn request_debrief(&mut self, stats: GameStats) {
        if let Some(inner) = self {
            inner.request_debrief(stats);
        }
    }

    fn poll_reply(&mut self) -> Option<CommentaryReply> {
        self.as_mut().and_then(|inner| inner.poll_reply())
    }
}

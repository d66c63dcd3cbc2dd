//! Terminal bell as an audio sink.

use std::io::{self, Write};

use crate::engine::AudioSink;
use crate::types::GameEvent;

const BEL: u8 = 0x07;

/// Rings the terminal bell on start, food and death.
///
/// Write failures are ignored: a missing beep never interrupts a game.
pub struct BellSink<W: Write = io::Stdout> {
    out: W,
}

impl BellSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for BellSink<W> {
    fn play(&mut self, event: GameEvent) {
        let rings = match event {
            GameEvent::Start | GameEvent::Eat => 1,
            GameEvent::Die => 2,
        };
        for _ in 0..rings {
            if self.out.write_all(&[BEL]).is_err() {
                return;
            }
        }
        let _ = self.out.flush();
    }
}

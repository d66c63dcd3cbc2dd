//! On-screen commentary with a fixed lifetime.
//!
//! Last write wins: a newer line replaces the current one and restarts the
//! timer.

use std::time::{Duration, Instant};

use crate::types::{Commentary, COMMENTARY_DISPLAY_MS};

#[derive(Debug, Clone)]
pub struct CommentaryDisplay {
    current: Option<(Commentary, Instant)>,
    ttl: Duration,
}

impl CommentaryDisplay {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_millis(COMMENTARY_DISPLAY_MS as u64))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, commentary: Commentary, now: Instant) {
        self.current = Some((commentary, now + self.ttl));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drop the line if its time is up. Returns true if something was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.current {
            Some((_, until)) if now >= until => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Commentary> {
        self.current.as_ref().map(|(c, _)| c)
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.current.as_ref().map(|(_, until)| *until)
    }
}

impl Default for CommentaryDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mood;

    #[test]
    fn test_line_expires_after_ttl() {
        let mut d = CommentaryDisplay::new();
        let t0 = Instant::now();
        d.show(Commentary::new("hi", Mood::Neutral), t0);

        assert!(!d.expire(t0 + Duration::from_millis(2999)));
        assert_eq!(d.current().map(|c| c.text.as_str()), Some("hi"));
        assert!(d.expire(t0 + Duration::from_millis(3000)));
        assert!(d.current().is_none());
        assert!(!d.expire(t0 + Duration::from_millis(3001)));
    }

    #[test]
    fn test_newer_line_wins_and_restarts_timer() {
        let mut d = CommentaryDisplay::new();
        let t0 = Instant::now();
        d.show(Commentary::new("first", Mood::Neutral), t0);
        d.show(
            Commentary::new("second", Mood::Excited),
            t0 + Duration::from_millis(2000),
        );

        assert!(!d.expire(t0 + Duration::from_millis(3500)));
        assert_eq!(d.current().map(|c| c.mood), Some(Mood::Excited));
        assert_eq!(d.expires_at(), Some(t0 + Duration::from_millis(5000)));
    }
}

//! Recurring tick schedule.
//!
//! The session owns exactly one `TickScheduler`, and the scheduler holds at
//! most one schedule. Starting or rescheduling replaces the previous schedule
//! outright, so two overlapping tick loops cannot exist.
//!
//! Time is passed in by the caller, which keeps the scheduler deterministic in
//! tests and lets the event loop use it to compute its poll timeout.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Schedule {
    interval: Duration,
    next_due: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    active: Option<Schedule>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Install a schedule firing every `interval`, first one `interval` after `now`.
    ///
    /// Any previous schedule is dropped.
    pub fn start(&mut self, interval: Duration, now: Instant) {
        self.active = Some(Schedule {
            interval,
            next_due: now + interval,
        });
    }

    /// Replace the running schedule with one at `interval`.
    ///
    /// Returns false (and installs nothing) when stopped.
    pub fn reschedule(&mut self, interval: Duration, now: Instant) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.start(interval, now);
        true
    }

    pub fn stop(&mut self) {
        self.active = None;
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.active.map(|s| s.interval)
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.active.map(|s| s.next_due)
    }

    /// Time left until the next tick, zero if overdue.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.active
            .map(|s| s.next_due.saturating_duration_since(now))
    }

    /// Consume a due tick.
    ///
    /// Fires at most once per call. The next deadline stays on the same
    /// grid (`due + interval`) unless the caller has fallen a whole interval
    /// behind, in which case it restarts from `now` instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(s) = self.active.as_mut() else {
            return false;
        };
        if now < s.next_due {
            return false;
        }
        let next = s.next_due + s.interval;
        s.next_due = if next <= now { now + s.interval } else { next };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_stopped_scheduler_never_fires() {
        let mut s = TickScheduler::new();
        let t0 = Instant::now();
        assert!(!s.poll(t0 + ms(10_000)));
        assert!(s.time_until_due(t0).is_none());
        assert!(!s.reschedule(ms(100), t0));
        assert!(!s.is_running());
    }

    #[test]
    fn test_fires_on_interval_grid() {
        let mut s = TickScheduler::new();
        let t0 = Instant::now();
        s.start(ms(100), t0);

        assert!(!s.poll(t0 + ms(99)));
        assert!(s.poll(t0 + ms(100)));
        assert!(!s.poll(t0 + ms(150)));
        // Late by 20ms: the next one is still due at 300, not 320.
        assert!(s.poll(t0 + ms(220)));
        assert_eq!(s.next_due(), Some(t0 + ms(300)));
    }

    #[test]
    fn test_falling_behind_does_not_burst() {
        let mut s = TickScheduler::new();
        let t0 = Instant::now();
        s.start(ms(100), t0);

        assert!(s.poll(t0 + ms(1000)));
        assert!(!s.poll(t0 + ms(1000)));
        assert_eq!(s.next_due(), Some(t0 + ms(1100)));
    }

    #[test]
    fn test_reschedule_replaces_schedule() {
        let mut s = TickScheduler::new();
        let t0 = Instant::now();
        s.start(ms(150), t0);
        assert!(s.reschedule(ms(148), t0 + ms(150)));

        assert_eq!(s.interval(), Some(ms(148)));
        assert_eq!(s.next_due(), Some(t0 + ms(298)));
        // The old 300ms deadline is gone.
        assert!(!s.poll(t0 + ms(297)));
        assert!(s.poll(t0 + ms(298)));
    }

    #[test]
    fn test_stop_cancels() {
        let mut s = TickScheduler::new();
        let t0 = Instant::now();
        s.start(ms(50), t0);
        s.stop();
        assert!(!s.poll(t0 + ms(500)));
        assert_eq!(s.interval(), None);
    }

    #[test]
    fn test_time_until_due_saturates() {
        let mut s = TickScheduler::new();
        let t0 = Instant::now();
        s.start(ms(100), t0);
        assert_eq!(s.time_until_due(t0 + ms(40)), Some(ms(60)));
        assert_eq!(s.time_until_due(t0 + ms(400)), Some(Duration::ZERO));
    }
}

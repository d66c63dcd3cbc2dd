//! Game session: core state + tick schedule + collaborators.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::collab::{AudioSink, Commentator, CommentaryReply};
use crate::config::SessionConfig;
use crate::core::{GameSnapshot, GameState, TickOutcome};
use crate::display::CommentaryDisplay;
use crate::scheduler::TickScheduler;
use crate::types::{
    Commentary, Debrief, GameAction, GameStats, GameStatus, SLIDER_MAX_DELAY_MS,
    SLIDER_MIN_DELAY_MS, SPEED_SETTING_STEP_MS,
};

pub struct Session<C, A> {
    state: GameState,
    scheduler: TickScheduler,
    display: CommentaryDisplay,
    debrief: Option<Debrief>,
    /// Bumped on every start; debriefs for other runs are dropped.
    run: u32,
    /// Interval the next game starts at.
    initial_speed_ms: u32,
    started_at: Option<Instant>,
    commentator: C,
    audio: A,
}

impl<C: Commentator, A: AudioSink> Session<C, A> {
    pub fn new(config: &SessionConfig, commentator: C, audio: A) -> Self {
        Self {
            state: GameState::with_board(config.board, config.seed),
            scheduler: TickScheduler::new(),
            display: CommentaryDisplay::new(),
            debrief: None,
            run: 0,
            initial_speed_ms: config.initial_speed_ms,
            started_at: None,
            commentator,
            audio,
        }
    }

    /// Apply a player action. Returns true if anything visible changed.
    pub fn handle_action(&mut self, action: GameAction, now: Instant) -> bool {
        match action {
            GameAction::ChangeDirection(dir) => {
                self.state.request_direction(dir);
                // Buffered until the next tick; nothing to redraw yet.
                false
            }
            GameAction::Start => match self.state.status() {
                GameStatus::Idle | GameStatus::GameOver => {
                    self.start_game(now);
                    true
                }
                _ => false,
            },
            GameAction::Exit => {
                self.exit_to_idle();
                true
            }
            GameAction::Pause => self.toggle_pause(now),
            GameAction::SpeedFaster => {
                self.adjust_initial_speed(-(SPEED_SETTING_STEP_MS as i64))
            }
            GameAction::SpeedSlower => self.adjust_initial_speed(SPEED_SETTING_STEP_MS as i64),
        }
    }

    /// Run everything that is due at `now`.
    ///
    /// Picks up commentary replies, expires the displayed line, and runs at
    /// most one tick. Returns true if anything visible changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;

        while let Some(reply) = self.commentator.poll_reply() {
            match reply {
                CommentaryReply::Line(line) => {
                    self.display.show(line, now);
                    changed = true;
                }
                CommentaryReply::Debrief { run, report } => {
                    // Only the run whose game-over screen is showing.
                    if run == self.run && self.state.status() == GameStatus::GameOver {
                        self.debrief = Some(report);
                        changed = true;
                    } else {
                        debug!(run, current = self.run, "dropped stale debrief");
                    }
                }
            }
        }

        if self.display.expire(now) {
            changed = true;
        }

        if self.scheduler.poll(now) {
            self.run_tick(now);
            changed = true;
        }

        changed
    }

    /// How long the event loop may wait before something is due.
    ///
    /// `None` means nothing is scheduled; wait for input.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        let tick = self.scheduler.time_until_due(now);
        let expiry = self
            .display
            .expires_at()
            .map(|t| t.saturating_duration_since(now));
        match (tick, expiry) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scenario setup (placing the snake or food).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn commentary(&self) -> Option<&Commentary> {
        self.display.current()
    }

    pub fn debrief(&self) -> Option<&Debrief> {
        self.debrief.as_ref()
    }

    pub fn initial_speed_ms(&self) -> u32 {
        self.initial_speed_ms
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn commentator(&self) -> &C {
        &self.commentator
    }

    pub fn commentator_mut(&mut self) -> &mut C {
        &mut self.commentator
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    fn start_game(&mut self, now: Instant) {
        self.display.clear();
        self.debrief = None;
        self.run = self.run.wrapping_add(1);
        self.state.start(self.initial_speed_ms);
        self.scheduler.start(interval(&self.state), now);
        self.started_at = Some(now);
        info!(
            initial_speed_ms = self.initial_speed_ms,
            high_score = self.state.high_score(),
            "game started"
        );
        self.dispatch_events();
    }

    fn exit_to_idle(&mut self) {
        self.state.exit_to_idle();
        self.scheduler.stop();
        self.display.clear();
        self.debrief = None;
        self.started_at = None;
        debug!("returned to idle");
    }

    fn toggle_pause(&mut self, now: Instant) -> bool {
        if !self.state.toggle_pause() {
            return false;
        }
        if self.state.status() == GameStatus::Paused {
            self.scheduler.stop();
        } else {
            self.scheduler.start(interval(&self.state), now);
        }
        debug!(status = self.state.status().as_str(), "pause toggled");
        true
    }

    fn adjust_initial_speed(&mut self, delta_ms: i64) -> bool {
        if matches!(
            self.state.status(),
            GameStatus::Playing | GameStatus::Paused
        ) {
            return false;
        }
        let next = (self.initial_speed_ms as i64 + delta_ms)
            .clamp(SLIDER_MIN_DELAY_MS as i64, SLIDER_MAX_DELAY_MS as i64) as u32;
        if next == self.initial_speed_ms {
            return false;
        }
        self.initial_speed_ms = next;
        true
    }

    fn run_tick(&mut self, now: Instant) {
        let before = self.state.interval_ms();
        let outcome = self.state.tick();

        match outcome {
            TickOutcome::Ended(end) => {
                self.scheduler.stop();
                info!(
                    ?end,
                    score = self.state.score(),
                    moves = self.state.moves(),
                    "game over"
                );
            }
            TickOutcome::Ate if self.state.interval_ms() != before => {
                self.scheduler.reschedule(interval(&self.state), now);
                debug!(
                    score = self.state.score(),
                    interval_ms = self.state.interval_ms(),
                    "speed up"
                );
            }
            _ => {}
        }

        self.dispatch_events();

        if let TickOutcome::Ended(_) = outcome {
            let duration_secs = self
                .started_at
                .map(|t| now.saturating_duration_since(t).as_secs())
                .unwrap_or(0);
            self.commentator.request_debrief(GameStats {
                run: self.run,
                score: self.state.score(),
                moves: self.state.moves(),
                duration_secs,
            });
        }
    }

    fn dispatch_events(&mut self) {
        for ev in self.state.take_events() {
            self.audio.play(ev.event);
            if ev.wants_commentary() {
                self.commentator.request_commentary(ev.event, ev.score);
            }
        }
    }
}

fn interval(state: &GameState) -> Duration {
    Duration::from_millis(state.interval_ms() as u64)
}

//! Game state module - manages the complete game state
//!
//! Ties together the snake, food placement, scoring, and speed ramping, and
//! drives the status machine (idle, playing, paused, game over). The tick is a
//! pure function of the state: no clocks, no I/O. Scheduling lives in the
//! engine crate.

use arrayvec::ArrayVec;

use crate::food::place_food;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Notification for the audio and commentary collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreEvent {
    pub event: GameEvent,
    /// Score after the event (final score for `Die`).
    pub score: u32,
}

impl CoreEvent {
    /// Start and death always get commentary; food only on every fifth point.
    pub fn wants_commentary(&self) -> bool {
        match self.event {
            GameEvent::Start | GameEvent::Die => true,
            GameEvent::Eat => self.score % COMMENTARY_SCORE_INTERVAL == 0,
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Wall,
    SelfCollision,
    /// The snake filled the board; there is nowhere left to put food.
    BoardCleared,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing happened.
    Idle,
    Moved,
    Ate,
    Ended(GameEnd),
}

/// Events queued between drains. The session drains after every tick.
const EVENT_CAPACITY: usize = 8;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: BoardSize,
    snake: Snake,
    food: Coordinate,
    /// Direction applied on the most recent tick; reversals are filtered against it.
    direction: Direction,
    /// Latest accepted request, applied on the next tick.
    pending: Direction,
    status: GameStatus,
    score: u32,
    high_score: u32,
    interval_ms: u32,
    /// Successful moves in the current run.
    moves: u32,
    board_cleared: bool,
    rng: SimpleRng,
    events: ArrayVec<CoreEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a new idle game on the standard 25x25 board
    pub fn new(seed: u32) -> Self {
        Self::with_board(BoardSize::default(), seed)
    }

    /// Create a new idle game on a custom board
    pub fn with_board(board: BoardSize, seed: u32) -> Self {
        Self {
            board,
            snake: Snake::new(START_POSITION),
            food: IDLE_FOOD_POSITION,
            direction: Direction::Right,
            pending: Direction::Right,
            status: GameStatus::Idle,
            score: 0,
            high_score: 0,
            interval_ms: INITIAL_SPEED_MS,
            moves: 0,
            board_cleared: false,
            rng: SimpleRng::new(seed),
            events: ArrayVec::new(),
        }
    }

    /// Start (or restart) a run at the given tick interval.
    ///
    /// High score survives; everything else is reset.
    pub fn start(&mut self, initial_speed_ms: u32) {
        self.snake.reset(START_POSITION);
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.moves = 0;
        self.board_cleared = false;
        self.interval_ms = initial_speed_ms.max(1);
        self.food = place_food(&mut self.rng, self.board, &self.snake).unwrap_or(self.food);
        self.status = GameStatus::Playing;
        self.push_event(GameEvent::Start);
    }

    /// Return to the title screen. The high score is kept.
    pub fn exit_to_idle(&mut self) {
        self.status = GameStatus::Idle;
        self.score = 0;
    }

    /// Flip between playing and paused. Returns true if the status changed.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                true
            }
            _ => false,
        }
    }

    /// Buffer a direction change for the next tick.
    ///
    /// Ignored unless playing, and ignored when it would reverse the committed
    /// direction. The last accepted request before a tick wins.
    pub fn request_direction(&mut self, dir: Direction) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        if dir.is_opposite(self.direction) {
            return false;
        }
        self.pending = dir;
        true
    }

    /// Advance the simulation by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Idle;
        }

        self.direction = self.pending;
        let next = self.snake.next_head(self.direction);

        if !self.board.contains(next) {
            self.end_game();
            return TickOutcome::Ended(GameEnd::Wall);
        }

        // Checked against the whole body: the tail has not moved out yet.
        if self.snake.occupies(next) {
            self.end_game();
            return TickOutcome::Ended(GameEnd::SelfCollision);
        }

        self.snake.push_head(next);
        self.moves = self.moves.wrapping_add(1);

        if next != self.food {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score += 1;
        self.speed_up();
        self.push_event(GameEvent::Eat);

        match place_food(&mut self.rng, self.board, &self.snake) {
            Some(food) => {
                self.food = food;
                TickOutcome::Ate
            }
            None => {
                self.board_cleared = true;
                self.end_game();
                TickOutcome::Ended(GameEnd::BoardCleared)
            }
        }
    }

    /// Take the queued notifications.
    pub fn take_events(&mut self) -> ArrayVec<CoreEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coordinate {
        self.food
    }

    pub fn board(&self) -> BoardSize {
        self.board
    }

    pub fn board_cleared(&self) -> bool {
        self.board_cleared
    }

    /// Replace the snake. Used to set up scenarios and replays.
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    /// Move the food. Used to set up scenarios and replays.
    pub fn set_food(&mut self, food: Coordinate) {
        self.food = food;
    }

    /// Force both the committed and pending direction.
    pub fn set_direction(&mut self, dir: Direction) {
        self.direction = dir;
        self.pending = dir;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board;
        out.snake.clear();
        out.snake.extend(self.snake.segments());
        out.food = self.food;
        out.direction = self.direction;
        out.status = self.status;
        out.score = self.score;
        out.high_score = self.high_score;
        out.interval_ms = self.interval_ms;
        out.moves = self.moves;
        out.board_cleared = self.board_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Shorten the interval after food, clamped at the floor.
    fn speed_up(&mut self) {
        self.interval_ms = self
            .interval_ms
            .saturating_sub(SPEED_DECREMENT_MS)
            .max(MIN_SPEED_MS);
    }

    fn end_game(&mut self) {
        self.status = GameStatus::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.push_event(GameEvent::Die);
    }

    fn push_event(&mut self, event: GameEvent) {
        // Overflow only happens if nobody drains; the newest event is dropped.
        let _ = self.events.try_push(CoreEvent {
            event,
            score: self.score,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

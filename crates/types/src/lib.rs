//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, commentary service).
//!
//! # Board Dimensions
//!
//! - **Width**: 25 columns (indexed 0-24)
//! - **Height**: 25 rows (indexed 0-24)
//! - **Start position**: (10, 10), heading right
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 150 | Default tick interval at game start |
//! | `MIN_SPEED_MS` | 60 | Floor reached by eating food |
//! | `SPEED_DECREMENT_MS` | 2 | Interval reduction per food eaten |
//! | `SLIDER_MIN_DELAY_MS` | 50 | Fastest selectable initial speed |
//! | `SLIDER_MAX_DELAY_MS` | 300 | Slowest selectable initial speed |
//! | `COMMENTARY_DISPLAY_MS` | 3000 | How long a commentary line stays on screen |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Coordinate, Direction, GameEvent, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let head = Coordinate::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Coordinate::new(11, 10));
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//!
//! assert_eq!(GameEvent::Eat.as_str(), "eat");
//!
//! assert_eq!(BOARD_WIDTH, 25);
//! assert_eq!(BOARD_HEIGHT, 25);
//! ```

/// Board width in cells (25 columns)
pub const BOARD_WIDTH: u8 = 25;

/// Board height in cells (25 rows)
pub const BOARD_HEIGHT: u8 = 25;

/// Single-segment starting position of every new game.
pub const START_POSITION: Coordinate = Coordinate { x: 10, y: 10 };

/// Food shown on the board before the first game starts.
pub const IDLE_FOOD_POSITION: Coordinate = Coordinate { x: 15, y: 15 };

/// Default tick interval in milliseconds.
pub const INITIAL_SPEED_MS: u32 = 150;

/// Tick interval floor reached by eating food.
pub const MIN_SPEED_MS: u32 = 60;

/// Tick interval reduction per food eaten.
pub const SPEED_DECREMENT_MS: u32 = 2;

/// Fastest initial speed a player can select.
pub const SLIDER_MIN_DELAY_MS: u32 = 50;

/// Slowest initial speed a player can select.
pub const SLIDER_MAX_DELAY_MS: u32 = 300;

/// Step applied by one speed-setting key press.
pub const SPEED_SETTING_STEP_MS: u32 = 10;

/// How long a commentary line stays visible.
pub const COMMENTARY_DISPLAY_MS: u32 = 3000;

/// Food events only ask for commentary on multiples of this score.
pub const COMMENTARY_SCORE_INTERVAL: u32 = 5;

/// Clamp a requested initial speed into the selectable range.
///
/// ```
/// use tui_snake_types::clamp_initial_speed;
///
/// assert_eq!(clamp_initial_speed(10), 50);
/// assert_eq!(clamp_initial_speed(150), 150);
/// assert_eq!(clamp_initial_speed(1000), 300);
/// ```
pub fn clamp_initial_speed(ms: u32) -> u32 {
    ms.clamp(SLIDER_MIN_DELAY_MS, SLIDER_MAX_DELAY_MS)
}

/// Ticks per second for a given interval, rounded like the scoreboard shows it.
pub fn ticks_per_second(interval_ms: u32) -> u32 {
    if interval_ms == 0 {
        return 0;
    }
    (1000 + interval_ms / 2) / interval_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(INITIAL_SPEED_MS, 150);
        assert_eq!(MIN_SPEED_MS, 60);
        assert_eq!(SPEED_DECREMENT_MS, 2);
        assert_eq!(SLIDER_MIN_DELAY_MS, 50);
        assert_eq!(SLIDER_MAX_DELAY_MS, 300);
        assert_eq!(COMMENTARY_DISPLAY_MS, 3000);
    }

    #[test]
    fn test_ticks_per_second_rounds() {
        assert_eq!(ticks_per_second(150), 7);
        assert_eq!(ticks_per_second(60), 17);
        assert_eq!(ticks_per_second(100), 10);
        assert_eq!(ticks_per_second(0), 0);
    }

    #[test]
    fn test_direction_opposites() {
        for dir in Direction::ALL {
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
        }
        assert!(!Direction::Up.is_opposite(Direction::Left));
    }

    #[test]
    fn test_board_contains() {
        let board = BoardSize::default();
        assert!(board.contains(Coordinate::new(0, 0)));
        assert!(board.contains(Coordinate::new(24, 24)));
        assert!(!board.contains(Coordinate::new(-1, 5)));
        assert!(!board.contains(Coordinate::new(25, 5)));
        assert!(!board.contains(Coordinate::new(5, 25)));
        assert_eq!(board.cell_count(), 625);
    }

    #[test]
    fn test_mood_parse_is_lenient() {
        assert_eq!(Mood::from_str("EXCITED"), Mood::Excited);
        assert_eq!(Mood::from_str("sarcastic"), Mood::Sarcastic);
        assert_eq!(Mood::from_str("furious"), Mood::Neutral);
    }
}

/// A board cell.
///
/// Signed so that the cell one step past an edge is representable; the board
/// decides whether it is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i16,
    pub y: i16,
}

impl Coordinate {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub width: u8,
    pub height: u8,
}

impl BoardSize {
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Whether `c` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width as i16 && c.y < self.height as i16
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

/// Heading of the snake
///
/// Screen coordinates: `Up` decreases y, `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)`.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Lifecycle of a game run
///
/// - **Idle**: title screen, nothing ticks
/// - **Playing**: the tick schedule is running and input is accepted
/// - **GameOver**: terminal state after a collision or a cleared board
/// - **Paused**: a running game put on hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    GameOver,
    Paused,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::GameOver => "game_over",
            GameStatus::Paused => "paused",
        }
    }
}

/// One-shot notifications sent to the audio and commentary collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Eat,
    Die,
    Start,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Eat => "eat",
            GameEvent::Die => "die",
            GameEvent::Start => "start",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "eat" => Some(GameEvent::Eat),
            "die" => Some(GameEvent::Die),
            "start" => Some(GameEvent::Start),
            _ => None,
        }
    }
}

/// Tone tag attached to a commentary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    #[default]
    Neutral,
    Excited,
    Sarcastic,
}

impl Mood {
    /// Parse a mood tag; anything unrecognised reads as `Neutral`.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "excited" => Mood::Excited,
            "sarcastic" => Mood::Sarcastic,
            _ => Mood::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Excited => "excited",
            Mood::Sarcastic => "sarcastic",
        }
    }
}

/// A short announcer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commentary {
    pub text: String,
    pub mood: Mood,
}

impl Commentary {
    pub fn new(text: impl Into<String>, mood: Mood) -> Self {
        Self {
            text: text.into(),
            mood,
        }
    }
}

/// Post-game report for a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debrief {
    pub analysis: String,
    pub score_rating: String,
    pub tips: Vec<String>,
}

/// Summary of a finished run, used to ask for a [`Debrief`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    /// Which run of the session this was; replies are matched on it.
    pub run: u32,
    pub score: u32,
    pub moves: u32,
    pub duration_secs: u64,
}

/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Steer the snake (filtered against reversals by the engine)
    ChangeDirection(Direction),
    /// Start a new game from the title or game-over screen
    Start,
    /// Leave the current game and return to the title screen
    Exit,
    /// Toggle pause state
    Pause,
    /// Lower the selected initial tick interval
    SpeedFaster,
    /// Raise the selected initial tick interval
    SpeedSlower,
}

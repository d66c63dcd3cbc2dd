use crate::types::{
    ticks_per_second, BoardSize, Coordinate, Direction, GameStatus, IDLE_FOOD_POSITION,
    INITIAL_SPEED_MS, START_POSITION,
};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: BoardSize,
    /// Head first.
    pub snake: Vec<Coordinate>,
    pub food: Coordinate,
    pub direction: Direction,
    pub status: GameStatus,
    pub score: u32,
    pub high_score: u32,
    pub interval_ms: u32,
    pub moves: u32,
    pub board_cleared: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = BoardSize::default();
        self.snake.clear();
        self.snake.push(START_POSITION);
        self.food = IDLE_FOOD_POSITION;
        self.direction = Direction::Right;
        self.status = GameStatus::Idle;
        self.score = 0;
        self.high_score = 0;
        self.interval_ms = INITIAL_SPEED_MS;
        self.moves = 0;
        self.board_cleared = false;
    }

    /// Display speed, as ticks per second.
    pub fn ticks_per_second(&self) -> u32 {
        ticks_per_second(self.interval_ms)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: BoardSize::default(),
            snake: Vec::with_capacity(64),
            food: IDLE_FOOD_POSITION,
            direction: Direction::Right,
            status: GameStatus::Idle,
            score: 0,
            high_score: 0,
            interval_ms: INITIAL_SPEED_MS,
            moves: 0,
            board_cleared: false,
        };
        s.clear();
        s
    }
}

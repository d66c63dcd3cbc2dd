//! Food placement.
//!
//! Uniform rejection sampling over the whole board, as long as it is cheap.
//! When the snake covers most of the board the sampler gives up after a fixed
//! budget and picks uniformly among the free cells instead, so placement always
//! terminates. A board with no free cell yields `None`.

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{BoardSize, Coordinate};

/// Rejection-sampling draws before falling back to free-cell enumeration.
pub const REJECTION_ATTEMPTS: u32 = 64;

/// Pick a cell not occupied by `snake`, uniformly at random.
pub fn place_food(rng: &mut SimpleRng, board: BoardSize, snake: &Snake) -> Option<Coordinate> {
    if snake.len() >= board.cell_count() {
        return None;
    }

    for _ in 0..REJECTION_ATTEMPTS {
        let c = random_cell(rng, board);
        if !snake.occupies(c) {
            return Some(c);
        }
    }

    pick_free_cell(rng, board, snake)
}

fn random_cell(rng: &mut SimpleRng, board: BoardSize) -> Coordinate {
    Coordinate::new(
        rng.next_range(board.width as u32) as i16,
        rng.next_range(board.height as u32) as i16,
    )
}

/// Two passes, no allocation: count the free cells, then walk to the chosen one.
fn pick_free_cell(rng: &mut SimpleRng, board: BoardSize, snake: &Snake) -> Option<Coordinate> {
    let free = cells(board).filter(|&c| !snake.occupies(c)).count();
    if free == 0 {
        return None;
    }
    let k = rng.next_range(free as u32) as usize;
    cells(board).filter(|&c| !snake.occupies(c)).nth(k)
}

fn cells(board: BoardSize) -> impl Iterator<Item = Coordinate> {
    (0..board.height as i16)
        .flat_map(move |y| (0..board.width as i16).map(move |x| Coordinate::new(x, y)))
}

//! Snake body - ordered cells, head first.

use std::collections::VecDeque;

use crate::types::{Coordinate, Direction};

/// The snake's body. Index 0 is the head, the back is the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coordinate>,
}

impl Snake {
    /// A single-segment snake at `start`.
    pub fn new(start: Coordinate) -> Self {
        let mut body = VecDeque::with_capacity(64);
        body.push_back(start);
        Self { body }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let body: VecDeque<Coordinate> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Coordinate {
        self.body[0]
    }

    pub fn tail(&self) -> Coordinate {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether any segment, tail included, occupies `cell`.
    pub fn occupies(&self, cell: Coordinate) -> bool {
        self.body.iter().any(|&c| c == cell)
    }

    pub fn segments(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.body.iter().copied()
    }

    /// The cell the head would enter moving in `dir`.
    pub fn next_head(&self, dir: Direction) -> Coordinate {
        self.head().step(dir)
    }

    pub(crate) fn push_head(&mut self, cell: Coordinate) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Coordinate> {
        if self.body.len() <= 1 {
            return None;
        }
        self.body.pop_back()
    }

    pub(crate) fn reset(&mut self, start: Coordinate) {
        self.body.clear();
        self.body.push_back(start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_has_one_segment() {
        let snake = Snake::new(Coordinate::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Coordinate::new(10, 10));
        assert_eq!(snake.tail(), Coordinate::new(10, 10));
    }

    #[test]
    fn test_from_segments_keeps_order() {
        let snake = Snake::from_segments([
            Coordinate::new(5, 5),
            Coordinate::new(5, 6),
            Coordinate::new(5, 7),
        ])
        .unwrap();
        assert_eq!(snake.head(), Coordinate::new(5, 5));
        assert_eq!(snake.tail(), Coordinate::new(5, 7));
        assert!(Snake::from_segments(std::iter::empty()).is_none());
    }

    #[test]
    fn test_occupies_includes_tail() {
        let snake =
            Snake::from_segments([Coordinate::new(1, 1), Coordinate::new(1, 2)]).unwrap();
        assert!(snake.occupies(Coordinate::new(1, 2)));
        assert!(!snake.occupies(Coordinate::new(2, 2)));
    }

    #[test]
    fn test_push_and_pop() {
        let mut snake = Snake::new(Coordinate::new(3, 3));
        snake.push_head(Coordinate::new(4, 3));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.pop_tail(), Some(Coordinate::new(3, 3)));
        assert_eq!(snake.head(), Coordinate::new(4, 3));
        // Never pops the head.
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }
}

//! Undo history of full-grid snapshots
//!
//! A snapshot is taken before every applied move. The side to move is not
//! stored: turns strictly alternate, so the session re-derives it on undo.

use crate::board::Mark;

/// Deep copy of a board's cells at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    cells: Vec<Mark>,
}

impl Snapshot {
    pub(crate) fn new(cells: Vec<Mark>) -> Self {
        Self { cells }
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    pub(crate) fn into_cells(self) -> Vec<Mark> {
        self.cells
    }
}

/// Last-in-first-out stack of snapshots
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    pub fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Player, Pos};

    #[test]
    fn test_pop_empty() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_lifo_order() {
        let mut board = Board::default();
        let mut history = History::new();

        history.push(board.snapshot());
        board.place(Pos::new(0, 0), Player::X).unwrap();
        history.push(board.snapshot());
        board.place(Pos::new(1, 1), Player::O).unwrap();

        assert_eq!(history.len(), 2);

        let top = history.pop().unwrap();
        assert_eq!(top.cells()[0], Mark::X);
        assert_eq!(top.cells()[4], Mark::Empty);

        let bottom = history.pop().unwrap();
        assert!(bottom.cells().iter().all(|m| m.is_empty()));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_clear() {
        let board = Board::default();
        let mut history = History::new();
        history.push(board.snapshot());
        history.push(board.snapshot());
        history.clear();
        assert_eq!(history.len(), 0);
        assert!(history.peek().is_none());
    }
}

//! Board structure with cached empty-cell count

use std::fmt;

use super::{Mark, Player, Pos};
use crate::error::GameError;
use crate::history::Snapshot;

/// Game board of `height` rows by `width` columns.
///
/// `remaining` always equals the number of `Mark::Empty` cells; every
/// mutator keeps it in step with the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    /// Consecutive marks needed to complete a run
    run_length: usize,
    /// Row-major cells
    cells: Vec<Mark>,
    remaining: usize,
}

impl Board {
    /// Create an empty board. All three values must be positive.
    ///
    /// Grids whose cell count overflows or cannot be allocated are rejected
    /// with `InvalidDimensions` as well.
    pub fn new(height: usize, width: usize, run_length: usize) -> Result<Self, GameError> {
        let invalid = || GameError::InvalidDimensions {
            height: i64::try_from(height).unwrap_or(i64::MAX),
            width: i64::try_from(width).unwrap_or(i64::MAX),
            run_length: i64::try_from(run_length).unwrap_or(i64::MAX),
        };
        if height == 0 || width == 0 || run_length == 0 {
            return Err(invalid());
        }
        let size = height.checked_mul(width).ok_or_else(invalid)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| invalid())?;
        cells.resize(size, Mark::Empty);

        Ok(Self {
            height,
            width,
            run_length,
            cells,
            remaining: size,
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Cached number of empty cells
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Total number of cells
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.remaining == 0
    }

    /// Check that a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Convert signed coordinates into a position on this board
    #[inline]
    pub fn pos(&self, x: i64, y: i64) -> Option<Pos> {
        if x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64 {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Get the mark at a position. The position must be on the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        debug_assert!(self.contains(pos));
        self.cells[pos.to_index(self.width)]
    }

    /// Signed lookup used when walking lines; `None` off the board.
    #[inline]
    pub fn at(&self, x: i64, y: i64) -> Option<Mark> {
        self.pos(x, y).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Place a mark for `player`.
    ///
    /// Fails with `OutOfBounds` for a position outside this board and with
    /// `CellOccupied` if the cell is taken. Nothing changes on failure.
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<(), GameError> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                x: pos.x as i64,
                y: pos.y as i64,
            });
        }
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied { x: pos.x, y: pos.y });
        }
        self.occupy(pos, player);
        Ok(())
    }

    /// Place without validation. Callers guarantee the cell is empty.
    #[inline]
    pub(crate) fn occupy(&mut self, pos: Pos, player: Player) {
        let idx = pos.to_index(self.width);
        debug_assert!(self.cells[idx].is_empty());
        self.cells[idx] = Mark::from(player);
        self.remaining -= 1;
    }

    /// Retract a speculative placement
    #[inline]
    pub(crate) fn unplace(&mut self, pos: Pos) {
        let idx = pos.to_index(self.width);
        debug_assert!(!self.cells[idx].is_empty());
        self.cells[idx] = Mark::Empty;
        self.remaining += 1;
    }

    /// All cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(move |(idx, _)| Pos::from_index(idx, width))
    }

    /// Live count of empty cells (not the cached value)
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|mark| mark.is_empty()).count()
    }

    /// Deep copy of the grid for the undo history
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.cells.clone())
    }

    /// Replace the grid with a snapshot taken from this board and
    /// recount the empty cells.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let cells = snapshot.into_cells();
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
        self.remaining = self.count_empty();
    }
}

impl Default for Board {
    /// Classic 3x3 tic-tac-toe
    fn default() -> Self {
        Self {
            height: 3,
            width: 3,
            run_length: 3,
            cells: vec![Mark::Empty; 9],
            remaining: 9,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.width {
            write!(f, "{:>3}", x)?;
        }
        writeln!(f)?;
        for (y, row) in self.rows().enumerate() {
            write!(f, "{:>3}", y)?;
            for mark in row {
                write!(f, "{:>3}", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

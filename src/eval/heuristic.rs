//! Heuristic evaluation function for m,n,k board positions
//!
//! This module provides the static evaluation used at search leaves.
//! It scores:
//! - Every open window of `run_length` cells, exponentially by how full it is
//! - Center control on the classic 3x3 board

use crate::board::{Board, Mark, Player, Pos};
use crate::rules::{Line, DIRECTIONS};

use super::patterns::{line_weight, PatternScore};

/// Evaluate the board from the perspective of the given player.
///
/// Returns a score where:
/// - Positive values indicate advantage for `player`
/// - Negative values indicate disadvantage for `player`
///
/// The evaluation is symmetric: `evaluate(b, X) == -evaluate(b, O)`.
/// Terminal positions are scored by the search, not here.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i64 {
    let score = center_score(board, player).saturating_add(window_score(board, player));
    score.clamp(-PatternScore::MAX_EVAL, PatternScore::MAX_EVAL)
}

/// Center bonus, only on 3x3 with run length 3
fn center_score(board: &Board, player: Player) -> i64 {
    if board.height() != 3 || board.width() != 3 || board.run_length() != 3 {
        return 0;
    }
    match board.get(Pos::new(1, 1)) {
        Mark::Empty => 0,
        mark if mark == Mark::from(player) => PatternScore::CENTER_BONUS,
        _ => -PatternScore::CENTER_BONUS,
    }
}

/// Sum over all windows that start on an empty cell.
///
/// A window free of opponent marks adds 10^(own marks); a window free of
/// own marks subtracts 10^(opponent marks). An all-empty window does both.
fn window_score(board: &Board, player: Player) -> i64 {
    let run = board.run_length();
    let mut score = 0i64;

    for start in board.empty_cells() {
        for &dir in &DIRECTIONS {
            let Some(line) = Line::window(board, start, dir, run) else {
                continue;
            };

            let (mut own, mut theirs) = (0usize, 0usize);
            for mark in line.marks(board) {
                match mark.player() {
                    Some(p) if p == player => own += 1,
                    Some(_) => theirs += 1,
                    None => {}
                }
            }

            if theirs == 0 {
                score = score.saturating_add(line_weight(own));
            }
            if own == 0 {
                score = score.saturating_sub(line_weight(theirs));
            }
        }
    }

    score
}

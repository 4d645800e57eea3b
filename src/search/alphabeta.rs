//! Alpha-Beta search with a fixed depth limit
//!
//! This module implements the move search for the computer player.
//! It uses negamax with alpha-beta pruning. The evaluator and the terminal
//! scores are symmetric between the two players, so negating the child's
//! score is the same as alternating max and min layers.
//!
//! # Features
//!
//! - In-place exploration: every speculative mark is retracted before the
//!   next sibling is tried, including after a cutoff
//! - Misère support: completing a run scores as a loss for the completer
//! - Deterministic tie-break: the first best cell in row-major order
//!
//! # Example
//!
//! ```
//! use mnk::board::{Board, Player, Pos};
//! use mnk::search::Searcher;
//!
//! let mut board = Board::default();
//! board.place(Pos::new(0, 0), Player::X).unwrap();
//!
//! let result = Searcher::new(false).search(&mut board, Player::O, 4);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use log::{debug, warn};

use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate, PatternScore};
use crate::rules::check_winner;

/// Infinity score for alpha-beta bounds. `-INF` does not overflow.
const INF: i64 = i64::MAX;

/// Depth used when the caller passes a non-positive limit
pub const DEFAULT_DEPTH: u32 = 6;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total beta cutoffs
    pub beta_cutoffs: u64,
    /// Beta cutoffs on the first move tried
    pub first_move_cutoffs: u64,
}

impl SearchStats {
    /// Share of cutoffs produced by the first move, in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` only on a full board
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching player's point of view
    pub score: i64,
    /// Depth limit actually used
    pub depth: u32,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Map a caller-supplied depth to the search depth, falling back to
/// [`DEFAULT_DEPTH`] for non-positive values.
pub fn resolve_depth(depth: i32) -> u32 {
    if depth <= 0 {
        warn!("search depth {} is not positive, using {}", depth, DEFAULT_DEPTH);
        DEFAULT_DEPTH
    } else {
        depth as u32
    }
}

/// Alpha-beta searcher for one game variant.
pub struct Searcher {
    misere: bool,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher. With `misere` set, completing a run is a loss.
    #[must_use]
    pub fn new(misere: bool) -> Self {
        Self {
            misere,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Search for the best move for `ai`, `depth` plies deep.
    ///
    /// The board is borrowed mutably for in-place exploration and is
    /// returned with exactly the contents it had on entry.
    #[must_use]
    pub fn search(&mut self, board: &mut Board, ai: Player, depth: i32) -> SearchResult {
        let depth = resolve_depth(depth);
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for idx in 0..board.size() {
            let mov = Pos::from_index(idx, board.width());
            if !board.is_empty(mov) {
                continue;
            }

            board.occupy(mov, ai);
            let score = -self.alpha_beta(board, ai.opponent(), depth - 1, -INF, -alpha);
            board.unplace(mov);

            // Strictly greater keeps the first best cell.
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        let score = if best_move.is_some() { best_score } else { 0 };
        debug!(
            "search {}: best {:?} score {} depth {} nodes {} cutoffs {}",
            ai, best_move, score, depth, self.nodes, self.stats.beta_cutoffs
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Score of the position for `color`, the side to move.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        color: Player,
        depth: u32,
        mut alpha: i64,
        beta: i64,
    ) -> i64 {
        self.nodes += 1;

        if let Some(completer) = check_winner(board) {
            let score = if completer == color {
                PatternScore::WIN
            } else {
                -PatternScore::WIN
            };
            return self.orient(score);
        }

        if depth == 0 || board.is_full() {
            return self.orient(evaluate(board, color));
        }

        let mut best = -INF;
        let mut tried = 0u32;

        for idx in 0..board.size() {
            let mov = Pos::from_index(idx, board.width());
            if !board.is_empty(mov) {
                continue;
            }

            board.occupy(mov, color);
            let score = -self.alpha_beta(board, color.opponent(), depth - 1, -beta, -alpha);
            board.unplace(mov);
            tried += 1;

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                if tried == 1 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        best
    }

    /// Under misère every score flips sign: runs and near-runs are bad
    /// for the side that owns them.
    #[inline]
    fn orient(&self, score: i64) -> i64 {
        if self.misere {
            -score
        } else {
            score
        }
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Best cell for `ai` on `board`, or `None` if the board is full.
///
/// Non-positive depths fall back to [`DEFAULT_DEPTH`]. The board is
/// restored before returning.
pub fn best_move(board: &mut Board, ai: Player, depth: i32, misere: bool) -> Option<Pos> {
    Searcher::new(misere).search(board, ai, depth).best_move
}

//! Session controller: turn order, undo history and AI moves
//!
//! A [`Session`] owns one game: its board, its undo history, the side to
//! move and the game status. Presentation layers drive it through
//! `start`/`make_move`/`undo`/`ai_move` and render the returned
//! [`SessionState`].
//!
//! # Example
//!
//! ```
//! use mnk::{Player, Session};
//!
//! let mut session = Session::new();
//! session.start(3, 3, 3, false).unwrap();
//! session.make_move(1, 1).unwrap();
//! let state = session.ai_move(4).unwrap();
//! assert_eq!(state.player, Player::X);
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark, Player, Pos};
use crate::error::GameError;
use crate::history::History;
use crate::rules::{game_winner, is_draw};
use crate::search::{SearchResult, Searcher};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// No game started yet
    Uninitialized,
    InProgress,
    /// Finished with a winner (after misère interpretation)
    Won(Player),
    /// Finished with a full board and no run
    Draw,
}

impl Status {
    #[inline]
    pub fn is_active(self) -> bool {
        self == Status::InProgress
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Read-only snapshot of a session for rendering or transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Grid rows, top to bottom
    pub board: Vec<Vec<Mark>>,
    pub height: usize,
    pub width: usize,
    pub run_length: usize,
    pub misere: bool,
    /// Side to move (or the side that made the last move once finished)
    pub player: Player,
    pub winner: Option<Player>,
    pub remaining: usize,
    pub active: bool,
    pub status: Status,
    /// Number of moves that can be undone
    pub history: usize,
}

/// One game session.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    history: History,
    player: Player,
    misere: bool,
    status: Status,
    last_move: Option<Pos>,
    last_search: Option<SearchResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an uninitialized session. Moves are rejected until `start`.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            history: History::new(),
            player: Player::X,
            misere: false,
            status: Status::Uninitialized,
            last_move: None,
            last_search: None,
        }
    }

    /// Start a new game. `X` moves first.
    ///
    /// Fails with `InvalidDimensions` if any value is not positive; the
    /// current game is kept in that case.
    pub fn start(
        &mut self,
        height: i64,
        width: i64,
        run_length: i64,
        misere: bool,
    ) -> Result<SessionState, GameError> {
        let invalid = GameError::InvalidDimensions {
            height,
            width,
            run_length,
        };
        let to_size = |v: i64| usize::try_from(v).map_err(|_| invalid.clone());
        let board = Board::new(to_size(height)?, to_size(width)?, to_size(run_length)?)
            .map_err(|_| invalid.clone())?;

        self.board = board;
        self.history.clear();
        self.player = Player::X;
        self.misere = misere;
        self.status = Status::InProgress;
        self.last_move = None;
        self.last_search = None;

        info!(
            "new game {}x{} run {}{}",
            height,
            width,
            run_length,
            if misere { " (misère)" } else { "" }
        );
        Ok(self.current_state())
    }

    /// Start over with the current dimensions and variant.
    pub fn restart(&mut self) -> Result<SessionState, GameError> {
        self.start(
            self.board.height() as i64,
            self.board.width() as i64,
            self.board.run_length() as i64,
            self.misere,
        )
    }

    /// Play the side to move at `(x, y)`.
    ///
    /// Rejected moves leave the session untouched.
    pub fn make_move(&mut self, x: i64, y: i64) -> Result<SessionState, GameError> {
        if !self.status.is_active() {
            return Err(GameError::GameNotActive);
        }
        let pos = self.board.pos(x, y).ok_or(GameError::OutOfBounds { x, y })?;

        let snapshot = self.board.snapshot();
        self.board.place(pos, self.player)?;
        self.history.push(snapshot);
        self.last_move = Some(pos);
        debug!("{} plays {}", self.player, pos);

        if let Some(winner) = game_winner(&self.board, self.misere) {
            self.status = Status::Won(winner);
            info!("game over: {} wins", winner);
        } else if is_draw(&self.board) {
            self.status = Status::Draw;
            info!("game over: draw");
        } else {
            self.player = self.player.opponent();
        }

        Ok(self.current_state())
    }

    /// Take back the last move, reviving a finished game if needed.
    ///
    /// Restores the turn that was active before the undone move. Turns
    /// strictly alternate but a finishing move does not pass the turn, so
    /// the side to move flips only when the game was still in progress.
    pub fn undo(&mut self) -> Result<SessionState, GameError> {
        let snapshot = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.board.restore(snapshot);

        if self.status.is_active() {
            self.player = self.player.opponent();
        }
        self.status = Status::InProgress;
        self.last_move = None;
        debug!("undo, {} to move, {} moves left in history", self.player, self.history.len());

        Ok(self.current_state())
    }

    /// Let the search engine play the side to move.
    ///
    /// The chosen cell goes through [`Session::make_move`] like any other
    /// move. Non-positive depths use the default search depth.
    pub fn ai_move(&mut self, depth: i32) -> Result<SessionState, GameError> {
        if !self.status.is_active() {
            return Err(GameError::GameNotActive);
        }

        let result = Searcher::new(self.misere).search(&mut self.board, self.player, depth);
        let mov = result.best_move.ok_or(GameError::GameNotActive)?;
        info!(
            "AI {} plays {} (score {}, {} nodes)",
            self.player, mov, result.score, result.nodes
        );
        self.last_search = Some(result);

        self.make_move(mov.x as i64, mov.y as i64)
    }

    /// Snapshot of the session
    pub fn current_state(&self) -> SessionState {
        SessionState {
            board: self.board.rows().map(|row| row.to_vec()).collect(),
            height: self.board.height(),
            width: self.board.width(),
            run_length: self.board.run_length(),
            misere: self.misere,
            player: self.player,
            winner: self.status.winner(),
            remaining: self.board.remaining(),
            active: self.status.is_active(),
            status: self.status,
            history: self.history.len(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Side to move
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn misere(&self) -> bool {
        self.misere
    }

    pub fn is_draw(&self) -> bool {
        self.status == Status::Draw
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Cell of the most recent move, cleared by undo
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Result of the most recent AI search
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

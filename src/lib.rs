//! m,n,k game engine with alpha-beta search
//!
//! A generalized k-in-a-row engine for boards of any size:
//! - `height` x `width` grid, `run_length` marks in a row to complete a run
//! - Runs count along rows, columns and every diagonal
//! - Misère variant: completing a run loses
//! - Single-step undo back to the start of the game
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid representation with cached empty-cell count
//! - [`rules`]: Run detection, draw detection, legal moves
//! - [`history`]: Snapshot stack for undo
//! - [`eval`]: Static heuristic for non-terminal positions
//! - [`search`]: Depth-limited alpha-beta search
//! - [`session`]: Turn order, terminal states and AI moves
//!
//! # Quick Start
//!
//! ```
//! use mnk::{Player, Session, Status};
//!
//! let mut session = Session::new();
//! session.start(3, 3, 3, false).unwrap();
//!
//! // Human plays X in the corner, AI answers as O
//! session.make_move(0, 0).unwrap();
//! let state = session.ai_move(9).unwrap();
//!
//! assert_eq!(state.player, Player::X);
//! assert_eq!(state.status, Status::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod history;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Player, Pos};
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use search::{best_move, SearchResult, Searcher};
pub use session::{Session, SessionState, Status};

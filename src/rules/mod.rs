//! Game rules for m,n,k games
//!
//! This module implements the rule set:
//! - Run detection over rows, columns and diagonals (`win`)
//! - Misère outcome interpretation (`win`)
//! - Draw detection and legal-move enumeration (`moves`)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{is_draw, legal_moves};
pub use win::{check_winner, game_winner, lines, winning_line, Line, DIRECTIONS};

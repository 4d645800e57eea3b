//! GUI module for the m,n,k game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::MnkApp;
pub use game_state::{AiState, GameState};

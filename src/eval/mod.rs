//! Evaluation module for m,n,k positions
//!
//! This module provides static scoring of non-terminal positions.
//! The evaluation considers:
//! - Open windows of `run_length` cells, weighted by 10^marks
//! - Center control on classic 3x3 tic-tac-toe

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{line_weight, PatternScore};

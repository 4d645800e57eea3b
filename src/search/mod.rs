//! Search module for the m,n,k AI
//!
//! Contains a depth-limited alpha-beta search that explores the live
//! board by placing and retracting marks in place.

pub mod alphabeta;

pub use alphabeta::{best_move, resolve_depth, SearchResult, SearchStats, Searcher, DEFAULT_DEPTH};

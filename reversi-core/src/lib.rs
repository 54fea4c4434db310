//! Reversi Core - Board engine
//!
//! This crate provides the rules engine for the two-player disc-capturing
//! game played on an 8x8 grid:
//! - Board grid and coordinates
//! - Move legality and directional capture
//! - Turn alternation, forced passes and double-pass termination
//! - Scoring and serializable snapshots for renderers

pub mod board;
pub mod config;
pub mod error;
pub mod game;

// Re-exports for convenient access
pub use board::{Board, Cell, Pos, DEFAULT_HEIGHT, DEFAULT_WIDTH, DIRECTIONS, MAX_DIM, MIN_DIM};
pub use config::BoardConfig;
pub use error::{EngineError, RejectReason};
pub use game::{GameResult, GameSnapshot, GameState, MoveRecord, Player, Score, Status, Winner};

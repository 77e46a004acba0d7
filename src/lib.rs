//! Tic-tac-toe game model with a perfect-play minimax engine
//!
//! This crate provides:
//! - A value-semantics 3x3 board with winner, fullness, and legal-move queries
//! - An exhaustive minimax engine that returns a provably optimal move for
//!   any non-terminal position
//! - A small per-round state machine for callers that sequence turns
//!
//! Presentation (rendering, input, turn loops across rounds) is left to the
//! caller: it owns a [`BoardState`], asks [`SearchEngine`] for a move when it
//! is the automated player's turn, and applies it like any other move.

pub mod board;
pub mod engine;
pub mod error;
pub mod lines;
pub mod round;

pub use board::{BoardState, Cell, Move, Player};
pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use round::{Outcome, Round};

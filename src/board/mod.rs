//! Chess board representation and game logic.
//!
//! A 64-square mailbox with incrementally maintained king squares,
//! castling rights, en-passant state, check flags and material balance.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use parakeet::board::Position;
//!
//! let position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod check;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod notation;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{FenError, PositionError, SquareError};
pub use fen::START_FEN;
pub use state::{Position, Setup, UnmakeInfo};
pub use types::{
    CastlingRights, Direction, Move, MoveList, MoveListIntoIter, Piece, PieceType, PieceValues,
    Side, Square, Squares, Wing,
};

// Attack queries over raw arrays, for hypothetical boards
pub use check::{is_attacked, side_in_check};

//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Square` and `Direction` - board coordinates and compass steps
//! - `Piece`, `PieceType` and `Side` - men and the players owning them
//! - `Move` and `MoveList` - flag-encoded moves
//! - `CastlingRights` and `Wing` - castling state and geometry

mod castling;
mod direction;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingRights, Wing};
pub use direction::Direction;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Piece, PieceType, PieceValues, Side};
pub use square::Square;

/// The 64-square array; `None` is an empty square.
pub type Squares = [Option<Piece>; 64];

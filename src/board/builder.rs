//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use parakeet::board::{Piece, PieceType, PositionBuilder, Side, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Piece::new(PieceType::King, Side::White))
//!     .piece(Square::E8, Piece::new(PieceType::King, Side::Black))
//!     .piece("a2".parse().unwrap(), Piece::new(PieceType::Pawn, Side::White))
//!     .side_to_move(Side::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.legal_moves().len(), 7);
//! ```

use super::error::PositionError;
use super::{CastlingRights, Piece, Position, Setup, Side, Square, Squares, Wing};

/// A fluent builder for constructing `Position`s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    squares: Squares,
    side_to_move: Side,
    castling: CastlingRights,
    last_double_push: Option<Square>,
    material: Option<i32>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            squares: [None; 64],
            side_to_move: Side::White,
            castling: CastlingRights::none(),
            last_double_push: None,
            material: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        PositionBuilder {
            squares: *start.squares(),
            castling: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        if let Some(slot) = self.squares.get_mut(square.index()) {
            *slot = Some(piece);
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        if let Some(slot) = self.squares.get_mut(square.index()) {
            *slot = None;
        }
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, side: Side, wing: Wing) -> Self {
        self.castling.grant(side, wing);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::all();
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Mark `pushed` as the pawn that just advanced two squares.
    #[must_use]
    pub const fn double_push(mut self, pushed: Square) -> Self {
        self.last_double_push = Some(pushed);
        self
    }

    /// Clear the en passant state.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.last_double_push = None;
        self
    }

    /// Use this material balance instead of counting the pieces.
    #[must_use]
    pub const fn material(mut self, balance: i32) -> Self {
        self.material = Some(balance);
        self
    }

    /// Build the position, rejecting it unless each side has one king.
    pub fn build(self) -> Result<Position, PositionError> {
        Position::from_parts(Setup {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant_possible: self.last_double_push.is_some(),
            last_double_push: self.last_double_push.unwrap_or(Square::NONE),
            material: self.material,
        })
    }
}

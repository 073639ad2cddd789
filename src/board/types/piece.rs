//! Piece, piece type and side types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// The two players.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides in index order (White=0, Black=1)
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// The other side. Every "opponent" in the crate is derived here.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// +1 for White, -1 for Black
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pawn_forward(self) -> Direction {
        match self {
            Side::White => Direction::North,
            Side::Black => Direction::South,
        }
    }

    /// Capture directions of this side's pawns, in (east, west) order.
    #[inline]
    #[must_use]
    pub const fn pawn_captures(self) -> [Direction; 2] {
        match self {
            Side::White => [Direction::NorthEast, Direction::NorthWest],
            Side::Black => [Direction::SouthEast, Direction::SouthWest],
        }
    }

    #[inline]
    #[must_use]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Rank this side's pawns must stand on to capture en passant.
    #[inline]
    #[must_use]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Side::White => 4,
            Side::Black => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Kinds of chess men. An empty square is `None` at the board level, so
/// there is no empty variant to compare sides against.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Pawn,
    ];

    /// Promotion choices in generation order.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PieceType::King => 0,
            PieceType::Queen => 1,
            PieceType::Bishop => 2,
            PieceType::Knight => 3,
            PieceType::Rook => 4,
            PieceType::Pawn => 5,
        }
    }

    /// Parse a piece type from a letter of either case (k, q, b, n, r, p)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceType::King),
            'q' => Some(PieceType::Queen),
            'b' => Some(PieceType::Bishop),
            'n' => Some(PieceType::Knight),
            'r' => Some(PieceType::Rook),
            'p' => Some(PieceType::Pawn),
            _ => None,
        }
    }

    /// Lowercase letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }
}

/// A piece on the board: a type owned by a side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceType,
    pub side: Side,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceType, side: Side) -> Self {
        Piece { kind, side }
    }

    #[inline]
    #[must_use]
    pub const fn is(self, kind: PieceType, side: Side) -> bool {
        self.kind as u8 == kind as u8 && self.side as u8 == side as u8
    }

    /// FEN letter: uppercase for White.
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Parse a FEN letter.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceType::from_char(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece::new(kind, side))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// Material value per piece type, used for the running material balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceValues {
    pub king: i32,
    pub queen: i32,
    pub bishop: i32,
    pub knight: i32,
    pub rook: i32,
    pub pawn: i32,
}

impl PieceValues {
    #[inline]
    #[must_use]
    pub const fn of(&self, kind: PieceType) -> i32 {
        match kind {
            PieceType::King => self.king,
            PieceType::Queen => self.queen,
            PieceType::Bishop => self.bishop,
            PieceType::Knight => self.knight,
            PieceType::Rook => self.rook,
            PieceType::Pawn => self.pawn,
        }
    }

    /// Signed contribution of a piece to the white-minus-black balance.
    #[inline]
    #[must_use]
    pub const fn signed(&self, piece: Piece) -> i32 {
        piece.side.sign() * self.of(piece.kind)
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        PieceValues {
            king: 1_000_000,
            queen: 900,
            bishop: 350,
            knight: 300,
            rook: 500,
            pawn: 100,
        }
    }
}

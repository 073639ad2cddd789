//! Castling rights, one flag per side and wing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Side;
use super::square::Square;

/// Which rook the king castles towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wing {
    KingSide,
    QueenSide,
}

impl Wing {
    pub const BOTH: [Wing; 2] = [Wing::KingSide, Wing::QueenSide];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Wing::KingSide => 0,
            Wing::QueenSide => 1,
        }
    }

    /// Home square of the rook this right refers to.
    #[inline]
    #[must_use]
    pub const fn rook_home(self, side: Side) -> Square {
        match self {
            Wing::KingSide => Square::at(7, side.back_rank()),
            Wing::QueenSide => Square::at(0, side.back_rank()),
        }
    }

    /// Where the castled rook lands.
    #[inline]
    #[must_use]
    pub const fn rook_destination(self, side: Side) -> Square {
        match self {
            Wing::KingSide => Square::at(5, side.back_rank()),
            Wing::QueenSide => Square::at(3, side.back_rank()),
        }
    }

    /// Where the castling king lands.
    #[inline]
    #[must_use]
    pub const fn king_destination(self, side: Side) -> Square {
        match self {
            Wing::KingSide => Square::at(6, side.back_rank()),
            Wing::QueenSide => Square::at(2, side.back_rank()),
        }
    }

    /// Square the king crosses on its way.
    #[inline]
    #[must_use]
    pub const fn king_passes(self, side: Side) -> Square {
        self.rook_destination(side)
    }

    /// Files that must be empty between king and rook.
    #[inline]
    #[must_use]
    pub const fn between_files(self) -> &'static [u8] {
        match self {
            Wing::KingSide => &[5, 6],
            Wing::QueenSide => &[1, 2, 3],
        }
    }
}

/// Castling rights as a fixed 2x2 table indexed by side and wing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights([[bool; 2]; 2]);

impl CastlingRights {
    #[must_use]
    pub const fn new(
        white_king_side: bool,
        white_queen_side: bool,
        black_king_side: bool,
        black_queen_side: bool,
    ) -> Self {
        CastlingRights([
            [white_king_side, white_queen_side],
            [black_king_side, black_queen_side],
        ])
    }

    #[must_use]
    pub const fn none() -> Self {
        CastlingRights([[false; 2]; 2])
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights([[true; 2]; 2])
    }

    #[inline]
    #[must_use]
    pub const fn has(self, side: Side, wing: Wing) -> bool {
        self.0[side.index()][wing.index()]
    }

    #[inline]
    pub fn grant(&mut self, side: Side, wing: Wing) {
        self.0[side.index()][wing.index()] = true;
    }

    #[inline]
    pub fn revoke(&mut self, side: Side, wing: Wing) {
        self.0[side.index()][wing.index()] = false;
    }

    #[inline]
    pub fn revoke_all(&mut self, side: Side) {
        self.0[side.index()] = [false; 2];
    }

    /// Drop every right whose rook home square is `square`.
    pub fn revoke_rook_square(&mut self, square: Square) {
        for side in Side::BOTH {
            for wing in Wing::BOTH {
                if wing.rook_home(side) == square {
                    self.revoke(side, wing);
                }
            }
        }
    }
}

/// FEN castling field, `-` when no rights remain.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = [
            (Side::White, Wing::KingSide, 'K'),
            (Side::White, Wing::QueenSide, 'Q'),
            (Side::Black, Wing::KingSide, 'k'),
            (Side::Black, Wing::QueenSide, 'q'),
        ];
        let mut any = false;
        for (side, wing, letter) in letters {
            if self.has(side, wing) {
                write!(f, "{letter}")?;
                any = true;
            }
        }
        if !any {
            write!(f, "-")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rights_are_independent() {
        let mut rights = CastlingRights::all();
        rights.revoke(Side::White, Wing::QueenSide);
        assert!(rights.has(Side::White, Wing::KingSide));
        assert!(!rights.has(Side::White, Wing::QueenSide));
        assert!(rights.has(Side::Black, Wing::QueenSide));
        assert_eq!(rights.to_string(), "Kkq");
    }

    #[test]
    fn rook_square_revokes_only_its_wing() {
        let mut rights = CastlingRights::all();
        rights.revoke_rook_square(Square::H8);
        assert!(!rights.has(Side::Black, Wing::KingSide));
        assert!(rights.has(Side::Black, Wing::QueenSide));
        rights.revoke_rook_square("e4".parse().unwrap());
        assert_eq!(rights.to_string(), "KQq");
    }

    #[test]
    fn castling_geometry() {
        assert_eq!(Wing::KingSide.king_destination(Side::White), Square::G1);
        assert_eq!(Wing::QueenSide.king_destination(Side::Black), Square::C8);
        assert_eq!(Wing::KingSide.rook_destination(Side::Black), Square::F8);
        assert_eq!(Wing::QueenSide.king_passes(Side::White), Square::D1);
        assert_eq!(CastlingRights::none().to_string(), "-");
    }
}

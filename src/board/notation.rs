//! Short algebraic rendering used for display.

use super::{Move, PieceType, Squares};

/// `<PieceLetter><file><rank>` of the destination, letter omitted for pawns.
///
/// `squares` must be the array before `mv` is applied, since the origin
/// square names the piece.
#[must_use]
pub fn algebraic(mv: Move, squares: &Squares) -> String {
    let letter = squares[mv.from().index()]
        .filter(|piece| piece.kind != PieceType::Pawn)
        .map(|piece| piece.kind.to_char().to_ascii_uppercase());
    match letter {
        Some(letter) => format!("{letter}{}", mv.to()),
        None => mv.to().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Position, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn piece_letter_then_destination() {
        let p = Position::new();
        let knight = p.find_move(sq("g1"), sq("f3"));
        assert_eq!(algebraic(knight, p.squares()), "Nf3");
    }

    #[test]
    fn pawns_omit_the_letter() {
        let p = Position::new();
        let push = p.find_move(sq("e2"), sq("e4"));
        assert_eq!(algebraic(push, p.squares()), "e4");
    }

    #[test]
    fn reads_the_pre_move_array() {
        let p: Position = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let promotion = p.find_move(sq("a7"), sq("a8"));
        assert_eq!(algebraic(promotion, p.squares()), "a8");
        let after = p.with_move(promotion);
        assert_eq!(after.piece_at(sq("a8")).map(|p| p.kind), Some(PieceType::Queen));
    }
}

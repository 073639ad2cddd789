//! Attack detection over a raw square array.
//!
//! Works on [`Squares`] rather than a [`Position`](super::Position) so the
//! legality filter can ask about hypothetical boards.

use super::attack_tables::tables;
use super::{Direction, Piece, PieceType, Side, Square, Squares};

/// First occupied square along `dir`, not counting `from`.
#[inline]
fn first_piece_along(squares: &Squares, from: Square, dir: Direction) -> Option<Piece> {
    let mut sq = from;
    while let Some(next) = sq.step(dir) {
        if let Some(piece) = squares[next.index()] {
            return Some(piece);
        }
        sq = next;
    }
    None
}

/// Whether `target` is attacked by any piece of `attacker`.
///
/// Knights and pawns go first since they are the cheapest lookups, then
/// the eight rays, then the enemy king.
#[must_use]
pub fn is_attacked(squares: &Squares, target: Square, attacker: Side) -> bool {
    if target.is_none() {
        return false;
    }
    let tables = tables();
    let occupied_by = |sq: Square, kind: PieceType| {
        squares[sq.index()].is_some_and(|p| p.is(kind, attacker))
    };

    if tables
        .knight(target)
        .iter()
        .any(|&sq| occupied_by(sq, PieceType::Knight))
    {
        return true;
    }

    // An attacking pawn sits on one of the squares a defending pawn on
    // `target` would capture towards.
    let defender = attacker.opponent();
    if defender
        .pawn_captures()
        .iter()
        .filter_map(|&dir| target.step(dir))
        .any(|sq| occupied_by(sq, PieceType::Pawn))
    {
        return true;
    }

    for dir in Direction::ORTHOGONAL {
        if let Some(piece) = first_piece_along(squares, target, dir) {
            if piece.side == attacker
                && matches!(piece.kind, PieceType::Rook | PieceType::Queen)
            {
                return true;
            }
        }
    }
    for dir in Direction::DIAGONAL {
        if let Some(piece) = first_piece_along(squares, target, dir) {
            if piece.side == attacker
                && matches!(piece.kind, PieceType::Bishop | PieceType::Queen)
            {
                return true;
            }
        }
    }

    tables
        .king(target)
        .iter()
        .any(|&sq| occupied_by(sq, PieceType::King))
}

/// Whether `side`'s king, located via `kings`, is attacked.
#[inline]
#[must_use]
pub fn side_in_check(squares: &Squares, kings: &[Square; 2], side: Side) -> bool {
    is_attacked(squares, kings[side.index()], side.opponent())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board(pieces: &[(&str, PieceType, Side)]) -> Squares {
        let mut squares: Squares = [None; 64];
        for &(at, kind, side) in pieces {
            squares[sq(at).index()] = Some(Piece::new(kind, side));
        }
        squares
    }

    #[test]
    fn knight_attack() {
        let squares = board(&[("f6", PieceType::Knight, Side::Black)]);
        assert!(is_attacked(&squares, sq("e4"), Side::Black));
        assert!(is_attacked(&squares, sq("g8"), Side::Black));
        assert!(!is_attacked(&squares, sq("e5"), Side::Black));
        assert!(!is_attacked(&squares, sq("e4"), Side::White));
    }

    #[test]
    fn pawns_attack_forward_diagonals_only() {
        let squares = board(&[
            ("d5", PieceType::Pawn, Side::Black),
            ("d4", PieceType::Pawn, Side::White),
        ]);
        assert!(is_attacked(&squares, sq("e4"), Side::Black));
        assert!(is_attacked(&squares, sq("c4"), Side::Black));
        assert!(!is_attacked(&squares, sq("e6"), Side::Black));
        assert!(is_attacked(&squares, sq("e5"), Side::White));
        assert!(!is_attacked(&squares, sq("e3"), Side::White));
        assert!(!is_attacked(&squares, sq("d4"), Side::Black));
    }

    #[test]
    fn sliders_are_blocked() {
        let squares = board(&[
            ("a1", PieceType::Rook, Side::White),
            ("a4", PieceType::Pawn, Side::Black),
            ("h8", PieceType::Bishop, Side::White),
        ]);
        assert!(is_attacked(&squares, sq("a4"), Side::White));
        assert!(!is_attacked(&squares, sq("a5"), Side::White));
        assert!(is_attacked(&squares, sq("c3"), Side::White));
        assert!(!is_attacked(&squares, sq("g8"), Side::Black));
        assert!(!is_attacked(&squares, sq("b3"), Side::White));
    }

    #[test]
    fn rook_does_not_attack_diagonally() {
        let squares = board(&[("d4", PieceType::Rook, Side::Black)]);
        assert!(!is_attacked(&squares, sq("e5"), Side::Black));
        assert!(is_attacked(&squares, sq("d8"), Side::Black));
    }

    #[test]
    fn queen_attacks_both_ways() {
        let squares = board(&[("d4", PieceType::Queen, Side::White)]);
        assert!(is_attacked(&squares, sq("h8"), Side::White));
        assert!(is_attacked(&squares, sq("d1"), Side::White));
        assert!(!is_attacked(&squares, sq("e6"), Side::White));
    }

    #[test]
    fn adjacent_king_attacks() {
        let squares = board(&[("e5", PieceType::King, Side::Black)]);
        assert!(is_attacked(&squares, sq("e4"), Side::Black));
        assert!(!is_attacked(&squares, sq("e3"), Side::Black));
    }

    #[test]
    fn side_in_check_uses_king_map() {
        let squares = board(&[
            ("e1", PieceType::King, Side::White),
            ("e8", PieceType::King, Side::Black),
            ("e5", PieceType::Rook, Side::Black),
        ]);
        let kings = [sq("e1"), sq("e8")];
        assert!(side_in_check(&squares, &kings, Side::White));
        assert!(!side_in_check(&squares, &kings, Side::Black));
    }
}

use super::{Move, Piece, PieceType, Position, Side, Square, Squares, UnmakeInfo, Wing};

/// Square of the pawn an en-passant capture removes.
#[inline]
fn en_passant_victim(mv: Move) -> Square {
    Square::at(mv.to().file(), mv.from().rank())
}

#[inline]
fn castle_wing(mv: Move) -> Wing {
    if mv.is_king_side_castle() {
        Wing::KingSide
    } else {
        Wing::QueenSide
    }
}

/// Move the pieces of `mv` on a bare array, keeping `kings` in step.
///
/// Shared by the legality filter, which runs it on a copy, and by
/// [`Position::make_move`]. Returns the captured piece.
pub(crate) fn apply_to_squares(
    squares: &mut Squares,
    kings: &mut [Square; 2],
    mv: Move,
) -> Option<Piece> {
    let Some(mover) = squares[mv.from().index()].take() else {
        debug_assert!(false, "no piece on {} for {mv}", mv.from());
        return None;
    };
    let captured = if mv.is_en_passant() {
        squares[en_passant_victim(mv).index()].take()
    } else {
        squares[mv.to().index()].take()
    };
    let placed = match mv.promotion_piece() {
        Some(kind) => Piece::new(kind, mover.side),
        None => mover,
    };
    squares[mv.to().index()] = Some(placed);

    if mover.kind == PieceType::King {
        kings[mover.side.index()] = mv.to();
        if mv.is_castle() {
            let wing = castle_wing(mv);
            let rook = squares[wing.rook_home(mover.side).index()].take();
            squares[wing.rook_destination(mover.side).index()] = rook;
        }
    }
    captured
}

impl Position {
    /// Apply a generated legal move and return what `unmake_move` needs.
    ///
    /// Never call this with [`Move::NONE`]; guard with [`Move::is_legal`].
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        debug_assert!(mv.is_legal(), "make_move called with the sentinel move");
        let side = self.side_to_move;
        let mover = self.squares[mv.from().index()];
        let mut info = UnmakeInfo {
            mover,
            captured: None,
            previous_castling: self.castling,
            previous_en_passant_possible: self.en_passant_possible,
            previous_last_double_push: self.last_double_push,
            previous_check: self.check,
            previous_kings: self.kings,
            previous_material: self.material,
        };

        info.captured = apply_to_squares(&mut self.squares, &mut self.kings, mv);

        // Only the move just played may leave en passant open.
        self.en_passant_possible = false;
        self.last_double_push = Square::NONE;
        if mv.is_double_push() {
            self.en_passant_possible = true;
            self.last_double_push = mv.to();
        }

        if mover.is_some_and(|p| p.kind == PieceType::King) {
            self.castling.revoke_all(side);
        }
        self.castling.revoke_rook_square(mv.from());
        self.castling.revoke_rook_square(mv.to());

        if let Some(captured) = info.captured {
            self.material -= self.values.signed(captured);
        }
        if let Some(kind) = mv.promotion_piece() {
            self.material += self.values.signed(Piece::new(kind, side))
                - self.values.signed(Piece::new(PieceType::Pawn, side));
        }

        self.check[side.index()] = false;
        self.check[side.opponent().index()] = mv.will_be_check();
        self.side_to_move = side.opponent();
        info
    }

    /// Revert `mv`, which must be the last move made with `info`.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let side: Side = self.side_to_move.opponent();

        self.squares[mv.to().index()] = None;
        self.squares[mv.from().index()] = info.mover;
        if mv.is_en_passant() {
            self.squares[en_passant_victim(mv).index()] = info.captured;
        } else {
            self.squares[mv.to().index()] = info.captured;
        }
        if mv.is_castle() && info.mover.is_some_and(|p| p.kind == PieceType::King) {
            let wing = castle_wing(mv);
            let rook = self.squares[wing.rook_destination(side).index()].take();
            self.squares[wing.rook_home(side).index()] = rook;
        }

        self.side_to_move = side;
        self.castling = info.previous_castling;
        self.en_passant_possible = info.previous_en_passant_possible;
        self.last_double_push = info.previous_last_double_push;
        self.check = info.previous_check;
        self.kings = info.previous_kings;
        self.material = info.previous_material;
    }

    /// A copy of this position with `mv` applied.
    #[must_use]
    pub fn with_move(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn apply_to_squares_moves_castling_rook() {
        let position: Position = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let mut squares = *position.squares();
        let mut kings = [sq("e1"), sq("e8")];
        let captured =
            apply_to_squares(&mut squares, &mut kings, Move::queen_side_castle(sq("e1"), sq("c1")));
        assert_eq!(captured, None);
        assert_eq!(kings[0], sq("c1"));
        assert_eq!(squares[sq("d1").index()], Some(Piece::new(PieceType::Rook, Side::White)));
        assert_eq!(squares[sq("a1").index()], None);
        assert_eq!(squares[sq("e1").index()], None);
    }

    #[test]
    fn apply_to_squares_removes_en_passant_victim() {
        let position: Position = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let mut squares = *position.squares();
        let mut kings = [sq("e1"), sq("e8")];
        let captured =
            apply_to_squares(&mut squares, &mut kings, Move::en_passant(sq("e5"), sq("d6")));
        assert_eq!(captured, Some(Piece::new(PieceType::Pawn, Side::Black)));
        assert_eq!(squares[sq("d5").index()], None);
        assert_eq!(squares[sq("d6").index()], Some(Piece::new(PieceType::Pawn, Side::White)));
    }

    #[test]
    fn with_move_leaves_the_original_alone() {
        let position = Position::new();
        let next = position.with_move(Move::double_push(sq("e2"), sq("e4")));
        assert_eq!(position, Position::new());
        assert_eq!(next.side_to_move(), Side::Black);
        assert_eq!(next.last_double_push(), Some(sq("e4")));
    }
}

use super::super::{Move, MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, out: &mut MoveList) {
        let side = self.side_to_move;
        let promotion_rank = side.promotion_rank();

        if let Some(forward_sq) = from.step(side.pawn_forward()) {
            if self.piece_at(forward_sq).is_none() {
                if forward_sq.rank() == promotion_rank {
                    self.push_promotions_if_legal(from, forward_sq, false, out);
                } else {
                    self.push_if_legal(Move::quiet(from, forward_sq), out);
                    if from.rank() == side.pawn_home_rank() {
                        if let Some(double_sq) = forward_sq.step(side.pawn_forward()) {
                            if self.piece_at(double_sq).is_none() {
                                self.push_if_legal(Move::double_push(from, double_sq), out);
                            }
                        }
                    }
                }
            }
        }

        // `step` drops the off-board diagonal on the a and h files.
        for dir in side.pawn_captures() {
            let Some(target_sq) = from.step(dir) else {
                continue;
            };
            match self.piece_at(target_sq) {
                Some(target) if target.side != side => {
                    if target_sq.rank() == promotion_rank {
                        self.push_promotions_if_legal(from, target_sq, true, out);
                    } else {
                        self.push_if_legal(Move::capture(from, target_sq), out);
                    }
                }
                Some(_) => {}
                None => {
                    if self.en_passant_target_for(from) == Some(target_sq) {
                        self.push_if_legal(Move::en_passant(from, target_sq), out);
                    }
                }
            }
        }
    }

    /// The square a pawn on `from` may capture onto en passant, if any.
    fn en_passant_target_for(&self, from: Square) -> Option<Square> {
        let pushed = self.last_double_push()?;
        let side = self.side_to_move;
        if from.rank() != side.en_passant_rank()
            || pushed.rank() != from.rank()
            || pushed.file().abs_diff(from.file()) != 1
        {
            return None;
        }
        pushed.step(side.pawn_forward())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{PieceType, Position, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn home_rank_pawn_has_single_and_double_push() {
        let p = Position::new();
        let moves = p.moves_from(sq("e2"));
        assert_eq!(moves.len(), 2);
        assert!(!moves[0].is_double_push());
        assert!(moves[1].is_double_push());
        assert_eq!(moves[1].to(), sq("e4"));
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let p: Position = "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1".parse().unwrap();
        let moves = p.moves_from(sq("e2"));
        assert!(moves.is_empty());
    }

    #[test]
    fn edge_pawn_captures_one_way() {
        let p: Position = "4k3/8/8/8/8/1p6/P7/4K3 w - - 0 1".parse().unwrap();
        let captures: Vec<_> = p.moves_from(sq("a2")).iter().filter(|m| m.is_capture()).copied().collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to(), sq("b3"));
    }

    #[test]
    fn promotion_fans_out_into_four() {
        let p: Position = "1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = p.moves_from(sq("a7"));
        assert_eq!(moves.len(), 8);
        let capturing: Vec<PieceType> = moves
            .iter()
            .filter(|m| m.is_capture())
            .filter_map(|m| m.promotion_piece())
            .collect();
        assert_eq!(capturing, PieceType::PROMOTIONS);
    }

    #[test]
    fn en_passant_only_from_adjacent_file() {
        let p: Position = "4k3/8/8/2PpP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        for from in ["c5", "e5"] {
            let ep: Vec<_> = p.moves_from(sq(from)).iter().filter(|m| m.is_en_passant()).copied().collect();
            assert_eq!(ep.len(), 1, "{from}");
            assert_eq!(ep[0].to(), sq("d6"));
        }
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_illegal() {
        // Both pawns leave rank five, opening it for the rook.
        let p: Position = "8/8/8/K2pP2r/8/8/8/7k w - d6 0 1".parse().unwrap();
        assert!(p.moves_from(sq("e5")).iter().all(|m| !m.is_en_passant()));
    }
}

use super::super::attack_tables::tables;
use super::super::check::is_attacked;
use super::super::{Move, MoveList, Piece, PieceType, Position, Square, Wing};

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, out: &mut MoveList) {
        for &to in tables().king(from) {
            self.push_step(from, to, out);
        }

        // Castling out of check is never allowed.
        if self.in_check(self.side_to_move) {
            return;
        }
        for wing in Wing::BOTH {
            if self.can_castle(from, wing) {
                let to = wing.king_destination(self.side_to_move);
                let mv = match wing {
                    Wing::KingSide => Move::king_side_castle(from, to),
                    Wing::QueenSide => Move::queen_side_castle(from, to),
                };
                self.push_if_legal(mv, out);
            }
        }
    }

    fn can_castle(&self, from: Square, wing: Wing) -> bool {
        let side = self.side_to_move;
        let rank = side.back_rank();
        if !self.castling.has(side, wing) || from != Square::at(4, rank) {
            return false;
        }
        if self.piece_at(wing.rook_home(side)) != Some(Piece::new(PieceType::Rook, side)) {
            return false;
        }
        if wing
            .between_files()
            .iter()
            .any(|&file| self.piece_at(Square::at(file, rank)).is_some())
        {
            return false;
        }
        let opponent = side.opponent();
        [from, wing.king_passes(side), wing.king_destination(side)]
            .iter()
            .all(|&sq| !is_attacked(&self.squares, sq, opponent))
    }
}

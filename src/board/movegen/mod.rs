mod kings;
mod knights;
mod pawns;
mod sliders;

use super::check::side_in_check;
use super::make_unmake::apply_to_squares;
use super::{Move, MoveList, PieceType, Position, Square};

impl Position {
    /// Append every legal move of the piece on `from` to `out`.
    ///
    /// Does nothing for an empty square or a piece of the side not to move.
    pub fn generate_moves(&self, from: Square, out: &mut MoveList) {
        let Some(piece) = self.piece_at(from) else {
            return;
        };
        if piece.side != self.side_to_move {
            return;
        }
        match piece.kind {
            PieceType::King => self.generate_king_moves(from, out),
            PieceType::Queen => self.generate_queen_moves(from, out),
            PieceType::Bishop => self.generate_bishop_moves(from, out),
            PieceType::Knight => self.generate_knight_moves(from, out),
            PieceType::Rook => self.generate_rook_moves(from, out),
            PieceType::Pawn => self.generate_pawn_moves(from, out),
        }
    }

    /// Append the legal moves of every piece of the side to move, in
    /// square order a1..h8.
    pub fn generate_all_moves(&self, out: &mut MoveList) {
        for sq in Square::all() {
            self.generate_moves(sq, out);
        }
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_all_moves(&mut moves);
        moves
    }

    /// Legal moves of the piece on `from`.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_moves(from, &mut moves);
        moves
    }

    /// The first legal move from `from` to `to`, or [`Move::NONE`].
    ///
    /// Promotions resolve to the queen.
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square) -> Move {
        self.moves_from(from)
            .iter()
            .copied()
            .find(|mv| mv.to() == to)
            .unwrap_or(Move::NONE)
    }

    /// Whether the side to move has no legal moves while in check.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    /// Whether the side to move has no legal moves and is not in check.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    /// Play `mv` on a copy of the array. `None` when it leaves the mover's
    /// king attacked, otherwise whether it attacks the opponent's king.
    fn hypothetical_check(&self, mv: Move) -> Option<bool> {
        let mut squares = self.squares;
        let mut kings = self.kings;
        apply_to_squares(&mut squares, &mut kings, mv);
        let side = self.side_to_move;
        if side_in_check(&squares, &kings, side) {
            return None;
        }
        Some(side_in_check(&squares, &kings, side.opponent()))
    }

    /// Push `mv` tagged with its check status if it is legal.
    fn push_if_legal(&self, mv: Move, out: &mut MoveList) {
        if let Some(gives_check) = self.hypothetical_check(mv) {
            out.push(mv.tagged(gives_check));
        }
    }

    /// One candidate per promotion piece, each tested on its own board.
    fn push_promotions_if_legal(&self, from: Square, to: Square, capture: bool, out: &mut MoveList) {
        for kind in PieceType::PROMOTIONS {
            self.push_if_legal(Move::promotion(from, to, kind, capture), out);
        }
    }

    /// Quiet move or capture onto `to`, whichever the target square calls for.
    /// Returns `false` when `to` holds a friendly piece.
    fn push_step(&self, from: Square, to: Square, out: &mut MoveList) -> bool {
        match self.piece_at(to) {
            None => {
                self.push_if_legal(Move::quiet(from, to), out);
                true
            }
            Some(piece) if piece.side != self.side_to_move => {
                self.push_if_legal(Move::capture(from, to), out);
                true
            }
            Some(_) => false,
        }
    }
}

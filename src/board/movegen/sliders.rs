use super::super::{Direction, MoveList, Position, Square};

impl Position {
    /// Walk each ray until the edge, a friendly piece (excluded) or an
    /// enemy piece (included).
    fn generate_slider_moves(&self, from: Square, directions: &[Direction], out: &mut MoveList) {
        for &dir in directions {
            let mut sq = from;
            while let Some(to) = sq.step(dir) {
                if !self.push_step(from, to, out) || self.piece_at(to).is_some() {
                    break;
                }
                sq = to;
            }
        }
    }

    pub(crate) fn generate_bishop_moves(&self, from: Square, out: &mut MoveList) {
        self.generate_slider_moves(from, &Direction::DIAGONAL, out);
    }

    pub(crate) fn generate_rook_moves(&self, from: Square, out: &mut MoveList) {
        self.generate_slider_moves(from, &Direction::ORTHOGONAL, out);
    }

    pub(crate) fn generate_queen_moves(&self, from: Square, out: &mut MoveList) {
        self.generate_slider_moves(from, &Direction::ALL, out);
    }
}

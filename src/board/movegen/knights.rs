use super::super::attack_tables::tables;
use super::super::{MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, out: &mut MoveList) {
        for &to in tables().knight(from) {
            self.push_step(from, to, out);
        }
    }
}

//! Negamax search with alpha-beta pruning over material evaluation.
//!
//! The searcher walks a single [`Position`] with make/unmake. Every
//! `make_move` is paired with an `unmake_move` before the frame returns,
//! beta cutoffs included, so siblings always see the parent position.

use std::cmp::Reverse;

use crate::board::{Move, MoveList, PieceValues, Position, Squares};

use super::EngineConfig;

/// Bound wider than any reachable score.
pub const INFINITY: i32 = 1_000_000_000;

/// Material balance from the side to move's point of view.
#[inline]
#[must_use]
pub fn evaluate(position: &Position) -> i32 {
    position.material_balance() * position.side_to_move().sign()
}

pub(crate) struct Searcher<'a> {
    position: &'a mut Position,
    config: &'a EngineConfig,
    pub(crate) nodes: u64,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(position: &'a mut Position, config: &'a EngineConfig) -> Self {
        Searcher {
            position,
            config,
            nodes: 0,
        }
    }

    fn moves(&self) -> MoveList {
        let mut moves = self.position.legal_moves();
        if self.config.order_moves {
            order_moves(&mut moves, self.position.squares(), &self.position.piece_values());
        }
        moves
    }

    /// Score for a side with no legal moves. Mates found with more depth
    /// left are closer to the root and score further from zero.
    fn terminal_score(&self, depth: u32) -> i32 {
        if self.position.in_check(self.position.side_to_move()) {
            -(self.config.mate_score + depth as i32)
        } else {
            0
        }
    }

    /// Fail-hard negamax: the result is clamped to `[alpha, beta]`.
    pub(crate) fn negamax(&mut self, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(self.position);
        }
        let moves = self.moves();
        if moves.is_empty() {
            return self.terminal_score(depth);
        }
        for &mv in moves.iter() {
            let info = self.position.make_move(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha);
            self.position.unmake_move(mv, info);
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }

    /// Plain negamax visiting every node.
    pub(crate) fn full_width(&mut self, depth: u32) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(self.position);
        }
        let moves = self.moves();
        if moves.is_empty() {
            return self.terminal_score(depth);
        }
        let mut best = -INFINITY;
        for &mv in moves.iter() {
            let info = self.position.make_move(mv);
            let score = -self.full_width(depth - 1);
            self.position.unmake_move(mv, info);
            best = best.max(score);
        }
        best
    }

    /// Search each root move separately and keep the first best one.
    /// `depth` counts the root ply and must be at least one.
    pub(crate) fn root(&mut self, depth: u32, prune: bool) -> Option<(Move, i32)> {
        debug_assert!(depth >= 1);
        self.nodes += 1;
        let mut alpha = -INFINITY;
        let mut best: Option<(Move, i32)> = None;
        for &mv in self.moves().iter() {
            let info = self.position.make_move(mv);
            let score = if prune {
                -self.negamax(depth - 1, -INFINITY, -alpha)
            } else {
                -self.full_width(depth - 1)
            };
            self.position.unmake_move(mv, info);
            log::trace!("root move {mv} scores {score}");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
                alpha = alpha.max(score);
            }
        }
        best
    }
}

fn victim_value(mv: Move, squares: &Squares, values: &PieceValues) -> i32 {
    if mv.is_en_passant() {
        return values.pawn;
    }
    squares[mv.to().index()].map_or(0, |piece| values.of(piece.kind))
}

/// Stable reorder: promotions and captures first, richer victims first,
/// and among equal victims the cheapest attacker first.
pub(crate) fn order_moves(moves: &mut MoveList, squares: &Squares, values: &PieceValues) {
    moves.as_mut_slice().sort_by_key(|&mv| {
        if !mv.is_capture() && !mv.is_promotion() {
            return Reverse((false, 0, Reverse(0)));
        }
        let gain = victim_value(mv, squares, values)
            + mv.promotion_piece().map_or(0, |kind| values.of(kind) - values.pawn);
        let attacker = squares[mv.from().index()].map_or(0, |piece| values.of(piece.kind));
        Reverse((true, gain, Reverse(attacker)))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn evaluate_flips_with_the_side_to_move() {
        let white: Position = "4k3/8/8/8/8/8/8/3QK3 w - - 0 1".parse().unwrap();
        let black: Position = "4k3/8/8/8/8/8/8/3QK3 b - - 0 1".parse().unwrap();
        assert_eq!(evaluate(&white), 900);
        assert_eq!(evaluate(&black), -900);
    }

    #[test]
    fn captures_come_first_most_valuable_victim_first() {
        let p: Position = "4k3/8/8/2r1q3/3P4/8/8/7K w - - 0 1".parse().unwrap();
        let mut moves = p.legal_moves();
        order_moves(&mut moves, p.squares(), &p.piece_values());
        assert_eq!(moves[0].to(), sq("e5"));
        assert_eq!(moves[1].to(), sq("c5"));
        assert!(!moves[2].is_capture());
    }

    #[test]
    fn cheaper_attacker_first_on_equal_victims() {
        let p: Position = "4k3/8/8/3r4/2P5/8/3Q4/4K3 w - - 0 1".parse().unwrap();
        let mut moves = p.legal_moves();
        order_moves(&mut moves, p.squares(), &p.piece_values());
        assert_eq!((moves[0].from(), moves[0].to()), (sq("c4"), sq("d5")));
        assert_eq!((moves[1].from(), moves[1].to()), (sq("d2"), sq("d5")));
    }

    #[test]
    fn quiet_moves_keep_scan_order() {
        let p = Position::new();
        let mut moves = p.legal_moves();
        let before: Vec<Move> = moves.iter().copied().collect();
        order_moves(&mut moves, p.squares(), &p.piece_values());
        let after: Vec<Move> = moves.iter().copied().collect();
        assert_eq!(before, after);
    }
}

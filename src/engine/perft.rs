//! Move-tree counting for generator verification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Move, Position};

/// Tally of the moves found at one ply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveCounter {
    pub moves: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl MoveCounter {
    fn record(&mut self, mv: Move) {
        self.moves += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
        if mv.will_be_check() {
            self.checks += 1;
        }
    }
}

/// Per-ply counters for a full move tree, ply 1 first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerftReport {
    plies: Vec<MoveCounter>,
}

impl PerftReport {
    /// Number of plies counted.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.plies.len()
    }

    /// Counter for `ply`, counting from 1.
    #[must_use]
    pub fn ply(&self, ply: usize) -> Option<&MoveCounter> {
        ply.checked_sub(1).and_then(|idx| self.plies.get(idx))
    }

    #[must_use]
    pub fn plies(&self) -> &[MoveCounter] {
        &self.plies
    }

    /// Moves at the deepest ply; equal to `Position::perft(depth)`.
    #[must_use]
    pub fn leaves(&self) -> u64 {
        self.plies.last().map_or(0, |counter| counter.moves)
    }
}

impl fmt::Display for PerftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, counter) in self.plies.iter().enumerate() {
            writeln!(f, "Depth {}", idx + 1)?;
            writeln!(f, "Moves: {}", counter.moves)?;
            writeln!(f, "Captures: {}", counter.captures)?;
            writeln!(f, "En passant: {}", counter.en_passant)?;
            writeln!(f, "Castles: {}", counter.castles)?;
            writeln!(f, "Promotions: {}", counter.promotions)?;
            writeln!(f, "Checks: {}", counter.checks)?;
        }
        Ok(())
    }
}

fn walk(position: &mut Position, ply: usize, counters: &mut [MoveCounter]) {
    let Some((counter, deeper)) = counters[ply..].split_first_mut() else {
        return;
    };
    let moves = position.legal_moves();
    for &mv in moves.iter() {
        counter.record(mv);
    }
    if deeper.is_empty() {
        return;
    }
    for &mv in moves.iter() {
        let info = position.make_move(mv);
        walk(position, ply + 1, counters);
        position.unmake_move(mv, info);
    }
}

/// Count every move in the tree below `position`, `depth` plies deep.
pub(crate) fn count_moves(position: &mut Position, depth: u32) -> PerftReport {
    let mut plies = vec![MoveCounter::default(); depth as usize];
    walk(position, 0, &mut plies);
    PerftReport { plies }
}

impl Position {
    /// Number of leaf nodes `depth` plies below this position.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &m in moves.iter() {
            let info = self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(m, info);
        }

        nodes
    }
}

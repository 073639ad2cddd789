//! Search driver that owns a position.
//!
//! [`Engine`] wraps a [`Position`] and an [`EngineConfig`]; it runs the
//! negamax search to pick and play moves and the perft counter used to
//! verify move generation.

mod error;
mod perft;
mod search;

use crate::board::{Move, PieceValues, Position};

pub use error::EngineError;
pub use perft::{MoveCounter, PerftReport};
pub use search::{evaluate, INFINITY};

use search::Searcher;

/// Tunable engine settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Material scale used by the evaluation.
    pub piece_values: PieceValues,
    /// Deepest search or perft the engine accepts.
    pub max_depth: u32,
    /// Try promotions and captures before quiet moves.
    pub order_moves: bool,
    /// Magnitude of a mate score, before the depth adjustment.
    pub mate_score: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            piece_values: PieceValues::default(),
            max_depth: 16,
            order_moves: true,
            mate_score: 100_000_000,
        }
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found
    pub best_move: Move,
    /// Score of `best_move` for the side to move
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

#[derive(Clone, Debug)]
pub struct Engine {
    position: Position,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

impl Engine {
    /// An engine at the starting position.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Engine::with_position(Position::new(), config)
    }

    #[must_use]
    pub fn with_position(mut position: Position, config: EngineConfig) -> Self {
        position.set_piece_values(config.piece_values);
        Engine { position, config }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the position, adopting the engine's piece values.
    pub fn set_position(&mut self, mut position: Position) {
        position.set_piece_values(self.config.piece_values);
        self.position = position;
    }

    /// Back to the starting position.
    pub fn reset(&mut self) {
        self.position.reset();
    }

    /// Apply a move to the owned position. The sentinel is ignored and
    /// reported as `false`.
    pub fn apply(&mut self, mv: Move) -> bool {
        if !mv.is_legal() {
            return false;
        }
        self.position.make_move(mv);
        true
    }

    fn check_depth(&self, depth: u32) -> Result<(), EngineError> {
        if depth > self.config.max_depth {
            return Err(EngineError::DepthTooLarge {
                depth,
                max: self.config.max_depth,
            });
        }
        Ok(())
    }

    fn root_search(&mut self, depth: u32, prune: bool) -> Result<SearchResult, EngineError> {
        self.check_depth(depth)?;
        let depth = depth.max(1);
        log::debug!("searching {depth} plies, pruning {prune}");
        let mut searcher = Searcher::new(&mut self.position, &self.config);
        let best = searcher.root(depth, prune);
        let nodes = searcher.nodes;
        let (best_move, score) = best.ok_or(EngineError::NoLegalMoves)?;
        log::info!("best move {best_move} scores {score} after {nodes} nodes");
        Ok(SearchResult {
            best_move,
            score,
            nodes,
        })
    }

    /// Alpha-beta search from the root. A depth of zero searches one ply.
    pub fn best_move(&mut self, depth: u32) -> Result<SearchResult, EngineError> {
        self.root_search(depth, true)
    }

    /// The same root search without pruning.
    pub fn best_move_full_width(&mut self, depth: u32) -> Result<SearchResult, EngineError> {
        self.root_search(depth, false)
    }

    /// Negamax score of the current position for the side to move.
    pub fn search(&mut self, depth: u32) -> Result<i32, EngineError> {
        self.check_depth(depth)?;
        let mut searcher = Searcher::new(&mut self.position, &self.config);
        Ok(searcher.negamax(depth, -INFINITY, INFINITY))
    }

    /// Score of the current position without pruning.
    pub fn search_full_width(&mut self, depth: u32) -> Result<i32, EngineError> {
        self.check_depth(depth)?;
        let mut searcher = Searcher::new(&mut self.position, &self.config);
        Ok(searcher.full_width(depth))
    }

    /// Search and play the best move. `Ok(None)` when the game is over.
    pub fn play(&mut self, depth: u32) -> Result<Option<Move>, EngineError> {
        match self.best_move(depth) {
            Ok(result) => {
                self.position.make_move(result.best_move);
                Ok(Some(result.best_move))
            }
            Err(EngineError::NoLegalMoves) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Per-ply move counts of the full tree below the current position.
    pub fn count_moves(&mut self, depth: u32) -> Result<PerftReport, EngineError> {
        self.check_depth(depth)?;
        let report = perft::count_moves(&mut self.position, depth);
        log::info!("perft {depth}: {} leaves", report.leaves());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_ceiling_is_enforced() {
        let mut engine = Engine::new(EngineConfig {
            max_depth: 3,
            ..EngineConfig::default()
        });
        assert_eq!(
            engine.best_move(4),
            Err(EngineError::DepthTooLarge { depth: 4, max: 3 })
        );
        assert!(engine.count_moves(4).is_err());
        assert!(engine.search(4).is_err());
        assert!(engine.count_moves(3).is_ok());
    }

    #[test]
    fn search_leaves_the_position_unchanged() {
        let mut engine = Engine::default();
        let before = engine.position().clone();
        engine.best_move(3).unwrap();
        engine.search(2).unwrap();
        assert_eq!(engine.position(), &before);
    }

    #[test]
    fn play_advances_the_game() {
        let mut engine = Engine::default();
        let mv = engine.play(2).unwrap();
        assert!(mv.is_some_and(|m| m.is_legal()));
        assert_eq!(engine.position().side_to_move(), crate::board::Side::Black);
    }

    #[test]
    fn apply_ignores_the_sentinel() {
        let mut engine = Engine::default();
        assert!(!engine.apply(Move::NONE));
        assert_eq!(engine.position(), &Position::new());
    }

    #[test]
    fn custom_piece_values_reach_the_position() {
        let values = PieceValues {
            pawn: 1,
            ..PieceValues::default()
        };
        let position: Position = "4k3/8/8/8/8/8/P7/4K3 w - - 0 1".parse().unwrap();
        let engine = Engine::with_position(
            position,
            EngineConfig {
                piece_values: values,
                ..EngineConfig::default()
            },
        );
        assert_eq!(engine.position().material_balance(), 1);
    }
}

pub mod board;
pub mod engine;
pub mod logger;
pub mod shell;
pub mod timer;

pub use board::{Move, Piece, PieceType, Position, Side, Square};
pub use engine::{Engine, EngineConfig, EngineError, PerftReport, SearchResult};
pub use shell::{Shell, ShellError};

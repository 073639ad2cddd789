//! Shell input parsing.
//!
//! Commands start with `$`. Anything else is mode-specific: a FEN in the
//! setup mode, a square index while playing, an algebraic square while
//! inspecting move generation.

use std::fmt;
use std::io;

use crate::board::{FenError, Square};
use crate::engine::EngineError;

/// Dollar-prefixed shell commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set up the starting position
    Reset,
    /// Leave the shell
    Quit,
    /// Enter the move generation inspector
    TestMoveGen,
    /// Drop the current board and ask for a new one
    ExitBoard,
    /// Print the 64-character position string
    GetPosition,
    /// Search to the given depth and play the best move
    Search(u32),
    /// Count the move tree to the given depth
    Perft(u32),
    /// Anything else starting with `$`
    Unknown(String),
}

/// Parse a `$` command. `Ok(None)` when the line is not a command.
pub fn parse_command(line: &str) -> Result<Option<Command>, ShellError> {
    let trimmed = line.trim();
    if !trimmed.starts_with('$') {
        return Ok(None);
    }

    let mut parts = trimmed.split_whitespace();
    let Some(name) = parts.next() else {
        return Ok(None);
    };

    let cmd = match name {
        "$reset" => Command::Reset,
        "$quit" => Command::Quit,
        "$testmovegen" => Command::TestMoveGen,
        "$exitboard" => Command::ExitBoard,
        "$getposition" => Command::GetPosition,
        "$search" => Command::Search(parse_depth(parts.next())?),
        "$perft" => Command::Perft(parse_depth(parts.next())?),
        _ => Command::Unknown(trimmed.to_string()),
    };
    Ok(Some(cmd))
}

fn parse_depth(arg: Option<&str>) -> Result<u32, ShellError> {
    let arg = arg.unwrap_or_default();
    arg.parse().map_err(|_| ShellError::NotANumber {
        input: arg.to_string(),
    })
}

/// A square given by index, 0 = a1 through 63 = h8.
pub fn parse_square_index(line: &str) -> Result<Square, ShellError> {
    let trimmed = line.trim();
    let index: usize = trimmed.parse().map_err(|_| ShellError::NotANumber {
        input: trimmed.to_string(),
    })?;
    Square::try_from(index).map_err(|_| ShellError::InvalidSquare {
        input: trimmed.to_string(),
    })
}

/// A square in algebraic form such as `e4`.
pub fn parse_algebraic_square(line: &str) -> Result<Square, ShellError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| ShellError::InvalidSquare {
        input: trimmed.to_string(),
    })
}

/// Everything that can go wrong handling a line of shell input
#[derive(Debug)]
pub enum ShellError {
    /// Not a square on the board
    InvalidSquare { input: String },
    /// Expected a decimal number
    NotANumber { input: String },
    /// The position could not be loaded
    Fen(FenError),
    /// The engine refused the request
    Engine(EngineError),
    /// Reading input or writing output failed
    Io(io::Error),
}

impl ShellError {
    /// Whether the shell can keep going after reporting this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShellError::Io(_))
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::InvalidSquare { input } => write!(f, "Invalid square '{input}'"),
            ShellError::NotANumber { input } => write!(f, "Expected a number, got '{input}'"),
            ShellError::Fen(e) => write!(f, "Invalid FEN: {e}"),
            ShellError::Engine(e) => write!(f, "{e}"),
            ShellError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Fen(e) => Some(e),
            ShellError::Engine(e) => Some(e),
            ShellError::Io(e) => Some(e),
            ShellError::InvalidSquare { .. } | ShellError::NotANumber { .. } => None,
        }
    }
}

impl From<FenError> for ShellError {
    fn from(e: FenError) -> Self {
        ShellError::Fen(e)
    }
}

impl From<EngineError> for ShellError {
    fn from(e: EngineError) -> Self {
        ShellError::Engine(e)
    }
}

impl From<io::Error> for ShellError {
    fn from(e: io::Error) -> Self {
        ShellError::Io(e)
    }
}

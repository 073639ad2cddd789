use std::fmt;

/// Error type for rejected engine requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Requested depth exceeds the configured ceiling
    DepthTooLarge { depth: u32, max: u32 },
    /// The side to move has no legal move to choose
    NoLegalMoves,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::DepthTooLarge { depth, max } => {
                write!(f, "Depth {depth} exceeds the maximum of {max}")
            }
            EngineError::NoLegalMoves => write!(f, "No legal moves in this position"),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_too_large_names_both_depths() {
        let err = EngineError::DepthTooLarge { depth: 40, max: 16 };
        let text = err.to_string();
        assert!(text.contains("40"));
        assert!(text.contains("16"));
    }
}

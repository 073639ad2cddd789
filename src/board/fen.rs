use std::fmt::Write as _;
use std::str::FromStr;

use super::error::FenError;
use super::{CastlingRights, Piece, PieceType, Position, Setup, Side, Square, Squares, Wing};

/// The standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(field: &str) -> Result<Squares, FenError> {
    let mut squares: Squares = [None; 64];
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRank { ranks: ranks.len() });
    }
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file >= 8 {
                return Err(FenError::BadFileCount {
                    rank: rank_idx,
                    files: file + 1,
                });
            }
            squares[Square::at(file as u8, rank).index()] = Some(piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadFileCount {
                rank: rank_idx,
                files: file,
            });
        }
    }
    Ok(squares)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    for c in field.chars() {
        match c {
            'K' => rights.grant(Side::White, Wing::KingSide),
            'Q' => rights.grant(Side::White, Wing::QueenSide),
            'k' => rights.grant(Side::Black, Wing::KingSide),
            'q' => rights.grant(Side::Black, Wing::QueenSide),
            '-' => {}
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }
    Ok(rights)
}

/// Whether a pawn of `side` stands beside the pawn on `pushed`.
fn has_adjacent_capturer(squares: &Squares, pushed: Square, side: Side) -> bool {
    let capturer = Piece::new(PieceType::Pawn, side);
    [-1, 1]
        .iter()
        .filter_map(|&df| pushed.offset(df, 0))
        .any(|sq| squares[sq.index()] == Some(capturer))
}

/// Resolve the en-passant field into the square of the pawn that just
/// made its double push, and whether a capture of it is available at all.
fn parse_en_passant(
    field: &str,
    squares: &Squares,
    side: Side,
) -> Result<(bool, Square), FenError> {
    if field == "-" {
        return Ok((false, Square::NONE));
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target: Square = field.parse().map_err(|_| invalid())?;
    // The target sits just behind the pushed pawn, seen from the side to move.
    let pushed = target
        .step(side.opponent().pawn_forward())
        .filter(|sq| sq.rank() == side.en_passant_rank())
        .ok_or_else(invalid)?;

    if has_adjacent_capturer(squares, pushed, side) {
        Ok((true, pushed))
    } else {
        Ok((false, Square::NONE))
    }
}

impl Position {
    /// Parse a position from FEN. The halfmove and fullmove fields are
    /// accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let squares = parse_placement(parts[0])?;
        let side_to_move = match parts[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        let castling = parse_castling(parts[2])?;
        let (en_passant_possible, last_double_push) =
            parse_en_passant(parts[3], &squares, side_to_move)?;

        log::info!("{side_to_move} to move");
        if en_passant_possible {
            log::info!("en passant possible after {last_double_push}");
        }

        Ok(Position::from_parts(Setup {
            squares,
            side_to_move,
            castling,
            en_passant_possible,
            last_double_push,
            material: None,
        })?)
    }

    /// Render the position as FEN. Move counters are written as `0 1`, and
    /// the en-passant field only names a square a pawn can capture onto.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::at(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(fen, "{empty}");
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(fen, "{empty}");
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        let active = match self.side_to_move {
            Side::White => 'w',
            Side::Black => 'b',
        };
        let en_passant = self
            .last_double_push()
            .filter(|&pushed| has_adjacent_capturer(&self.squares, pushed, self.side_to_move))
            .and_then(|sq| sq.step(self.side_to_move.pawn_forward()))
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        let _ = write!(fen, " {active} {} {en_passant} 0 1", self.castling);
        fen
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

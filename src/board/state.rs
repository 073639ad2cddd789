use super::error::PositionError;
use super::{
    attack_tables, check, CastlingRights, Piece, PieceType, PieceValues, Side, Square, Squares,
};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// State `make_move` overwrites, handed back to `unmake_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) mover: Option<Piece>,
    pub(crate) captured: Option<Piece>,
    pub(crate) previous_castling: CastlingRights,
    pub(crate) previous_en_passant_possible: bool,
    pub(crate) previous_last_double_push: Square,
    pub(crate) previous_check: [bool; 2],
    pub(crate) previous_kings: [Square; 2],
    pub(crate) previous_material: i32,
}

impl UnmakeInfo {
    /// The piece the move removed from the board, if any.
    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

/// Everything a loader hands over to construct a [`Position`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setup {
    pub squares: Squares,
    pub side_to_move: Side,
    pub castling: CastlingRights,
    pub en_passant_possible: bool,
    /// Destination of the last double pawn push, or `Square::NONE`.
    pub last_double_push: Square,
    /// Material balance to adopt; recomputed from `squares` when `None`.
    pub material: Option<i32>,
}

/// A chess position with incrementally maintained auxiliary state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: Squares,
    pub(crate) side_to_move: Side,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant_possible: bool,
    pub(crate) last_double_push: Square,
    /// Whether each side's king is attacked, indexed by `Side::index`.
    pub(crate) check: [bool; 2],
    pub(crate) kings: [Square; 2],
    /// White material minus black material.
    pub(crate) material: i32,
    pub(crate) values: PieceValues,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        position.reset();
        position
    }

    fn empty() -> Self {
        attack_tables::init();
        Position {
            squares: [None; 64],
            side_to_move: Side::White,
            castling: CastlingRights::none(),
            en_passant_possible: false,
            last_double_push: Square::NONE,
            check: [false; 2],
            kings: [Square::NONE; 2],
            material: 0,
            values: PieceValues::default(),
        }
    }

    /// Put the standard starting array back, keeping the piece values.
    pub fn reset(&mut self) {
        self.squares = [None; 64];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            self.squares[Square::at(file, 0).index()] = Some(Piece::new(kind, Side::White));
            self.squares[Square::at(file, 7).index()] = Some(Piece::new(kind, Side::Black));
            self.squares[Square::at(file, 1).index()] =
                Some(Piece::new(PieceType::Pawn, Side::White));
            self.squares[Square::at(file, 6).index()] =
                Some(Piece::new(PieceType::Pawn, Side::Black));
        }
        self.side_to_move = Side::White;
        self.castling = CastlingRights::all();
        self.en_passant_possible = false;
        self.last_double_push = Square::NONE;
        self.check = [false; 2];
        self.kings = [Square::E1, Square::E8];
        self.material = 0;
    }

    /// Construct from a loader's setup, rejecting positions that do not
    /// have exactly one king per side.
    pub fn from_parts(setup: Setup) -> Result<Self, PositionError> {
        let mut position = Position::empty();
        position.kings = find_kings(&setup.squares)?;
        position.squares = setup.squares;
        position.side_to_move = setup.side_to_move;
        position.castling = setup.castling;
        position.en_passant_possible = setup.en_passant_possible;
        position.last_double_push = setup.last_double_push;
        position.material = setup
            .material
            .unwrap_or_else(|| position.recompute_material());
        for side in Side::BOTH {
            position.check[side.index()] = position.side_in_check(side);
        }
        Ok(position)
    }

    #[inline]
    #[must_use]
    pub fn squares(&self) -> &Squares {
        &self.squares
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares.get(sq.index()).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant_possible(&self) -> bool {
        self.en_passant_possible
    }

    /// Destination of the last double pawn push, while en passant is possible.
    #[must_use]
    pub fn last_double_push(&self) -> Option<Square> {
        if self.en_passant_possible && !self.last_double_push.is_none() {
            Some(self.last_double_push)
        } else {
            None
        }
    }

    /// Stored check flag for `side`, as left by the last applied move.
    #[inline]
    #[must_use]
    pub fn in_check(&self, side: Side) -> bool {
        self.check[side.index()]
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, side: Side) -> Square {
        self.kings[side.index()]
    }

    /// Running white-minus-black material.
    #[inline]
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.material
    }

    #[must_use]
    pub fn piece_values(&self) -> PieceValues {
        self.values
    }

    /// Swap the material scale and recompute the balance under it.
    pub fn set_piece_values(&mut self, values: PieceValues) {
        self.values = values;
        self.material = self.recompute_material();
    }

    /// Material balance derived from the raw array.
    #[must_use]
    pub fn recompute_material(&self) -> i32 {
        self.squares
            .iter()
            .flatten()
            .map(|&piece| self.values.signed(piece))
            .sum()
    }

    /// Recompute from scratch whether `side`'s king is attacked.
    #[must_use]
    pub fn side_in_check(&self, side: Side) -> bool {
        check::side_in_check(&self.squares, &self.kings, side)
    }

    /// 64 characters in square order: `.` for empty, `kqbnrp` with
    /// White in upper case.
    #[must_use]
    pub fn position_string(&self) -> String {
        self.squares
            .iter()
            .map(|sq| sq.map_or('.', Piece::to_fen_char))
            .collect()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

fn find_kings(squares: &Squares) -> Result<[Square; 2], PositionError> {
    let mut kings = [Square::NONE; 2];
    for (sq, piece) in Square::all().zip(squares.iter()) {
        if let Some(piece) = piece {
            if piece.kind == PieceType::King {
                let slot = &mut kings[piece.side.index()];
                if !slot.is_none() {
                    return Err(PositionError::ExtraKing { side: piece.side });
                }
                *slot = sq;
            }
        }
    }
    for side in Side::BOTH {
        if kings[side.index()].is_none() {
            return Err(PositionError::MissingKing { side });
        }
    }
    Ok(kings)
}

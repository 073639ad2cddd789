//! Precomputed knight-jump and king-step tables.
//!
//! Built once by [`init`] and read-only afterwards. Every `Position`
//! constructor calls `init`, so generation never sees an unfilled table.

use once_cell::sync::OnceCell;

use super::{Direction, Square};

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (-2, 1),
    (1, -2),
    (-1, -2),
    (2, -1),
    (-2, -1),
];

/// Up to eight on-board target squares.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SquareList {
    squares: [Square; 8],
    len: u8,
}

impl SquareList {
    const EMPTY: SquareList = SquareList {
        squares: [Square::NONE; 8],
        len: 0,
    };

    fn push(&mut self, sq: Square) {
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

/// Per-square adjacency for knights and kings.
#[derive(Debug)]
pub struct AttackTables {
    knight: [SquareList; 64],
    king: [SquareList; 64],
}

impl AttackTables {
    fn build() -> Self {
        let mut tables = AttackTables {
            knight: [SquareList::EMPTY; 64],
            king: [SquareList::EMPTY; 64],
        };
        for sq in Square::all() {
            for (df, dr) in KNIGHT_JUMPS {
                if let Some(target) = sq.offset(df, dr) {
                    tables.knight[sq.index()].push(target);
                }
            }
            for dir in Direction::ALL {
                if let Some(target) = sq.step(dir) {
                    tables.king[sq.index()].push(target);
                }
            }
        }
        tables
    }

    /// Squares a knight on `sq` jumps to.
    #[inline]
    #[must_use]
    pub fn knight(&self, sq: Square) -> &[Square] {
        self.knight[sq.index()].as_slice()
    }

    /// Squares adjacent to `sq`.
    #[inline]
    #[must_use]
    pub fn king(&self, sq: Square) -> &[Square] {
        self.king[sq.index()].as_slice()
    }
}

static TABLES: OnceCell<AttackTables> = OnceCell::new();

/// Fill the tables if that has not happened yet and return them.
pub fn init() -> &'static AttackTables {
    TABLES.get_or_init(|| {
        log::debug!("building knight and king adjacency tables");
        AttackTables::build()
    })
}

#[inline]
pub(crate) fn tables() -> &'static AttackTables {
    init()
}

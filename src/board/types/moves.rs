//! Move type and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceType;
use super::square::Square;

// Flag nibble: promotion | capture | special1 | special0
const PROMOTION: u8 = 0b1000;
const CAPTURE: u8 = 0b0100;
const SPECIAL1: u8 = 0b0010;
const SPECIAL0: u8 = 0b0001;

const FLAG_QUIET: u8 = 0;
const FLAG_DOUBLE_PUSH: u8 = SPECIAL0;
const FLAG_KING_CASTLE: u8 = SPECIAL1;
const FLAG_QUEEN_CASTLE: u8 = SPECIAL1 | SPECIAL0;
const FLAG_CAPTURE: u8 = CAPTURE;
const FLAG_EN_PASSANT: u8 = CAPTURE | SPECIAL0;

/// A move: origin, destination, four flag bits and the `will_be_check` tag.
///
/// | promotion | capture | special1 | special0 | meaning |
/// |---|---|---|---|---|
/// |0|0|0|0| quiet move |
/// |0|0|0|1| double pawn push |
/// |0|0|1|0| king-side castle |
/// |0|0|1|1| queen-side castle |
/// |0|1|0|0| capture |
/// |0|1|0|1| en-passant capture |
/// |1|x|b1|b0| promotion, b1 b0 = queen 11, rook 10, bishop 01, knight 00 |
///
/// Origin equal to destination only for [`Move::NONE`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    flags: u8,
    will_be_check: bool,
}

impl Move {
    /// The "no move" sentinel.
    pub const NONE: Move = Move::with_flags(Square::A1, Square::A1, FLAG_QUIET);

    #[inline]
    const fn with_flags(from: Square, to: Square, flags: u8) -> Self {
        Move {
            from,
            to,
            flags,
            will_be_check: false,
        }
    }

    /// Build a move from the four raw flag bits.
    #[must_use]
    pub const fn from_bits(
        from: Square,
        to: Square,
        promotion: bool,
        capture: bool,
        special1: bool,
        special0: bool,
    ) -> Self {
        let mut flags = 0;
        if promotion {
            flags |= PROMOTION;
        }
        if capture {
            flags |= CAPTURE;
        }
        if special1 {
            flags |= SPECIAL1;
        }
        if special0 {
            flags |= SPECIAL0;
        }
        Move::with_flags(from, to, flags)
    }

    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, FLAG_QUIET)
    }

    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, FLAG_CAPTURE)
    }

    #[inline]
    #[must_use]
    pub const fn double_push(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, FLAG_DOUBLE_PUSH)
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, FLAG_EN_PASSANT)
    }

    #[inline]
    #[must_use]
    pub const fn king_side_castle(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, FLAG_KING_CASTLE)
    }

    #[inline]
    #[must_use]
    pub const fn queen_side_castle(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, FLAG_QUEEN_CASTLE)
    }

    /// A promotion to `piece`. Anything that is not a legal promotion
    /// choice encodes as a queen.
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: PieceType, capture: bool) -> Self {
        let choice = match piece {
            PieceType::Rook => SPECIAL1,
            PieceType::Bishop => SPECIAL0,
            PieceType::Knight => 0,
            _ => SPECIAL1 | SPECIAL0,
        };
        let capture = if capture { CAPTURE } else { 0 };
        Move::with_flags(from, to, PROMOTION | capture | choice)
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// True for every move except the sentinel.
    #[inline]
    #[must_use]
    pub const fn before_and_after_different(self) -> bool {
        self.from.index() != self.to.index()
    }

    /// Alias of [`Move::before_and_after_different`]; guard every
    /// `make_move` call with it.
    #[inline]
    #[must_use]
    pub const fn is_legal(self) -> bool {
        self.before_and_after_different()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flags & PROMOTION != 0
    }

    /// Includes en passant and capturing promotions.
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flags & CAPTURE != 0
    }

    #[inline]
    #[must_use]
    pub const fn special1(self) -> bool {
        self.flags & SPECIAL1 != 0
    }

    #[inline]
    #[must_use]
    pub const fn special0(self) -> bool {
        self.flags & SPECIAL0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_double_push(self) -> bool {
        self.flags == FLAG_DOUBLE_PUSH
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags == FLAG_EN_PASSANT
    }

    #[inline]
    #[must_use]
    pub const fn is_king_side_castle(self) -> bool {
        self.flags == FLAG_KING_CASTLE
    }

    #[inline]
    #[must_use]
    pub const fn is_queen_side_castle(self) -> bool {
        self.flags == FLAG_QUEEN_CASTLE
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        self.is_king_side_castle() || self.is_queen_side_castle()
    }

    /// The piece a promotion produces.
    #[must_use]
    pub const fn promotion_piece(self) -> Option<PieceType> {
        if !self.is_promotion() {
            return None;
        }
        Some(match (self.special1(), self.special0()) {
            (true, true) => PieceType::Queen,
            (true, false) => PieceType::Rook,
            (false, true) => PieceType::Bishop,
            (false, false) => PieceType::Knight,
        })
    }

    /// Whether the opponent is in check once this move is applied.
    #[inline]
    #[must_use]
    pub const fn will_be_check(self) -> bool {
        self.will_be_check
    }

    #[inline]
    #[must_use]
    pub(crate) const fn tagged(mut self, will_be_check: bool) -> Self {
        self.will_be_check = will_be_check;
        self
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castle() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if self.will_be_check {
            write!(f, " +")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move::NONE; MAX_MOVES],
            len: 0,
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.as_slice()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn sentinel_is_not_legal() {
        assert!(!Move::NONE.is_legal());
        assert!(!Move::default().before_and_after_different());
        assert!(Move::quiet(sq("e2"), sq("e3")).is_legal());
    }

    #[test]
    fn flag_table_decodes() {
        let (a, b) = (sq("e2"), sq("e4"));
        assert!(Move::from_bits(a, b, false, false, false, true).is_double_push());
        assert!(Move::from_bits(a, b, false, false, true, false).is_king_side_castle());
        assert!(Move::from_bits(a, b, false, false, true, true).is_queen_side_castle());
        assert!(Move::from_bits(a, b, false, true, false, true).is_en_passant());
        let plain_capture = Move::from_bits(a, b, false, true, false, false);
        assert!(plain_capture.is_capture());
        assert!(!plain_capture.is_en_passant());
        assert!(!plain_capture.is_castle());
    }

    #[test]
    fn promotion_choices_encode_as_documented() {
        let (a, b) = (sq("b7"), sq("a8"));
        let cases = [
            (PieceType::Queen, true, true),
            (PieceType::Rook, true, false),
            (PieceType::Bishop, false, true),
            (PieceType::Knight, false, false),
        ];
        for (piece, s1, s0) in cases {
            let mv = Move::promotion(a, b, piece, true);
            assert!(mv.is_promotion());
            assert!(mv.is_capture());
            assert_eq!((mv.special1(), mv.special0()), (s1, s0));
            assert_eq!(mv.promotion_piece(), Some(piece));
            assert!(!mv.is_castle(), "promotion bits must not read as castling");
        }
    }

    #[test]
    fn display_uses_coordinates() {
        assert_eq!(Move::double_push(sq("e2"), sq("e4")).to_string(), "e2e4");
        let promo = Move::promotion(sq("e7"), sq("e8"), PieceType::Knight, false);
        assert_eq!(promo.to_string(), "e7e8n");
    }

    #[test]
    fn check_tag_is_carried() {
        let mv = Move::quiet(sq("d1"), sq("h5"));
        assert!(!mv.will_be_check());
        assert!(mv.tagged(true).will_be_check());
    }

    #[test]
    fn move_list_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.push(Move::quiet(sq("a2"), sq("a3")));
        list.push(Move::quiet(sq("b2"), sq("b3")));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].to(), sq("b3"));
        assert_eq!(list.get(2), None);
        let collected: Vec<Move> = list.clone().into_iter().collect();
        assert_eq!(collected.len(), 2);
        list.clear();
        assert!(list.is_empty());
    }
}

//! Bitboard representation and operations.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the
//! chess board. Bit 0 is a8 and bit 63 is h1, so "north" (toward rank 8) is a
//! right shift and "south" is a left shift.
//!
//! All shifts act on a plain `u64`: bits pushed past either end of the word
//! are dropped, which is what keeps a step off the top or bottom rank from
//! landing anywhere. Horizontal wraparound is prevented separately by masking
//! the result with a file-edge constant.

use serpent_core::{File, Rank, Square, SquareError};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A 64-bit occupancy mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Empty bitboard (no squares set).
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Full bitboard (all squares set).
    pub const FULL: Bitboard = Bitboard(!0);

    // File masks
    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_B: Bitboard = Bitboard(0x0202_0202_0202_0202);
    pub const FILE_G: Bitboard = Bitboard(0x4040_4040_4040_4040);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    // File-edge masks
    pub const NOT_A_FILE: Bitboard = Bitboard(!Self::FILE_A.0);
    pub const NOT_H_FILE: Bitboard = Bitboard(!Self::FILE_H.0);
    pub const NOT_AB_FILES: Bitboard = Bitboard(!(Self::FILE_A.0 | Self::FILE_B.0));
    pub const NOT_GH_FILES: Bitboard = Bitboard(!(Self::FILE_G.0 | Self::FILE_H.0));

    // Rank masks
    pub const RANK_8: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_7: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_2: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_1: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    /// Creates a bitboard from a raw u64.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// All eight squares of `rank`.
    #[inline]
    pub const fn rank(rank: Rank) -> Self {
        Bitboard(Self::RANK_8.0 << (rank.from_top() * 8))
    }

    /// All eight squares of `file`.
    #[inline]
    pub const fn file(file: File) -> Self {
        Bitboard(Self::FILE_A.0 << file.index())
    }

    /// Creates a bitboard with a single square set.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u64 << sq.index())
    }

    /// Returns a copy with bit `index` set.
    ///
    /// Fails with [`SquareError::InvalidSquare`] when `index` is not 0..=63.
    #[inline]
    pub fn set_bit(self, index: u8) -> Result<Self, SquareError> {
        let sq = Square::try_from(index)?;
        Ok(self | Self::from_square(sq))
    }

    /// Returns true if bit `index` is set. Indices past 63 are never set.
    #[inline]
    pub const fn test_bit(self, index: u8) -> bool {
        index < 64 && (self.0 >> index) & 1 == 1
    }

    /// Returns true if the bitboard is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the bitboard is not empty.
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Returns the number of set bits (population count).
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Sets the given square.
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// Clears the given square.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// Returns the least significant set square, or `None` for an empty board.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as u8)
        }
    }

    /// Pops and returns the least significant set square.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        let sq = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    /// Shifts the bitboard north (toward rank 8).
    #[inline]
    pub const fn north(self) -> Bitboard {
        Offset::NORTH.apply(self)
    }

    /// Shifts the bitboard south (toward rank 1).
    #[inline]
    pub const fn south(self) -> Bitboard {
        Offset::SOUTH.apply(self)
    }

    /// Shifts the bitboard east (toward file H).
    #[inline]
    pub const fn east(self) -> Bitboard {
        Offset::EAST.apply(self)
    }

    /// Shifts the bitboard west (toward file A).
    #[inline]
    pub const fn west(self) -> Bitboard {
        Offset::WEST.apply(self)
    }

    #[inline]
    pub const fn north_east(self) -> Bitboard {
        Offset::NORTH_EAST.apply(self)
    }

    #[inline]
    pub const fn north_west(self) -> Bitboard {
        Offset::NORTH_WEST.apply(self)
    }

    #[inline]
    pub const fn south_east(self) -> Bitboard {
        Offset::SOUTH_EAST.apply(self)
    }

    #[inline]
    pub const fn south_west(self) -> Bitboard {
        Offset::SOUTH_WEST.apply(self)
    }
}

/// A fixed single-step displacement: a signed index delta plus the file-edge
/// mask that discards squares reached by wrapping around the board side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    delta: i8,
    mask: Bitboard,
}

impl Offset {
    pub const NORTH: Offset = Offset::new(-8, Bitboard::FULL);
    pub const SOUTH: Offset = Offset::new(8, Bitboard::FULL);
    pub const EAST: Offset = Offset::new(1, Bitboard::NOT_A_FILE);
    pub const WEST: Offset = Offset::new(-1, Bitboard::NOT_H_FILE);
    pub const NORTH_EAST: Offset = Offset::new(-7, Bitboard::NOT_A_FILE);
    pub const NORTH_WEST: Offset = Offset::new(-9, Bitboard::NOT_H_FILE);
    pub const SOUTH_EAST: Offset = Offset::new(9, Bitboard::NOT_A_FILE);
    pub const SOUTH_WEST: Offset = Offset::new(7, Bitboard::NOT_H_FILE);

    /// Creates an offset. `delta` must lie in -63..=63.
    pub const fn new(delta: i8, mask: Bitboard) -> Self {
        Offset { delta, mask }
    }

    #[inline]
    pub const fn delta(self) -> i8 {
        self.delta
    }

    /// Shifts every set square of `bb` by this offset.
    #[inline]
    pub const fn apply(self, bb: Bitboard) -> Bitboard {
        let shifted = if self.delta >= 0 {
            bb.0 << (self.delta as u32)
        } else {
            bb.0 >> (self.delta.unsigned_abs() as u32)
        };
        Bitboard(shifted & self.mask.0)
    }

    /// The square one step from `sq`, or `None` if the step leaves the board.
    #[inline]
    pub const fn step(self, sq: Square) -> Option<Square> {
        self.apply(Bitboard::from_square(sq)).lsb()
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for file in 0..8 {
                if self.test_bit(row * 8 + file) {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Iterator over set squares in increasing index order.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb | Bitboard::from_square(sq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn bitboard_from_square() {
        let bb = Bitboard::from_square(Square::A8);
        assert_eq!(bb.0, 1);
        assert!(bb.contains(Square::A8));
        assert!(!bb.contains(Square::B8));
    }

    #[test]
    fn set_bit_rejects_invalid_square() {
        assert_eq!(Bitboard::EMPTY.set_bit(0), Ok(Bitboard(1)));
        assert_eq!(Bitboard::EMPTY.set_bit(63), Ok(Bitboard(1 << 63)));
        assert_eq!(
            Bitboard::EMPTY.set_bit(64),
            Err(SquareError::InvalidSquare(64))
        );
    }

    #[test]
    fn test_bit() {
        let bb = Bitboard(0b101);
        assert!(bb.test_bit(0));
        assert!(!bb.test_bit(1));
        assert!(bb.test_bit(2));
        assert!(!Bitboard::FULL.test_bit(64));
    }

    #[test]
    fn lsb_of_empty_is_none() {
        assert_eq!(Bitboard::EMPTY.lsb(), None);
        assert_eq!(Bitboard(1 << 63).lsb(), Some(Square::H1));
        assert_eq!(Bitboard(0b1100).lsb().map(|s| s.index()), Some(2));
    }

    #[test]
    fn edge_masks() {
        assert_eq!(Bitboard::NOT_A_FILE.0, 18374403900871474942);
        assert_eq!(Bitboard::NOT_H_FILE.0, 9187201950435737471);
        assert_eq!(Bitboard::NOT_AB_FILES.count(), 48);
        assert_eq!(Bitboard::NOT_GH_FILES.count(), 48);
        assert!(!Bitboard::NOT_AB_FILES.contains(sq("b5")));
        assert!(!Bitboard::NOT_GH_FILES.contains(sq("g5")));
        assert!(Bitboard::RANK_1.contains(Square::E1));
        assert!(Bitboard::RANK_8.contains(Square::E8));
        assert!(Bitboard::RANK_2.contains(sq("e2")));
        assert!(Bitboard::RANK_7.contains(sq("e7")));
    }

    #[test]
    fn rank_and_file_masks() {
        assert_eq!(Bitboard::rank(Rank::R8), Bitboard::RANK_8);
        assert_eq!(Bitboard::rank(Rank::R7), Bitboard::RANK_7);
        assert_eq!(Bitboard::rank(Rank::R2), Bitboard::RANK_2);
        assert_eq!(Bitboard::rank(Rank::R1), Bitboard::RANK_1);
        assert_eq!(Bitboard::file(File::A), Bitboard::FILE_A);
        assert_eq!(Bitboard::file(File::H), Bitboard::FILE_H);
    }

    #[test]
    fn bitboard_count() {
        assert_eq!(Bitboard::EMPTY.count(), 0);
        assert_eq!(Bitboard::FULL.count(), 64);
        assert_eq!(Bitboard::FILE_A.count(), 8);
        assert_eq!(Bitboard::RANK_1.count(), 8);
    }

    #[test]
    fn bitboard_shifts() {
        let e4 = Bitboard::from_square(sq("e4"));
        assert_eq!(e4.north(), Bitboard::from_square(sq("e5")));
        assert_eq!(e4.south(), Bitboard::from_square(sq("e3")));
        assert_eq!(e4.east(), Bitboard::from_square(sq("f4")));
        assert_eq!(e4.west(), Bitboard::from_square(sq("d4")));
        assert_eq!(e4.north_east(), Bitboard::from_square(sq("f5")));
        assert_eq!(e4.north_west(), Bitboard::from_square(sq("d5")));
        assert_eq!(e4.south_east(), Bitboard::from_square(sq("f3")));
        assert_eq!(e4.south_west(), Bitboard::from_square(sq("d3")));
    }

    #[test]
    fn shifts_drop_bits_past_the_word() {
        let h1 = Bitboard::from_square(Square::H1);
        assert!(h1.south().is_empty());
        assert!(h1.east().is_empty());
        assert!(h1.south_east().is_empty());
        assert!(h1.south_west().is_empty());

        let a8 = Bitboard::from_square(Square::A8);
        assert!(a8.north().is_empty());
        assert!(a8.west().is_empty());
        assert!(a8.north_west().is_empty());
        assert!(a8.north_east().is_empty());
    }

    #[test]
    fn shifts_do_not_wrap_files() {
        let h4 = Bitboard::from_square(Square::new(File::H, Rank::R4));
        assert!(h4.east().is_empty());
        assert!(h4.north_east().is_empty());
        assert!(h4.south_east().is_empty());

        let a4 = Bitboard::from_square(Square::new(File::A, Rank::R4));
        assert!(a4.west().is_empty());
        assert!(a4.north_west().is_empty());
        assert!(a4.south_west().is_empty());
    }

    #[test]
    fn offset_step() {
        assert_eq!(Offset::NORTH.step(sq("e2")), Some(sq("e3")));
        assert_eq!(Offset::NORTH.step(sq("e8")), None);
        assert_eq!(Offset::EAST.step(sq("h3")), None);
        assert_eq!(Offset::NORTH_EAST.delta(), -7);
    }

    #[test]
    fn bitboard_iterator() {
        let bb = Bitboard::FILE_A;
        let squares: Vec<Square> = bb.into_iter().collect();
        assert_eq!(squares.len(), 8);
        assert_eq!(squares[0], Square::A8);
        assert_eq!(squares[7], Square::A1);
    }

    #[test]
    fn bitboard_pop_lsb() {
        let mut bb = Bitboard::new(0b1010);
        assert_eq!(bb.pop_lsb().map(|s| s.index()), Some(1));
        assert_eq!(bb.pop_lsb().map(|s| s.index()), Some(3));
        assert_eq!(bb.pop_lsb(), None);
    }

    #[test]
    fn collect_from_squares() {
        let bb: Bitboard = [Square::A8, Square::H1].into_iter().collect();
        assert_eq!(bb.0, 1 | (1 << 63));
    }

    proptest! {
        #[test]
        fn single_steps_stay_adjacent(index in 0u8..64) {
            let from = Square::from_index(index).unwrap();
            for offset in [
                Offset::NORTH, Offset::SOUTH, Offset::EAST, Offset::WEST,
                Offset::NORTH_EAST, Offset::NORTH_WEST, Offset::SOUTH_EAST, Offset::SOUTH_WEST,
            ] {
                if let Some(to) = offset.step(from) {
                    let df = (to.file().index() as i8 - from.file().index() as i8).abs();
                    let dr = (to.rank().index() as i8 - from.rank().index() as i8).abs();
                    prop_assert!(df <= 1 && dr <= 1 && (df + dr) > 0);
                }
            }
        }

        #[test]
        fn pop_lsb_visits_every_bit_once(bits in any::<u64>()) {
            let squares: Vec<Square> = Bitboard(bits).into_iter().collect();
            prop_assert_eq!(squares.len() as u32, bits.count_ones());
            prop_assert!(squares.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(squares.into_iter().collect::<Bitboard>(), Bitboard(bits));
        }
    }
}

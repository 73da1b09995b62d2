//! Attack tables and ray casting for all piece types.
//!
//! Knight, king and pawn attacks are looked up in tables computed at compile
//! time from the same [`Offset`] lists the generators use. Sliding attacks
//! are cast one step at a time with [`Ray`], stopping at the first occupied
//! square.

use crate::bitboard::Offset;
use crate::Bitboard;
use serpent_core::{Color, Piece, Square};

/// Knight jumps. The two-file jumps carry the two-file edge masks.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(-17, Bitboard::NOT_H_FILE),
    Offset::new(-15, Bitboard::NOT_A_FILE),
    Offset::new(-10, Bitboard::NOT_GH_FILES),
    Offset::new(-6, Bitboard::NOT_AB_FILES),
    Offset::new(6, Bitboard::NOT_GH_FILES),
    Offset::new(10, Bitboard::NOT_AB_FILES),
    Offset::new(15, Bitboard::NOT_H_FILE),
    Offset::new(17, Bitboard::NOT_A_FILE),
];

pub const KING_OFFSETS: [Offset; 8] = [
    Offset::NORTH_WEST,
    Offset::NORTH,
    Offset::NORTH_EAST,
    Offset::WEST,
    Offset::EAST,
    Offset::SOUTH_WEST,
    Offset::SOUTH,
    Offset::SOUTH_EAST,
];

pub const ROOK_DIRECTIONS: [Offset; 4] = [Offset::NORTH, Offset::SOUTH, Offset::EAST, Offset::WEST];

pub const BISHOP_DIRECTIONS: [Offset; 4] = [
    Offset::NORTH_EAST,
    Offset::NORTH_WEST,
    Offset::SOUTH_EAST,
    Offset::SOUTH_WEST,
];

/// Rook rays first, then bishop rays.
pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    Offset::NORTH,
    Offset::SOUTH,
    Offset::EAST,
    Offset::WEST,
    Offset::NORTH_EAST,
    Offset::NORTH_WEST,
    Offset::SOUTH_EAST,
    Offset::SOUTH_WEST,
];

const WHITE_PAWN_CAPTURES: [Offset; 2] = [Offset::NORTH_EAST, Offset::NORTH_WEST];
const BLACK_PAWN_CAPTURES: [Offset; 2] = [Offset::SOUTH_WEST, Offset::SOUTH_EAST];

/// Precomputed knight attack tables.
const KNIGHT_ATTACKS: [Bitboard; 64] = step_table(&KNIGHT_OFFSETS);

/// Precomputed king attack tables.
const KING_ATTACKS: [Bitboard; 64] = step_table(&KING_OFFSETS);

/// Precomputed pawn attack tables [color][square].
const PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    step_table(&WHITE_PAWN_CAPTURES),
    step_table(&BLACK_PAWN_CAPTURES),
];

/// Returns knight attacks from the given square.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index() as usize]
}

/// Returns king attacks from the given square.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index() as usize]
}

/// Returns the squares a pawn of `color` on `sq` attacks.
#[inline]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index() as usize]
}

/// The single-step push toward the opponent's back rank.
#[inline]
pub const fn pawn_push(color: Color) -> Offset {
    match color {
        Color::White => Offset::NORTH,
        Color::Black => Offset::SOUTH,
    }
}

/// Pawn capture directions in generation order: the `-7`/`+7` shift first.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [Offset; 2] {
    match color {
        Color::White => WHITE_PAWN_CAPTURES,
        Color::Black => BLACK_PAWN_CAPTURES,
    }
}

/// Ray directions for a sliding piece; empty for everything else.
pub fn slider_directions(piece: Piece) -> &'static [Offset] {
    match piece {
        Piece::Bishop => &BISHOP_DIRECTIONS,
        Piece::Rook => &ROOK_DIRECTIONS,
        Piece::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Squares reached by stepping repeatedly in one direction, nearest first.
///
/// The walk ends when a step would leave the board. Callers decide where a
/// blocker stops them.
#[derive(Debug, Clone)]
pub struct Ray {
    next: Option<Square>,
    direction: Offset,
}

impl Ray {
    pub fn new(from: Square, direction: Offset) -> Self {
        Ray {
            next: direction.step(from),
            direction,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let sq = self.next?;
        self.next = self.direction.step(sq);
        Some(sq)
    }
}

/// Squares attacked along one ray, up to and including the first occupied
/// square.
pub fn ray_attacks(from: Square, direction: Offset, occupied: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for sq in Ray::new(from, direction) {
        attacks.set(sq);
        if occupied.contains(sq) {
            break;
        }
    }
    attacks
}

fn slider_attacks(from: Square, directions: &[Offset], occupied: Bitboard) -> Bitboard {
    directions
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(from, dir, occupied))
}

/// Returns bishop attacks from `sq` given the board occupancy.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider_attacks(sq, &BISHOP_DIRECTIONS, occupied)
}

/// Returns rook attacks from `sq` given the board occupancy.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider_attacks(sq, &ROOK_DIRECTIONS, occupied)
}

/// Returns queen attacks from `sq` given the board occupancy.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Computes single-step attacks for every square at compile time.
const fn step_table<const N: usize>(offsets: &[Offset; N]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0;

    while sq < 64 {
        let origin = Bitboard(1u64 << sq);
        let mut bb = 0u64;
        let mut i = 0;
        while i < N {
            bb |= offsets[i].apply(origin).0;
            i += 1;
        }
        attacks[sq] = Bitboard(bb);
        sq += 1;
    }

    attacks
}

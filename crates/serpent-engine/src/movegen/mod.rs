//! Move generation.
//!
//! The pseudo-legal generator is split by piece family: [`pawns`],
//! [`sliders`] (bishop, rook, queen) and [`steppers`] (knight, king,
//! castling). [`generate_moves`] runs them in a fixed order. King safety is a
//! separate stage in [`legal`].

mod attacks;
pub mod legal;
mod pawns;
pub mod perft;
mod sliders;
mod steppers;

use crate::Position;
use serpent_core::{Color, Move, Piece};

pub use attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, ray_attacks,
    rook_attacks, Ray,
};
pub use legal::{attackers_to, is_in_check, is_legal, is_square_attacked, legal_moves};
pub use steppers::CastlePath;

/// An ordered list of generated moves.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Capacity reserved up front; no position reachable in play has more
    /// moves than this.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(Self::MAX_MOVES),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Retains only moves for which the predicate returns true, keeping
    /// their order.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }

    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates all pseudo-legal moves for the side to move.
pub fn generate_moves(position: &Position) -> MoveList {
    generate_moves_for(position, position.side_to_move())
}

/// Generates all pseudo-legal moves for `color`, whoever is to move.
///
/// Order: pawns, bishops, knights, rooks, queens, then the king with its
/// castle moves last. Within a piece kind, sources come in increasing square
/// index. Moves may leave the king attacked; see [`legal_moves`].
pub fn generate_moves_for(position: &Position, color: Color) -> MoveList {
    let mut moves = MoveList::new();

    pawns::generate_pawn_moves(position, color, &mut moves);
    sliders::generate_slider_moves(position, color, Piece::Bishop, &mut moves);
    steppers::generate_knight_moves(position, color, &mut moves);
    sliders::generate_slider_moves(position, color, Piece::Rook, &mut moves);
    sliders::generate_slider_moves(position, color, Piece::Queen, &mut moves);
    steppers::generate_king_moves(position, color, &mut moves);
    steppers::generate_castling_moves(position, color, &mut moves);

    moves
}

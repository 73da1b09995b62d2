//! King safety on top of the pseudo-legal generator.
//!
//! Attacks are found in reverse: from the target square, each piece kind's
//! attack pattern is cast outward and intersected with the attacker's pieces
//! of that kind.

use super::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use super::steppers::CastlePath;
use super::{generate_moves, MoveList};
use crate::{Bitboard, Position};
use serpent_core::{Color, Move, Piece, Square};

/// Returns the pieces of color `by` that attack `sq`.
pub fn attackers_to(position: &Position, sq: Square, by: Color) -> Bitboard {
    let occupied = position.occupied();
    let queens = position.pieces_of(Piece::Queen, by);

    (pawn_attacks(sq, by.opposite()) & position.pieces_of(Piece::Pawn, by))
        | (knight_attacks(sq) & position.pieces_of(Piece::Knight, by))
        | (king_attacks(sq) & position.pieces_of(Piece::King, by))
        | (bishop_attacks(sq, occupied) & (position.pieces_of(Piece::Bishop, by) | queens))
        | (rook_attacks(sq, occupied) & (position.pieces_of(Piece::Rook, by) | queens))
}

/// Returns true if the given square is attacked by the given color.
#[inline]
pub fn is_square_attacked(position: &Position, sq: Square, by: Color) -> bool {
    attackers_to(position, sq, by).is_not_empty()
}

/// Returns true if the king of `color` is attacked. A side without a king is
/// never in check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    position
        .king_square(color)
        .map_or(false, |king| is_square_attacked(position, king, color.opposite()))
}

/// Returns true if playing `m` does not leave the mover's king attacked.
///
/// `m` must be a pseudo-legal move for the side to move. A castle is also
/// rejected when the king starts in check or crosses an attacked square.
pub fn is_legal(position: &Position, m: Move) -> bool {
    let us = position.side_to_move();
    let them = us.opposite();

    if let Some(path) = CastlePath::of(m, us) {
        if is_square_attacked(position, path.king_from, them)
            || is_square_attacked(position, path.transit, them)
        {
            return false;
        }
    }

    !is_in_check(&position.apply(m), us)
}

/// Generates all legal moves for the side to move, in generation order.
pub fn legal_moves(position: &Position) -> MoveList {
    let mut moves = generate_moves(position);
    moves.retain(|m| is_legal(position, *m));
    moves
}

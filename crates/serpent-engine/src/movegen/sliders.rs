//! Bishop, rook and queen move generation by ray casting.

use super::attacks::{slider_directions, Ray};
use super::MoveList;
use crate::Position;
use serpent_core::{Color, Move, MoveFlag, Piece};

/// Generates pseudo-legal moves for every `piece` of `us`.
///
/// Each ray is walked nearest square first: empty squares give quiet moves,
/// the first enemy piece gives a capture and ends the ray, a friendly piece
/// ends it without a move.
pub(super) fn generate_slider_moves(
    position: &Position,
    us: Color,
    piece: Piece,
    moves: &mut MoveList,
) {
    debug_assert!(piece.is_slider());
    let own = position.color_occupancy(us);
    let theirs = position.color_occupancy(us.opposite());

    for from in position.pieces_of(piece, us) {
        for &direction in slider_directions(piece) {
            for to in Ray::new(from, direction) {
                if own.contains(to) {
                    break;
                }
                let capture = theirs.contains(to);
                moves.push(Move::new(from, to, piece, MoveFlag::Normal, capture));
                if capture {
                    break;
                }
            }
        }
    }
}

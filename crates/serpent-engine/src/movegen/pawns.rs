//! Pawn move generation.

use super::attacks::{pawn_capture_offsets, pawn_push};
use super::MoveList;
use crate::{Bitboard, Position};
use serpent_core::{Color, Move, MoveFlag, Piece, Square};

/// Generates pseudo-legal pawn moves for `us`.
///
/// Per pawn, in increasing square order: the single push (or its four
/// promotions), the double push, then the two diagonal captures. A diagonal
/// onto the en passant target produces an en passant capture. The target only
/// belongs to the side to move, so generating for the other side ignores it.
pub(super) fn generate_pawn_moves(position: &Position, us: Color, moves: &mut MoveList) {
    let empty = position.empty_squares();
    let theirs = position.color_occupancy(us.opposite());
    let push = pawn_push(us);
    let start_rank = Bitboard::rank(us.pawn_start_rank());
    let promotion_rank = Bitboard::rank(us.promotion_rank());
    let en_passant = match position.en_passant() {
        Some(target) if us == position.side_to_move() => Bitboard::from_square(target),
        _ => Bitboard::EMPTY,
    };

    for from in position.pieces_of(Piece::Pawn, us) {
        let origin = Bitboard::from_square(from);

        // Pushes off the last rank fall out of the word, so `single` is empty.
        let single = push.apply(origin) & empty;
        if let Some(to) = single.lsb() {
            if promotion_rank.contains(to) {
                push_promotions(moves, from, to, false);
            } else {
                moves.push(Move::quiet(from, to, Piece::Pawn));
            }

            if (origin & start_rank).is_not_empty() {
                if let Some(to) = (push.apply(single) & empty).lsb() {
                    moves.push(Move::new(from, to, Piece::Pawn, MoveFlag::DoublePush, false));
                }
            }
        }

        for direction in pawn_capture_offsets(us) {
            let to = match direction.step(from) {
                Some(to) => to,
                None => continue,
            };
            if theirs.contains(to) {
                if promotion_rank.contains(to) {
                    push_promotions(moves, from, to, true);
                } else {
                    moves.push(Move::capture(from, to, Piece::Pawn));
                }
            } else if en_passant.contains(to) && empty.contains(to) {
                moves.push(Move::new(from, to, Piece::Pawn, MoveFlag::EnPassant, true));
            }
        }
    }
}

fn push_promotions(moves: &mut MoveList, from: Square, to: Square, capture: bool) {
    for flag in MoveFlag::PROMOTIONS {
        moves.push(Move::new(from, to, Piece::Pawn, flag, capture));
    }
}

//! Knight, king and castling move generation.

use super::attacks::{king_attacks, knight_attacks};
use super::MoveList;
use crate::{Bitboard, Position};
use serpent_core::{CastleSide, Color, Move, MoveFlag, Piece, Square};

/// Generates pseudo-legal knight moves for `us`.
pub(super) fn generate_knight_moves(position: &Position, us: Color, moves: &mut MoveList) {
    for from in position.pieces_of(Piece::Knight, us) {
        push_steps(position, us, Piece::Knight, from, knight_attacks(from), moves);
    }
}

/// Generates pseudo-legal king steps for `us`, castling excluded.
pub(super) fn generate_king_moves(position: &Position, us: Color, moves: &mut MoveList) {
    for from in position.pieces_of(Piece::King, us) {
        push_steps(position, us, Piece::King, from, king_attacks(from), moves);
    }
}

fn push_steps(
    position: &Position,
    us: Color,
    piece: Piece,
    from: Square,
    targets: Bitboard,
    moves: &mut MoveList,
) {
    let theirs = position.color_occupancy(us.opposite());
    for to in targets & !position.color_occupancy(us) {
        moves.push(Move::new(from, to, piece, MoveFlag::Normal, theirs.contains(to)));
    }
}

/// The fixed squares involved in one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: Bitboard,
    /// The square the king crosses on its way to `king_to`.
    pub transit: Square,
    pub flag: MoveFlag,
}

impl CastlePath {
    /// The king lands on g1/g8 kingside and c1/c8 queenside, so `Kc1` in
    /// notation is the queenside castle.
    pub const fn new(color: Color, side: CastleSide) -> Self {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => CastlePath {
                king_from: Square::E1,
                king_to: Square::G1,
                rook_from: Square::H1,
                between: Bitboard(Square::F1.bitboard() | Square::G1.bitboard()),
                transit: Square::F1,
                flag: MoveFlag::CastleKingside,
            },
            (Color::White, CastleSide::Queenside) => CastlePath {
                king_from: Square::E1,
                king_to: Square::C1,
                rook_from: Square::A1,
                between: Bitboard(
                    Square::B1.bitboard() | Square::C1.bitboard() | Square::D1.bitboard(),
                ),
                transit: Square::D1,
                flag: MoveFlag::CastleQueenside,
            },
            (Color::Black, CastleSide::Kingside) => CastlePath {
                king_from: Square::E8,
                king_to: Square::G8,
                rook_from: Square::H8,
                between: Bitboard(Square::F8.bitboard() | Square::G8.bitboard()),
                transit: Square::F8,
                flag: MoveFlag::CastleKingside,
            },
            (Color::Black, CastleSide::Queenside) => CastlePath {
                king_from: Square::E8,
                king_to: Square::C8,
                rook_from: Square::A8,
                between: Bitboard(
                    Square::B8.bitboard() | Square::C8.bitboard() | Square::D8.bitboard(),
                ),
                transit: Square::D8,
                flag: MoveFlag::CastleQueenside,
            },
        }
    }

    /// The path a castle move takes, or `None` for any other move.
    pub fn of(m: Move, color: Color) -> Option<Self> {
        match m.flag() {
            MoveFlag::CastleKingside => Some(Self::new(color, CastleSide::Kingside)),
            MoveFlag::CastleQueenside => Some(Self::new(color, CastleSide::Queenside)),
            _ => None,
        }
    }
}

/// Generates castle moves for `us`, kingside first.
///
/// Requires the right, the king and rook on their home squares, and empty
/// squares between them. Attacks on the king's path are left to the
/// legality stage.
pub(super) fn generate_castling_moves(position: &Position, us: Color, moves: &mut MoveList) {
    let occupied = position.occupied();

    for side in CastleSide::ALL {
        if !position.castling().has(us, side) {
            continue;
        }
        let path = CastlePath::new(us, side);
        if position.piece_at(path.king_from) != Some((Piece::King, us))
            || position.piece_at(path.rook_from) != Some((Piece::Rook, us))
        {
            continue;
        }
        if (occupied & path.between).is_not_empty() {
            continue;
        }
        moves.push(Move::new(
            path.king_from,
            path.king_to,
            Piece::King,
            path.flag,
            false,
        ));
    }
}

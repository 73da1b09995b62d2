//! Chess position representation.

use serpent_core::{
    CastleSide, CastlingRights, Color, FenError, Move, MoveFlag, Piece, Setup, Square,
    SquareContent,
};

use crate::Bitboard;

/// Complete position state.
///
/// Twelve piece masks (one per color and piece kind), the per-color and total
/// occupancy derived from them, and a square-indexed piece array kept in
/// lockstep with the masks. Every constructor goes through
/// [`Position::from_setup`] or [`Position::apply`], so the masks and the
/// array never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Piece masks indexed by `[color][piece]`.
    pieces: [[Bitboard; 6]; 2],

    /// Union of each color's piece masks.
    colors: [Bitboard; 2],

    /// Union of both colors.
    occupied: Bitboard,

    board: [SquareContent; 64],

    side_to_move: Color,

    castling: CastlingRights,

    /// En passant target square (if any).
    en_passant: Option<Square>,

    /// Halfmove clock for 50-move rule.
    halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    fullmove_number: u32,
}

impl Position {
    /// Creates an empty position.
    pub fn empty() -> Self {
        Self::from_setup(&Setup::empty())
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_setup(&Setup::startpos())
    }

    /// Creates a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_setup(&Setup::from_fen(fen)?))
    }

    /// Builds the bitboards from a structured description.
    pub fn from_setup(setup: &Setup) -> Self {
        let mut position = Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            colors: [Bitboard::EMPTY; 2],
            occupied: Bitboard::EMPTY,
            board: [None; 64],
            side_to_move: setup.side_to_move,
            castling: setup.castling,
            en_passant: setup.en_passant,
            halfmove_clock: setup.halfmove_clock,
            fullmove_number: setup.fullmove_number,
        };

        for sq in Square::all() {
            if let Some((piece, color)) = setup.piece_at(sq) {
                position.put(sq, piece, color);
            }
        }

        position
    }

    /// Reads the position back into a structured description.
    pub fn to_setup(&self) -> Setup {
        Setup {
            placement: self.board,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        self.to_setup().to_fen()
    }

    fn put(&mut self, sq: Square, piece: Piece, color: Color) {
        self.pieces[color.index()][piece.index()].set(sq);
        self.colors[color.index()].set(sq);
        self.occupied.set(sq);
        self.board[sq.index() as usize] = Some((piece, color));
    }

    /// Empties `sq`, returning what stood there.
    fn remove(&mut self, sq: Square) -> SquareContent {
        let content = self.board[sq.index() as usize].take();
        if let Some((piece, color)) = content {
            self.pieces[color.index()][piece.index()].clear(sq);
            self.colors[color.index()].clear(sq);
            self.occupied.clear(sq);
        }
        content
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> SquareContent {
        self.board[sq.index() as usize]
    }

    /// The square-indexed piece array, a8 first.
    #[inline]
    pub fn board(&self) -> &[SquareContent; 64] {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Returns a bitboard of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Returns a bitboard of all empty squares.
    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied
    }

    /// Returns a bitboard of every piece of the given color.
    #[inline]
    pub fn color_occupancy(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    /// Returns a bitboard of pieces of the given type and color.
    #[inline]
    pub fn pieces_of(&self, piece: Piece, color: Color) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// Square of the king of `color`, if there is one.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(Piece::King, color).lsb()
    }

    /// Plays `m` and returns the resulting position; `self` is untouched.
    ///
    /// `m` must have been generated for this position. Captured pieces
    /// (including an en passant victim) are removed, a castling rook is
    /// relocated, promotions replace the pawn, castling rights and the en
    /// passant target are updated.
    ///
    /// The mover's colour is that of the piece on `m.from()`, not
    /// `side_to_move`, so a move generated for the side not on move is played
    /// by that side. The turn then passes to the mover's opponent.
    pub fn apply(&self, m: Move) -> Position {
        let mut next = self.clone();
        let us = self
            .piece_at(m.from())
            .map_or(self.side_to_move, |(_, color)| color);
        let them = us.opposite();
        let from = m.from();
        let to = m.to();

        next.remove(from);
        next.remove(to);

        if m.is_en_passant() {
            // The captured pawn sits beside the mover, on the rank it came from.
            let victim = Square::new(to.file(), from.rank());
            next.remove(victim);
        }

        let placed = m.promotion().unwrap_or(m.piece());
        next.put(to, placed, us);

        if let Some((rook_from, rook_to)) = castle_rook_squares(m.flag(), us) {
            next.remove(rook_from);
            next.put(rook_to, Piece::Rook, us);
        }

        if m.piece() == Piece::King {
            next.castling.remove_color(us);
        }
        for (corner, color, side) in ROOK_CORNERS {
            if from == corner || to == corner {
                next.castling.remove(color, side);
            }
        }

        next.en_passant = m.en_passant_square();

        if m.piece() == Piece::Pawn || m.is_capture() {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock += 1;
        }
        if us == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = them;

        next
    }
}

/// Rook home squares and the right each one guards.
const ROOK_CORNERS: [(Square, Color, CastleSide); 4] = [
    (Square::H1, Color::White, CastleSide::Kingside),
    (Square::A1, Color::White, CastleSide::Queenside),
    (Square::H8, Color::Black, CastleSide::Kingside),
    (Square::A8, Color::Black, CastleSide::Queenside),
];

fn castle_rook_squares(flag: MoveFlag, color: Color) -> Option<(Square, Square)> {
    match (flag, color) {
        (MoveFlag::CastleKingside, Color::White) => Some((Square::H1, Square::F1)),
        (MoveFlag::CastleQueenside, Color::White) => Some((Square::A1, Square::D1)),
        (MoveFlag::CastleKingside, Color::Black) => Some((Square::H8, Square::F8)),
        (MoveFlag::CastleQueenside, Color::Black) => Some((Square::A8, Square::D8)),
        _ => None,
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serpent_core::STARTPOS;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    /// Recomputes the aggregates from the twelve piece masks and checks them
    /// and the piece array against the stored state.
    fn assert_consistent(pos: &Position) {
        let mut all = Bitboard::EMPTY;
        for color in Color::ALL {
            let mut union = Bitboard::EMPTY;
            for piece in Piece::ALL {
                let mask = pos.pieces_of(piece, color);
                assert!((union & mask).is_empty(), "overlapping piece masks");
                union |= mask;
            }
            assert_eq!(union, pos.color_occupancy(color));
            all |= union;
        }
        assert_eq!(all, pos.occupied());
        for sq in Square::all() {
            match pos.piece_at(sq) {
                Some((piece, color)) => assert!(pos.pieces_of(piece, color).contains(sq)),
                None => assert!(!pos.occupied().contains(sq)),
            }
        }
    }

    #[test]
    fn startpos_fen_roundtrip() {
        let pos = Position::startpos();
        assert_eq!(pos.to_fen(), STARTPOS);
        assert_consistent(&pos);
    }

    #[test]
    fn custom_fen_roundtrip() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.to_fen(), fen);
    }

    #[test]
    fn setup_roundtrip() {
        let setup = Setup::empty()
            .with_piece(sq("e1"), Piece::King, Color::White)
            .with_piece(sq("d4"), Piece::Queen, Color::White)
            .with_piece(sq("e8"), Piece::King, Color::Black)
            .with_piece(sq("b7"), Piece::Pawn, Color::Black)
            .with_side_to_move(Color::Black);
        let pos = Position::from_setup(&setup);
        assert_eq!(pos.to_setup(), setup);
        assert_consistent(&pos);
    }

    #[test]
    fn piece_at() {
        let pos = Position::startpos();
        assert_eq!(pos.piece_at(Square::E1), Some((Piece::King, Color::White)));
        assert_eq!(pos.piece_at(Square::E8), Some((Piece::King, Color::Black)));
        assert_eq!(pos.piece_at(sq("e4")), None);
        assert_eq!(pos.board()[0], Some((Piece::Rook, Color::Black)));
    }

    #[test]
    fn position_empty() {
        let pos = Position::empty();
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.castling().raw(), 0);
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
        assert!(pos.occupied().is_empty());
        assert_eq!(pos.king_square(Color::White), None);
    }

    #[test]
    fn position_default() {
        assert_eq!(Position::default().to_fen(), STARTPOS);
    }

    #[test]
    fn position_occupied_empty() {
        let pos = Position::startpos();
        assert_eq!(pos.occupied().count(), 32);
        assert_eq!(pos.empty_squares().count(), 32);
        assert_eq!(pos.color_occupancy(Color::White), Bitboard::RANK_1 | Bitboard::RANK_2);
    }

    #[test]
    fn position_pieces_of() {
        let pos = Position::startpos();
        assert_eq!(pos.pieces_of(Piece::Pawn, Color::White), Bitboard::RANK_2);
        assert_eq!(pos.pieces_of(Piece::Pawn, Color::Black), Bitboard::RANK_7);
        assert_eq!(pos.king_square(Color::White), Some(Square::E1));
        assert_eq!(pos.king_square(Color::Black), Some(Square::E8));
    }

    #[test]
    fn position_with_en_passant() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.en_passant(), Some(sq("e3")));
        assert_eq!(pos.to_fen(), fen);
    }

    #[test]
    fn apply_double_push() {
        let pos = Position::startpos();
        let m = Move::new(sq("e2"), sq("e4"), Piece::Pawn, MoveFlag::DoublePush, false);

        let next = pos.apply(m);
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.piece_at(sq("e4")), Some((Piece::Pawn, Color::White)));
        assert_eq!(next.piece_at(sq("e2")), None);
        assert_eq!(next.en_passant(), Some(sq("e3")));
        assert_eq!(
            next.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        assert_consistent(&next);
        // the source position is untouched
        assert_eq!(pos.to_fen(), STARTPOS);
    }

    #[test]
    fn apply_capture_clears_victim() {
        let pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 3 10").unwrap();
        let next = pos.apply(Move::capture(sq("e4"), sq("d5"), Piece::Pawn));
        assert_eq!(next.piece_at(sq("d5")), Some((Piece::Pawn, Color::White)));
        assert_eq!(next.pieces_of(Piece::Pawn, Color::Black), Bitboard::EMPTY);
        assert_eq!(next.halfmove_clock(), 0);
        assert_consistent(&next);
    }

    #[test]
    fn apply_en_passant_removes_passed_pawn() {
        let pos =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w KQkq e6 0 3")
                .unwrap();
        let m = Move::new(sq("f5"), sq("e6"), Piece::Pawn, MoveFlag::EnPassant, true);
        let next = pos.apply(m);
        assert_eq!(next.piece_at(sq("e6")), Some((Piece::Pawn, Color::White)));
        assert_eq!(next.piece_at(sq("e5")), None);
        assert_eq!(next.en_passant(), None);
        assert_consistent(&next);
    }

    #[test]
    fn apply_promotion() {
        let pos = Position::from_fen("8/P7/8/8/8/8/8/4K2k w - - 0 1").unwrap();
        let m = Move::new(sq("a7"), sq("a8"), Piece::Pawn, MoveFlag::PromoteKnight, false);
        let next = pos.apply(m);
        assert_eq!(next.piece_at(sq("a8")), Some((Piece::Knight, Color::White)));
        assert!(next.pieces_of(Piece::Pawn, Color::White).is_empty());
    }

    #[test]
    fn apply_castling_moves_rook_and_clears_rights() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        let m = Move::new(Square::E8, Square::C8, Piece::King, MoveFlag::CastleQueenside, false);
        let next = pos.apply(m);
        assert_eq!(next.piece_at(Square::C8), Some((Piece::King, Color::Black)));
        assert_eq!(next.piece_at(Square::D8), Some((Piece::Rook, Color::Black)));
        assert_eq!(next.piece_at(Square::A8), None);
        assert_eq!(next.castling().to_string(), "KQ");
        assert_eq!(next.fullmove_number(), 2);
        assert_consistent(&next);
    }

    #[test]
    fn apply_rook_capture_clears_opponent_right() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let m = Move::capture(Square::A1, Square::A8, Piece::Rook);
        let next = pos.apply(m);
        assert_eq!(next.castling().to_string(), "Kk");
    }

    #[test]
    fn apply_takes_the_mover_colour_from_the_board() {
        let pos =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        let next = pos.apply(Move::quiet(sq("d2"), sq("d3"), Piece::Pawn));
        assert_eq!(next.piece_at(sq("d3")), Some((Piece::Pawn, Color::White)));
        assert_eq!(next.pieces_of(Piece::Pawn, Color::Black).count(), 8);
        assert_eq!(
            next.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/3P4/PPP2PPP/RNBQKBNR b KQkq - 0 1"
        );
        assert_consistent(&next);
    }

    proptest! {
        #[test]
        fn random_placements_stay_consistent(
            slots in proptest::collection::vec((0u8..64, 0usize..6, any::<bool>()), 0..32)
        ) {
            let mut setup = Setup::empty();
            for (index, piece, white) in slots {
                let color = if white { Color::White } else { Color::Black };
                setup = setup.with_piece(Square::from_index(index).unwrap(), Piece::ALL[piece], color);
            }
            let pos = Position::from_setup(&setup);
            assert_consistent(&pos);
            prop_assert_eq!(pos.to_setup(), setup);
        }
    }
}

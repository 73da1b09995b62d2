//! Structured position description.

use crate::{CastlingRights, Color, Piece, Square};

/// Contents of a single square.
pub type SquareContent = Option<(Piece, Color)>;

/// Everything needed to build a position: one slot per square, the side to
/// move, castling rights, the en passant target and the move clocks.
///
/// A square holds at most one piece by construction. Produced by the FEN
/// parser or assembled directly with the builder methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    /// Square-indexed placement, a8 first.
    pub placement: [SquareContent; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    /// Halfmove clock for the 50-move rule.
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Setup {
    /// An empty board, white to move, no castling rights.
    pub const fn empty() -> Self {
        Setup {
            placement: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(crate::fen::STARTPOS).expect("STARTPOS is valid")
    }

    /// Places a piece, replacing whatever stood on the square.
    pub fn with_piece(mut self, sq: Square, piece: Piece, color: Color) -> Self {
        self.placement[sq.index() as usize] = Some((piece, color));
        self
    }

    pub fn with_side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    pub fn with_castling(mut self, castling: CastlingRights) -> Self {
        self.castling = castling;
        self
    }

    pub fn with_en_passant(mut self, sq: Option<Square>) -> Self {
        self.en_passant = sq;
        self
    }

    /// Returns what stands on `sq`.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> SquareContent {
        self.placement[sq.index() as usize]
    }
}

impl Default for Setup {
    fn default() -> Self {
        Self::empty()
    }
}

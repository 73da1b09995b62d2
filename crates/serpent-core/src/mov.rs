//! Move representation.

use crate::{Piece, Square};
use std::fmt;

/// Flags for special move types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveFlag {
    /// Normal move (no special action).
    Normal = 0,
    /// Pawn double push from starting rank.
    DoublePush = 1,
    /// Kingside castling.
    CastleKingside = 2,
    /// Queenside castling.
    CastleQueenside = 3,
    /// En passant capture.
    EnPassant = 4,
    /// Pawn promotion to knight.
    PromoteKnight = 5,
    /// Pawn promotion to bishop.
    PromoteBishop = 6,
    /// Pawn promotion to rook.
    PromoteRook = 7,
    /// Pawn promotion to queen.
    PromoteQueen = 8,
}

impl MoveFlag {
    /// Promotion flags in generation order (queen, rook, bishop, knight).
    pub const PROMOTIONS: [MoveFlag; 4] = [
        MoveFlag::PromoteQueen,
        MoveFlag::PromoteRook,
        MoveFlag::PromoteBishop,
        MoveFlag::PromoteKnight,
    ];

    /// Returns the promotion piece if this is a promotion move.
    #[inline]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match self {
            MoveFlag::PromoteKnight => Some(Piece::Knight),
            MoveFlag::PromoteBishop => Some(Piece::Bishop),
            MoveFlag::PromoteRook => Some(Piece::Rook),
            MoveFlag::PromoteQueen => Some(Piece::Queen),
            _ => None,
        }
    }

    /// Returns true if this is a promotion move.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion_piece().is_some()
    }

    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }
}

/// A generated move.
///
/// Carries everything a caller needs to build the following position: the
/// squares, the moving piece, whether something is captured, and the flag
/// describing promotion, double push, en passant or castling.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    flag: MoveFlag,
    capture: bool,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece, flag: MoveFlag, capture: bool) -> Self {
        Move {
            from,
            to,
            piece,
            flag,
            capture,
        }
    }

    /// Creates a non-capturing move with no special flag.
    #[inline]
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Self::new(from, to, piece, MoveFlag::Normal, false)
    }

    /// Creates an ordinary capture.
    #[inline]
    pub const fn capture(from: Square, to: Square, piece: Piece) -> Self {
        Self::new(from, to, piece, MoveFlag::Normal, true)
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the kind of the moving piece.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Returns the move flag.
    #[inline]
    pub const fn flag(self) -> MoveFlag {
        self.flag
    }

    /// True for ordinary captures and en passant.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.capture
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.flag.is_castling()
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag, MoveFlag::EnPassant)
    }

    /// The piece a pawn becomes, for promotions.
    #[inline]
    pub const fn promotion(self) -> Option<Piece> {
        self.flag.promotion_piece()
    }

    /// For a double push, the square an enemy pawn could capture en passant
    /// on the next ply (the square the pawn skipped over).
    #[inline]
    pub const fn en_passant_square(self) -> Option<Square> {
        match self.flag {
            MoveFlag::DoublePush => Square::from_index((self.from.index() + self.to.index()) / 2),
            _ => None,
        }
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion() {
            Some(piece) => format!(
                "{}{}{}",
                self.from,
                self.to,
                piece.letter().to_ascii_lowercase()
            ),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {}", self.piece.letter(), self.to_uci())?;
        if self.capture {
            write!(f, " capture")?;
        }
        if self.flag != MoveFlag::Normal && !self.flag.is_promotion() {
            write!(f, " {:?}", self.flag)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn move_accessors() {
        let m = Move::new(sq("e2"), sq("e4"), Piece::Pawn, MoveFlag::DoublePush, false);

        assert_eq!(m.from(), sq("e2"));
        assert_eq!(m.to(), sq("e4"));
        assert_eq!(m.piece(), Piece::Pawn);
        assert_eq!(m.flag(), MoveFlag::DoublePush);
        assert!(!m.is_capture());
        assert!(!m.is_castle());
        assert_eq!(m.promotion(), None);
    }

    #[test]
    fn double_push_records_skipped_square() {
        let white = Move::new(sq("e2"), sq("e4"), Piece::Pawn, MoveFlag::DoublePush, false);
        assert_eq!(white.en_passant_square(), Some(sq("e3")));

        let black = Move::new(sq("d7"), sq("d5"), Piece::Pawn, MoveFlag::DoublePush, false);
        assert_eq!(black.en_passant_square(), Some(sq("d6")));

        let single = Move::quiet(sq("e2"), sq("e3"), Piece::Pawn);
        assert_eq!(single.en_passant_square(), None);
    }

    #[test]
    fn move_uci() {
        let m = Move::quiet(sq("e2"), sq("e4"), Piece::Pawn);
        assert_eq!(m.to_uci(), "e2e4");

        let e7 = Square::new(File::E, Rank::R7);
        let e8 = Square::new(File::E, Rank::R8);
        let promo = Move::new(e7, e8, Piece::Pawn, MoveFlag::PromoteQueen, false);
        assert_eq!(promo.to_uci(), "e7e8q");
        assert_eq!(promo.promotion(), Some(Piece::Queen));
    }

    #[test]
    fn move_all_promotions_uci() {
        let uci: Vec<String> = MoveFlag::PROMOTIONS
            .iter()
            .map(|&flag| Move::new(sq("e7"), sq("e8"), Piece::Pawn, flag, false).to_uci())
            .collect();
        assert_eq!(uci, ["e7e8q", "e7e8r", "e7e8b", "e7e8n"]);
    }

    #[test]
    fn move_flag_promotion_piece() {
        assert_eq!(MoveFlag::Normal.promotion_piece(), None);
        assert_eq!(MoveFlag::DoublePush.promotion_piece(), None);
        assert_eq!(MoveFlag::CastleKingside.promotion_piece(), None);
        assert_eq!(MoveFlag::EnPassant.promotion_piece(), None);
        assert_eq!(
            MoveFlag::PromoteKnight.promotion_piece(),
            Some(Piece::Knight)
        );
        assert_eq!(
            MoveFlag::PromoteBishop.promotion_piece(),
            Some(Piece::Bishop)
        );
        assert_eq!(MoveFlag::PromoteRook.promotion_piece(), Some(Piece::Rook));
        assert_eq!(MoveFlag::PromoteQueen.promotion_piece(), Some(Piece::Queen));
    }

    #[test]
    fn move_flag_is_castling() {
        assert!(!MoveFlag::Normal.is_castling());
        assert!(MoveFlag::CastleKingside.is_castling());
        assert!(MoveFlag::CastleQueenside.is_castling());
        assert!(!MoveFlag::EnPassant.is_castling());
        assert!(!MoveFlag::PromoteQueen.is_castling());
    }

    #[test]
    fn en_passant_is_a_capture() {
        let m = Move::new(sq("e5"), sq("d6"), Piece::Pawn, MoveFlag::EnPassant, true);
        assert!(m.is_capture());
        assert!(m.is_en_passant());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::quiet(sq("g1"), sq("f3"), Piece::Knight);
        assert_eq!(format!("{:?}", m), "Move(N g1f3)");
        assert_eq!(format!("{}", m), "g1f3");

        let c = Move::capture(sq("e4"), sq("d5"), Piece::Pawn);
        assert_eq!(format!("{:?}", c), "Move(P e4d5 capture)");

        let castle = Move::new(sq("e1"), sq("g1"), Piece::King, MoveFlag::CastleKingside, false);
        assert_eq!(format!("{:?}", castle), "Move(K e1g1 CastleKingside)");
    }
}

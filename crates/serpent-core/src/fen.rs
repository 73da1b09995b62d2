//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{CastleSide, CastlingRights, Color, Piece, Setup, Square, SquareContent};
use thiserror::Error;

/// The standard starting position FEN.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

impl Setup {
    /// Parses a FEN string.
    ///
    /// The two clock fields may be omitted, in which case they default to
    /// `0` and `1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = parse_castling(parts[2])?;
        let en_passant = parse_en_passant(parts[3])?;

        let halfmove_clock = match parts.get(4) {
            Some(s) => s
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(s.to_string()))?,
            None => 0,
        };

        let fullmove_number = match parts.get(5) {
            Some(s) => s
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(s.to_string()))?,
            None => 1,
        };

        Ok(Setup {
            placement,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Converts the setup to a FEN string.
    pub fn to_fen(&self) -> String {
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), Square::to_algebraic);
        format!(
            "{} {} {} {} {} {}",
            placement_string(&self.placement),
            self.side_to_move.to_fen_char(),
            self.castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(placement: &str) -> Result<[SquareContent; 64], FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut board = [None; 64];

    // FEN lists rank 8 first, which is also the top row of the index space.
    for (row, rank) in ranks.iter().enumerate() {
        let mut file = 0usize;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += skip as usize;
            } else if let Some(content) = Piece::from_fen_char(c) {
                if file < 8 {
                    board[row * 8 + file] = Some(content);
                }
                file += 1;
            } else {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid character '{}' in rank {}",
                    c,
                    8 - row
                )));
            }
        }
        if file != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                8 - row,
                file
            )));
        }
    }

    Ok(board)
}

fn parse_castling(castling: &str) -> Result<CastlingRights, FenError> {
    if castling == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;
    for c in castling.chars() {
        rights = match c {
            'K' => rights.with(Color::White, CastleSide::Kingside),
            'Q' => rights.with(Color::White, CastleSide::Queenside),
            'k' => rights.with(Color::Black, CastleSide::Kingside),
            'q' => rights.with(Color::Black, CastleSide::Queenside),
            _ => {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}' in '{}'",
                    c, castling
                )))
            }
        };
    }

    Ok(rights)
}

fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
    if ep == "-" {
        return Ok(None);
    }

    match Square::from_algebraic(ep) {
        Some(sq) if matches!(sq.rank().to_char(), '3' | '6') => Ok(Some(sq)),
        _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
    }
}

fn placement_string(placement: &[SquareContent; 64]) -> String {
    let mut out = String::new();
    for (row, squares) in placement.chunks(8).enumerate() {
        let mut empty = 0;
        for content in squares {
            match content {
                Some((piece, color)) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char(*color));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if row < 7 {
            out.push('/');
        }
    }
    out
}

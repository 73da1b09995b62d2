//! Text rendering of a position.

use serpent_core::{Color, Piece, Square};
use serpent_engine::Position;

/// How pieces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStyle {
    /// Chess glyphs (`♔`, `♟`, ...).
    Unicode,
    /// FEN letters, uppercase for white.
    Ascii,
}

fn glyph(piece: Piece, color: Color, style: BoardStyle) -> char {
    match style {
        BoardStyle::Ascii => piece.to_fen_char(color),
        BoardStyle::Unicode => match (color, piece) {
            (Color::White, Piece::Pawn) => '♙',
            (Color::White, Piece::Knight) => '♘',
            (Color::White, Piece::Bishop) => '♗',
            (Color::White, Piece::Rook) => '♖',
            (Color::White, Piece::Queen) => '♕',
            (Color::White, Piece::King) => '♔',
            (Color::Black, Piece::Pawn) => '♟',
            (Color::Black, Piece::Knight) => '♞',
            (Color::Black, Piece::Bishop) => '♝',
            (Color::Black, Piece::Rook) => '♜',
            (Color::Black, Piece::Queen) => '♛',
            (Color::Black, Piece::King) => '♚',
        },
    }
}

/// Renders the board with rank 8 at the top, a rank label on each row and
/// the file letters underneath. Empty squares are drawn as `-`.
pub fn render_board(position: &Position, style: BoardStyle) -> String {
    let mut out = String::with_capacity(256);

    for (row, squares) in position.board().chunks(8).enumerate() {
        out.push_str(&format!("  {} ", 8 - row));
        for content in squares {
            out.push(' ');
            out.push(match content {
                Some((piece, color)) => glyph(*piece, *color, style),
                None => '-',
            });
        }
        out.push('\n');
    }
    out.push_str("\n     a b c d e f g h\n");
    out
}

/// One-line summary of the state that the board itself does not show.
pub fn describe_state(position: &Position) -> String {
    let side = match position.side_to_move() {
        Color::White => "white",
        Color::Black => "black",
    };
    let en_passant = position
        .en_passant()
        .map_or_else(|| "-".to_string(), Square::to_algebraic);
    format!(
        "{} to move, castling {}, en passant {}",
        side,
        position.castling(),
        en_passant
    )
}

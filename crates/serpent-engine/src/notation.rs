//! Short human-readable move text.
//!
//! A reduced algebraic form: no check marks and no disambiguation. Castling
//! is written as the king move it is (`Kg1`), not `O-O`.

use serpent_core::{Move, Piece};

/// Formats a move for display.
///
/// | move                 | text    |
/// |----------------------|---------|
/// | quiet pawn push      | `e4`    |
/// | pawn capture         | `exd5`  |
/// | piece move           | `Nf3`   |
/// | piece capture        | `Nxe5`  |
/// | promotion            | `e8=Q`  |
/// | capturing promotion  | `dxe8=Q`|
pub fn to_notation(m: &Move) -> String {
    let mut text = String::with_capacity(7);

    if m.piece() == Piece::Pawn {
        if m.is_capture() {
            text.push(m.from().file().to_char());
            text.push('x');
        }
    } else {
        text.push(m.piece().letter());
        if m.is_capture() {
            text.push('x');
        }
    }

    text.push_str(&m.to().to_algebraic());

    if let Some(piece) = m.promotion() {
        text.push('=');
        text.push(piece.letter());
    }

    text
}

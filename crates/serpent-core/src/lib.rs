//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the move generator and
//! its front ends:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates (a8 = 0, h1 = 63)
//! - [`Move`] and [`MoveFlag`] for generated moves
//! - [`Setup`], the structured description a position is built from
//! - FEN parsing and serialization

mod castling;
mod color;
mod fen;
mod mov;
mod piece;
mod setup;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use color::Color;
pub use fen::{FenError, STARTPOS};
pub use mov::{Move, MoveFlag};
pub use piece::Piece;
pub use setup::{Setup, SquareContent};
pub use square::{File, Rank, Square, SquareError};

//! Bitboard chess position and move generation.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit occupancy masks with edge-safe directional shifts
//! - [`Position`] - piece masks plus a square-indexed board, built from a
//!   [`Setup`](serpent_core::Setup) or FEN
//! - [`movegen`] - pseudo-legal generation, the king-safety stage and perft
//! - [`notation`] - short human-readable move text
//!
//! # Architecture
//!
//! Each piece kind and color has its own 64-bit mask, one bit per square with
//! a8 as bit 0 and h1 as bit 63. Pawn pushes and captures are single shifts
//! of a mask, sliding pieces cast rays one step at a time, and knights and
//! kings look their targets up in tables built at compile time.
//!
//! # Example
//!
//! ```
//! use serpent_engine::{generate_moves, legal_moves, notation, Position};
//!
//! let position = Position::startpos();
//! let moves = generate_moves(&position);
//! assert_eq!(moves.len(), 20);
//!
//! let text: Vec<String> = legal_moves(&position).iter().map(notation::to_notation).collect();
//! assert!(text.contains(&"Nf3".to_string()));
//! ```

mod bitboard;
pub mod movegen;
pub mod notation;
mod position;

pub use bitboard::{Bitboard, Offset};
pub use movegen::{
    attackers_to, bishop_attacks, generate_moves, generate_moves_for, is_in_check, is_legal,
    is_square_attacked, king_attacks, knight_attacks, legal_moves, pawn_attacks, queen_attacks,
    rook_attacks, MoveList,
};
pub use position::Position;

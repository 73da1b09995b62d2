//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the legal move tree at a given depth.
//! The counts for well-known positions are published, so any mismatch
//! points at a generator bug.

use super::legal_moves;
use crate::Position;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(position);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|m| perft(&position.apply(*m), depth - 1))
        .sum()
}

/// Perft split by root move, sorted by the move's UCI text.
///
/// Comparing each root move's count against a reference engine narrows a
/// mismatch down to a single subtree.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let moves = legal_moves(position);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|m| {
            let nodes = perft(&position.apply(*m), depth.saturating_sub(1));
            (m.to_uci(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

//! Attack detection: could any opposing piece end a move on a square?
//!
//! This is the primitive behind check detection, checkmate escape probing and
//! the castling "king may not pass through check" rule. It never consults
//! castling legality: an attacking king only ever threatens its eight
//! neighbours, which keeps castling and attack detection free of recursion.

use crate::board::Board;
use crate::geometry::{pawn_threatens, reaches};
use crate::path::is_path_clear;
use crate::types::*;

/// Whether `piece` on `from` attacks `target`, assuming `target` holds an
/// enemy of `piece`.
pub fn attacks_square(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    if from == target {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_threatens(piece.color, from, target),
        kind if kind.is_slider() => {
            reaches(board, piece, from, target) && is_path_clear(board, from, target)
        }
        // Knight and king patterns do not depend on the board
        _ => reaches(board, piece, from, target),
    }
}

/// True iff a piece of the color opposing `defending` attacks `square`,
/// regardless of whose turn it is and of whether that piece is pinned.
pub fn is_square_under_attack(board: &Board, square: Square, defending: Color) -> bool {
    board
        .pieces_of(defending.other())
        .any(|(from, pc)| attacks_square(board, pc, from, square))
}

/// Every square holding a piece that attacks `square` on behalf of the
/// color opposing `defending`.
pub fn attackers(board: &Board, square: Square, defending: Color) -> Vec<Square> {
    board
        .pieces_of(defending.other())
        .filter(|&(from, pc)| attacks_square(board, pc, from, square))
        .map(|(from, _)| from)
        .collect()
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;

//! Per-piece movement patterns, ignoring obstruction by other pieces.
//!
//! Pawns are the exception: whether a pawn may step forward or capture
//! diagonally depends on what stands on the destination, so their pattern
//! reads the board. Castling is not a king pattern here; the validator
//! routes two-column king moves to `castling` before consulting geometry.

use crate::board::Board;
use crate::types::*;

/// Whether `piece` standing on `from` can reach `to` by its movement pattern.
pub fn reaches(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    match piece.kind {
        PieceKind::Pawn => pawn_reaches(board, piece.color, from, to),
        PieceKind::Knight => is_knight_jump(d_row, d_col),
        PieceKind::Bishop => is_diagonal(d_row, d_col),
        PieceKind::Rook => is_straight(d_row, d_col),
        PieceKind::Queen => is_diagonal(d_row, d_col) || is_straight(d_row, d_col),
        PieceKind::King => is_king_step(d_row, d_col),
    }
}

/// The squares a pawn threatens: one step diagonally forward, whether or
/// not anything stands there. Forward pushes never threaten.
pub fn pawn_threatens(color: Color, from: Square, to: Square) -> bool {
    to.row - from.row == color.forward() && (to.col - from.col).abs() == 1
}

fn pawn_reaches(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let forward = color.forward();
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;

    if d_col == 0 && d_row == forward {
        return board.is_empty(to);
    }
    if d_col == 0 && d_row == 2 * forward && from.row == color.pawn_start_row() {
        let intermediate = from.offset(forward, 0);
        return board.is_empty(intermediate) && board.is_empty(to);
    }
    if pawn_threatens(color, from, to) {
        return matches!(board.get(to), Some(target) if target.color != color);
    }
    false
}

pub fn is_knight_jump(d_row: i8, d_col: i8) -> bool {
    let (r, c) = (d_row.abs(), d_col.abs());
    (r == 2 && c == 1) || (r == 1 && c == 2)
}

pub fn is_diagonal(d_row: i8, d_col: i8) -> bool {
    d_row != 0 && d_row.abs() == d_col.abs()
}

pub fn is_straight(d_row: i8, d_col: i8) -> bool {
    (d_row == 0) != (d_col == 0)
}

pub fn is_king_step(d_row: i8, d_col: i8) -> bool {
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;

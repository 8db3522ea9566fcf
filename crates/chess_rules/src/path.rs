//! Path clearance for sliding pieces.

use crate::board::Board;
use crate::types::Square;

/// The first occupied square strictly between `from` and `to`, walking the
/// unit step from `from`. Both endpoints are excluded.
///
/// The two squares must share a row, column or diagonal; for any other pair
/// there is no path and `None` is returned.
pub fn first_blocker(board: &Board, from: Square, to: Square) -> Option<Square> {
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned {
        return None;
    }

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let distance = d_row.abs().max(d_col.abs());
    (1..distance)
        .map(|i| from.offset(step_row * i, step_col * i))
        .find(|&sq| !board.is_empty(sq))
}

pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    first_blocker(board, from, to).is_none()
}

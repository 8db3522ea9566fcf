//! Check and checkmate state of each king.
//!
//! Per king: `Safe -> InCheck -> Checkmated`, recomputed after every committed
//! move. A board without a king of the asked color reports that king as never
//! in check; keeping exactly one king per color on the board is the caller's
//! contract.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::attacks::is_square_under_attack;
use crate::board::Board;
use crate::castling::CastlingRights;
use crate::config::{CheckmateDetection, RulesConfig};
use crate::movegen::has_legal_move;
use crate::types::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KingStatus {
    #[default]
    Safe,
    InCheck,
    Checkmated,
}

/// Where a king stands and what state it is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingState {
    pub square: Square,
    pub status: KingStatus,
}

impl KingState {
    pub fn new(square: Square) -> Self {
        Self {
            square,
            status: KingStatus::Safe,
        }
    }

    pub fn in_check(&self) -> bool {
        self.status != KingStatus::Safe
    }
}

pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king_sq) => is_square_under_attack(board, king_sq, color),
        None => false,
    }
}

/// Whether the `color` king can step to a neighbouring square that is empty
/// or holds an enemy piece and is not attacked once the king stands there.
/// Each probe runs on its own scratch copy of the board.
pub fn king_has_escape(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        return false;
    };
    let king = Piece::new(color, PieceKind::King);

    KING_STEPS.iter().any(|&(d_row, d_col)| {
        let to = king_sq.offset(d_row, d_col);
        if !to.in_bounds() {
            return false;
        }
        if let Some(pc) = board.get(to)
            && pc.color == color
        {
            trace!(%to, "escape square holds a friendly piece");
            return false;
        }
        let mut scratch = *board;
        scratch.set(king_sq, None);
        scratch.set(to, Some(king));
        let safe = !is_square_under_attack(&scratch, to, color);
        trace!(%to, safe, "king escape probe");
        safe
    })
}

/// Checkmate judged by king escapes only: in check and no safe neighbouring
/// square. Blocks and captures by other pieces are not searched.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !king_has_escape(board, color)
}

/// Full state of the `color` king under the configured checkmate detection.
pub fn assess_king(
    board: &Board,
    rights: &CastlingRights,
    color: Color,
    config: &RulesConfig,
) -> KingStatus {
    if !is_in_check(board, color) {
        return KingStatus::Safe;
    }
    let escapes = match config.checkmate {
        CheckmateDetection::KingEscapeOnly => king_has_escape(board, color),
        CheckmateDetection::Full => has_legal_move(board, rights, color, config.promotion),
    };
    if escapes {
        KingStatus::InCheck
    } else {
        KingStatus::Checkmated
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;

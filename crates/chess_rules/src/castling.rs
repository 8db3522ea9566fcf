//! Castling rights and the castling legality rule.

use serde::{Deserialize, Serialize};

use crate::attacks::is_square_under_attack;
use crate::board::Board;
use crate::error::CastlingFailure;
use crate::types::*;

const KING_HOME_COL: i8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Classifies a king move as castling by its two-column shift along a row.
    pub fn from_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.row != to.row {
            return None;
        }
        match to.col - from.col {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    pub fn rook_from_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    pub fn rook_to_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    pub fn king_to_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }
}

pub fn king_home(color: Color) -> Square {
    Square::new(color.back_rank(), KING_HOME_COL)
}

pub fn rook_home(color: Color, side: CastleSide) -> Square {
    Square::new(color.back_rank(), side.rook_from_col())
}

/// Per color and side: may this castling still happen at some point?
/// A right is cleared for good once the king or that rook leaves its
/// original square, the rook is captured there, or the castling is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    /// Infers rights from occupancy: a right survives when king and rook
    /// both stand on their original squares.
    pub fn from_board(board: &Board) -> Self {
        let mut rights = Self::none();
        for color in Color::ALL {
            let king_ok = board.get(king_home(color)) == Some(Piece::new(color, PieceKind::King));
            for side in CastleSide::ALL {
                let rook_ok = board.get(rook_home(color, side))
                    == Some(Piece::new(color, PieceKind::Rook));
                if king_ok && rook_ok {
                    *rights.slot(color, side) = true;
                }
            }
        }
        rights
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_kingside,
            (Color::White, CastleSide::QueenSide) => self.white_queenside,
            (Color::Black, CastleSide::KingSide) => self.black_kingside,
            (Color::Black, CastleSide::QueenSide) => self.black_queenside,
        }
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        *self.slot(color, side) = false;
    }

    /// Clears every right touched by a move leaving `from` or landing on `to`.
    pub fn update_for_move(&mut self, from: Square, to: Square) {
        for color in Color::ALL {
            if from == king_home(color) {
                for side in CastleSide::ALL {
                    self.revoke(color, side);
                }
            }
            for side in CastleSide::ALL {
                let home = rook_home(color, side);
                if from == home || to == home {
                    self.revoke(color, side);
                }
            }
        }
    }

    fn slot(&mut self, color: Color, side: CastleSide) -> &mut bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => &mut self.white_kingside,
            (Color::White, CastleSide::QueenSide) => &mut self.white_queenside,
            (Color::Black, CastleSide::KingSide) => &mut self.black_kingside,
            (Color::Black, CastleSide::QueenSide) => &mut self.black_queenside,
        }
    }
}

/// Checks every castling precondition for the `color` king moving from
/// `from` two columns to `to`. Reports the first one that fails.
pub fn check_castling(
    board: &Board,
    rights: &CastlingRights,
    color: Color,
    from: Square,
    to: Square,
) -> Result<CastleSide, CastlingFailure> {
    let home = king_home(color);
    let side = match CastleSide::from_king_move(from, to) {
        Some(side) if from == home => side,
        _ => return Err(CastlingFailure::KingNotOnHomeSquare),
    };
    if board.get(home) != Some(Piece::new(color, PieceKind::King)) {
        return Err(CastlingFailure::KingNotOnHomeSquare);
    }
    if !rights.has(color, side) {
        return Err(CastlingFailure::RightsLost { side });
    }

    let rook_sq = rook_home(color, side);
    if board.get(rook_sq) != Some(Piece::new(color, PieceKind::Rook)) {
        return Err(CastlingFailure::RookMissing { square: rook_sq });
    }

    let row = home.row;
    let (lo, hi) = if rook_sq.col < home.col {
        (rook_sq.col + 1, home.col)
    } else {
        (home.col + 1, rook_sq.col)
    };
    if let Some(square) = (lo..hi)
        .map(|col| Square::new(row, col))
        .find(|&sq| !board.is_empty(sq))
    {
        return Err(CastlingFailure::PathOccupied { square });
    }

    if is_square_under_attack(board, home, color) {
        return Err(CastlingFailure::KingInCheck);
    }

    // Squares the king crosses, destination included
    let step = (side.king_to_col() - home.col).signum();
    let mut col = home.col;
    while col != side.king_to_col() {
        col += step;
        let square = Square::new(row, col);
        if is_square_under_attack(board, square, color) {
            return Err(CastlingFailure::SquareAttacked { square });
        }
    }

    Ok(side)
}

#[cfg(test)]
#[path = "castling_tests.rs"]
mod castling_tests;

//! Move legality validator.
//!
//! Composes bounds, same-color occupancy, castling, per-piece geometry, path
//! clearance and promotion eligibility into one verdict. The first failing
//! check wins. Whose turn it is and the self-check rule are the turn
//! controller's business; `leaves_king_in_check` is provided for it.

use crate::board::Board;
use crate::castling::{CastleSide, CastlingRights, check_castling};
use crate::config::PromotionPolicy;
use crate::error::{MoveError, MoveResult};
use crate::geometry::reaches;
use crate::path::first_blocker;
use crate::status::is_in_check;
use crate::types::*;

/// A move that passed validation, with everything needed to play it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub piece: Piece,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
}

impl Verdict {
    /// The piece that ends up on the destination square.
    pub fn placed(&self) -> Piece {
        match self.promotion {
            Some(kind) => Piece::new(self.piece.color, kind),
            None => self.piece,
        }
    }

    /// Plays the move on `board`. For castling the rook is relocated in the
    /// same step, so king and rook never appear half-moved.
    pub fn play(&self, board: &mut Board, mv: Move) {
        board.set(mv.from, None);
        board.set(mv.to, Some(self.placed()));
        if let Some(side) = self.castle {
            let row = mv.from.row;
            let rook_from = Square::new(row, side.rook_from_col());
            let rook = board.get(rook_from);
            board.set(rook_from, None);
            board.set(Square::new(row, side.rook_to_col()), rook);
        }
    }
}

pub fn validate_move(
    board: &Board,
    rights: &CastlingRights,
    mv: Move,
    policy: PromotionPolicy,
) -> MoveResult<Verdict> {
    if !mv.from.in_bounds() {
        return Err(MoveError::OutOfBounds { square: mv.from });
    }
    let piece = board
        .get(mv.from)
        .ok_or(MoveError::NoPieceAtOrigin { square: mv.from })?;
    if !mv.to.in_bounds() {
        return Err(MoveError::OutOfBounds { square: mv.to });
    }
    if let Some(target) = board.get(mv.to)
        && target.color == piece.color
    {
        return Err(MoveError::OccupiedBySameColor { square: mv.to });
    }

    if piece.kind == PieceKind::King && CastleSide::from_king_move(mv.from, mv.to).is_some() {
        let side = check_castling(board, rights, piece.color, mv.from, mv.to)?;
        resolve_promotion(piece, mv, policy)?;
        return Ok(Verdict {
            piece,
            promotion: None,
            castle: Some(side),
        });
    }

    if !reaches(board, piece, mv.from, mv.to) {
        return Err(MoveError::GeometryInvalidForPiece {
            kind: piece.kind,
            from: mv.from,
            to: mv.to,
        });
    }

    if piece.kind.is_slider()
        && let Some(blocker) = first_blocker(board, mv.from, mv.to)
    {
        return Err(MoveError::PathBlocked {
            from: mv.from,
            to: mv.to,
            blocker,
        });
    }

    let promotion = resolve_promotion(piece, mv, policy)?;
    Ok(Verdict {
        piece,
        promotion,
        castle: None,
    })
}

/// A pawn landing on its farthest rank needs a queen, rook, bishop or knight.
/// Any other move must not carry a promotion kind.
fn resolve_promotion(
    piece: Piece,
    mv: Move,
    policy: PromotionPolicy,
) -> MoveResult<Option<PieceKind>> {
    let promotes = piece.kind == PieceKind::Pawn && mv.to.row == piece.color.promotion_row();
    match (promotes, mv.promotion) {
        (true, Some(kind)) if kind.is_promotion_target() => Ok(Some(kind)),
        (true, None) if policy == PromotionPolicy::AutoQueen => Ok(Some(PieceKind::Queen)),
        (false, None) => Ok(None),
        (_, requested) => Err(MoveError::MissingOrInvalidPromotion {
            to: mv.to,
            requested,
        }),
    }
}

/// Plays a validated move on a scratch copy and reports whether the mover's
/// own king is attacked afterwards. The board passed in is never touched.
pub fn leaves_king_in_check(board: &Board, mv: Move, verdict: &Verdict) -> bool {
    let mut scratch = *board;
    verdict.play(&mut scratch, mv);
    is_in_check(&scratch, verdict.piece.color)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;

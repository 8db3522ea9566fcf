use crate::board::Board;
use crate::castling::CastlingRights;
use crate::config::PromotionPolicy;
use crate::types::*;
use crate::validate::{leaves_king_in_check, validate_move};

const PROMOTION_CHOICES: [Option<PieceKind>; 4] = [
    Some(PieceKind::Queen),
    Some(PieceKind::Rook),
    Some(PieceKind::Bishop),
    Some(PieceKind::Knight),
];

/// Generate all legal moves for `color`, returning a freshly allocated vector.
///
/// Brute force: every (origin, destination, promotion) candidate is put
/// through the validator and the self-check rule. Turn order is not
/// consulted; the caller picks the color.
pub fn legal_moves(
    board: &Board,
    rights: &CastlingRights,
    color: Color,
    policy: PromotionPolicy,
) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, rights, color, policy, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(
    board: &Board,
    rights: &CastlingRights,
    color: Color,
    policy: PromotionPolicy,
    out: &mut Vec<Move>,
) {
    out.clear();
    out.extend(candidates(board, color).filter(|&mv| is_legal(board, rights, mv, policy)));
}

/// Stops at the first legal move found.
pub fn has_legal_move(
    board: &Board,
    rights: &CastlingRights,
    color: Color,
    policy: PromotionPolicy,
) -> bool {
    candidates(board, color).any(|mv| is_legal(board, rights, mv, policy))
}

pub fn is_legal(board: &Board, rights: &CastlingRights, mv: Move, policy: PromotionPolicy) -> bool {
    match validate_move(board, rights, mv, policy) {
        Ok(verdict) => !leaves_king_in_check(board, mv, &verdict),
        Err(_) => false,
    }
}

fn candidates(board: &Board, color: Color) -> impl Iterator<Item = Move> + '_ {
    board.pieces_of(color).flat_map(move |(from, piece)| {
        Square::all().flat_map(move |to| {
            let promotes = piece.kind == PieceKind::Pawn && to.row == color.promotion_row();
            let choices: &'static [Option<PieceKind>] = if promotes {
                &PROMOTION_CHOICES
            } else {
                &[None]
            };
            choices.iter().map(move |&promotion| Move {
                from,
                to,
                promotion,
            })
        })
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

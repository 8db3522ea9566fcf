//! Turn controller.
//!
//! `GameState` owns the canonical board, the side to move, both kings'
//! bookkeeping and the castling rights. It is the only place any of them
//! change. Every check runs before the first write, so a rejected move
//! leaves the state untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::castling::{CastleSide, CastlingRights};
use crate::config::{CheckmateDetection, RulesConfig};
use crate::error::{MoveError, MoveResult, PlacementError};
use crate::movegen::legal_moves;
use crate::status::{KingState, KingStatus, assess_king, is_in_check, king_has_escape};
use crate::types::*;
use crate::validate::{Verdict, leaves_king_in_check, validate_move};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check { side: Color },
    Checkmate { winner: Color },
}

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub mover: Color,
    pub piece: Piece,
    /// The piece standing on the destination after the move.
    pub placed: Piece,
    pub captured: Option<Piece>,
    pub castle: Option<CastleSide>,
    /// State of the opponent's king after the move.
    pub opponent_status: KingStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Color,
    kings: [KingState; 2],
    castling: CastlingRights,
    config: RulesConfig,
    winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Standard start position, White to move.
    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            board: Board::startpos(),
            turn: Color::White,
            kings: [
                KingState::new(Square::new(Color::White.back_rank(), 4)),
                KingState::new(Square::new(Color::Black.back_rank(), 4)),
            ],
            castling: CastlingRights::all(),
            config,
            winner: None,
        }
    }

    /// Sets up an arbitrary position. Castling rights are inferred from
    /// occupancy and both kings' states are computed immediately.
    pub fn from_placement(
        placement: &str,
        turn: Color,
        config: RulesConfig,
    ) -> Result<Self, PlacementError> {
        let board = Board::from_placement(placement)?;
        let mut kings = [KingState::new(Square::new(0, 0)); 2];
        for color in Color::ALL {
            let square = board
                .find_king(color)
                .ok_or(PlacementError::MissingKing { color })?;
            kings[color.idx()] = KingState::new(square);
        }

        let mut state = Self {
            board,
            turn,
            kings,
            castling: CastlingRights::from_board(&board),
            config,
            winner: None,
        };
        for color in Color::ALL {
            let status = assess_king(&state.board, &state.castling, color, &state.config);
            state.kings[color.idx()].status = status;
            if status == KingStatus::Checkmated {
                state.winner = Some(color.other());
            }
        }
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn king(&self, color: Color) -> &KingState {
        &self.kings[color.idx()]
    }

    pub fn castling_rights(&self) -> &CastlingRights {
        &self.castling
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner {
            return GameStatus::Checkmate { winner };
        }
        match Color::ALL.into_iter().find(|&c| self.king(c).in_check()) {
            Some(side) => GameStatus::Check { side },
            None => GameStatus::Ongoing,
        }
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Checkmate under the configured detection mode.
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }
        match self.config.checkmate {
            CheckmateDetection::KingEscapeOnly => !king_has_escape(&self.board, color),
            CheckmateDetection::Full => {
                assess_king(&self.board, &self.castling, color, &self.config)
                    == KingStatus::Checkmated
            }
        }
    }

    /// Every move the side to move may play. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        legal_moves(&self.board, &self.castling, self.turn, self.config.promotion)
    }

    /// Turn order, no-op and the validator's rules, without the self-check
    /// rule. A move passing `validate` can still be refused by `apply`.
    pub fn validate(&self, mv: Move) -> MoveResult<Verdict> {
        if let Some(winner) = self.winner {
            return Err(MoveError::GameOver { winner });
        }
        if !mv.from.in_bounds() {
            return Err(MoveError::OutOfBounds { square: mv.from });
        }
        let piece = self
            .board
            .get(mv.from)
            .ok_or(MoveError::NoPieceAtOrigin { square: mv.from })?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn {
                expected: self.turn,
            });
        }
        if mv.from == mv.to {
            return Err(MoveError::NoOpMove { square: mv.from });
        }
        validate_move(&self.board, &self.castling, mv, self.config.promotion)
    }

    /// Validates, checks the self-check rule on a scratch board, then
    /// commits: board, king bookkeeping, castling rights, turn, and finally
    /// the opponent king's status.
    pub fn apply(&mut self, mv: Move) -> MoveResult<MoveRecord> {
        let verdict = self.validate(mv).inspect_err(|err| {
            debug!(%mv, %err, "move rejected");
        })?;
        let mover = verdict.piece.color;
        if leaves_king_in_check(&self.board, mv, &verdict) {
            let err = MoveError::SelfCheckAfterMove { color: mover };
            debug!(%mv, %err, "move rejected");
            return Err(err);
        }

        let captured = self.board.get(mv.to);
        verdict.play(&mut self.board, mv);
        self.castling.update_for_move(mv.from, mv.to);

        let own = &mut self.kings[mover.idx()];
        if verdict.piece.kind == PieceKind::King {
            own.square = mv.to;
        }
        own.status = KingStatus::Safe;

        self.turn = mover.other();

        let opponent = mover.other();
        let opponent_status = assess_king(&self.board, &self.castling, opponent, &self.config);
        self.kings[opponent.idx()].status = opponent_status;

        info!(%mv, color = %mover, piece = %verdict.placed().kind, "move committed");
        match opponent_status {
            KingStatus::InCheck => info!(color = %opponent, "king in check"),
            KingStatus::Checkmated => {
                info!(winner = %mover, "checkmate");
                self.winner = Some(mover);
            }
            KingStatus::Safe => {}
        }

        Ok(MoveRecord {
            mv,
            mover,
            piece: verdict.piece,
            placed: verdict.placed(),
            captured,
            castle: verdict.castle,
            opponent_status,
        })
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

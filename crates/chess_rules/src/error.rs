//! Error types for the rules engine
//!
//! Every rejection is a recoverable verdict. A rejected move leaves the
//! board, the turn and the king bookkeeping exactly as they were.

use thiserror::Error;

use crate::castling::CastleSide;
use crate::types::{Color, PieceKind, Square};

/// Why a proposed move was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("square {square} is off the board")]
    OutOfBounds { square: Square },

    #[error("no piece on {square}")]
    NoPieceAtOrigin { square: Square },

    #[error("not your turn: {expected} to move")]
    WrongTurn { expected: Color },

    #[error("piece is already on {square}")]
    NoOpMove { square: Square },

    #[error("{square} is occupied by a piece of the same color")]
    OccupiedBySameColor { square: Square },

    #[error("a {kind} cannot move from {from} to {to}")]
    GeometryInvalidForPiece {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    #[error("path from {from} to {to} is blocked at {blocker}")]
    PathBlocked {
        from: Square,
        to: Square,
        blocker: Square,
    },

    /// A pawn reached the farthest rank without a usable promotion kind, or a
    /// promotion kind was attached to a move that does not promote.
    #[error("invalid promotion for move to {to}: {requested:?}")]
    MissingOrInvalidPromotion {
        to: Square,
        requested: Option<PieceKind>,
    },

    #[error("cannot castle: {0}")]
    CastlingPreconditionFailed(#[from] CastlingFailure),

    #[error("move would leave the {color} king in check")]
    SelfCheckAfterMove { color: Color },

    #[error("game is over, {winner} delivered checkmate")]
    GameOver { winner: Color },
}

/// The first castling precondition that did not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CastlingFailure {
    #[error("king is not on its original square")]
    KingNotOnHomeSquare,

    #[error("{side:?} castling right has been lost")]
    RightsLost { side: CastleSide },

    #[error("no rook of the moving color on {square}")]
    RookMissing { square: Square },

    #[error("{square} between king and rook is occupied")]
    PathOccupied { square: Square },

    #[error("king is in check")]
    KingInCheck,

    #[error("king would pass through attacked square {square}")]
    SquareAttacked { square: Square },
}

/// Piece placement text could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected 8 ranks, found {found}")]
    WrongRankCount { found: usize },

    #[error("rank {rank} describes more than 8 squares")]
    RankTooLong { rank: usize },

    #[error("rank {rank} describes fewer than 8 squares")]
    RankTooShort { rank: usize },

    #[error("rank {rank} contains an empty run of zero squares")]
    ZeroEmptyRun { rank: usize },

    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),

    #[error("no {color} king on the board")]
    MissingKing { color: Color },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("invalid move '{0}'")]
    InvalidMove(String),

    #[error("invalid promotion letter '{0}'")]
    InvalidPromotion(char),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read rules config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for move operations
pub type MoveResult<T> = Result<T, MoveError>;

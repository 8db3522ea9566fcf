//! Scenario tests driving `GameState` through whole moves.

use chess_rules::{
    CastleSide, CastlingFailure, CheckmateDetection, Color, GameState, GameStatus, KingStatus,
    Move, MoveError, Piece, PieceKind, PromotionPolicy, RulesConfig, Square,
};

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

fn position(placement: &str, turn: Color) -> GameState {
    GameState::from_placement(placement, turn, RulesConfig::default()).unwrap()
}

fn position_with(placement: &str, turn: Color, config: RulesConfig) -> GameState {
    GameState::from_placement(placement, turn, config).unwrap()
}

// =============================================================================
// Castling
// =============================================================================

#[test]
fn test_kingside_castling_round_trip() {
    let mut game = position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQK2R", Color::White);
    let record = game.apply(mv("e1g1")).unwrap();

    assert_eq!(record.castle, Some(CastleSide::KingSide));
    let board = game.board();
    assert_eq!(
        board.get(Square::new(7, 6)),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        board.get(Square::new(7, 5)),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert!(board.is_empty(Square::new(7, 4)));
    assert!(board.is_empty(Square::new(7, 7)));
    assert_eq!(game.king(Color::White).square, Square::new(7, 6));
    assert_eq!(game.turn(), Color::Black);
    assert!(!game.castling_rights().white_kingside);
    assert!(!game.castling_rights().white_queenside);
}

#[test]
fn test_queenside_castling_places_king_on_c_file() {
    let mut game = position("r3k3/8/8/8/8/8/8/R3K3", Color::White);
    game.apply(mv("e1c1")).unwrap();
    assert_eq!(
        game.board().get(Square::new(7, 2)),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        game.board().get(Square::new(7, 3)),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );

    let mut game = position("r3k3/8/8/8/8/8/8/4K3", Color::Black);
    game.apply(mv("e8c8")).unwrap();
    assert_eq!(game.king(Color::Black).square, Square::new(0, 2));
    assert_eq!(
        game.board().get(Square::new(0, 3)),
        Some(Piece::new(Color::Black, PieceKind::Rook))
    );
}

#[test]
fn test_castling_refused_when_origin_is_attacked() {
    let mut game = position("4r1k1/8/8/8/8/8/8/4K2R", Color::White);
    let before = game.clone();
    assert_eq!(
        game.apply(mv("e1g1")),
        Err(MoveError::CastlingPreconditionFailed(
            CastlingFailure::KingInCheck
        ))
    );
    assert_eq!(game, before);
}

#[test]
fn test_castling_refused_when_transit_is_attacked() {
    let mut game = position("4kr2/8/8/8/8/8/8/4K2R", Color::White);
    assert_eq!(
        game.apply(mv("e1g1")),
        Err(MoveError::CastlingPreconditionFailed(
            CastlingFailure::SquareAttacked {
                square: Square::new(7, 5)
            }
        ))
    );
}

#[test]
fn test_castling_refused_when_destination_is_attacked() {
    let mut game = position("4k1r1/8/8/8/8/8/8/4K2R", Color::White);
    assert_eq!(
        game.apply(mv("e1g1")),
        Err(MoveError::CastlingPreconditionFailed(
            CastlingFailure::SquareAttacked {
                square: Square::new(7, 6)
            }
        ))
    );
}

#[test]
fn test_castling_refused_through_pieces() {
    // Bishop still on f1, g1 already cleared
    let mut game = position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKB1R", Color::White);
    assert_eq!(
        game.apply(mv("e1g1")),
        Err(MoveError::CastlingPreconditionFailed(
            CastlingFailure::PathOccupied {
                square: Square::new(7, 5)
            }
        ))
    );
}

#[test]
fn test_castling_onto_own_piece_is_refused_before_castling_rules() {
    let mut game = GameState::new();
    assert_eq!(
        game.apply(mv("e1g1")),
        Err(MoveError::OccupiedBySameColor {
            square: Square::new(7, 6)
        })
    );
}

#[test]
fn test_king_move_forfeits_castling() {
    let mut game = position("4k3/p7/8/8/8/8/8/R3K2R", Color::White);
    game.apply(mv("e1f1")).unwrap();
    game.apply(mv("a7a6")).unwrap();
    game.apply(mv("f1e1")).unwrap();
    game.apply(mv("a6a5")).unwrap();
    for (text, side) in [("e1g1", CastleSide::KingSide), ("e1c1", CastleSide::QueenSide)] {
        assert_eq!(
            game.apply(mv(text)),
            Err(MoveError::CastlingPreconditionFailed(
                CastlingFailure::RightsLost { side }
            ))
        );
    }
}

// =============================================================================
// Promotion
// =============================================================================

#[test]
fn test_promotion_requires_a_valid_kind() {
    let mut game = position("k7/4P3/8/8/8/8/8/4K3", Color::White);
    let before = game.clone();

    for text in ["e7e8", "e7e8k", "e7e8p"] {
        assert!(
            matches!(
                game.apply(mv(text)),
                Err(MoveError::MissingOrInvalidPromotion { .. })
            ),
            "{text} should be refused"
        );
        assert_eq!(game, before);
    }

    let record = game.apply(mv("e7e8n")).unwrap();
    assert_eq!(record.placed, Piece::new(Color::White, PieceKind::Knight));
    assert_eq!(
        game.board().get(Square::new(0, 4)),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
}

#[test]
fn test_promoted_queen_gives_check() {
    let mut game = position("k7/4P3/8/8/8/8/8/4K3", Color::White);
    let record = game.apply(mv("e7e8q")).unwrap();
    assert_eq!(record.opponent_status, KingStatus::InCheck);
    assert_eq!(game.status(), GameStatus::Check { side: Color::Black });
}

#[test]
fn test_auto_queen_policy() {
    let config = RulesConfig {
        promotion: PromotionPolicy::AutoQueen,
        ..RulesConfig::default()
    };
    let mut game = position_with("7k/8/8/8/8/8/1p6/4K3", Color::Black, config);
    let record = game.apply(mv("b2b1")).unwrap();
    assert_eq!(record.placed, Piece::new(Color::Black, PieceKind::Queen));
    // New queen checks along the first rank
    assert_eq!(record.opponent_status, KingStatus::InCheck);
}

// =============================================================================
// Check and checkmate
// =============================================================================

#[test]
fn test_back_rank_mate_ends_the_game() {
    let mut game = position("6k1/5ppp/8/8/8/8/8/4Q1K1", Color::White);
    let record = game.apply(mv("e1e8")).unwrap();
    assert_eq!(record.opponent_status, KingStatus::Checkmated);
    assert_eq!(game.king(Color::Black).status, KingStatus::Checkmated);
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
    assert!(game.is_checkmate(Color::Black));
}

#[test]
fn test_open_escape_square_is_only_check() {
    let mut game = position("6k1/5pp1/8/8/8/8/8/4Q1K1", Color::White);
    let record = game.apply(mv("e1e8")).unwrap();
    assert_eq!(record.opponent_status, KingStatus::InCheck);
    game.apply(mv("g8h7")).unwrap();
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn test_full_detection_allows_capturing_the_checker() {
    let placement = "1r4k1/5ppp/8/8/8/8/8/4Q1K1";

    let mut escape_only = position(placement, Color::White);
    escape_only.apply(mv("e1e8")).unwrap();
    assert_eq!(escape_only.winner(), Some(Color::White));

    let config = RulesConfig {
        checkmate: CheckmateDetection::Full,
        ..RulesConfig::default()
    };
    let mut full = position_with(placement, Color::White, config);
    let record = full.apply(mv("e1e8")).unwrap();
    assert_eq!(record.opponent_status, KingStatus::InCheck);
    assert_eq!(full.legal_moves(), vec![mv("b8e8")]);
    let record = full.apply(mv("b8e8")).unwrap();
    assert_eq!(
        record.captured,
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
    assert_eq!(full.status(), GameStatus::Ongoing);
}

#[test]
fn test_scholars_mate() {
    let mut game = GameState::new();
    for text in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6"] {
        game.apply(mv(text)).unwrap();
    }
    let record = game.apply(mv("h5f7")).unwrap();
    assert_eq!(record.opponent_status, KingStatus::Checkmated);
}

// =============================================================================
// Snapshot
// =============================================================================

#[test]
fn test_state_round_trips_through_json() {
    let mut game = GameState::new();
    game.apply(mv("e2e4")).unwrap();
    game.apply(mv("c7c5")).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(
        restored.board().placement(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR"
    );
}

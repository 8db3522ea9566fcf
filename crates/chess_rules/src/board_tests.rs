use super::*;

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[test]
fn test_startpos_matches_placement() {
    let parsed = Board::from_placement(START).unwrap();
    assert_eq!(parsed, Board::startpos());
    assert_eq!(Board::startpos().placement(), START);
}

#[test]
fn test_startpos_kings() {
    let b = Board::startpos();
    assert_eq!(b.find_king(Color::White), Some(Square::new(7, 4)));
    assert_eq!(b.find_king(Color::Black), Some(Square::new(0, 4)));
    assert_eq!(b.pieces_of(Color::White).count(), 16);
}

#[test]
fn test_placement_ignores_trailing_fields() {
    let b = Board::from_placement("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(b.pieces().count(), 2);
    assert_eq!(b.placement(), "4k3/8/8/8/8/8/8/4K3");
}

#[test]
fn test_placement_errors() {
    assert_eq!(
        Board::from_placement("8/8/8"),
        Err(PlacementError::WrongRankCount { found: 3 })
    );
    assert_eq!(
        Board::from_placement("9/8/8/8/8/8/8/8"),
        Err(PlacementError::RankTooLong { rank: 0 })
    );
    assert_eq!(
        Board::from_placement("8/8/7/8/8/8/8/8"),
        Err(PlacementError::RankTooShort { rank: 2 })
    );
    assert_eq!(
        Board::from_placement("8/8/8/3x4/8/8/8/8"),
        Err(PlacementError::UnknownPiece('x'))
    );
}

#[test]
fn test_zero_empty_run_is_rejected() {
    assert_eq!(
        Board::from_placement("k7/8/8/8/8/8/8/K0007"),
        Err(PlacementError::ZeroEmptyRun { rank: 7 })
    );
    assert_eq!(
        Board::from_placement("k7/8/8/8/8/8/8/07K"),
        Err(PlacementError::ZeroEmptyRun { rank: 7 })
    );
}

#[test]
fn test_off_board_access_is_harmless() {
    let mut b = Board::empty();
    b.set(Square::new(8, 0), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(b, Board::empty());
    assert_eq!(b.get(Square::new(-1, 3)), None);
}

#[test]
fn test_copy_is_independent_snapshot() {
    let canonical = Board::startpos();
    let mut scratch = canonical;
    scratch.set(Square::new(6, 4), None);
    assert!(canonical.get(Square::new(6, 4)).is_some());
    assert!(scratch.is_empty(Square::new(6, 4)));
}

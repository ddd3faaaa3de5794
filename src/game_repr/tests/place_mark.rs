use super::*;
use crate::error::GameError;

// ==================== PLACE MARK TESTS ====================

#[test]
fn test_place_mark_sets_cell_and_count() {
    let mut pos = BoardState::new(3).unwrap();
    pos.place_mark(0, 2, Side::PlayerTwo).unwrap();

    assert_eq!(pos.mark_at(0, 2), Some(Mark::PlayerTwo));
    assert!(!pos.is_empty_cell(0, 2));
    assert_eq!(pos.marked_count(), 1);
    assert!(!pos.is_empty());
}

#[test]
fn test_place_mark_on_occupied_cell_fails() {
    let mut pos = play(3, &[(1, 1)]);
    let before = pos.clone();

    let err = pos.place_mark(1, 1, Side::PlayerTwo).unwrap_err();
    assert_eq!(err, GameError::InvalidMove { row: 1, col: 1 });

    // Board untouched, including by the same side marking again
    assert!(pos.place_mark(1, 1, Side::PlayerOne).is_err());
    assert_eq!(pos, before);
    assert_eq!(pos.marked_count(), 1);
}

#[test]
fn test_place_mark_out_of_bounds_fails() {
    let mut pos = BoardState::new(3).unwrap();
    assert_eq!(
        pos.place_mark(3, 0, Side::PlayerOne),
        Err(GameError::OutOfBounds { row: 3, col: 0, size: 3 })
    );
    assert_eq!(pos.mark_at(0, 3), None);
    assert!(!pos.is_empty_cell(0, 3));
    assert_eq!(pos.marked_count(), 0);
}

#[test]
fn test_marked_count_matches_cells() {
    let pos = play(5, &[(0, 0), (4, 4), (2, 2), (1, 3), (3, 1)]);
    assert_eq!(pos.marked_count(), count_marks(&pos));
    assert_eq!(pos.marked_count(), 5);
}

#[test]
fn test_side_to_move_alternates() {
    let mut pos = BoardState::new(3).unwrap();
    assert_eq!(pos.side_to_move(), Side::PlayerOne);
    pos.place_mark(0, 0, Side::PlayerOne).unwrap();
    assert_eq!(pos.side_to_move(), Side::PlayerTwo);
    pos.place_mark(0, 1, Side::PlayerTwo).unwrap();
    assert_eq!(pos.side_to_move(), Side::PlayerOne);
}

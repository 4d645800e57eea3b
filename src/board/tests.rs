use super::*;
use crate::error::GameError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent(), Player::X);
}

#[test]
fn test_mark_from_player() {
    assert_eq!(Mark::from(Player::X), Mark::X);
    assert_eq!(Mark::from(Player::O), Mark::O);
    assert_eq!(Mark::X.player(), Some(Player::X));
    assert_eq!(Mark::Empty.player(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 1);
    assert_eq!(pos.to_index(4), 6);

    let pos2 = Pos::from_index(6, 4);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_new_board() {
    let board = Board::new(4, 5, 3).unwrap();
    assert_eq!(board.height(), 4);
    assert_eq!(board.width(), 5);
    assert_eq!(board.run_length(), 3);
    assert_eq!(board.size(), 20);
    assert_eq!(board.remaining(), 20);
    assert!(board.cells().iter().all(|m| m.is_empty()));
}

#[test]
fn test_new_board_rejects_zero() {
    assert!(matches!(
        Board::new(0, 3, 3),
        Err(GameError::InvalidDimensions { height: 0, .. })
    ));
    assert!(Board::new(3, 0, 3).is_err());
    assert!(Board::new(3, 3, 0).is_err());
}

#[test]
fn test_new_board_rejects_overflowing_size() {
    assert!(matches!(
        Board::new(usize::MAX, 2, 3),
        Err(GameError::InvalidDimensions { width: 2, run_length: 3, .. })
    ));
    assert!(Board::new(usize::MAX / 2 + 1, usize::MAX / 2 + 1, 3).is_err());
}

#[test]
fn test_pos_validity() {
    let board = Board::new(3, 4, 3).unwrap();
    assert_eq!(board.pos(0, 0), Some(Pos::new(0, 0)));
    assert_eq!(board.pos(3, 2), Some(Pos::new(3, 2)));
    assert_eq!(board.pos(-1, 0), None);
    assert_eq!(board.pos(0, -1), None);
    assert_eq!(board.pos(4, 0), None);
    assert_eq!(board.pos(0, 3), None);
}

#[test]
fn test_place_and_remaining() {
    let mut board = Board::default();
    board.place(Pos::new(1, 1), Player::X).unwrap();
    assert_eq!(board.get(Pos::new(1, 1)), Mark::X);
    assert_eq!(board.remaining(), 8);
    assert_eq!(board.remaining(), board.count_empty());
}

#[test]
fn test_place_occupied() {
    let mut board = Board::default();
    board.place(Pos::new(0, 2), Player::X).unwrap();
    let before = board.clone();

    let err = board.place(Pos::new(0, 2), Player::O).unwrap_err();
    assert_eq!(err, GameError::CellOccupied { x: 0, y: 2 });
    assert_eq!(board, before);
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::default();
    let err = board.place(Pos::new(3, 0), Player::X).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { x: 3, y: 0 });
    assert_eq!(board.remaining(), 9);
}

#[test]
fn test_unplace_restores() {
    let mut board = Board::new(2, 3, 2).unwrap();
    let before = board.clone();
    board.occupy(Pos::new(2, 1), Player::O);
    board.unplace(Pos::new(2, 1));
    assert_eq!(board, before);
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(2, 2, 2).unwrap();
    board.place(Pos::new(1, 0), Player::X).unwrap();
    let empties: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(empties, vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)]);
}

#[test]
fn test_snapshot_restore() {
    let mut board = Board::default();
    board.place(Pos::new(0, 0), Player::X).unwrap();
    let snapshot = board.snapshot();
    let before = board.clone();

    board.place(Pos::new(2, 2), Player::O).unwrap();
    board.restore(snapshot);
    assert_eq!(board, before);
    assert_eq!(board.remaining(), 8);
}

#[test]
fn test_display() {
    let mut board = Board::new(2, 2, 2).unwrap();
    board.place(Pos::new(1, 0), Player::X).unwrap();
    let text = board.to_string();
    assert_eq!(text, "     0  1\n  0  .  X\n  1  .  .\n");
}

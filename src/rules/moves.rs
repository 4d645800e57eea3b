//! Legal moves and draw detection

use crate::board::{Board, Pos};

use super::win::check_winner;

/// All empty cells in row-major order
pub fn legal_moves(board: &Board) -> Vec<Pos> {
    board.empty_cells().collect()
}

/// The board is full and nobody completed a run
pub fn is_draw(board: &Board) -> bool {
    board.remaining() == 0 && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_legal_moves_empty_board() {
        let board = Board::new(2, 3, 2).unwrap();
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], Pos::new(0, 0));
        assert_eq!(moves[5], Pos::new(2, 1));
    }

    #[test]
    fn test_full_board_without_run_is_draw() {
        // X O X
        // X O O
        // O X X
        let mut board = Board::default();
        let layout = [
            (0, 0, Player::X),
            (1, 0, Player::O),
            (2, 0, Player::X),
            (0, 1, Player::X),
            (1, 1, Player::O),
            (2, 1, Player::O),
            (0, 2, Player::O),
            (1, 2, Player::X),
            (2, 2, Player::X),
        ];
        for (x, y, player) in layout {
            board.place(Pos::new(x, y), player).unwrap();
        }
        assert!(legal_moves(&board).is_empty());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_run_is_not_draw() {
        let mut board = Board::new(1, 3, 3).unwrap();
        for x in 0..3 {
            board.place(Pos::new(x, 0), Player::X).unwrap();
        }
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_is_not_draw() {
        let mut board = Board::default();
        board.place(Pos::new(1, 1), Player::X).unwrap();
        assert!(!is_draw(&board));
    }
}

//! Win condition checking
//!
//! A player completes a run with `run_length` consecutive marks along a
//! row, a column or a diagonal. Detection only reports who completed the
//! run; whether that is a win or a loss is decided by [`game_winner`].

use crate::board::{Board, Mark, Player, Pos};

/// Direction vectors `(dx, dy)` for line windows
pub const DIRECTIONS: [(i64, i64); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down-right
    (-1, 1), // Diagonal down-left
];

/// A straight run of cells on the board, read on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Pos,
    pub dx: i64,
    pub dy: i64,
    pub len: usize,
}

impl Line {
    /// The `len`-cell window starting at `start` in direction `(dx, dy)`,
    /// or `None` if it leaves the board.
    pub fn window(board: &Board, start: Pos, (dx, dy): (i64, i64), len: usize) -> Option<Line> {
        if len == 0 {
            return None;
        }
        let last = len as i64 - 1;
        board.pos(start.x as i64 + dx * last, start.y as i64 + dy * last)?;
        Some(Line { start, dx, dy, len })
    }

    /// Cell positions in order
    pub fn positions(self) -> impl Iterator<Item = Pos> {
        let (x0, y0) = (self.start.x as i64, self.start.y as i64);
        (0..self.len as i64)
            .map(move |i| Pos::new((x0 + self.dx * i) as usize, (y0 + self.dy * i) as usize))
    }

    /// Cell values in order
    pub fn marks(self, board: &Board) -> impl Iterator<Item = Mark> + '_ {
        self.positions().map(move |pos| board.get(pos))
    }
}

/// Every maximal line that can hold a run: all rows, then all columns,
/// then all down-right and all down-left diagonals. Lines shorter than the
/// run length are skipped.
pub fn lines(board: &Board) -> impl Iterator<Item = Line> {
    let (height, width, run) = (board.height(), board.width(), board.run_length());

    let rows = (0..height).map(move |y| Line {
        start: Pos::new(0, y),
        dx: 1,
        dy: 0,
        len: width,
    });
    let cols = (0..width).map(move |x| Line {
        start: Pos::new(x, 0),
        dx: 0,
        dy: 1,
        len: height,
    });

    // Diagonals start on the top row or on the side they run away from.
    let down_right = (0..width)
        .map(|x| Pos::new(x, 0))
        .chain((1..height).map(|y| Pos::new(0, y)))
        .map(move |start| Line {
            start,
            dx: 1,
            dy: 1,
            len: (width - start.x).min(height - start.y),
        });
    let down_left = (0..width)
        .map(|x| Pos::new(x, 0))
        .chain((1..height).map(move |y| Pos::new(width - 1, y)))
        .map(move |start| Line {
            start,
            dx: -1,
            dy: 1,
            len: (start.x + 1).min(height - start.y),
        });

    rows.chain(cols)
        .chain(down_right)
        .chain(down_left)
        .filter(move |line| line.len >= run)
}

/// First completed window on a line: the player and the offset of the
/// window's first cell.
fn first_run(board: &Board, line: Line) -> Option<(Player, usize)> {
    let run = board.run_length();
    let mut current = Mark::Empty;
    let mut streak = 0usize;

    for (i, mark) in line.marks(board).enumerate() {
        if mark == current {
            streak += 1;
        } else {
            current = mark;
            streak = 1;
        }
        if let Some(player) = current.player() {
            if streak >= run {
                return Some((player, i + 1 - run));
            }
        }
    }
    None
}

/// Check which player has completed a run, if any.
///
/// Lines are scanned in row, column, diagonal order and the first completed
/// window decides. Misère is not applied here.
pub fn check_winner(board: &Board) -> Option<Player> {
    lines(board).find_map(|line| first_run(board, line).map(|(player, _)| player))
}

/// Same scan as [`check_winner`], also returning the cells of the window.
pub fn winning_line(board: &Board) -> Option<(Player, Vec<Pos>)> {
    lines(board).find_map(|line| {
        first_run(board, line).map(|(player, offset)| {
            let cells = line
                .positions()
                .skip(offset)
                .take(board.run_length())
                .collect();
            (player, cells)
        })
    })
}

/// Winner of the game: the player who completed a run under normal play,
/// their opponent under misère.
pub fn game_winner(board: &Board, misere: bool) -> Option<Player> {
    check_winner(board).map(|completer| if misere { completer.opponent() } else { completer })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(height: usize, width: usize, run: usize, marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(height, width, run).unwrap();
        for &(x, y, player) in marks {
            board.place(Pos::new(x, y), player).unwrap();
        }
        board
    }

    #[test]
    fn test_row_win() {
        let board = board_with(
            3,
            3,
            3,
            &[(0, 1, Player::X), (1, 1, Player::X), (2, 1, Player::X)],
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(
            3,
            3,
            3,
            &[(2, 0, Player::O), (2, 1, Player::O), (2, 2, Player::O)],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_main_diagonals() {
        let board = board_with(
            3,
            3,
            3,
            &[(0, 0, Player::X), (1, 1, Player::X), (2, 2, Player::X)],
        );
        assert_eq!(check_winner(&board), Some(Player::X));

        let board = board_with(
            3,
            3,
            3,
            &[(2, 0, Player::O), (1, 1, Player::O), (0, 2, Player::O)],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_off_center_diagonal_on_wide_board() {
        // 3 rows x 5 columns, down-right diagonal starting at (2, 0)
        let board = board_with(
            3,
            5,
            3,
            &[(2, 0, Player::X), (3, 1, Player::X), (4, 2, Player::X)],
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_off_center_anti_diagonal_on_tall_board() {
        // 5 rows x 3 columns, down-left diagonal starting at (2, 2)
        let board = board_with(
            5,
            3,
            3,
            &[(2, 2, Player::O), (1, 3, Player::O), (0, 4, Player::O)],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_run_inside_longer_line() {
        let board = board_with(
            1,
            6,
            3,
            &[
                (0, 0, Player::X),
                (1, 0, Player::O),
                (2, 0, Player::O),
                (3, 0, Player::O),
            ],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_broken_run_not_win() {
        let board = board_with(
            1,
            5,
            3,
            &[
                (0, 0, Player::X),
                (1, 0, Player::X),
                (2, 0, Player::O),
                (3, 0, Player::X),
                (4, 0, Player::X),
            ],
        );
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_on_empty() {
        let board = Board::new(4, 4, 3).unwrap();
        assert_eq!(check_winner(&board), None);
        assert!(winning_line(&board).is_none());
    }

    #[test]
    fn test_run_length_one() {
        let board = board_with(2, 2, 1, &[(1, 1, Player::O)]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_run_longer_than_board() {
        let board = board_with(
            2,
            2,
            3,
            &[(0, 0, Player::X), (1, 0, Player::X), (0, 1, Player::X)],
        );
        assert_eq!(lines(&board).count(), 0);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_line_count_square() {
        // 3 rows + 3 cols + 1 diagonal each way
        let board = Board::default();
        assert_eq!(lines(&board).count(), 8);

        // 4x4 with run 3: 4 + 4 + 3 + 3
        let board = Board::new(4, 4, 3).unwrap();
        assert_eq!(lines(&board).count(), 14);
    }

    #[test]
    fn test_winning_line_cells() {
        let board = board_with(
            4,
            4,
            3,
            &[(3, 1, Player::X), (2, 2, Player::X), (1, 3, Player::X)],
        );
        let (player, cells) = winning_line(&board).unwrap();
        assert_eq!(player, Player::X);
        assert_eq!(cells, vec![Pos::new(3, 1), Pos::new(2, 2), Pos::new(1, 3)]);
    }

    #[test]
    fn test_row_found_before_column() {
        let board = board_with(
            3,
            3,
            3,
            &[
                (0, 0, Player::O),
                (1, 0, Player::O),
                (2, 0, Player::O),
                (0, 1, Player::X),
                (0, 2, Player::X),
            ],
        );
        let (player, cells) = winning_line(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(cells[0], Pos::new(0, 0));
    }

    #[test]
    fn test_game_winner_misere() {
        let board = board_with(
            3,
            3,
            3,
            &[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X)],
        );
        assert_eq!(game_winner(&board, false), Some(Player::X));
        assert_eq!(game_winner(&board, true), Some(Player::O));
        assert_eq!(game_winner(&Board::default(), true), None);
    }

    #[test]
    fn test_window_bounds() {
        let board = Board::new(3, 4, 3).unwrap();
        assert!(Line::window(&board, Pos::new(1, 0), (1, 0), 3).is_some());
        assert!(Line::window(&board, Pos::new(2, 0), (1, 0), 3).is_none());
        assert!(Line::window(&board, Pos::new(2, 0), (-1, 1), 3).is_some());
        assert!(Line::window(&board, Pos::new(1, 0), (-1, 1), 3).is_none());
    }
}

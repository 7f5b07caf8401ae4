//! Win detection logic for tic-tac-toe.

use crate::{Board, Player};
use tracing::instrument;

/// The eight winning lines as board indices, in evaluation order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first fully occupied line in [`LINES`] order,
/// `None` if no line belongs to a single player.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Player> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = squares[a];
        if sq == squares[b] && sq == squares[c] {
            sq.player()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    fn board_of(marks: [char; 9]) -> Board {
        let mut squares = [Square::Empty; 9];
        for (sq, mark) in squares.iter_mut().zip(marks) {
            *sq = match mark {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of(['X', 'X', 'X', '_', '_', '_', '_', '_', '_']);
        assert_eq!(evaluate(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_left_column() {
        let board = board_of(['O', '_', '_', 'O', '_', '_', 'O', '_', '_']);
        assert_eq!(evaluate(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(evaluate(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_of(['X', 'X', 'O', 'O', 'O', 'X', 'X', '_', '_']);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_wins_on_degenerate_board() {
        // Top row (X) precedes middle row (O).
        let board = board_of(['X', 'X', 'X', 'O', 'O', 'O', '_', '_', '_']);
        assert_eq!(evaluate(&board), Some(Player::X));

        // Left column (X) precedes middle column (O).
        let board = board_of(['X', 'O', 'O', 'X', 'O', '_', 'X', 'O', '_']);
        assert_eq!(evaluate(&board), Some(Player::X));
    }
}

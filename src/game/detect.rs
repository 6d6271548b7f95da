//! Win detection over a board snapshot.
//!
//! These are pure functions of the board. The state machine seeds them
//! with the landing cell of each move, so every check walks at most the
//! four lines through one cell instead of rescanning the whole grid.

use super::board::{Board, Cell};
use super::player::Side;

/// Number of aligned pieces that wins the game.
pub const CONNECT: usize = 4;

/// Check whether a winning line for `side` passes through `(row, col)`.
///
/// The seed cell must hold a piece for `side`; anything else, including
/// coordinates off the board, answers false.
pub fn has_win_at(board: &Board, row: usize, col: usize, side: Side) -> bool {
    if row >= board.rows() || col >= board.cols() {
        return false;
    }
    if board.get(row, col) != Cell::Piece(side) {
        return false;
    }

    check_horizontal(board, row, col, side)
        || check_vertical(board, row, col, side)
        || check_diagonal_up(board, row, col, side)
        || check_diagonal_down(board, row, col, side)
}

/// Check horizontal win (left-right through the position)
fn check_horizontal(board: &Board, row: usize, col: usize, side: Side) -> bool {
    let piece = Cell::Piece(side);
    let mut count = 1; // Count the seed piece

    // Check left
    let mut c = col as i32 - 1;
    while c >= 0 && board.get(row, c as usize) == piece {
        count += 1;
        c -= 1;
    }

    // Check right
    let mut c = col + 1;
    while c < board.cols() && board.get(row, c) == piece {
        count += 1;
        c += 1;
    }

    count >= CONNECT
}

/// Check vertical win (up-down through the position)
fn check_vertical(board: &Board, row: usize, col: usize, side: Side) -> bool {
    let piece = Cell::Piece(side);
    let mut count = 1;

    // Check up
    let mut r = row as i32 - 1;
    while r >= 0 && board.get(r as usize, col) == piece {
        count += 1;
        r -= 1;
    }

    // Check down
    let mut r = row + 1;
    while r < board.rows() && board.get(r, col) == piece {
        count += 1;
        r += 1;
    }

    count >= CONNECT
}

/// Check diagonal win (bottom-left to top-right, /)
fn check_diagonal_up(board: &Board, row: usize, col: usize, side: Side) -> bool {
    let piece = Cell::Piece(side);
    let mut count = 1;

    // Check down-left
    let mut r = row as i32 + 1;
    let mut c = col as i32 - 1;
    while r < board.rows() as i32 && c >= 0 && board.get(r as usize, c as usize) == piece {
        count += 1;
        r += 1;
        c -= 1;
    }

    // Check up-right
    let mut r = row as i32 - 1;
    let mut c = col as i32 + 1;
    while r >= 0 && c < board.cols() as i32 && board.get(r as usize, c as usize) == piece {
        count += 1;
        r -= 1;
        c += 1;
    }

    count >= CONNECT
}

/// Check diagonal win (top-left to bottom-right, \)
fn check_diagonal_down(board: &Board, row: usize, col: usize, side: Side) -> bool {
    let piece = Cell::Piece(side);
    let mut count = 1;

    // Check up-left
    let mut r = row as i32 - 1;
    let mut c = col as i32 - 1;
    while r >= 0 && c >= 0 && board.get(r as usize, c as usize) == piece {
        count += 1;
        r -= 1;
        c -= 1;
    }

    // Check down-right
    let mut r = row as i32 + 1;
    let mut c = col as i32 + 1;
    while r < board.rows() as i32 && c < board.cols() as i32 && board.get(r as usize, c as usize) == piece
    {
        count += 1;
        r += 1;
        c += 1;
    }

    count >= CONNECT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_board() -> Board {
        Board::new(6, 7)
    }

    #[test]
    fn test_horizontal_win_seeded_mid_line() {
        let mut board = standard_board();
        // Horizontal line on the bottom row
        for col in 0..4 {
            board.drop_piece(col, Side::One).unwrap();
        }
        // Any cell of the line works as a seed
        assert!(has_win_at(&board, 5, 0, Side::One));
        assert!(has_win_at(&board, 5, 2, Side::One));
        assert!(has_win_at(&board, 5, 3, Side::One));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = standard_board();
        for _ in 0..3 {
            board.drop_piece(3, Side::Two).unwrap();
        }
        let row = board.drop_piece(3, Side::Two).unwrap();
        // Seeded from the topmost piece, which only has the line below it
        assert!(has_win_at(&board, row, 3, Side::Two));
        // And from the bottom piece, which only has the line above it
        assert!(has_win_at(&board, 5, 3, Side::Two));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = standard_board();
        // Staircase for a / line ending at (2, 3)
        board.drop_piece(0, Side::One).unwrap();

        board.drop_piece(1, Side::Two).unwrap();
        board.drop_piece(1, Side::One).unwrap();

        board.drop_piece(2, Side::Two).unwrap();
        board.drop_piece(2, Side::Two).unwrap();
        board.drop_piece(2, Side::One).unwrap();

        board.drop_piece(3, Side::Two).unwrap();
        board.drop_piece(3, Side::Two).unwrap();
        board.drop_piece(3, Side::Two).unwrap();
        let row = board.drop_piece(3, Side::One).unwrap();

        assert_eq!(row, 2);
        assert!(has_win_at(&board, row, 3, Side::One));
        // A cell in the middle of the line also sees it
        assert!(has_win_at(&board, 4, 1, Side::One));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = standard_board();
        // Staircase for a \ line ending at (2, 3)
        board.drop_piece(6, Side::One).unwrap();

        board.drop_piece(5, Side::Two).unwrap();
        board.drop_piece(5, Side::One).unwrap();

        board.drop_piece(4, Side::Two).unwrap();
        board.drop_piece(4, Side::Two).unwrap();
        board.drop_piece(4, Side::One).unwrap();

        board.drop_piece(3, Side::Two).unwrap();
        board.drop_piece(3, Side::Two).unwrap();
        board.drop_piece(3, Side::Two).unwrap();
        let row = board.drop_piece(3, Side::One).unwrap();

        assert_eq!(row, 2);
        assert!(has_win_at(&board, row, 3, Side::One));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = standard_board();
        for col in 0..3 {
            board.drop_piece(col, Side::One).unwrap();
        }
        assert!(!has_win_at(&board, 5, 1, Side::One));
    }

    #[test]
    fn test_run_broken_by_other_side() {
        let mut board = standard_board();
        board.drop_piece(0, Side::One).unwrap();
        board.drop_piece(1, Side::One).unwrap();
        board.drop_piece(2, Side::Two).unwrap();
        board.drop_piece(3, Side::One).unwrap();
        board.drop_piece(4, Side::One).unwrap();
        assert!(!has_win_at(&board, 5, 1, Side::One));
        assert!(!has_win_at(&board, 5, 3, Side::One));
    }

    #[test]
    fn test_board_edges_do_not_wrap() {
        let mut board = standard_board();
        // Three at the right edge plus one at the left edge: never a line
        for col in 4..7 {
            board.drop_piece(col, Side::One).unwrap();
        }
        board.drop_piece(0, Side::One).unwrap();
        assert!(!has_win_at(&board, 5, 6, Side::One));
        assert!(!has_win_at(&board, 5, 0, Side::One));
    }

    #[test]
    fn test_seed_must_match_side() {
        let mut board = standard_board();
        for col in 0..4 {
            board.drop_piece(col, Side::One).unwrap();
        }
        // The line exists, but not for the side asked about
        assert!(!has_win_at(&board, 5, 2, Side::Two));
    }

    #[test]
    fn test_empty_or_out_of_bounds_seed() {
        let board = standard_board();
        assert!(!has_win_at(&board, 5, 3, Side::One));
        assert!(!has_win_at(&board, 6, 0, Side::One));
        assert!(!has_win_at(&board, 0, 7, Side::One));
    }

    #[test]
    fn test_connect_line_on_wider_board() {
        let mut board = Board::new(4, 10);
        for col in 5..9 {
            board.drop_piece(col, Side::Two).unwrap();
        }
        assert!(has_win_at(&board, 3, 7, Side::Two));
    }
}

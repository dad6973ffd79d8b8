use crate::game::board::{Board, BOARD_SIZE, BOARD_WIDTH};
use crate::game::direction::Direction;

/// Index in the input board that lands at `(row, col)` once the board is
/// rotated so that sliding toward `direction` becomes sliding left.
#[inline]
fn source_index(direction: Direction, row: usize, col: usize) -> usize {
    let last = BOARD_WIDTH - 1;
    match direction {
        Direction::Left => row * BOARD_WIDTH + col,
        Direction::Right => (last - row) * BOARD_WIDTH + (last - col),
        // Row `row` is column `last - row` read top to bottom.
        Direction::Up => col * BOARD_WIDTH + (last - row),
        // Row `row` is column `row` read bottom to top.
        Direction::Down => (last - col) * BOARD_WIDTH + row,
    }
}

/// Rotate `board` so that sliding toward `direction` is a leftward slide.
pub fn rotate_tiles(board: &Board, direction: Direction) -> Board {
    let mut rotated = [0; BOARD_SIZE];
    for row in 0..BOARD_WIDTH {
        for col in 0..BOARD_WIDTH {
            rotated[row * BOARD_WIDTH + col] = board.0[source_index(direction, row, col)];
        }
    }
    Board(rotated)
}

/// Undo [`rotate_tiles`] for the same `direction`.
pub fn undo_rotate_tiles(board: &Board, direction: Direction) -> Board {
    rotate_tiles(board, direction.inverse())
}

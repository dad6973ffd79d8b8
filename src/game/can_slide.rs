use crate::game::board::{Board, BOARD_WIDTH};
use crate::game::direction::Direction;
use crate::game::rotate::rotate_tiles;

/// True when at least one tile would move or merge when sliding toward
/// `direction`. Does not modify `board`.
pub fn can_slide(board: &Board, direction: Direction) -> bool {
    let rotated = rotate_tiles(board, direction);
    for row in 0..BOARD_WIDTH {
        for col in 1..BOARD_WIDTH {
            let current = rotated.get(row, col);
            let previous = rotated.get(row, col - 1);
            if current != 0 && (previous == 0 || previous == current) {
                return true;
            }
        }
    }
    false
}

/// Directions in which a slide is currently legal, in [`Direction::ALL`] order.
pub fn legal_directions(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|direction| can_slide(board, *direction))
        .collect()
}

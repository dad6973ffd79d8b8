use log::trace;

use crate::game::board::{Board, BOARD_SIZE, BOARD_WIDTH};
use crate::game::direction::Direction;
use crate::game::rotate::{rotate_tiles, undo_rotate_tiles};
use crate::game::slide_row::slide_and_merge_row;
use crate::game::tile::Score;

/// New board and new score produced by one move.
pub type MoveOutcome = (Board, Score);

/// Slide and merge every line toward `direction`, adding merge values to
/// `score`.
///
/// No legality check is done: on a board where nothing can move the result
/// is `(*board, score)`. Gate calls with [`can_slide`](super::can_slide::can_slide)
/// when a tile must spawn afterwards.
pub fn slide(board: &Board, score: Score, direction: Direction) -> MoveOutcome {
    let rotated = rotate_tiles(board, direction);
    let mut collapsed = [0; BOARD_SIZE];
    let mut new_score = score;

    for row in 0..BOARD_WIDTH {
        let (new_row, score_change) = slide_and_merge_row(rotated.row(row));
        collapsed[row * BOARD_WIDTH..(row + 1) * BOARD_WIDTH].copy_from_slice(&new_row);
        new_score += score_change;
    }
    trace!("slide {}: +{} points", direction, new_score - score);

    (undo_rotate_tiles(&Board(collapsed), direction), new_score)
}

use crate::game::board::BOARD_WIDTH;
use crate::game::tile::{Score, Tile};

/// Slide one row to the left, merging each equal adjacent pair at most once.
///
/// Returns the new row and the score gained, which is the sum of the merged
/// tile values. A tile produced by a merge stays put for the rest of the pass
/// and cannot absorb another tile, so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`
/// and `[4, 4, 4, 4]` becomes `[8, 8, 0, 0]`.
pub fn slide_and_merge_row(row: [Tile; BOARD_WIDTH]) -> ([Tile; BOARD_WIDTH], Score) {
    let mut new_row = row;
    let mut merged = [false; BOARD_WIDTH];
    let mut score_change: Score = 0;

    for i in 1..BOARD_WIDTH {
        // Walk the tile that started at `i` leftward one cell at a time.
        for curr in (0..i).rev() {
            if merged[curr + 1] {
                break;
            }
            if new_row[curr] == 0 {
                new_row[curr] = new_row[curr + 1];
            } else if new_row[curr] == new_row[curr + 1] && !merged[curr] {
                new_row[curr] *= 2;
                score_change += Score::from(new_row[curr]);
                merged[curr + 1] = true;
            } else {
                break;
            }
            new_row[curr + 1] = 0;
            merged[curr] = merged[curr + 1];
            merged[curr + 1] = false;
        }
    }

    (new_row, score_change)
}

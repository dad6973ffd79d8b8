use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::game::board::{Board, BOARD_SIZE};

/// Fresh board with a 2 in each half: one cell drawn from `[0, 8)`, the
/// other from `[8, 16)`. The halves are disjoint, so there are always
/// exactly two tiles.
pub fn create_initial_board(rng: &mut StdRng) -> Board {
    let half = BOARD_SIZE / 2;
    let first = rng.random_range(0..half);
    let second = rng.random_range(half..BOARD_SIZE);
    debug!("initial tiles at cells {} and {}", first, second);
    Board::EMPTY.with_tile(first, 2).with_tile(second, 2)
}

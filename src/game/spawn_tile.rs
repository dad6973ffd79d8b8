use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::game::board::Board;
use crate::game::tile::Tile;
use crate::{Result, Slide2048Error};

/// Place a 2 or a 4 (even odds) on a uniformly chosen empty cell.
///
/// Fails with [`Slide2048Error::BoardFull`] when no cell is empty; the caller
/// must only spawn after a legal slide, which always leaves a free cell.
pub fn spawn_tile(board: &Board, rng: &mut StdRng) -> Result<Board> {
    let free_cells = board.free_cells();
    if free_cells.is_empty() {
        return Err(Slide2048Error::BoardFull);
    }
    let index = free_cells[rng.random_range(0..free_cells.len())];
    let value: Tile = if rng.random_bool(0.5) { 2 } else { 4 };
    debug!("spawned {} at cell {}", value, index);
    Ok(board.with_tile(index, value))
}

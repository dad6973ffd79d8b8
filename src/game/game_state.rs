use serde::{Deserialize, Serialize};

use crate::game::board::Board;
use crate::game::tile::Score;

/// Caller-owned game state, replaced wholesale after every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub score: Score,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        GameState { board, score: 0 }
    }
}

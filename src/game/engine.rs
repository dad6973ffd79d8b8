use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::board::Board;
use crate::game::can_slide::can_slide;
use crate::game::create_board::create_initial_board;
use crate::game::direction::Direction;
use crate::game::game_state::GameState;
use crate::game::slide::{slide, MoveOutcome};
use crate::game::spawn_tile::spawn_tile;
use crate::game::tile::Score;
use crate::Result;

/// Entry point for a front-end: the four board operations plus the random
/// source they draw from.
///
/// The engine keeps no game state; boards and scores go in and come out by
/// value.
#[derive(Debug)]
pub struct BoardEngine {
    rng: StdRng,
}

impl BoardEngine {
    /// Engine seeded from the thread-local generator. Games are not reproducible.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Engine whose tile placements are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        BoardEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn create_initial_board(&mut self) -> Board {
        create_initial_board(&mut self.rng)
    }

    pub fn can_slide(&self, board: &Board, direction: Direction) -> bool {
        can_slide(board, direction)
    }

    pub fn slide(&self, board: &Board, score: Score, direction: Direction) -> MoveOutcome {
        slide(board, score, direction)
    }

    pub fn spawn_tile(&mut self, board: &Board) -> Result<Board> {
        spawn_tile(board, &mut self.rng)
    }

    /// Fresh initial board and a zero score.
    pub fn new_game(&mut self) -> GameState {
        debug!("new game");
        GameState::new(self.create_initial_board())
    }

    /// Play one move: slide and spawn if `direction` is legal.
    ///
    /// Returns `Ok(None)` when nothing can move that way; `state` is never
    /// modified.
    pub fn apply_move(
        &mut self,
        state: &GameState,
        direction: Direction,
    ) -> Result<Option<GameState>> {
        if !self.can_slide(&state.board, direction) {
            debug!("move {} rejected: nothing can slide", direction);
            return Ok(None);
        }
        let (board, score) = self.slide(&state.board, state.score, direction);
        let board = self.spawn_tile(&board)?;
        debug!("move {} accepted, score {} -> {}", direction, state.score, score);
        Ok(Some(GameState { board, score }))
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

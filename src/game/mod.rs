pub mod board;
pub mod can_slide;
pub mod create_board;
pub mod direction;
pub mod engine;
pub mod game_state;
pub mod rotate;
pub mod slide;
pub mod slide_row;
pub mod spawn_tile;
pub mod tile;

pub use board::{Board, BOARD_SIZE, BOARD_WIDTH};
pub use can_slide::{can_slide, legal_directions};
pub use create_board::create_initial_board;
pub use direction::Direction;
pub use engine::BoardEngine;
pub use game_state::GameState;
pub use rotate::{rotate_tiles, undo_rotate_tiles};
pub use slide::{slide, MoveOutcome};
pub use slide_row::slide_and_merge_row;
pub use spawn_tile::spawn_tile;
pub use tile::{is_valid_tile, Score, Tile, MAX_TILE, MAX_TILE_SUM};

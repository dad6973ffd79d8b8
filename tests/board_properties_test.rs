//! Properties of the board operations checked over seeded random boards

use assert_matches::assert_matches;
use rand::prelude::*;
use rand::rngs::StdRng;
use slide_2048::{
    can_slide, create_initial_board, rotate_tiles, slide, slide_and_merge_row, spawn_tile,
    undo_rotate_tiles, Board, Direction, Slide2048Error, Tile, BOARD_SIZE, BOARD_WIDTH,
};

const SAMPLES: usize = 2000;

/// Random board with small tiles so equal neighbours are common.
fn random_board(rng: &mut StdRng) -> Board {
    let mut tiles = [0; BOARD_SIZE];
    for tile in tiles.iter_mut() {
        let exponent = rng.random_range(0..5u32);
        *tile = if exponent == 0 { 0 } else { 1 << exponent };
    }
    Board::new(tiles).unwrap()
}

#[test]
fn test_blocked_slide_is_noop() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let board = random_board(&mut rng);
        for direction in Direction::ALL {
            if !can_slide(&board, direction) {
                assert_eq!(slide(&board, 123, direction), (board, 123));
            }
        }
    }
}

#[test]
fn test_can_slide_iff_slide_changes_board() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let board = random_board(&mut rng);
        for direction in Direction::ALL {
            let (moved, score) = slide(&board, 0, direction);
            if can_slide(&board, direction) {
                assert_ne!(moved, board, "{} on {:?}", direction, board);
                assert!(moved.count_empty() >= 1);
            } else {
                assert_eq!(moved, board, "{} on {:?}", direction, board);
                assert_eq!(score, 0);
            }
        }
    }
}

#[test]
fn test_rotation_round_trip() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let board = random_board(&mut rng);
        for direction in Direction::ALL {
            let rotated = rotate_tiles(&board, direction);
            assert_eq!(undo_rotate_tiles(&rotated, direction), board);
        }
    }
}

#[test]
fn test_row_collapse_conserves_value() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let board = random_board(&mut rng);
        for row_index in 0..BOARD_WIDTH {
            let row = board.row(row_index);
            let (new_row, delta) = slide_and_merge_row(row);
            let before: Tile = row.iter().sum();
            let after: Tile = new_row.iter().sum();
            assert_eq!(before, after, "row {:?}", row);
            // Every merge doubles a tile, so delta is at most the row total.
            assert!(delta <= u64::from(after));
            // Tiles end up packed to the left.
            let first_gap = new_row.iter().position(|t| *t == 0).unwrap_or(BOARD_WIDTH);
            assert!(new_row[first_gap..].iter().all(|t| *t == 0), "{:?}", new_row);
        }
    }
}

#[test]
fn test_slide_conserves_board_sum() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let board = random_board(&mut rng);
        for direction in Direction::ALL {
            let (moved, score) = slide(&board, 0, direction);
            assert_eq!(moved.tile_sum(), board.tile_sum());
            assert_eq!(score % 4, 0, "every merge yields at least 4");
        }
    }
}

#[test]
fn test_documented_rows() {
    assert_eq!(slide_and_merge_row([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
    assert_eq!(slide_and_merge_row([2, 0, 2, 2]), ([4, 2, 0, 0], 4));
    assert_eq!(slide_and_merge_row([4, 4, 4, 4]), ([8, 8, 0, 0], 16));
}

#[test]
fn test_vertical_slides_match_transposed_rows() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..200 {
        let board = random_board(&mut rng);
        let (up, _) = slide(&board, 0, Direction::Up);
        for col in 0..BOARD_WIDTH {
            let column = [
                board.get(0, col),
                board.get(1, col),
                board.get(2, col),
                board.get(3, col),
            ];
            let (expected, _) = slide_and_merge_row(column);
            for row in 0..BOARD_WIDTH {
                assert_eq!(up.get(row, col), expected[row]);
            }
        }
    }
}

#[test]
fn test_stuck_board_blocks_every_direction() {
    let board = Board::new([
        2, 4, 8, 16, //
        16, 8, 4, 2, //
        2, 4, 8, 16, //
        16, 8, 4, 2,
    ])
    .unwrap();
    for direction in Direction::ALL {
        assert!(!can_slide(&board, direction));
    }
}

#[test]
fn test_spawn_fills_single_free_cell() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut tiles = [0; BOARD_SIZE];
    for (i, tile) in tiles.iter_mut().enumerate() {
        *tile = if i % 2 == 0 { 2 } else { 4 };
    }
    tiles[9] = 0;
    let board = Board::new(tiles).unwrap();
    let spawned = spawn_tile(&board, &mut rng).unwrap();
    assert_eq!(spawned.count_empty(), 0);
    assert_ne!(spawned.tiles()[9], 0);
    assert_matches!(spawn_tile(&spawned, &mut rng), Err(Slide2048Error::BoardFull));
}

#[test]
fn test_initial_board_layout() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..SAMPLES {
        let board = create_initial_board(&mut rng);
        let occupied: Vec<usize> = board
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, t)| **t != 0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(occupied.len(), 2);
        assert!(occupied[0] < BOARD_SIZE / 2);
        assert!(occupied[1] >= BOARD_SIZE / 2);
        assert_eq!(board.tile_sum(), 4);
    }
}

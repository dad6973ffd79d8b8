use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::tile::{is_valid_tile, Tile, MAX_TILE_SUM};
use crate::{Result, Slide2048Error};

/// Number of cells per row and per column.
pub const BOARD_WIDTH: usize = 4;
/// Number of cells on the board.
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_WIDTH;

/// 4x4 grid of tiles in row-major order (`index = row * 4 + col`).
///
/// Every cell holds 0 (empty) or a power of two, and the tiles add up to at
/// most [`MAX_TILE_SUM`]. The public constructors enforce both; slides keep
/// the sum unchanged and a spawn on a board with a free cell stays under it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Board(pub(crate) [Tile; BOARD_SIZE]);

impl Board {
    pub const EMPTY: Board = Board([0; BOARD_SIZE]);

    /// Build a board, rejecting values that are neither 0 nor a tile and
    /// boards whose tiles add up to more than [`MAX_TILE_SUM`].
    pub fn new(tiles: [Tile; BOARD_SIZE]) -> Result<Self> {
        if let Some((index, value)) = tiles
            .iter()
            .enumerate()
            .find(|(_, value)| !is_valid_tile(**value))
        {
            return Err(Slide2048Error::InvalidBoard(format!(
                "cell {} holds {}, expected 0 or a power of two",
                index, value
            )));
        }
        let board = Board(tiles);
        if board.tile_sum() > MAX_TILE_SUM {
            return Err(Slide2048Error::InvalidBoard(format!(
                "tiles add up to {}, more than {}",
                board.tile_sum(),
                MAX_TILE_SUM
            )));
        }
        Ok(board)
    }

    pub fn tiles(&self) -> &[Tile; BOARD_SIZE] {
        &self.0
    }

    /// Value at row `row`, column `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.0[row * BOARD_WIDTH + col]
    }

    /// Copy of row `row`, left to right.
    pub fn row(&self, row: usize) -> [Tile; BOARD_WIDTH] {
        let mut out = [0; BOARD_WIDTH];
        out.copy_from_slice(&self.0[row * BOARD_WIDTH..(row + 1) * BOARD_WIDTH]);
        out
    }

    /// Indices of all empty cells, ascending.
    pub fn free_cells(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, tile)| if *tile == 0 { Some(i) } else { None })
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.0.iter().filter(|tile| **tile == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|tile| *tile != 0)
    }

    pub fn highest_tile(&self) -> Tile {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values; merges leave it unchanged.
    pub fn tile_sum(&self) -> u64 {
        self.0.iter().map(|tile| u64::from(*tile)).sum()
    }

    pub(crate) fn with_tile(mut self, index: usize, value: Tile) -> Self {
        self.0[index] = value;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::EMPTY
    }
}

impl TryFrom<Vec<Tile>> for Board {
    type Error = Slide2048Error;

    fn try_from(tiles: Vec<Tile>) -> Result<Self> {
        let tiles: [Tile; BOARD_SIZE] = tiles.try_into().map_err(|v: Vec<Tile>| {
            Slide2048Error::InvalidBoard(format!(
                "expected {} cells, got {}",
                BOARD_SIZE,
                v.len()
            ))
        })?;
        Board::new(tiles)
    }
}

impl From<Board> for Vec<Tile> {
    fn from(board: Board) -> Self {
        board.0.to_vec()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.0)
    }
}

/// Renders the grid row by row, leaving empty cells blank.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(BOARD_WIDTH * 8 - 1);
        for row in 0..BOARD_WIDTH {
            if row > 0 {
                writeln!(f, "{}", separator)?;
            }
            let cells: Vec<String> = self
                .row(row)
                .iter()
                .map(|tile| match *tile {
                    0 => " ".repeat(7),
                    value => format!("{:^7}", value),
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

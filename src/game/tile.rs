/// A single cell value: 0 for an empty cell, otherwise a power of two.
pub type Tile = u32;

/// Running score, increased by the value of every merged tile.
pub type Score = u64;

/// Largest power of two a [`Tile`] can hold (2^31).
pub const MAX_TILE: Tile = 1 << 31;

/// Upper bound on the sum of all tiles of a board.
///
/// A merge never exceeds the board sum, so under this bound every merge
/// result fits in a [`Tile`]. Slides keep the sum constant, and a spawn needs
/// a free cell: fifteen powers of two cannot add up to within 4 of 2^32.
pub const MAX_TILE_SUM: u64 = u32::MAX as u64;

/// True for the values a cell may hold: 0 or a power of two in `[2, MAX_TILE]`.
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

//! # Slide 2048 Game Library
//!
//! Board engine for the 2048 sliding-tile puzzle on a 4x4 grid.
//!
//! ## Features
//!
//! - **Board Engine**: initial board, move legality, slide-and-merge, tile spawning
//! - **Game State**: caller-owned board and score, replaced after every move
//! - **Reproducible Games**: seedable random source for tests and replays
//!
//! ## Usage
//!
//! ```rust
//! use slide_2048::{BoardEngine, Direction};
//!
//! let mut engine = BoardEngine::with_seed(42);
//! let state = engine.new_game();
//! if let Some(next) = engine.apply_move(&state, Direction::Left).unwrap() {
//!     assert!(next.score >= state.score);
//! }
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Logger setup for front-ends
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

/// Main game engine facade
pub use game::*;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Slide 2048 library
#[derive(Debug, thiserror::Error)]
pub enum Slide2048Error {
    #[error("Board is full: no free cell to spawn a tile")]
    BoardFull,

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Slide2048Error>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

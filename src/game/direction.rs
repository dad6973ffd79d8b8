use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Slide2048Error;

/// The edge toward which tiles slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Direction whose rotation undoes this one's.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Left,
            Direction::Right => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts direction names, arrow-key names (`ArrowLeft`, ...) and the
/// vi (`hjkl`) and `wasd` single-key aliases.
impl FromStr for Direction {
    type Err = Slide2048Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let name = key.strip_prefix("arrow").unwrap_or(&key);
        match name {
            "left" | "h" | "a" => Ok(Direction::Left),
            "right" | "l" | "d" => Ok(Direction::Right),
            "up" | "k" | "w" => Ok(Direction::Up),
            "down" | "j" | "s" => Ok(Direction::Down),
            _ => Err(Slide2048Error::UnknownDirection(s.to_string())),
        }
    }
}

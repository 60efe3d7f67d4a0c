//! Collision push directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The axis and sign along which a colliding placement is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Direction {
    /// Increase the row.
    #[default]
    Down,
    /// Increase the column.
    Right,
    /// Decrease the row.
    Up,
    /// Decrease the column.
    Left,
}

impl Direction {
    /// The cell one step away from `(column, row)` in this direction, or
    /// `None` past the edge of the `i32` range.
    #[inline]
    pub fn step(self, column: i32, row: i32) -> Option<(i32, i32)> {
        match self {
            Direction::Down => Some((column, row.checked_add(1)?)),
            Direction::Right => Some((column.checked_add(1)?, row)),
            Direction::Up => Some((column, row.checked_sub(1)?)),
            Direction::Left => Some((column.checked_sub(1)?, row)),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" => Ok(Direction::Down),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "left" => Ok(Direction::Left),
            _ => {
                tracing::warn!(target: quickdialog_core::logging::targets::GRID, value = s, "rejected push direction");
                Err(Error::InvalidDirection(s.to_string()))
            }
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Direction> for &'static str {
    fn from(direction: Direction) -> Self {
        direction.as_str()
    }
}

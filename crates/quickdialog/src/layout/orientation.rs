//! Orientation and packing parameters for linear containers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Direction in which a linear container stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Orientation {
    /// Children are arranged left to right.
    Horizontal,
    /// Children are arranged top to bottom.
    #[default]
    Vertical,
}

impl Orientation {
    /// The perpendicular orientation.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => {
                tracing::warn!(target: quickdialog_core::logging::targets::CONFIG, value = s, "rejected orientation");
                Err(Error::InvalidOrientation(s.to_string()))
            }
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Orientation> for &'static str {
    fn from(orientation: Orientation) -> Self {
        orientation.as_str()
    }
}

/// How a child is packed into a linear container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packing {
    /// Whether the child receives extra space.
    pub expand: bool,
    /// Whether the child fills the space it receives.
    pub fill: bool,
    /// Extra space around the child, in pixels.
    pub padding: u32,
}

impl Default for Packing {
    fn default() -> Self {
        Self {
            expand: true,
            fill: true,
            padding: 0,
        }
    }
}

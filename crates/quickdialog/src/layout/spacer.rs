//! Fixed-size blank leaves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A blank leaf with a fixed size request, written `"WxH"` in shorthand.
///
/// ```
/// use quickdialog::layout::Spacer;
///
/// let spacer: Spacer = "50x20".parse().unwrap();
/// assert_eq!((spacer.width, spacer.height), (50, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spacer {
    /// Requested width in pixels.
    pub width: u32,
    /// Requested height in pixels.
    pub height: u32,
}

impl Spacer {
    /// Create a spacer of the given size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Spacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Spacer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let (width, height) = lowered
            .split_once('x')
            .ok_or_else(|| Error::InvalidSpacer(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| Error::InvalidSpacer(s.to_string()))
        };
        Ok(Self::new(parse(width)?, parse(height)?))
    }
}

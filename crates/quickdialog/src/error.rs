//! Error types for layout, placement and value models.

use std::path::PathBuf;

/// Result type alias for quickdialog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quickdialog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Orientation name that is neither vertical nor horizontal.
    #[error("Invalid orientation '{0}': expected 'vertical' or 'horizontal'")]
    InvalidOrientation(String),

    /// Push direction name that is not one of the four supported ones.
    #[error("Invalid push direction '{0}': expected 'down', 'right', 'up' or 'left'")]
    InvalidDirection(String),

    /// Malformed `WxH` size descriptor.
    #[error("Invalid size descriptor '{0}': expected WIDTHxHEIGHT, e.g. '50x50'")]
    InvalidSpacer(String),

    /// Logarithm base that is not a finite number greater than one.
    #[error("Invalid log scale {0}: the base must be finite and greater than 1")]
    InvalidLogBase(f64),

    /// A placement references an item missing from the item table.
    #[error("Unknown item '{0}': not a widget known to this placement batch")]
    UnknownItem(String),

    /// A placement request spans more cells than a grid accepts.
    #[error("Placement request {index} spans {width}x{height} cells; at most {max} per side")]
    SpanTooLarge {
        index: usize,
        width: u32,
        height: u32,
        max: u32,
    },

    /// A placement request would leave the `i32` cell range.
    #[error("Placement request {index} does not fit in the grid's cell range")]
    GridOverflow { index: usize },

    /// A choice model was asked to select a value it does not contain.
    #[error("Unknown choice '{0}'")]
    UnknownChoice(String),

    /// An index-based selection is out of bounds.
    #[error("Choice index {index} out of range for {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },

    /// A choice model was built with too few choices.
    #[error("At least {min} choices are required, got {actual}")]
    TooFewChoices { min: usize, actual: usize },

    /// Configuration text could not be parsed.
    #[error("Failed to parse {format} configuration: {message}")]
    Config {
        format: &'static str,
        message: String,
    },

    /// Configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an unknown-choice error from any debuggable value.
    pub fn unknown_choice(value: &impl std::fmt::Debug) -> Self {
        Self::UnknownChoice(format!("{value:?}"))
    }

    /// Create a configuration parse error.
    pub fn config(format: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            format,
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

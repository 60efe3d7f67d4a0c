//! Layout configuration.
//!
//! Spacing, root orientation and grid placement defaults can be kept in a
//! TOML or JSON file. Every field is optional:
//!
//! ```toml
//! [auto_box]
//! vspacing = 5
//! hspacing = 15
//! orientation = "horizontal"
//!
//! [grid]
//! base_width = 1
//! base_height = 1
//! direction = "down"
//! ```
//!
//! Orientation and direction names are validated while loading; an unknown
//! name is an error rather than a silent fallback.

use std::path::Path;

use quickdialog_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::Direction;
use crate::layout::{DEFAULT_HSPACING, DEFAULT_VSPACING, Orientation};

/// Settings for [`AutoBox`](crate::layout::AutoBox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoBoxConfig {
    /// Spacing inside vertical containers.
    pub vspacing: u32,
    /// Spacing inside horizontal containers.
    pub hspacing: u32,
    /// Orientation of the outermost container.
    pub orientation: Orientation,
}

impl Default for AutoBoxConfig {
    fn default() -> Self {
        Self {
            vspacing: DEFAULT_VSPACING,
            hspacing: DEFAULT_HSPACING,
            orientation: Orientation::Vertical,
        }
    }
}

/// Settings for [`Grid::attach_all`](crate::grid::Grid::attach_all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Anchor column.
    pub column: i32,
    /// Anchor row.
    pub row: i32,
    /// Width of requests that do not set one.
    pub base_width: u32,
    /// Height of requests that do not set one.
    pub base_height: u32,
    /// Collision push direction.
    pub direction: Direction,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column: 0,
            row: 0,
            base_width: 1,
            base_height: 1,
            direction: Direction::Down,
        }
    }
}

/// All layout settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Box layout settings.
    pub auto_box: AutoBoxConfig,
    /// Grid placement settings.
    pub grid: GridConfig,
}

impl LayoutConfig {
    /// Parse from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config("TOML", e.to_string()))
    }

    /// Parse from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::config("JSON", e.to_string()))
    }

    /// Load a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded layout config");
        Ok(config)
    }

    /// Load a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded layout config");
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config("TOML", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::from_toml_str("").unwrap();
        assert_eq!(config, LayoutConfig::default());
        assert_eq!(config.auto_box.vspacing, 5);
        assert_eq!(config.auto_box.hspacing, 15);
        assert_eq!(config.grid.direction, Direction::Down);
    }

    #[test]
    fn test_partial_toml() {
        let config = LayoutConfig::from_toml_str(
            "[auto_box]\norientation = \"Horizontal\"\n[grid]\ndirection = \"left\"\nrow = 2\n",
        )
        .unwrap();
        assert_eq!(config.auto_box.orientation, Orientation::Horizontal);
        assert_eq!(config.auto_box.vspacing, 5);
        assert_eq!(config.grid.direction, Direction::Left);
        assert_eq!(config.grid.row, 2);
    }

    #[test]
    fn test_bad_orientation_is_rejected() {
        let err = LayoutConfig::from_json_str(r#"{"auto_box": {"orientation": "diagonal"}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config { format: "JSON", .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = LayoutConfig::default();
        config.grid.direction = Direction::Up;
        config.auto_box.hspacing = 3;
        let text = config.to_toml_string().unwrap();
        assert_eq!(LayoutConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[grid]\nbase_width = 2").unwrap();
        let config = LayoutConfig::load_toml(file.path()).unwrap();
        assert_eq!(config.grid.base_width, 2);

        let missing = LayoutConfig::load_json("/nonexistent/quickdialog.json");
        assert!(matches!(missing, Err(Error::Io { .. })));
    }
}

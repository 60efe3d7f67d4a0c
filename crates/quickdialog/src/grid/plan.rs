//! Placement batches described as data.
//!
//! A [`GridPlan`] names its widgets instead of holding them, so a dialog's
//! grid can live in a TOML or JSON file:
//!
//! ```toml
//! [options]
//! column = 3
//!
//! [[items]]
//! item = "entry"
//! width = 2
//! height = 2
//!
//! [[items]]
//! item = "check"
//! ```
//!
//! [`GridPlan::resolve`] turns the names back into widgets.

use std::collections::HashMap;

use quickdialog_core::logging::targets;
use serde::{Deserialize, Serialize};

use super::{AttachOptions, GridChild, GridItem};
use crate::config::GridConfig;
use crate::error::{Error, Result};

/// One named placement request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannedChild {
    /// Name of the widget, or `None` for a skipped slot.
    pub item: Option<String>,
    /// Column offset from the anchor.
    pub col_off: i32,
    /// Row offset from the anchor.
    pub row_off: i32,
    /// Width in cells.
    pub width: Option<u32>,
    /// Height in cells.
    pub height: Option<u32>,
}

/// A placement batch with its options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPlan {
    /// Anchor, base size and push direction.
    #[serde(default)]
    pub options: GridConfig,
    /// Requests in placement order.
    #[serde(default)]
    pub items: Vec<PlannedChild>,
}

impl GridPlan {
    /// Parse a plan from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config("TOML", e.to_string()))
    }

    /// Parse a plan from JSON.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::config("JSON", e.to_string()))
    }

    /// The batch options.
    pub fn attach_options(&self) -> AttachOptions {
        AttachOptions::from_config(&self.options)
    }

    /// Look every named widget up in `widgets`.
    ///
    /// Fails with [`Error::UnknownItem`] on the first name that is missing.
    pub fn resolve<L: Clone>(&self, widgets: &HashMap<String, L>) -> Result<Vec<GridItem<L>>> {
        self.items
            .iter()
            .map(|planned| {
                let Some(name) = planned.item.as_deref() else {
                    return Ok(GridItem::Empty);
                };
                let widget = widgets.get(name).cloned().ok_or_else(|| {
                    tracing::warn!(target: targets::GRID, item = name, "unknown item in grid plan");
                    Error::UnknownItem(name.to_string())
                })?;
                Ok(GridItem::Child(GridChild {
                    item: Some(widget),
                    col_off: planned.col_off,
                    row_off: planned.row_off,
                    width: planned.width,
                    height: planned.height,
                }))
            })
            .collect()
    }
}

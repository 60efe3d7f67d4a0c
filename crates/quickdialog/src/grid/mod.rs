//! Grid placement with collision avoidance.
//!
//! [`Grid::attach_all`] places a batch of widgets at offsets from an anchor
//! cell. When a request lands on cells that are already taken, it is pushed
//! one cell at a time along the batch's [`Direction`] until it fits, so the
//! caller can list widgets roughly where they belong and let earlier ones
//! win.
//!
//! # Example
//!
//! ```
//! use quickdialog::grid::{AttachOptions, Grid, GridChild, GridItem};
//! use quickdialog::headless::{HeadlessGrid, Widget};
//!
//! let grid = Grid::new(HeadlessGrid::new());
//! let placed = grid.attach_all(
//!     [
//!         GridItem::Child(GridChild::new(Widget::label("adjuster")).width(2)),
//!         GridItem::Leaf(Widget::label("adjuster2")),
//!         GridItem::Child(GridChild::new(Widget::label("radio")).col_off(1).height(2)),
//!     ],
//!     &AttachOptions::default(),
//! )
//! .unwrap();
//! assert_eq!((placed[2].column, placed[2].row), (1, 1));
//! ```

mod child;
mod direction;
mod occupancy;
mod placement;
mod plan;

pub use child::{GridChild, GridItem};
pub use direction::Direction;
pub use occupancy::Occupancy;
pub(crate) use occupancy::footprint;
pub use placement::{AttachOptions, Grid, GridBackend, MAX_SPAN, Placement};
pub use plan::{GridPlan, PlannedChild};

//! Placement requests.

/// A widget plus where and how large to place it on a grid.
///
/// Offsets are relative to the anchor of the batch the request belongs to.
/// Width and height fall back to the batch's base size when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct GridChild<L> {
    /// The widget, or `None` for a request that is skipped.
    pub item: Option<L>,
    /// Column offset from the anchor.
    pub col_off: i32,
    /// Row offset from the anchor.
    pub row_off: i32,
    /// Width in cells.
    pub width: Option<u32>,
    /// Height in cells.
    pub height: Option<u32>,
}

impl<L> GridChild<L> {
    /// A request at the anchor with the batch's base size.
    pub fn new(item: L) -> Self {
        Self {
            item: Some(item),
            col_off: 0,
            row_off: 0,
            width: None,
            height: None,
        }
    }

    /// A request without a widget.
    pub fn empty() -> Self {
        Self {
            item: None,
            col_off: 0,
            row_off: 0,
            width: None,
            height: None,
        }
    }

    /// Set the column offset.
    pub fn col_off(mut self, offset: i32) -> Self {
        self.col_off = offset;
        self
    }

    /// Set the row offset.
    pub fn row_off(mut self, offset: i32) -> Self {
        self.row_off = offset;
        self
    }

    /// Set the width in cells.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height in cells.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

/// One element of a placement batch.
#[derive(Debug, Clone, PartialEq)]
pub enum GridItem<L> {
    /// A bare widget: placed at the anchor with the base size.
    Leaf(L),
    /// A widget with explicit offsets and size.
    Child(GridChild<L>),
    /// Nothing; skipped without touching the grid.
    Empty,
}

impl<L> GridItem<L> {
    /// Normalize to a structured request.
    pub fn into_child(self) -> GridChild<L> {
        match self {
            GridItem::Leaf(item) => GridChild::new(item),
            GridItem::Child(child) => child,
            GridItem::Empty => GridChild::empty(),
        }
    }
}

impl<L> From<L> for GridItem<L> {
    fn from(item: L) -> Self {
        GridItem::Leaf(item)
    }
}

impl<L> From<GridChild<L>> for GridItem<L> {
    fn from(child: GridChild<L>) -> Self {
        GridItem::Child(child)
    }
}

impl<L> From<Option<L>> for GridItem<L> {
    fn from(item: Option<L>) -> Self {
        match item {
            Some(item) => GridItem::Leaf(item),
            None => GridItem::Empty,
        }
    }
}

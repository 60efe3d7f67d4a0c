//! Occupied-cell bookkeeping for one grid.

use std::collections::HashSet;

/// The set of grid cells covered by attached items.
///
/// Cells are only ever added; nothing is freed while the grid lives.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    cells: HashSet<(i32, i32)>,
}

impl Occupancy {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `(column, row)` is covered.
    #[inline]
    pub fn is_occupied(&self, column: i32, row: i32) -> bool {
        self.cells.contains(&(column, row))
    }

    /// Whether any cell of the `width` x `height` rectangle at `(column, row)` is covered.
    pub fn overlaps(&self, column: i32, row: i32, width: u32, height: u32) -> bool {
        footprint(column, row, width, height).any(|(c, r)| self.is_occupied(c, r))
    }

    /// Cover every cell of the `width` x `height` rectangle at `(column, row)`.
    pub fn mark(&mut self, column: i32, row: i32, width: u32, height: u32) {
        self.cells.extend(footprint(column, row, width, height));
    }

    /// Number of covered cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is covered.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Last cell of a span starting at `start`, stopping at the edge of the
/// `i32` range. Zero-length spans count as one cell.
pub(crate) fn span_end(start: i32, len: u32) -> i32 {
    let extra = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
    start.saturating_add(extra)
}

/// Every cell of a rectangle, row-major.
pub(crate) fn footprint(
    column: i32,
    row: i32,
    width: u32,
    height: u32,
) -> impl Iterator<Item = (i32, i32)> {
    let (last_column, last_row) = (span_end(column, width), span_end(row, height));
    (row..=last_row).flat_map(move |r| (column..=last_column).map(move |c| (c, r)))
}

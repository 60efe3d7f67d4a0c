//! Batch placement with collision avoidance.

use parking_lot::Mutex;
use quickdialog_core::logging::{span_names, targets};
use serde::{Deserialize, Serialize};

use super::{Direction, GridItem, Occupancy, footprint};
use crate::config::GridConfig;
use crate::error::{Error, Result};

/// Largest width or height, in cells, that a single request may span.
pub const MAX_SPAN: u32 = 1024;

/// The grid capability supplied by a widget toolkit.
pub trait GridBackend {
    /// Anything the toolkit can attach to a grid.
    type Leaf;

    /// The widget covering `(column, row)`, if any.
    fn child_at(&self, column: i32, row: i32) -> Option<&Self::Leaf>;

    /// Attach `leaf` with its top-left cell at `(column, row)`.
    fn attach(&mut self, leaf: Self::Leaf, column: i32, row: i32, width: u32, height: u32);
}

/// Anchor, base size and push direction for one placement batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachOptions {
    /// Anchor column that request offsets are relative to.
    pub column: i32,
    /// Anchor row that request offsets are relative to.
    pub row: i32,
    /// Width for requests that do not set one.
    pub base_width: u32,
    /// Height for requests that do not set one.
    pub base_height: u32,
    /// Where a colliding request is moved.
    pub direction: Direction,
}

impl Default for AttachOptions {
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

impl AttachOptions {
    /// Options anchored at `(column, row)` with the defaults otherwise.
    pub fn at(column: i32, row: i32) -> Self {
        Self {
            column,
            row,
            ..Self::default()
        }
    }

    /// Options taken from a loaded configuration.
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            column: config.column,
            row: config.row,
            base_width: config.base_width,
            base_height: config.base_height,
            direction: config.direction,
        }
    }

    /// Set the base size.
    pub fn base_size(mut self, width: u32, height: u32) -> Self {
        self.base_width = width;
        self.base_height = height;
        self
    }

    /// Set the push direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// Where an item ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Left column.
    pub column: i32,
    /// Top row.
    pub row: i32,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Placement {
    /// Whether two placements cover a common cell.
    pub fn intersects(&self, other: &Placement) -> bool {
        let span = |start: i32, len: u32| (i64::from(start), i64::from(start) + i64::from(len));
        let (left, right) = span(self.column, self.width);
        let (top, bottom) = span(self.row, self.height);
        let (other_left, other_right) = span(other.column, other.width);
        let (other_top, other_bottom) = span(other.row, other.height);
        left < other_right && other_left < right && top < other_bottom && other_top < bottom
    }
}

/// Whether a `width` x `height` rectangle at `(column, row)` stays inside
/// the `i32` cell range.
fn fits(column: i32, row: i32, width: u32, height: u32) -> bool {
    let end = |start: i32, len: u32| {
        i32::try_from(len - 1)
            .ok()
            .and_then(|extra| start.checked_add(extra))
            .is_some()
    };
    end(column, width) && end(row, height)
}

/// A non-empty request with its size resolved and its anchor checked.
struct Resolved<L> {
    index: usize,
    leaf: L,
    column: i32,
    row: i32,
    width: u32,
    height: u32,
}

struct GridState<G> {
    backend: G,
    occupancy: Occupancy,
}

impl<G: GridBackend> GridState<G> {
    fn is_free(&self, column: i32, row: i32, width: u32, height: u32) -> bool {
        !self.occupancy.overlaps(column, row, width, height)
            && footprint(column, row, width, height)
                .all(|(c, r)| self.backend.child_at(c, r).is_none())
    }
}

/// A toolkit grid plus the occupancy of everything placed through it.
///
/// Each [`attach_all`](Self::attach_all) call holds the grid's lock for the
/// whole batch, so concurrent batches never interleave.
pub struct Grid<G> {
    state: Mutex<GridState<G>>,
}

impl<G: GridBackend> Grid<G> {
    /// Wrap a backend grid.
    pub fn new(backend: G) -> Self {
        Self {
            state: Mutex::new(GridState {
                backend,
                occupancy: Occupancy::new(),
            }),
        }
    }

    /// Attach a batch of items in order.
    ///
    /// Each request targets the anchor plus its offsets. While the target
    /// rectangle overlaps a cell that is already taken, the target moves one
    /// cell in `options.direction`. Earlier requests therefore win ties, and
    /// later ones are pushed past them. Empty requests are skipped.
    ///
    /// Returns the final placement of every attached item, in batch order.
    ///
    /// # Errors
    ///
    /// [`Error::SpanTooLarge`] when a request is wider or taller than
    /// [`MAX_SPAN`], and [`Error::GridOverflow`] when its anchor plus offsets
    /// leave the `i32` cell range. Both are checked for the whole batch before
    /// anything is attached. [`Error::GridOverflow`] is also returned when
    /// probing runs off the edge of the range; requests before that one stay
    /// attached.
    pub fn attach_all<I, T>(&self, items: I, options: &AttachOptions) -> Result<Vec<Placement>>
    where
        I: IntoIterator<Item = T>,
        T: Into<GridItem<G::Leaf>>,
    {
        let _span = tracing::debug_span!(
            target: targets::GRID,
            span_names::ATTACH_ALL,
            column = options.column,
            row = options.row,
            direction = %options.direction
        )
        .entered();

        let requests = Self::resolve(items, options)?;
        let mut state = self.state.lock();
        let mut placements = Vec::with_capacity(requests.len());

        for request in requests {
            let Resolved {
                index,
                leaf,
                mut column,
                mut row,
                width,
                height,
            } = request;

            while !state.is_free(column, row, width, height) {
                tracing::trace!(target: targets::GRID, index, column, row, "cell taken, probing");
                (column, row) = options
                    .direction
                    .step(column, row)
                    .filter(|&(c, r)| fits(c, r, width, height))
                    .ok_or(Error::GridOverflow { index })?;
            }

            state.occupancy.mark(column, row, width, height);
            state.backend.attach(leaf, column, row, width, height);
            tracing::debug!(target: targets::GRID, index, column, row, width, height, "attached");

            placements.push(Placement {
                column,
                row,
                width,
                height,
            });
        }

        Ok(placements)
    }

    fn resolve<I, T>(items: I, options: &AttachOptions) -> Result<Vec<Resolved<G::Leaf>>>
    where
        I: IntoIterator<Item = T>,
        T: Into<GridItem<G::Leaf>>,
    {
        let mut requests = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            let item: GridItem<G::Leaf> = item.into();
            let child = item.into_child();
            let Some(leaf) = child.item else {
                tracing::trace!(target: targets::GRID, index, "skipping empty request");
                continue;
            };

            let width = child.width.unwrap_or(options.base_width).max(1);
            let height = child.height.unwrap_or(options.base_height).max(1);
            if width > MAX_SPAN || height > MAX_SPAN {
                tracing::warn!(target: targets::GRID, index, width, height, "request too large");
                return Err(Error::SpanTooLarge {
                    index,
                    width,
                    height,
                    max: MAX_SPAN,
                });
            }

            let (column, row) = options
                .column
                .checked_add(child.col_off)
                .zip(options.row.checked_add(child.row_off))
                .filter(|&(c, r)| fits(c, r, width, height))
                .ok_or(Error::GridOverflow { index })?;

            requests.push(Resolved {
                index,
                leaf,
                column,
                row,
                width,
                height,
            });
        }
        Ok(requests)
    }

    /// Whether `(column, row)` is covered by an item placed through this grid.
    pub fn is_occupied(&self, column: i32, row: i32) -> bool {
        self.state.lock().occupancy.is_occupied(column, row)
    }

    /// Unwrap the backend.
    pub fn into_backend(self) -> G {
        self.state.into_inner().backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridChild;
    use crate::headless::{HeadlessGrid, Widget};

    fn grid() -> Grid<HeadlessGrid> {
        Grid::new(HeadlessGrid::new())
    }

    fn label(text: &str) -> Widget {
        Widget::label(text)
    }

    fn cell(column: i32, row: i32) -> (i32, i32) {
        (column, row)
    }

    #[test]
    fn test_collisions_push_down_in_submission_order() {
        let grid = grid();
        let placements = grid.attach_all(
            [label("a"), label("b"), label("c")],
            &AttachOptions::at(2, 2),
        )
        .unwrap();
        let cells: Vec<_> = placements.iter().map(|p| cell(p.column, p.row)).collect();
        assert_eq!(cells, vec![(2, 2), (2, 3), (2, 4)]);

        let backend = grid.into_backend();
        assert_eq!(backend.child_at(2, 3), Some(&label("b")));
    }

    #[test]
    fn test_each_direction_probes_its_axis() {
        let cases = [
            (Direction::Right, (1, 0)),
            (Direction::Up, (0, -1)),
            (Direction::Left, (-1, 0)),
            (Direction::Down, (0, 1)),
        ];
        for (direction, expected) in cases {
            let grid = grid();
            let options = AttachOptions::default().direction(direction);
            let placements = grid.attach_all([label("a"), label("b")], &options).unwrap();
            assert_eq!(cell(placements[1].column, placements[1].row), expected);
        }
    }

    #[test]
    fn test_offsets_and_sizes() {
        let grid = grid();
        let placements = grid.attach_all(
            [
                GridItem::Child(GridChild::new(label("wide")).width(2)),
                GridItem::Leaf(label("below")),
                GridChild::new(label("tall")).col_off(1).height(2).into(),
            ],
            &AttachOptions::default(),
        )
        .unwrap();
        assert_eq!(
            placements,
            vec![
                Placement { column: 0, row: 0, width: 2, height: 1 },
                Placement { column: 0, row: 1, width: 1, height: 1 },
                Placement { column: 1, row: 1, width: 1, height: 2 },
            ]
        );
    }

    #[test]
    fn test_base_size_applies_to_unsized_requests() {
        let grid = grid();
        let options = AttachOptions::default().base_size(2, 2);
        let placements = grid.attach_all(
            [GridItem::Leaf(label("a")), GridChild::new(label("b")).width(1).into()],
            &options,
        )
        .unwrap();
        assert_eq!(placements[0], Placement { column: 0, row: 0, width: 2, height: 2 });
        assert_eq!(placements[1], Placement { column: 0, row: 2, width: 1, height: 2 });
    }

    #[test]
    fn test_empty_requests_are_skipped() {
        let grid = grid();
        let placements = grid.attach_all(
            [GridItem::Empty, GridItem::Child(GridChild::empty()), GridItem::Leaf(label("a"))],
            &AttachOptions::default(),
        )
        .unwrap();
        assert_eq!(placements.len(), 1);
        assert_eq!(cell(placements[0].column, placements[0].row), (0, 0));
        assert!(!grid.is_occupied(0, 1));
    }

    #[test]
    fn test_occupancy_persists_across_batches() {
        let grid = grid();
        grid.attach_all(
            [GridChild::new(label("entry")).width(2).height(2)],
            &AttachOptions::at(3, 0),
        )
        .unwrap();
        let placements = grid.attach_all(
            [GridItem::Leaf(label("check")), GridChild::new(label("exec")).col_off(1).into()],
            &AttachOptions::at(3, 0),
        )
        .unwrap();
        assert_eq!(cell(placements[0].column, placements[0].row), (3, 2));
        assert_eq!(cell(placements[1].column, placements[1].row), (4, 2));
    }

    #[test]
    fn test_wide_request_skips_partially_covered_rectangles() {
        let grid = grid();
        let placements = grid.attach_all(
            [
                GridItem::Child(GridChild::new(label("a")).col_off(1)),
                GridChild::new(label("b")).width(2).into(),
            ],
            &AttachOptions::default(),
        )
        .unwrap();
        assert_eq!(cell(placements[1].column, placements[1].row), (0, 1));
        assert!(!placements[0].intersects(&placements[1]));
    }

    #[test]
    fn test_backend_children_count_as_taken() {
        let mut backend = HeadlessGrid::new();
        backend.attach(label("existing"), 0, 0, 1, 1);
        let grid = Grid::new(backend);
        let placements = grid.attach_all([label("new")], &AttachOptions::default()).unwrap();
        assert_eq!(cell(placements[0].column, placements[0].row), (0, 1));
    }

    #[test]
    fn test_no_overlap_and_determinism() {
        let batch = || {
            (0..24).map(|i| {
                GridChild::new(Widget::label(format!("w{i}")))
                    .col_off(i % 3)
                    .row_off(i % 2)
                    .width(1 + (i as u32 % 2))
                    .height(1 + (i as u32 % 3))
            })
        };

        let first = grid().attach_all(batch(), &AttachOptions::at(1, 1)).unwrap();
        let second = grid().attach_all(batch(), &AttachOptions::at(1, 1)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 24);

        for (i, a) in first.iter().enumerate() {
            for b in &first[i + 1..] {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_colliding_rows_are_non_decreasing_per_column() {
        let grid = grid();
        let placements = grid.attach_all(
            (0..6).map(|i| GridChild::new(Widget::label(format!("w{i}"))).col_off(i % 2)),
            &AttachOptions::default(),
        )
        .unwrap();
        for column in 0..2 {
            let rows: Vec<i32> = placements
                .iter()
                .filter(|p| p.column == column)
                .map(|p| p.row)
                .collect();
            assert!(rows.windows(2).all(|w| w[0] < w[1]), "{rows:?}");
        }
    }

    #[test]
    fn test_placement_intersects() {
        let a = Placement { column: 0, row: 0, width: 2, height: 2 };
        let b = Placement { column: 1, row: 1, width: 1, height: 1 };
        let c = Placement { column: 2, row: 0, width: 1, height: 1 };
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));

        let edge = Placement { column: i32::MAX, row: 0, width: MAX_SPAN, height: 1 };
        let before = Placement { column: i32::MAX - 1, row: 0, width: 1, height: 1 };
        assert!(!edge.intersects(&before));
        assert!(edge.intersects(&Placement { column: i32::MAX, row: 0, width: 1, height: 1 }));
    }

    #[test]
    fn test_oversized_request_is_rejected_before_attaching() {
        let grid = grid();
        let result = grid.attach_all(
            [
                GridItem::Leaf(label("small")),
                GridChild::new(label("huge")).width(1 << 31).into(),
            ],
            &AttachOptions::default(),
        );
        assert!(matches!(
            result,
            Err(Error::SpanTooLarge { index: 1, width, max: MAX_SPAN, .. }) if width == 1 << 31
        ));
        assert!(!grid.is_occupied(0, 0));

        let placements = grid
            .attach_all(
                [GridChild::new(label("limit")).width(MAX_SPAN), GridChild::new(label("next"))],
                &AttachOptions::default(),
            )
            .unwrap();
        assert_eq!(cell(placements[1].column, placements[1].row), (0, 1));
        assert!(grid.is_occupied(MAX_SPAN as i32 - 1, 0));
    }

    #[test]
    fn test_offset_past_the_cell_range_is_an_error() {
        let grid = grid();
        let result = grid.attach_all(
            [GridChild::new(label("far")).col_off(i32::MAX)],
            &AttachOptions::at(1, 0),
        );
        assert!(matches!(result, Err(Error::GridOverflow { index: 0 })));

        let result = grid.attach_all(
            [GridChild::new(label("wide")).col_off(i32::MAX - 1).width(3)],
            &AttachOptions::default(),
        );
        assert!(matches!(result, Err(Error::GridOverflow { index: 0 })));
        assert!(grid.into_backend().is_empty());
    }

    #[test]
    fn test_requests_at_the_edge_of_the_range() {
        let grid = grid();
        let options = AttachOptions::at(i32::MAX, i32::MAX - 1);
        let placements = grid
            .attach_all([label("a"), label("b")], &options)
            .unwrap();
        assert_eq!(cell(placements[0].column, placements[0].row), (i32::MAX, i32::MAX - 1));
        assert_eq!(cell(placements[1].column, placements[1].row), (i32::MAX, i32::MAX));

        // A third collision has nowhere left to go.
        let result = grid.attach_all([label("c")], &options);
        assert!(matches!(result, Err(Error::GridOverflow { index: 0 })));
        assert!(!grid.is_occupied(0, 0));
    }
}

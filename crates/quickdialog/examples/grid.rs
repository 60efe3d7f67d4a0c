//! Grid Example
//!
//! Places the controls of a small dialog in two batches and prints where
//! each one landed. The second batch is read from a TOML plan.
//!
//! Run with: cargo run -p quickdialog --example grid
//! Set `RUST_LOG=quickdialog::grid=trace` to follow collision probing.

use std::collections::HashMap;

use quickdialog::grid::{AttachOptions, Grid, GridChild, GridItem, GridPlan};
use quickdialog::headless::{HeadlessGrid, Widget};
use tracing_subscriber::EnvFilter;

const RIGHT_SIDE: &str = r#"
[options]
column = 3

[[items]]
item = "entry"
width = 2
height = 2

[[items]]
item = "check"

[[items]]
item = "exec"
col_off = 1
"#;

fn main() -> quickdialog::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quickdialog=debug")))
        .init();

    let grid = Grid::new(HeadlessGrid::new());

    grid.attach_all(
        [
            GridItem::Child(GridChild::new(Widget::label("adjuster")).width(2)),
            GridItem::Leaf(Widget::label("adjuster2")),
            GridItem::Child(GridChild::new(Widget::label("radio")).col_off(1).height(2)),
            GridItem::Leaf(Widget::label("combo")),
        ],
        &AttachOptions::default(),
    )?;

    let plan = GridPlan::from_toml_str(RIGHT_SIDE)?;
    let widgets: HashMap<String, Widget> = ["entry", "check", "exec"]
        .into_iter()
        .map(|name| (name.to_string(), Widget::label(name)))
        .collect();
    grid.attach_all(plan.resolve(&widgets)?, &plan.attach_options())?;

    let backend = grid.into_backend();
    for attachment in backend.attachments() {
        let p = attachment.placement;
        println!(
            "{:<10} column {} row {} ({}x{})",
            attachment.widget.as_label().unwrap_or("?"),
            p.column,
            p.row,
            p.width,
            p.height
        );
    }
    Ok(())
}

//! Auto Box Example
//!
//! Builds three rows of labels, including a fixed-size blank and a nested
//! group, and prints the resulting container tree.
//!
//! Run with: cargo run -p quickdialog --example auto_box
//! Set `RUST_LOG=quickdialog=trace` to see every packed container.

use quickdialog::headless::{BoxNode, Widget};
use quickdialog::layout::{AutoBox, LayoutNode, Spacer};
use tracing_subscriber::EnvFilter;

fn leaf(text: &str) -> LayoutNode<Widget> {
    LayoutNode::leaf(Widget::label(text))
}

fn main() -> quickdialog::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quickdialog=debug")))
        .init();

    let blank: Spacer = "50x50".parse()?;
    let rows = vec![
        // first row including a 50x50 blank
        LayoutNode::group(vec![leaf("1"), leaf("2"), blank.into(), leaf("3")]),
        // second row including sub-groups
        LayoutNode::group(vec![
            leaf("4"),
            leaf("5"),
            leaf("6"),
            LayoutNode::group(vec![leaf("a"), LayoutNode::group(vec![leaf("b"), leaf("c")]), leaf("d")]),
        ]),
        LayoutNode::group(vec![leaf("7"), leaf("8"), leaf("9")]),
    ];

    match AutoBox::new().build::<BoxNode>(rows) {
        Some(root) => print!("{}", root.dump_tree()),
        None => println!("(empty layout)"),
    }
    Ok(())
}

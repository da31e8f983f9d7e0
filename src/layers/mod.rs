use svg::node::element::{Group, Text as TextEl};

use crate::context::FrameContext;
use crate::error::Result;

pub trait Layer {
    /// Produce an SVG group for this layer. Planning failures (bad samples,
    /// unparseable values) abort the whole render.
    fn render(&self, context: &FrameContext<'_>) -> Result<Group>;
}

pub fn group_with_class(class: &str) -> Group {
    let mut g = Group::new();
    g = g.set("class", class);
    g
}

pub fn text(class: &str, x: f64, y: f64, anchor: &str, content: &str) -> TextEl {
    TextEl::new(content)
        .set("class", class)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
}

pub mod frame;
pub mod grid;

pub use frame::FrameLayer;
pub use grid::GridLayer;

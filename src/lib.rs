#[macro_use] extern crate log;
#[macro_use] extern crate lazy_static;

use roxmltree::NodeType;

mod prelude;

mod util;

mod error;

mod parser;

mod names;
mod paint;

mod path;
pub use path::TagPath;

mod circle;
pub use circle::TagCircle;

mod rect;
pub use rect::TagRect;

mod line;
pub use line::TagLine;

mod g;
pub use g::TagG;

mod svg;

mod surface;

use prelude::*;

pub use error::Error;
pub use paint::Color;
pub use path::{parse_path, PathCommand, Point};
pub use surface::Surface;
pub use svg::Svg;

/// A parsed shape. The element set is closed, so dispatch is a plain match.
#[derive(Debug)]
pub enum Item {
    Circle(TagCircle),
    Rect(TagRect),
    Line(TagLine),
    Path(TagPath),
    G(TagG),
}

impl Item {
    pub fn draw(&self, surface: &mut Surface) {
        match *self {
            Item::Circle(ref tag) => tag.draw(surface),
            Item::Rect(ref tag) => tag.draw(surface),
            Item::Line(ref tag) => tag.draw(surface),
            Item::Path(ref tag) => tag.draw(surface),
            Item::G(ref tag) => tag.draw(surface),
        }
    }

    /// The color this shape paints with, as resolved at parse time.
    pub fn color(&self) -> Color {
        match *self {
            Item::Circle(ref tag) => tag.fill,
            Item::Rect(ref tag) => tag.fill,
            Item::Line(ref tag) => tag.stroke,
            Item::Path(ref tag) => tag.fill,
            Item::G(ref tag) => tag.fill,
        }
    }
}

fn parse_node(node: &Node, inherited: Color) -> Result<Option<Item>, Error> {
    let fill = fill_color(node, inherited);
    Ok(match node.tag_name().name() {
        "circle" => Some(Item::Circle(TagCircle::parse(node, fill))),
        "rect" => Some(Item::Rect(TagRect::parse(node, fill))),
        "line" => Some(Item::Line(TagLine::parse(node))),
        "path" => Some(Item::Path(TagPath::parse(node, fill)?)),
        "g" => Some(Item::G(TagG::parse(node, fill)?)),
        tag => {
            debug!("skipping unimplemented element: {}", tag);
            None
        }
    })
}

fn parse_node_list<'a, 'i: 'a>(
    nodes: impl Iterator<Item = Node<'a, 'i>>,
    inherited: Color,
) -> Result<Vec<Item>, Error> {
    let mut items = Vec::new();
    for node in nodes {
        match node.node_type() {
            NodeType::Element => {
                if let Some(item) = parse_node(&node, inherited)? {
                    items.push(item);
                }
            }
            _ => {}
        }
    }
    Ok(items)
}

/// The element's own `fill` if given, otherwise the color inherited from the
/// nearest enclosing group. An empty or absent attribute is "unset", which is
/// distinct from an explicit `fill="black"`.
fn fill_color(node: &Node, inherited: Color) -> Color {
    node.attribute("fill")
        .and_then(Color::resolve)
        .unwrap_or(inherited)
}

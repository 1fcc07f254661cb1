use crate::parse_node_list;
use crate::prelude::*;

/// A group owns its children outright; the tree has no back references, so a
/// single top-down pass renders it.
#[derive(Debug)]
pub struct TagG {
    pub items: Vec<Item>,
    pub fill: Color,
}

impl TagG {
    pub fn parse(node: &Node, fill: Color) -> Result<TagG, Error> {
        // children that give no fill of their own inherit this group's
        let items = parse_node_list(node.children(), fill)?;
        Ok(TagG { items, fill })
    }

    /// Children draw with their own colors: inheritance was already resolved
    /// at parse time.
    pub fn draw(&self, surface: &mut Surface) {
        for item in &self.items {
            item.draw(surface);
        }
    }
}

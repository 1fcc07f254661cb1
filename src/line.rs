use crate::prelude::*;

#[derive(Debug)]
pub struct TagLine {
    pub p1: Point,
    pub p2: Point,
    pub stroke: Color,
}

impl TagLine {
    pub fn parse(node: &Node) -> TagLine {
        let stroke = node
            .attribute("stroke")
            .and_then(Color::resolve)
            .unwrap_or_else(Color::black);
        TagLine {
            p1: Point::new(int_attr(node, "x1"), int_attr(node, "y1")),
            p2: Point::new(int_attr(node, "x2"), int_attr(node, "y2")),
            stroke,
        }
    }

    pub fn draw(&self, surface: &mut Surface) {
        surface.line(self.p1, self.p2, self.stroke);
    }
}

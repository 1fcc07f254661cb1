use crate::prelude::*;

#[derive(Debug)]
pub struct TagRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub fill: Color,
}

impl TagRect {
    pub fn parse(node: &Node, fill: Color) -> TagRect {
        TagRect {
            x: int_attr(node, "x"),
            y: int_attr(node, "y"),
            width: int_attr(node, "width"),
            height: int_attr(node, "height"),
            fill,
        }
    }

    /// Uniform fill of [x, x+width) × [y, y+height). Extents are computed
    /// in i64 and clamped to the surface so oversized attribute values
    /// neither overflow nor spin over clipped pixels.
    pub fn draw(&self, surface: &mut Surface) {
        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = (self.x as i64 + self.width as i64).min(surface.width() as i64);
        let y1 = (self.y as i64 + self.height as i64).min(surface.height() as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                surface.set(x as i32, y as i32, self.fill);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_half_open() {
        let mut surface = Surface::new(10, 10, Color::white());
        let rect = TagRect { x: 2, y: 3, width: 4, height: 2, fill: Color::black() };
        rect.draw(&mut surface);

        assert_eq!(surface.get(2, 3), Some(Color::black()));
        assert_eq!(surface.get(5, 4), Some(Color::black()));
        // exclusive edges
        assert_eq!(surface.get(6, 3), Some(Color::white()));
        assert_eq!(surface.get(2, 5), Some(Color::white()));
    }

    #[test]
    fn oversized_rect_is_clipped_without_overflow() {
        let mut surface = Surface::new(8, 8, Color::white());
        let rect = TagRect {
            x: -1_000_000,
            y: -1_000_000,
            width: i32::max_value(),
            height: i32::max_value(),
            fill: Color::black(),
        };
        rect.draw(&mut surface);
        assert!(surface.pixels().iter().all(|&px| px == Color::black()));
    }

    #[test]
    fn zero_size_draws_nothing() {
        let mut surface = Surface::new(4, 4, Color::white());
        let rect = TagRect { x: 1, y: 1, width: 0, height: 0, fill: Color::black() };
        rect.draw(&mut surface);
        assert_eq!(surface.get(1, 1), Some(Color::white()));
    }
}

use crate::prelude::*;

#[derive(Debug)]
pub struct TagCircle {
    pub cx: i32,
    pub cy: i32,
    pub r: i32,
    pub fill: Color,
}

impl TagCircle {
    pub fn parse(node: &Node, fill: Color) -> TagCircle {
        TagCircle {
            cx: int_attr(node, "cx"),
            cy: int_attr(node, "cy"),
            r: int_attr(node, "r"),
            fill,
        }
    }

    /// Membership test over the bounding box: every offset with
    /// dx² + dy² ≤ r² is inside. Not anti-aliased. The squares are computed
    /// in i64 and the iteration is clamped to the surface, so oversized
    /// attribute values neither overflow nor spin over clipped pixels.
    pub fn draw(&self, surface: &mut Surface) {
        let (cx, cy, r) = (self.cx as i64, self.cy as i64, self.r as i64);
        let y0 = (-r).max(-cy);
        let y1 = r.min(surface.height() as i64 - 1 - cy);
        let x0 = (-r).max(-cx);
        let x1 = r.min(surface.width() as i64 - 1 - cx);
        for dy in y0..=y1 {
            for dx in x0..=x1 {
                if dx * dx + dy * dy <= r * r {
                    surface.set((cx + dx) as i32, (cy + dy) as i32, self.fill);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_center_and_axis_extremes() {
        let mut surface = Surface::new(100, 100, Color::white());
        let circle = TagCircle { cx: 50, cy: 50, r: 40, fill: Color::black() };
        circle.draw(&mut surface);

        assert_eq!(surface.get(50, 50), Some(Color::black()));
        for &(x, y) in &[(10, 50), (90, 50), (50, 10), (50, 90)] {
            assert_eq!(surface.get(x, y), Some(Color::black()));
        }
    }

    #[test]
    fn never_paints_outside_the_radius() {
        let mut surface = Surface::new(100, 100, Color::white());
        let circle = TagCircle { cx: 50, cy: 50, r: 40, fill: Color::black() };
        circle.draw(&mut surface);

        for y in 0..100i32 {
            for x in 0..100i32 {
                let (dx, dy) = (x - 50, y - 50);
                if dx * dx + dy * dy > 40 * 40 {
                    assert_eq!(surface.get(x, y), Some(Color::white()), "({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn huge_radius_covers_the_surface_without_overflow() {
        let mut surface = Surface::new(10, 10, Color::white());
        let circle = TagCircle { cx: 5, cy: 5, r: 100_000, fill: Color::black() };
        circle.draw(&mut surface);
        assert!(surface.pixels().iter().all(|&px| px == Color::black()));
    }

    #[test]
    fn clipped_at_the_surface_edge() {
        let mut surface = Surface::new(10, 10, Color::white());
        let circle = TagCircle { cx: 0, cy: 0, r: 8, fill: Color::black() };
        circle.draw(&mut surface);
        assert_eq!(surface.get(0, 0), Some(Color::black()));
    }
}

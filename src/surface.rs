use std::path::Path;

use image::ImageError;

use crate::paint::Color;
use crate::path::Point;

/// The framebuffer: a width × height grid of colors, row-major, origin at
/// the top left. Writes outside the grid are clipped, never an error.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    pub fn new(width: u32, height: u32, background: Color) -> Surface {
        Surface {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Unconditional overwrite: last drawn wins.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Bresenham's line algorithm: integer error accumulation, ±1 steps,
    /// every traversed pixel written, both endpoints included.
    pub fn line(&mut self, p1: Point, p2: Point, color: Color) {
        let Point { mut x, mut y } = p1;
        let dx = (p2.x - x).abs();
        let dy = (p2.y - y).abs();
        let sx = if x < p2.x { 1 } else { -1 };
        let sy = if y < p2.y { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.set(x, y, color);
            if x == p2.x && y == p2.y {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            data.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        data
    }

    /// Encode as PNG and write to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageError> {
        image::save_buffer(
            path,
            &self.to_rgba_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_clipped() {
        let mut surface = Surface::new(4, 4, Color::white());
        surface.set(-1, 0, Color::black());
        surface.set(0, -1, Color::black());
        surface.set(4, 0, Color::black());
        surface.set(0, 4, Color::black());
        assert!(surface.pixels().iter().all(|&px| px == Color::white()));
        assert_eq!(surface.get(4, 0), None);
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut surface = Surface::new(10, 10, Color::white());
        surface.line(Point::new(1, 1), Point::new(8, 5), Color::black());
        assert_eq!(surface.get(1, 1), Some(Color::black()));
        assert_eq!(surface.get(8, 5), Some(Color::black()));
    }

    #[test]
    fn degenerate_line_is_a_dot() {
        let mut surface = Surface::new(4, 4, Color::white());
        surface.line(Point::new(2, 2), Point::new(2, 2), Color::black());
        assert_eq!(surface.get(2, 2), Some(Color::black()));
        let set = surface
            .pixels()
            .iter()
            .filter(|&&px| px == Color::black())
            .count();
        assert_eq!(set, 1);
    }

    #[test]
    fn steep_line_has_no_gaps() {
        let mut surface = Surface::new(10, 10, Color::white());
        surface.line(Point::new(2, 0), Point::new(3, 9), Color::black());
        // every row between the endpoints gets a pixel
        for y in 0..10i32 {
            let hit = (0..10i32).any(|x| surface.get(x, y) == Some(Color::black()));
            assert!(hit, "row {}", y);
        }
    }

    #[test]
    fn line_reaching_outside_terminates() {
        let mut surface = Surface::new(4, 4, Color::white());
        surface.line(Point::new(-3, -3), Point::new(6, 6), Color::black());
        assert_eq!(surface.get(0, 0), Some(Color::black()));
        assert_eq!(surface.get(3, 3), Some(Color::black()));
    }
}

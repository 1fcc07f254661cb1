use crate::names;
use crate::parser;

/// An opaque RGBA color. Resolution never fails: anything unrecognized
/// falls back to black.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }
    pub const fn black() -> Color {
        Color::new(0, 0, 0)
    }
    pub const fn white() -> Color {
        Color::new(255, 255, 255)
    }

    /// Resolve a color token. Recognized forms, in order: a named color
    /// (case-sensitive), `#rgb`, `#rrggbb`, `rgb(r, g, b)`. Any other
    /// non-empty token resolves to black. `None` is returned only for the
    /// empty token, so callers can tell "no color given" from an explicit
    /// black.
    pub fn resolve(s: &str) -> Option<Color> {
        if s.is_empty() {
            return None;
        }
        Some(names::lookup(s).or_else(|| parser::parse_color(s)).unwrap_or_else(|| {
            debug!("unrecognized color {:?}, using black", s);
            Color::black()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_long_is_exact() {
        assert_eq!(Color::resolve("#102030"), Some(Color::new(0x10, 0x20, 0x30)));
        assert_eq!(Color::resolve("#ff00aa"), Some(Color::new(255, 0, 0xaa)));
    }

    #[test]
    fn hex_short_duplicates_nibbles() {
        assert_eq!(Color::resolve("#0f0"), Some(Color::new(0, 255, 0)));
        assert_eq!(Color::resolve("#f0a"), Some(Color::new(0xff, 0x00, 0xaa)));
    }

    #[test]
    fn functional_form_ignores_whitespace() {
        assert_eq!(Color::resolve("rgb(1,2,3)"), Some(Color::new(1, 2, 3)));
        assert_eq!(Color::resolve("rgb( 10, 20 , 30 )"), Some(Color::new(10, 20, 30)));
    }

    #[test]
    fn named_colors_are_case_sensitive() {
        assert_eq!(Color::resolve("red"), Some(Color::new(255, 0, 0)));
        assert_eq!(Color::resolve("Red"), Some(Color::black()));
    }

    #[test]
    fn unrecognized_is_black_never_an_error() {
        assert_eq!(Color::resolve("no-such-color"), Some(Color::black()));
        assert_eq!(Color::resolve("#12"), Some(Color::black()));
        assert_eq!(Color::resolve("rgb(300,0,0)"), Some(Color::black()));
        assert_eq!(Color::resolve("rgb(1,2)"), Some(Color::black()));
    }

    #[test]
    fn empty_token_is_unset() {
        assert_eq!(Color::resolve(""), None);
    }
}

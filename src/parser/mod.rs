pub mod color;

use nom::combinator::all_consuming;

use crate::paint::Color;

pub type R<'i, T> = nom::IResult<&'i str, T, ()>;

/// Parse a hex or functional color token. The whole token must match;
/// trailing garbage makes the token unrecognized.
pub fn parse_color(s: &str) -> Option<Color> {
    match all_consuming(color::color)(s) {
        Ok((_, color)) => Some(color),
        Err(e) => {
            debug!("parse_color({:?}): {:?}", s, e);
            None
        }
    }
}

#[test]
fn test_parse_color() {
    assert_eq!(parse_color("#102030"), Some(Color::new(0x10, 0x20, 0x30)));
    assert_eq!(parse_color("#102030garbage"), None);
    assert_eq!(parse_color("rgb(0,0,0) "), None);
}

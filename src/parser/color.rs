use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1, multispace0},
    combinator::{map, map_res},
    sequence::{delimited, preceded, tuple},
};

use super::R;
use crate::paint::Color;

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex2(i: &str) -> R<u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |s| {
        u8::from_str_radix(s, 16)
    })(i)
}

// one nibble, duplicated: #f0a means #ff00aa
fn hex1(i: &str) -> R<u8> {
    map(
        map_res(take_while_m_n(1, 1, is_hex_digit), |s| {
            u8::from_str_radix(s, 16)
        }),
        |n| n * 0x11,
    )(i)
}

fn hex_long(i: &str) -> R<Color> {
    map(preceded(char('#'), tuple((hex2, hex2, hex2))), |(r, g, b)| {
        Color::new(r, g, b)
    })(i)
}

fn hex_short(i: &str) -> R<Color> {
    map(preceded(char('#'), tuple((hex1, hex1, hex1))), |(r, g, b)| {
        Color::new(r, g, b)
    })(i)
}

fn channel(i: &str) -> R<u8> {
    delimited(multispace0, map_res(digit1, |s: &str| s.parse()), multispace0)(i)
}

fn rgb_func(i: &str) -> R<Color> {
    map(
        delimited(
            tag("rgb("),
            tuple((channel, preceded(char(','), channel), preceded(char(','), channel))),
            char(')'),
        ),
        |(r, g, b)| Color::new(r, g, b),
    )(i)
}

pub fn color(i: &str) -> R<Color> {
    alt((hex_long, hex_short, rgb_func))(i)
}

#[test]
fn test_hex() {
    assert_eq!(hex_long("#ff00aa"), Ok(("", Color::new(255, 0, 0xaa))));
    assert_eq!(hex_short("#f0a"), Ok(("", Color::new(0xff, 0x00, 0xaa))));
    assert!(hex_long("#f0a").is_err());
}

#[test]
fn test_rgb_func() {
    assert_eq!(rgb_func("rgb(1,2,3)"), Ok(("", Color::new(1, 2, 3))));
    assert_eq!(rgb_func("rgb( 255 , 128 , 0 )"), Ok(("", Color::new(255, 128, 0))));
    assert!(rgb_func("rgb(256,0,0)").is_err());
}

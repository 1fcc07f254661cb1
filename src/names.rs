use std::collections::HashMap;

use crate::paint::Color;

// The SVG "basic" color keywords plus a few common extras. Matching is
// case-sensitive.
lazy_static! {
    static ref NAMES: HashMap<&'static str, Color> = {
        let mut m = HashMap::new();
        m.insert("black", Color::new(0, 0, 0));
        m.insert("silver", Color::new(192, 192, 192));
        m.insert("gray", Color::new(128, 128, 128));
        m.insert("grey", Color::new(128, 128, 128));
        m.insert("white", Color::new(255, 255, 255));
        m.insert("maroon", Color::new(128, 0, 0));
        m.insert("red", Color::new(255, 0, 0));
        m.insert("purple", Color::new(128, 0, 128));
        m.insert("fuchsia", Color::new(255, 0, 255));
        m.insert("green", Color::new(0, 128, 0));
        m.insert("lime", Color::new(0, 255, 0));
        m.insert("olive", Color::new(128, 128, 0));
        m.insert("yellow", Color::new(255, 255, 0));
        m.insert("navy", Color::new(0, 0, 128));
        m.insert("blue", Color::new(0, 0, 255));
        m.insert("teal", Color::new(0, 128, 128));
        m.insert("aqua", Color::new(0, 255, 255));
        m.insert("cyan", Color::new(0, 255, 255));
        m.insert("magenta", Color::new(255, 0, 255));
        m.insert("orange", Color::new(255, 165, 0));
        m.insert("pink", Color::new(255, 192, 203));
        m.insert("brown", Color::new(165, 42, 42));
        m.insert("gold", Color::new(255, 215, 0));
        m.insert("indigo", Color::new(75, 0, 130));
        m.insert("violet", Color::new(238, 130, 238));
        m
    };
}

pub fn lookup(name: &str) -> Option<Color> {
    NAMES.get(name).copied()
}

#[test]
fn test_lookup() {
    assert_eq!(lookup("lime"), Some(Color::new(0, 255, 0)));
    assert_eq!(lookup("LIME"), None);
    assert_eq!(lookup("not-a-color"), None);
}

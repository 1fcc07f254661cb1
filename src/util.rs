use roxmltree::Node;

/// Integer attribute with the lenient policy: absent or unparseable means 0.
pub fn int_attr(node: &Node, attr: &str) -> i32 {
    node.attribute(attr)
        .and_then(|val| val.trim().parse().ok())
        .unwrap_or(0)
}

/// Leading integer prefix of a dimension value, tolerating unit suffixes
/// like `400px`. `None` when there is no digit to parse.
pub fn dimension(s: &str) -> Option<u32> {
    let s = s.trim();
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| s.len());
    s[..end].parse().ok()
}

#[test]
fn test_dimension() {
    assert_eq!(dimension("400"), Some(400));
    assert_eq!(dimension("400px"), Some(400));
    assert_eq!(dimension(" 12pt "), Some(12));
    assert_eq!(dimension("auto"), None);
    assert_eq!(dimension(""), None);
}

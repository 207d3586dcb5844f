use super::*;

#[test]
fn test_entries_in_source_order() {
    let text = "{\"label\": \"a\", @x}, {\"label\": \"b\", @y},";
    assert_eq!(
        entries(text),
        vec!["{\"label\": \"a\", @x},", "{\"label\": \"b\", @y},"]
    );
}

#[test]
fn test_trailing_material_belongs_to_the_entry() {
    assert_eq!(entries("{a} x,"), vec!["{a} x,"]);
}

#[test]
fn test_group_without_comma_is_dropped() {
    assert!(entries("{a: 1}").is_empty());
    assert_eq!(entries("{a: 1}, {b: 2}"), vec!["{a: 1},"]);
}

#[test]
fn test_unclosed_group_is_dropped() {
    assert!(entries("{a: 1").is_empty());
}

#[test]
fn test_nested_group_runs_to_matching_brace() {
    let text = "{\"label\": \"x\", {inner: 1}},";
    assert_eq!(entries(text), vec![text]);
}

#[test]
fn test_empty_input() {
    assert!(entries("").is_empty());
}

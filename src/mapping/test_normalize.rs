use super::*;

#[test]
fn test_block_comments_are_erased() {
    let out = normalize("/* header */ {\"label\": \"ac\", @ac},");
    assert_eq!(out, " {\"label\": \"ac\", actor.ac},");
}

#[test]
fn test_line_breaks_become_spaces() {
    assert_eq!(normalize("a\nb\r\nc"), "a b  c");
}

#[test]
fn test_brace_comma_is_tightened() {
    assert_eq!(normalize("{x}   ,"), "{x},");
    assert_eq!(normalize("{x}\n,"), "{x},");
}

#[test]
fn test_sentinel_expands_everywhere() {
    // Blind substitution, even mid-token.
    assert_eq!(normalize("@hp + x@y"), "actor.hp + xactor.y");
}

#[test]
fn test_comment_with_inner_star_survives() {
    // Known limitation of the comment heuristic.
    assert_eq!(normalize("/* a * b */"), "/* a * b */");
}

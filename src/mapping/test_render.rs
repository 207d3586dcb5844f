use super::*;

#[test]
fn test_bare_value_expression() {
    let field = parse_entry("{\"label\": \"hp_current\", actor.attributes.hp.value},")
        .expect("well-formed entry");
    assert_eq!(field.name, "hp_current");
    assert_eq!(field.value, "actor.attributes.hp.value");
    assert_eq!(
        field.statement(),
        "mapper.field('all', 'hp_current', actor.attributes.hp.value);"
    );
}

#[test]
fn test_value_after_its_own_colon() {
    let field =
        parse_entry("{ \"label\": \"name\", \"value\": actor.name },").expect("well-formed entry");
    assert_eq!(field.name, "name");
    assert_eq!(field.value, "actor.name");
}

#[test]
fn test_whitespace_is_collapsed() {
    let field = parse_entry("{  \"label\" :   \"ac\" ,   actor.ac  },").expect("well-formed entry");
    assert_eq!(field.name, "ac");
    assert_eq!(field.value, "actor.ac");
}

#[test]
fn test_bracketed_key_is_unwrapped() {
    let field = parse_entry("{\"label\": [\"ac\"], actor.ac},").expect("well-formed entry");
    assert_eq!(field.name, "ac");
}

#[test]
fn test_entry_without_comma_is_rejected() {
    assert!(parse_entry("{\"label\": \"ac\"}").is_none());
}

#[test]
fn test_key_without_colon_is_rejected() {
    assert!(parse_entry("{label, actor.ac},").is_none());
}

#[test]
fn test_empty_key_is_rejected() {
    assert!(parse_entry("{\"label\": \"\", actor.ac},").is_none());
}

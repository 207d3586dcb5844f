use super::*;

#[test]
fn test_empty_mapping_is_header_then_trailer() {
    let mut out = Vec::new();
    write_script(&mut out, &[]).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, format!("{}\n{}\n", HEADER, TRAILER));
}

#[test]
fn test_statements_between_header_and_trailer() {
    let fields = vec![
        FieldMapping {
            name: "name".into(),
            value: "actor.name".into(),
        },
        FieldMapping {
            name: "ac".into(),
            value: "actor.ac.value".into(),
        },
    ];

    let mut out = Vec::new();
    write_script(&mut out, &fields).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[4], "mapper.field('all', 'name', actor.name);");
    assert_eq!(lines[5], "mapper.field('all', 'ac', actor.ac.value);");
    assert_eq!(lines.last(), Some(&TRAILER));
}

use assert_cmd::Command;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const MAPPING: &str = r#"/* character sheet fields */
{
    "label": "hp_current",
    @attributes.hp.value
},
{ "label": "name", "value": @name },
"#;

fn convert(path: &Path) -> std::process::Output {
    let mut cmd = Command::cargo_bin("convert-pdf-export").expect("binary not found");
    cmd.arg(path);
    cmd.assert().success().get_output().clone()
}

fn write_mapping(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write mapping");
    file
}

#[test]
fn cli_generates_one_statement_per_record() {
    let file = write_mapping(MAPPING);
    let output = convert(file.path());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("import { pdfProvider } from"));
    assert!(stdout.contains("mapper.field('all', 'hp_current', actor.attributes.hp.value);"));
    assert!(stdout.contains("mapper.field('all', 'name', actor.name);"));
    assert_eq!(stdout.matches("mapper.field(").count(), 2);
    assert!(stdout.trim_end().ends_with("export { mapper };"));
}

#[test]
fn cli_comments_do_not_affect_records() {
    let without = write_mapping("{ \"label\": \"ac\", @ac.value },\n");
    let with = write_mapping("/* armor */ { \"label\": \"ac\", @ac.value }, /* end */\n");

    let plain = convert(without.path());
    let commented = convert(with.path());
    assert_eq!(plain.stdout, commented.stdout);
}

#[test]
fn cli_output_is_idempotent() {
    let file = write_mapping(MAPPING);
    let first = convert(file.path());
    let second = convert(file.path());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cli_empty_mapping_emits_header_and_trailer_only() {
    let file = write_mapping("/* nothing mapped yet */\n");
    let output = convert(file.path());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let expected = "import { pdfProvider } from 'https://<ENTER FOUNDRY VTT HOSTNAME>/modules/actor-export/scripts/lib/providers/PDFProvider.js';\n\
const mapper = new pdfProvider(actor);\n\
/* This is a very basic mapper for PDF exports */\n\
\n\
export { mapper };\n";
    assert_eq!(stdout, expected);
}

#[test]
fn cli_malformed_entry_is_skipped_with_warning() {
    let file = write_mapping("{ no colon here },\n{ \"label\": \"ac\", @ac.value },\n");
    let output = convert(file.path());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(stdout.matches("mapper.field(").count(), 1);
    assert!(stdout.contains("mapper.field('all', 'ac', actor.ac.value);"));
    assert!(stderr.contains("Skipping entry"));
}

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_missing_argument_prints_usage_error() {
    let mut cmd = Command::cargo_bin("convert-pdf-export").expect("binary not found");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: You need to specify a valid path to a mapping file.",
        ));
}

#[test]
fn cli_missing_file_prints_not_found_error() {
    let mut cmd = Command::cargo_bin("convert-pdf-export").expect("binary not found");
    cmd.arg("/nonexistent/mapping.txt");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: The file you have specified could not be found",
        ));
}

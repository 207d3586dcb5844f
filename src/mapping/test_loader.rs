use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_reads_whole_file() {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{{\"label\": \"name\", @name}},").unwrap();

    let content = load(file.path()).expect("load mapping file");
    assert_eq!(content, "{\"label\": \"name\", @name},");
}

#[test]
fn test_load_missing_file() {
    let err = load(Path::new("/no/such/mapping.txt")).unwrap_err();
    assert!(matches!(err, MappingError::FileNotFound(_)));
}

#[test]
fn test_load_rejects_directory() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let err = load(dir.path()).unwrap_err();
    assert!(matches!(err, MappingError::FileNotFound(_)));
}

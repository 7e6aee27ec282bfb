use std::io::Write;

use super::*;

#[test]
fn text_from_args() {
    assert_eq!(read_text(Some("Hi!"), None).unwrap(), "Hi!");
    assert!(read_text(None, None).is_err());
}

#[test]
fn text_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Hello. ").unwrap();

    assert_eq!(read_text(None, Some(file.path())).unwrap(), "Hello. ");
    assert!(read_text(Some("x"), Some(file.path())).is_err());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("none.txt");

    let err = read_text(None, Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}

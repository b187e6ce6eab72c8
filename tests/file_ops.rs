// tests/file_ops.rs
mod common;

use std::fs;

use deskkit::files::{self, FileError, FileMenu};

#[test]
fn write_then_read_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");

    files::write_text(&path, "hello").unwrap();
    assert_eq!(files::read_text(&path).unwrap(), "hello");
}

#[test]
fn append_adds_a_newline_separator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");

    files::write_text(&path, "hello").unwrap();
    files::append_text(&path, "world").unwrap();
    assert_eq!(files::read_text(&path).unwrap(), "hello\nworld");
}

#[test]
fn write_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");

    files::write_text(&path, "a much longer first version").unwrap();
    files::write_text(&path, "short").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "short");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = files::read_text(&dir.path().join("nope.txt")).unwrap_err();
    assert!(err.is_not_found());
    assert!(files::read_failure_msg("nope.txt", &err).starts_with("Could not find"));
}

#[test]
fn other_failures_carry_the_cause() {
    // Reading a directory fails, but not with NotFound.
    let dir = tempfile::tempdir().unwrap();
    let err = files::read_text(dir.path()).unwrap_err();
    assert!(matches!(err, FileError::Io { .. }));
    assert!(files::read_failure_msg("dir", &err).starts_with("An error occurred while reading"));
}

#[test]
fn menu_write_append_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.txt");
    let p = path.to_str().unwrap();

    let input = format!("1\n{p}\nhello\n3\n{p}\nworld\n2\n{p}\n4\n");
    let (_, out) = common::drive(&mut FileMenu, &input);

    assert!(out.contains(&format!("Saved content to '{p}'.")));
    assert!(out.contains(&format!("Appended content to '{p}'.")));
    assert!(out.contains("=== File contents ===\nhello\nworld\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\nworld");
}

#[test]
fn menu_read_missing_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("missing.txt");
    let p = p.to_str().unwrap();

    let (_, out) = common::drive(&mut FileMenu, &format!("2\n{p}\n4\n"));
    assert!(out.contains(&format!("Could not find the file '{p}'.")));
    assert!(!out.contains("An error occurred"));
}

#[test]
fn write_into_missing_dir_keeps_the_cause() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nodir").join("x.txt");

    let err = files::write_text(&path, "hello").unwrap_err();
    assert!(err.is_not_found());
    let cause = std::error::Error::source(&err).expect("io cause").to_string();
    assert!(err.to_string().ends_with(&cause));

    let p = path.to_str().unwrap();
    let (_, out) = common::drive(&mut FileMenu, &format!("3\n{p}\nmore\n4\n"));
    assert!(out.contains(&format!("An error occurred while appending to the file: '{p}' not found: {cause}")));
}

#![cfg(test)]
use std::fs;

use solid_common::SolidError;
use solid_core::journal::Journal;
use solid_core::persistence::Persistence;

#[test]
fn journal_survives_a_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.txt");

    let mut journal = Journal::new();
    journal.add_entry("I was crying today").unwrap();
    journal.add_entry("I ate a bug").unwrap();

    assert!(Persistence::save_to_file(&path, &journal.to_string(), true).unwrap());
    let restored = Journal::restore(&Persistence::load_from_file(&path).unwrap());

    assert_eq!(restored, journal);
    assert_eq!(restored.to_string(), "1: I was crying today\n2: I ate a bug");
}

#[test]
fn second_save_without_overwrite_keeps_first_journal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.txt");

    let mut first = Journal::new();
    first.add_entry("first").unwrap();
    let mut second = Journal::new();
    second.add_entry("second").unwrap();

    assert!(Persistence::save_to_file(&path, &first.to_string(), false).unwrap());
    assert!(!Persistence::save_to_file(&path, &second.to_string(), false).unwrap());

    assert_eq!(fs::read_to_string(&path).unwrap(), "1: first");
}

#[test]
fn restoring_a_missing_file_gives_an_empty_journal() {
    let dir = tempfile::tempdir().unwrap();
    let saved = Persistence::load_from_file(&dir.path().join("nothing.txt")).unwrap();

    assert!(Journal::restore(&saved).is_empty());
}

#[test]
fn directory_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = Persistence::load_from_file(dir.path()).unwrap_err();
    assert!(matches!(err, SolidError::Io { .. }));
}

use std::fs;

use outline_core::{Settings, SidebarPosition};
use outline_engine::{
    ensure_state_dir, AtomicFileWriter, MemorySettingsStore, RonFileStore, SettingsStore,
    StoreError, SETTINGS_FILENAME,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_file_reads_as_defaults() {
    let temp = TempDir::new().unwrap();
    let store = RonFileStore::new(temp.path().join("state"));

    assert_eq!(store.load_settings().unwrap(), Settings::default());
    assert!(store.load_visibility().unwrap());
}

#[test]
fn settings_and_visibility_share_one_file() {
    let temp = TempDir::new().unwrap();
    let mut store = RonFileStore::new(temp.path().to_path_buf());
    let settings = Settings {
        enabled: true,
        show_preview: false,
        sidebar_position: SidebarPosition::Left,
    };

    store.save_settings(&settings).unwrap();
    store.save_visibility(false).unwrap();

    let reopened = RonFileStore::new(temp.path().to_path_buf());
    assert_eq!(reopened.load_settings().unwrap(), settings);
    assert!(!reopened.load_visibility().unwrap());
    assert!(reopened.path().ends_with(SETTINGS_FILENAME));
}

#[test]
fn partial_file_fills_missing_fields() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(SETTINGS_FILENAME),
        "(settings: (showPreview: false))",
    )
    .unwrap();
    let store = RonFileStore::new(temp.path().to_path_buf());

    let settings = store.load_settings().unwrap();
    assert!(settings.enabled);
    assert!(!settings.show_preview);
    assert!(store.load_visibility().unwrap());
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(SETTINGS_FILENAME), "not ron at all {").unwrap();
    let store = RonFileStore::new(temp.path().to_path_buf());

    assert!(matches!(store.load_settings(), Err(StoreError::Parse(_))));
}

#[test]
fn state_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    assert!(ensure_state_dir(&file_path).is_err());
    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("settings.ron", "()").is_err());

    let mut store = RonFileStore::new(file_path);
    assert!(matches!(store.save_visibility(true), Err(StoreError::Persist(_))));
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("a.ron", "one").unwrap();
    let second = writer.write("a.ron", "two").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(second).unwrap(), "two");
}

#[test]
fn memory_store_round_trips_in_process() {
    let mut store = MemorySettingsStore::default();
    store.save_visibility(false).unwrap();
    assert!(!store.load_visibility().unwrap());
}

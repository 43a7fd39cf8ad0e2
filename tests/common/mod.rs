//! Shared test utilities for store integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

use quick_actions::store::{JsonFileBackend, QuickActionStore};

/// Creates a temporary directory and the path of a store file inside it
pub fn temp_store_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("quick-actions").join("actions.json");
    (temp_dir, path)
}

/// Opens a store backed by the JSON file at `path`
pub fn open_file_store(path: &PathBuf) -> QuickActionStore {
    QuickActionStore::open(JsonFileBackend::new(path))
}

/// Names of the store's actions in display order
pub fn names(store: &QuickActionStore) -> Vec<String> {
    store.sorted_actions().into_iter().map(|a| a.name).collect()
}

use std::sync::Mutex;

use once_cell::sync::Lazy;
use rent_core::storage::JsonStorage;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated JSON store backed by a unique directory for each test.
pub fn setup_storage() -> JsonStorage {
    let temp = TempDir::new().expect("create temp dir");
    let storage = JsonStorage::new(temp.path().join("ledger.json"));
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    storage
}

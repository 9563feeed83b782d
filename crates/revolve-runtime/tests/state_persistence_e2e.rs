//! Key-value persistence end-to-end tests.
//!
//! ```sh
//! cargo test -p revolve-runtime --test state_persistence_e2e
//! cargo test -p revolve-runtime --features state-persistence --test state_persistence_e2e
//! ```
//!
//! # Invariants
//!
//! 1. **Round-trip integrity**: a value written is the value read back.
//! 2. **Reload survival**: a second store over the same backing data sees
//!    earlier writes.
//! 3. **Graceful degradation**: corrupt files read as empty.

use std::sync::Arc;
use std::thread;

use revolve_runtime::state_persistence::{KeyValueStore, MemoryStore};

#[test]
fn memory_store_shared_across_threads() {
    let store = Arc::new(MemoryStore::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store.set(&format!("key{i}"), &i.to_string()).unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(store.len(), 4);
    assert_eq!(store.get("key2").unwrap().as_deref(), Some("2"));
}

#[cfg(feature = "state-persistence")]
mod file {
    use revolve_runtime::state_persistence::{FileStore, KeyValueStore};

    #[test]
    fn round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let first = FileStore::new(&path);
        assert_eq!(first.get("theme").unwrap(), None);
        first.set("theme", "dark").unwrap();

        let reloaded = FileStore::new(&path);
        assert_eq!(reloaded.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileStore::new(&path);
        store.set("theme", "light").unwrap();
        store.set("other", "x").unwrap();
        store.remove("theme").unwrap();
        let reloaded = FileStore::new(&path);
        assert_eq!(reloaded.get("theme").unwrap(), None);
        assert_eq!(reloaded.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "system").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("system"));
    }

    #[test]
    fn version_mismatch_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(
            &path,
            br#"{"format_version": 99, "entries": {"theme": "dark"}}"#,
        )
        .unwrap();
        assert_eq!(FileStore::new(&path).get("theme").unwrap(), None);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        FileStore::new(&path).set("theme", "dark").unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("prefs.json.tmp").exists());
    }

    #[test]
    fn available_in_writable_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileStore::new(dir.path().join("a").join("prefs.json")).is_available());
    }
}

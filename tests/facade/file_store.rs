//! File Store Tests
//!
//! Entries written through a file-backed facade survive reopening.

use crate::*;
use tempfile::TempDir;

#[test]
fn test_entries_survive_reopen() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let value = object(vec![("theme", Value::from("dark")), ("size", Value::Int(12))]);

    {
        let storage = Storage::open(&path).unwrap();
        assert_eq!(storage.backend(), BackendKind::Persistent);
        storage.set("settings", value.clone()).unwrap().expect("stored");
        storage.set("visits", 3).unwrap();
    }

    let reopened = Storage::open(&path).unwrap();
    assert_eq!(reopened.get("settings", None).unwrap(), Some(value));
    assert_eq!(reopened.get("visits", None).unwrap(), Some(Value::Int(3)));
}

#[test]
fn test_remove_and_clear_persist() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    {
        let storage = Storage::open(&path).unwrap();
        storage
            .set("first", 1)
            .unwrap()
            .expect("stored")
            .set("second", 2)
            .unwrap()
            .expect("stored")
            .remove("first")
            .unwrap();
    }
    {
        let storage = Storage::open(&path).unwrap();
        assert_eq!(storage.get("first", None).unwrap(), None);
        assert_eq!(storage.get("second", None).unwrap(), Some(Value::Int(2)));
        storage.clear().unwrap();
    }

    let storage = Storage::open(&path).unwrap();
    assert_eq!(storage.get("second", None).unwrap(), None);
}

#[test]
fn test_file_holds_wire_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let clock = Arc::new(ManualClock::at_secs(T0));
    let store = FileStore::open(&path).unwrap();
    let storage = Storage::new(
        Environment::new()
            .with_store(Arc::new(store))
            .with_clock(clock),
    );

    storage.set("abcd", true).unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!({"abcd": r#"{"t":1700000000.0,"d":true}"#})
    );
}

#[test]
fn test_expiration_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let clock = Arc::new(ManualClock::at_secs(T0));

    let open = |clock: Arc<ManualClock>| {
        Storage::new(
            Environment::new()
                .with_store(Arc::new(FileStore::open(&path).unwrap()))
                .with_clock(clock),
        )
    };

    open(clock.clone()).set("session", "token").unwrap();
    clock.advance_secs(20.0 * 60.0);

    let reopened = open(clock);
    assert_eq!(reopened.get("session", 15.0).unwrap(), None);
    assert_eq!(
        reopened.get("session", 30.0).unwrap(),
        Some(Value::from("token"))
    );
}

#[test]
fn test_unreadable_store_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json at all").unwrap();

    let err = Storage::open(&path).unwrap_err();

    assert!(matches!(err, Error::Store(StoreError::Serialization { .. })));
}

#[test]
fn test_failed_set_is_not_readable() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub).unwrap();
    let storage = Storage::open(sub.join("storage.json")).unwrap();
    assert_eq!(storage.backend(), BackendKind::Persistent);
    storage.set("motd", "old").unwrap();

    std::fs::remove_dir_all(&sub).unwrap();

    let err = storage.set("motd", "new").unwrap_err();
    assert!(matches!(err, Error::Store(StoreError::Io { .. })));
    assert_eq!(storage.get("motd", None).unwrap(), Some(Value::from("old")));
}

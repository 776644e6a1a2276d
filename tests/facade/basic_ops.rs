//! Basic Facade Operations Tests
//!
//! Tests for set, get, remove and clear on the persistent backend.

use crate::*;

// =============================================================================
// SET / GET TESTS
// =============================================================================

#[test]
fn test_set_and_get_roundtrip() {
    let fx = persistent_fixture();

    fx.storage.set("key1", 42).unwrap();
    let value = fx.storage.get("key1", None).unwrap();

    assert_eq!(value, Some(Value::Int(42)));
}

#[test]
fn test_get_nonexistent_returns_none() {
    let fx = persistent_fixture();

    assert_eq!(fx.storage.get("nonexistent", None).unwrap(), None);
}

#[test]
fn test_set_overwrites_existing() {
    let fx = persistent_fixture();

    fx.storage.set("counter", 1).unwrap();
    fx.storage.set("counter", "two").unwrap();

    assert_eq!(
        fx.storage.get("counter", None).unwrap(),
        Some(Value::from("two"))
    );
    assert_eq!(fx.store.len().unwrap(), 1);
}

#[test]
fn test_set_replaces_structured_without_merge() {
    let fx = persistent_fixture();

    fx.storage.set("profile", object(vec![("a", 1), ("b", 2)])).unwrap();
    fx.storage.set("profile", object(vec![("c", 3)])).unwrap();

    assert_eq!(
        fx.storage.get("profile", None).unwrap(),
        Some(object(vec![("c", 3)]))
    );
}

#[test]
fn test_set_all_value_types() {
    let fx = persistent_fixture();

    for (name, value) in standard_test_values() {
        let key = format!("type:{}", name);
        assert!(fx.storage.set(&key, value.clone()).unwrap().is_some());

        let retrieved = fx.storage.get(&key, None).unwrap();
        assert_eq!(retrieved, Some(value), "Failed for type: {}", name);
    }
}

#[test]
fn test_string_that_looks_like_json_stays_a_string() {
    let fx = persistent_fixture();

    fx.storage.set("raw_text", "[1,2,3]").unwrap();

    assert_eq!(
        fx.storage.get("raw_text", None).unwrap(),
        Some(Value::from("[1,2,3]"))
    );
}

#[test]
fn test_callable_rejected() {
    let fx = persistent_fixture();

    let err = fx
        .storage
        .set("abcd", Value::Callable("function(){}".into()))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedValueType {
            type_name: "Callable"
        }
    ));
    assert!(fx.store.is_empty().unwrap(), "nothing written");
}

// =============================================================================
// REMOVE TESTS
// =============================================================================

#[test]
fn test_remove_deletes_key() {
    let fx = persistent_fixture();

    fx.storage.set("abcd", 1).unwrap();
    fx.storage.remove("abcd").unwrap();

    assert_eq!(fx.storage.get("abcd", None).unwrap(), None);
    assert_eq!(fx.store.get_item("abcd").unwrap(), None);
}

#[test]
fn test_remove_nonexistent_is_noop() {
    let fx = persistent_fixture();

    fx.storage.set("keep", 1).unwrap();
    fx.storage.remove("missing").unwrap();

    assert_eq!(fx.storage.get("keep", None).unwrap(), Some(Value::Int(1)));
}

#[test]
fn test_remove_validates_key() {
    let fx = persistent_fixture();

    assert!(matches!(
        fx.storage.remove("abc"),
        Err(Error::KeyTooShort { .. })
    ));
}

// =============================================================================
// CLEAR TESTS
// =============================================================================

#[test]
fn test_clear_removes_all_keys() {
    let fx = persistent_fixture();

    fx.storage.set("first", 1).unwrap();
    fx.storage.set("second", object(vec![("x", true)])).unwrap();
    fx.storage.clear().unwrap();

    assert_eq!(fx.storage.get("first", None).unwrap(), None);
    assert_eq!(fx.storage.get("second", None).unwrap(), None);
}

#[test]
fn test_clear_twice_is_noop() {
    let fx = persistent_fixture();

    fx.storage.set("first", 1).unwrap();
    fx.storage.clear().unwrap();
    fx.storage.clear().unwrap();

    assert!(fx.store.is_empty().unwrap());
}

#[test]
fn test_clear_empties_whole_shared_store() {
    let fx = persistent_fixture();

    // A key written by someone else entirely
    fx.store.set_item("foreign", "not ours").unwrap();
    fx.storage.set("mine", 1).unwrap();

    fx.storage.clear().unwrap();

    assert!(fx.store.is_empty().unwrap());
}

// =============================================================================
// SHARED NAMESPACE TESTS
// =============================================================================

#[test]
fn test_facades_sharing_a_store_share_keys() {
    let fx = persistent_fixture();
    let other = Storage::with_store(Arc::new(fx.store.clone()));

    fx.storage.set("shared", "from first").unwrap();
    other.set("shared", "from second").unwrap();

    assert_eq!(
        fx.storage.get("shared", None).unwrap(),
        Some(Value::from("from second"))
    );
}

#[test]
fn test_keys_are_not_prefixed() {
    let fx = persistent_fixture();

    fx.storage.set("exact_key", 1).unwrap();

    assert_eq!(fx.store.keys(), vec!["exact_key".to_string()]);
}

//! Expiration Tests
//!
//! `get(key, minutes)` treats entries older than `minutes` as absent.

use crate::*;

#[test]
fn test_fresh_entry_within_age_limit() {
    let fx = persistent_fixture();

    fx.storage.set("abcd", "v").unwrap();
    fx.clock.advance_secs(5.0 * 60.0 - 1.0);

    assert_eq!(fx.storage.get("abcd", 5.0).unwrap(), Some(Value::from("v")));
}

#[test]
fn test_stale_entry_reads_as_absent() {
    let fx = persistent_fixture();

    fx.storage.set("abcd", "v").unwrap();
    fx.clock.advance_secs(5.0 * 60.0 + 1.0);

    assert_eq!(fx.storage.get("abcd", 5.0).unwrap(), None);
}

#[test]
fn test_stale_entry_still_readable_without_age_limit() {
    let fx = persistent_fixture();

    fx.storage.set("abcd", "v").unwrap();
    fx.clock.advance_secs(365.0 * 24.0 * 3600.0);

    assert_eq!(fx.storage.get("abcd", None).unwrap(), Some(Value::from("v")));
}

#[test]
fn test_expired_entry_is_not_deleted() {
    let fx = persistent_fixture();

    fx.storage.set("abcd", "v").unwrap();
    fx.clock.advance_secs(120.0);

    assert_eq!(fx.storage.get("abcd", 1.0).unwrap(), None);
    assert!(fx.store.get_item("abcd").unwrap().is_some());
}

#[test]
fn test_rewrite_refreshes_timestamp() {
    let fx = persistent_fixture();

    fx.storage.set("abcd", 1).unwrap();
    fx.clock.advance_secs(90.0);
    fx.storage.set("abcd", 2).unwrap();
    fx.clock.advance_secs(30.0);

    assert_eq!(fx.storage.get("abcd", 1.0).unwrap(), Some(Value::Int(2)));
}

#[test]
fn test_fractional_minutes() {
    let fx = persistent_fixture();

    fx.storage.set("abcd", 1).unwrap();
    fx.clock.advance_secs(31.0);

    assert_eq!(fx.storage.get("abcd", 0.5).unwrap(), None);
    assert_eq!(fx.storage.get("abcd", 0.6).unwrap(), Some(Value::Int(1)));
}

#[test]
fn test_structured_entry_expires() {
    let fx = persistent_fixture();
    let value = object(vec![("a", 1)]);

    fx.storage.set("abcd", value.clone()).unwrap();
    fx.clock.advance_secs(59.0);
    assert_eq!(fx.storage.get("abcd", 1.0).unwrap(), Some(value));

    fx.clock.advance_secs(2.0);
    assert_eq!(fx.storage.get("abcd", 1.0).unwrap(), None);
}

#[test]
fn test_fallback_backend_expires_too() {
    let (storage, clock) = fallback_fixture();

    storage.set("abcd", "v").unwrap();
    clock.advance_secs(10.0 * 60.0 + 1.0);

    assert_eq!(storage.get("abcd", 10.0).unwrap(), None);
    assert_eq!(storage.get("abcd", 11.0).unwrap(), Some(Value::from("v")));
}

#[test]
fn test_entries_written_by_hand_expire_by_their_timestamp() {
    let fx = persistent_fixture();

    let written_at = T0 - 3600;
    fx.store
        .set_item("legacy", &format!(r#"{{"t":{},"d":"old"}}"#, written_at))
        .unwrap();

    assert_eq!(fx.storage.get("legacy", 30.0).unwrap(), None);
    assert_eq!(fx.storage.get("legacy", 61.0).unwrap(), Some(Value::from("old")));
}

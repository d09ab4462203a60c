use std::cell::Cell;
use std::collections::HashSet;

use super::*;

#[test]
fn fresh_id_is_uuid_string() {
    let id = fresh_id(|_| false);
    assert!(Uuid::parse_str(&id).is_ok());
}

#[test]
fn fresh_id_retries_until_not_taken() {
    let attempts = Cell::new(0);
    let id = fresh_id(|_| {
        attempts.set(attempts.get() + 1);
        attempts.get() <= 3
    });
    assert_eq!(attempts.get(), 4);
    assert!(!id.is_empty());
}

#[test]
fn fresh_ids_are_distinct() {
    let ids: HashSet<String> = (0..256).map(|_| fresh_id(|_| false)).collect();
    assert_eq!(ids.len(), 256);
}

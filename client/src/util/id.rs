//! Quote identifier generation.

#[cfg(test)]
#[path = "id_test.rs"]
mod id_test;

use uuid::Uuid;

/// Generate a random v4 UUID string that `is_taken` does not reject.
///
/// Collisions are not expected in practice; the retry makes uniqueness within
/// a list a guarantee rather than a probability.
pub fn fresh_id(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !is_taken(&id) {
            return id;
        }
    }
}

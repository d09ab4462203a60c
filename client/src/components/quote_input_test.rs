use super::*;

#[test]
fn enter_submits() {
    assert!(input_key_submits("Enter"));
}

#[test]
fn other_keys_do_not_submit() {
    assert!(!input_key_submits("a"));
    assert!(!input_key_submits(" "));
    assert!(!input_key_submits("Escape"));
    assert!(!input_key_submits("enter"));
}

use super::*;

#[test]
fn enter_saves() {
    assert_eq!(dialog_key_action("Enter"), Some(DialogKey::Save));
}

#[test]
fn escape_cancels() {
    assert_eq!(dialog_key_action("Escape"), Some(DialogKey::Cancel));
}

#[test]
fn typing_keys_have_no_action() {
    for key in ["a", "Z", " ", "Backspace", "Tab", "ArrowLeft"] {
        assert_eq!(dialog_key_action(key), None, "key {key:?}");
    }
}

use super::*;

#[test]
fn enter_and_space_activate_a_card() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(is_activation_key("Spacebar"));
}

#[test]
fn other_keys_do_not_activate() {
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("Escape"));
    assert!(!is_activation_key("a"));
}

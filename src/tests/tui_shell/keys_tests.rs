use super::*;

#[test]
fn ctrl_s_maps_to_save_shortcut() {
    let ev = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    let input = to_key_input(ev).expect("mapped");
    assert!(input.is_save_shortcut());
    assert_eq!(input.typed_char(), None);
}

#[test]
fn shifted_chars_still_type() {
    let ev = KeyEvent::new(KeyCode::Char('Ж'), KeyModifiers::SHIFT);
    let input = to_key_input(ev).expect("mapped");
    assert_eq!(input.typed_char(), Some('Ж'));
}

#[test]
fn backtab_is_outdent() {
    let ev = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
    assert!(to_key_input(ev).expect("mapped").is_outdent());
}

#[test]
fn function_keys_are_not_editor_keys() {
    let ev = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
    assert!(to_key_input(ev).is_none());
}

use super::*;

fn opened(path: &str, content: &str) -> EditorSession {
    let mut s = EditorSession::new("\t");
    s.begin_open(path);
    assert!(s.finish_open(path, content.to_string()));
    s
}

fn type_str(s: &mut EditorSession, text: &str) {
    for c in text.chars() {
        s.handle_key(KeyInput::plain(Key::Char(c)));
    }
}

#[test]
fn dirty_tracks_text_equality_across_keystrokes() {
    let mut s = opened("a.md", "# Hi");
    s.handle_key(KeyInput::plain(Key::End));
    let keys = [
        KeyInput::plain(Key::Char('!')),
        KeyInput::plain(Key::Backspace),
        KeyInput::plain(Key::Tab),
        KeyInput::plain(Key::Left),
        KeyInput::plain(Key::Delete),
        KeyInput::plain(Key::Enter),
        KeyInput::plain(Key::Backspace),
        KeyInput::shifted(Key::Home),
        KeyInput::plain(Key::Tab),
        KeyInput::plain(Key::BackTab),
    ];
    for k in keys {
        s.handle_key(k);
        assert_eq!(s.is_dirty(), s.text() != s.synced(), "after {:?}", k);
    }
    assert_eq!(s.text(), "# Hi");
    assert!(!s.is_dirty());
}

#[test]
fn save_shortcut_is_swallowed() {
    let mut s = opened("a.md", "x");
    assert_eq!(s.handle_key(KeyInput::ctrl('s')), KeyOutcome::Save);
    let cmd_s = KeyInput {
        meta: true,
        ..KeyInput::plain(Key::Char('S'))
    };
    assert_eq!(s.handle_key(cmd_s), KeyOutcome::Save);
    assert_eq!(s.text(), "x");
}

#[test]
fn command_chords_do_not_type() {
    let mut s = opened("a.md", "");
    assert_eq!(s.handle_key(KeyInput::ctrl('q')), KeyOutcome::Ignored);
    assert_eq!(s.text(), "");
}

#[test]
fn tab_without_selection_inserts_indent_unit() {
    let mut s = EditorSession::new("    ");
    s.begin_open("a.md");
    s.finish_open("a.md", "x".to_string());
    assert_eq!(s.handle_key(KeyInput::plain(Key::Tab)), KeyOutcome::Edited);
    assert_eq!(s.text(), "    x");
    assert!(s.is_dirty());
}

#[test]
fn begin_open_drops_unsaved_edits() {
    let mut s = opened("a.md", "one");
    type_str(&mut s, "zz");
    assert!(s.is_dirty());

    s.begin_open("b.md");
    assert_eq!(s.active(), Some("b.md"));
    assert_eq!(s.text(), "one");
    assert!(!s.is_dirty());
}

#[test]
fn failed_open_falls_back_to_loaded_file() {
    let mut s = opened("a.md", "one");
    s.begin_open("b.md");
    assert!(s.fail_open("b.md"));
    assert_eq!(s.active(), Some("a.md"));
    assert_eq!(s.text(), "one");
}

#[test]
fn superseded_open_is_ignored() {
    let mut s = opened("a.md", "one");
    s.begin_open("b.md");
    s.begin_open("c.md");
    assert!(!s.finish_open("b.md", "two".to_string()));
    assert_eq!(s.text(), "one");
    assert!(s.finish_open("c.md", "three".to_string()));
    assert_eq!(s.loaded(), Some("c.md"));
}

#[test]
fn mark_saved_keeps_dirty_for_edits_made_after_the_save_started() {
    let mut s = opened("a.md", "# Hi");
    s.handle_key(KeyInput::plain(Key::End));
    type_str(&mut s, "!");
    let sent = s.text().to_string();
    type_str(&mut s, "?");

    assert!(s.mark_saved("a.md", sent));
    assert_eq!(s.synced(), "# Hi!");
    assert!(s.is_dirty());
}

#[test]
fn no_document_means_never_dirty() {
    let mut s = EditorSession::new("\t");
    s.insert_at_cursor("text");
    assert_eq!(s.text(), "text");
    assert!(!s.is_dirty());
}

use super::*;

fn buf_with_selection(text: &str, anchor: usize, cursor: usize) -> TextBuffer {
    let mut b = TextBuffer::new(text);
    b.set_selection(anchor, cursor);
    b
}

#[test]
fn insert_replaces_selection_and_moves_cursor_after() {
    let mut b = buf_with_selection("hello world", 6, 11);
    b.insert("there");
    assert_eq!(b.text(), "hello there");
    assert_eq!(b.cursor(), 11);
    assert!(!b.has_selection());
}

#[test]
fn indent_touches_every_selected_line_and_selects_block() {
    // Selection starts mid-line on "b" and ends mid-line on "c".
    let mut b = buf_with_selection("a\nbb\ncc\nd", 3, 6);
    b.indent_lines("\t");
    assert_eq!(b.text(), "a\n\tbb\n\tcc\nd");
    assert_eq!(b.selection(), (2, 9));
    assert_eq!(b.selected_text(), "\tbb\n\tcc");
}

#[test]
fn outdent_prefers_tab_then_four_then_two_spaces() {
    let text = "\t\tone\n      two\n   three\nfour";
    let mut b = buf_with_selection(text, 0, text.len());
    assert!(b.outdent_lines());
    assert_eq!(b.text(), "\tone\n  two\n three\nfour");
    assert_eq!(b.selected_text(), b.text());
}

#[test]
fn outdent_without_indent_reports_no_change() {
    let mut b = buf_with_selection("plain\ntext", 0, 4);
    assert!(!b.outdent_lines());
    assert_eq!(b.text(), "plain\ntext");
}

#[test]
fn indent_then_outdent_restores_text() {
    let texts = ["x\ny\nz", "\tx\n    y\n", "  lead\n\n    deep"];
    for text in texts {
        let mut b = buf_with_selection(text, 0, text.len());
        b.indent_lines("\t");
        let (s, e) = b.selection();
        b.set_selection(s, e);
        assert!(b.outdent_lines());
        assert_eq!(b.text(), text);
    }
}

#[test]
fn outdent_without_selection_keeps_cursor_in_line() {
    let mut b = buf_with_selection("x\n\tabc", 5, 5);
    assert!(b.outdent_lines());
    assert_eq!(b.text(), "x\nabc");
    assert_eq!(b.cursor(), 4);
    assert!(!b.has_selection());
}

#[test]
fn vertical_moves_keep_goal_column() {
    let mut b = TextBuffer::new("abcdef\nxy\n123456");
    b.set_selection(5, 5);
    b.move_down(false);
    assert_eq!(b.cursor_line_col(), (1, 2));
    b.move_down(false);
    assert_eq!(b.cursor_line_col(), (2, 5));
    b.move_up(false);
    b.move_up(false);
    assert_eq!(b.cursor(), 5);
}

#[test]
fn cursor_moves_by_chars_not_bytes() {
    let mut b = TextBuffer::new("жук");
    b.move_line_end(false);
    assert_eq!(b.cursor(), "жук".len());
    b.move_left(true);
    assert_eq!(b.selected_text(), "к");
    assert!(b.backspace());
    assert_eq!(b.text(), "жу");
    assert_eq!(b.cursor_line_col(), (0, 2));
}

#[test]
fn set_selection_snaps_inside_multibyte_chars() {
    let mut b = TextBuffer::new("ёж");
    b.set_selection(1, 3);
    assert_eq!(b.selection(), (0, 2));
}

#[test]
fn delete_at_end_is_a_no_op() {
    let mut b = TextBuffer::new("ab");
    b.move_line_end(false);
    assert!(!b.delete());
    assert!(b.backspace());
    assert_eq!(b.text(), "a");
}

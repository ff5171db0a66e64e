use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::editor::{Key, KeyInput};

/// Maps a terminal key to an editor key. `None` for keys the editor ignores.
pub(super) fn to_key_input(ev: KeyEvent) -> Option<KeyInput> {
    let key = match ev.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    let m = ev.modifiers;
    Some(KeyInput {
        key,
        shift: m.contains(KeyModifiers::SHIFT),
        ctrl: m.contains(KeyModifiers::CONTROL),
        alt: m.contains(KeyModifiers::ALT),
        meta: m.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    })
}

#[cfg(test)]
#[path = "../tests/tui_shell/keys_tests.rs"]
mod tests;

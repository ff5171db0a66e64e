use super::{Key, KeyInput, TextBuffer};

/// What a key did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not an editor key; the caller may use it.
    Ignored,
    /// Cursor or selection changed, text did not.
    Moved,
    /// Text changed.
    Edited,
    /// The save shortcut; the key itself was swallowed.
    Save,
}

/// The currently open file and its live text.
///
/// `active` is the file the user asked for. `loaded` is the file whose
/// content `synced` holds; the two differ only while an open is in flight.
#[derive(Clone, Debug)]
pub struct EditorSession {
    active: Option<String>,
    loaded: Option<String>,
    synced: String,
    buffer: TextBuffer,
    dirty: bool,
    indent_unit: String,
}

impl EditorSession {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            active: None,
            loaded: None,
            synced: String::new(),
            buffer: TextBuffer::default(),
            dirty: false,
            indent_unit: indent_unit.into(),
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn loaded(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    pub fn synced(&self) -> &str {
        &self.synced
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Switches to `path` ahead of its content. Unsaved edits are dropped:
    /// the live text falls back to the last-synced content.
    pub fn begin_open(&mut self, path: &str) {
        self.active = Some(path.to_string());
        if self.buffer.text() != self.synced {
            self.buffer.set_text(self.synced.clone());
        }
        self.dirty = false;
    }

    /// Installs fetched content. Ignored when a later open superseded `path`.
    pub fn finish_open(&mut self, path: &str, content: String) -> bool {
        if self.active.as_deref() != Some(path) {
            return false;
        }
        self.loaded = Some(path.to_string());
        self.buffer.set_text(content.clone());
        self.synced = content;
        self.dirty = false;
        true
    }

    /// Falls back to the file whose content is still on screen.
    pub fn fail_open(&mut self, path: &str) -> bool {
        if self.active.as_deref() != Some(path) {
            return false;
        }
        self.active = self.loaded.clone();
        self.recompute_dirty();
        true
    }

    /// Records `content` as persisted for `path`.
    pub fn mark_saved(&mut self, path: &str, content: String) -> bool {
        if self.loaded.as_deref() != Some(path) {
            return false;
        }
        self.synced = content;
        self.recompute_dirty();
        true
    }

    /// Dirty is true exactly when an open document's live text differs from
    /// its last-synced content.
    pub fn recompute_dirty(&mut self) -> bool {
        self.dirty = self.loaded.is_some() && self.buffer.text() != self.synced;
        self.dirty
    }

    /// Generic insertion used by templates, paste and uploads.
    pub fn insert_at_cursor(&mut self, text: &str) {
        self.buffer.insert(text);
        self.dirty = true;
        self.recompute_dirty();
    }

    pub fn handle_key(&mut self, input: KeyInput) -> KeyOutcome {
        if input.is_save_shortcut() {
            return KeyOutcome::Save;
        }

        let extend = input.shift;
        let outcome = match input.key {
            Key::Tab | Key::BackTab if input.is_outdent() => {
                if self.buffer.outdent_lines() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Moved
                }
            }
            Key::Tab => {
                if self.buffer.has_selection() {
                    self.buffer.indent_lines(&self.indent_unit);
                } else {
                    self.buffer.insert(&self.indent_unit);
                }
                KeyOutcome::Edited
            }
            Key::Enter => {
                self.buffer.insert("\n");
                KeyOutcome::Edited
            }
            Key::Backspace => edited_if(self.buffer.backspace()),
            Key::Delete => edited_if(self.buffer.delete()),
            Key::Left => {
                self.buffer.move_left(extend);
                KeyOutcome::Moved
            }
            Key::Right => {
                self.buffer.move_right(extend);
                KeyOutcome::Moved
            }
            Key::Up => {
                self.buffer.move_up(extend);
                KeyOutcome::Moved
            }
            Key::Down => {
                self.buffer.move_down(extend);
                KeyOutcome::Moved
            }
            Key::Home => {
                self.buffer.move_line_start(extend);
                KeyOutcome::Moved
            }
            Key::End => {
                self.buffer.move_line_end(extend);
                KeyOutcome::Moved
            }
            Key::Char('a') if input.ctrl || input.meta => {
                self.buffer.select_all();
                KeyOutcome::Moved
            }
            Key::Char(_) => match input.typed_char() {
                Some(c) => {
                    let mut tmp = [0u8; 4];
                    self.buffer.insert(c.encode_utf8(&mut tmp));
                    KeyOutcome::Edited
                }
                None => KeyOutcome::Ignored,
            },
            _ => KeyOutcome::Ignored,
        };

        if outcome == KeyOutcome::Edited {
            self.dirty = true;
            self.recompute_dirty();
        }
        outcome
    }
}

fn edited_if(changed: bool) -> KeyOutcome {
    if changed {
        KeyOutcome::Edited
    } else {
        KeyOutcome::Moved
    }
}

#[cfg(test)]
#[path = "../tests/editor/session_tests.rs"]
mod tests;

/// A key the editor understands, independent of the terminal backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Tab,
    /// Shift+Tab as reported by terminals that fold the modifier into the key.
    BackTab,
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, Super elsewhere.
    pub meta: bool,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    pub fn shifted(key: Key) -> Self {
        Self {
            shift: true,
            ..Self::plain(key)
        }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(Key::Char(c))
        }
    }

    /// Ctrl+S or Cmd+S, either case.
    pub fn is_save_shortcut(&self) -> bool {
        matches!(self.key, Key::Char('s') | Key::Char('S')) && (self.ctrl || self.meta)
    }

    pub fn is_outdent(&self) -> bool {
        self.key == Key::BackTab || (self.key == Key::Tab && self.shift)
    }

    fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }

    /// The character this key types, if it types one.
    pub fn typed_char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.has_command_modifier() => Some(c),
            _ => None,
        }
    }
}

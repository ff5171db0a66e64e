/// Multi-line text with a cursor and an anchor.
///
/// Offsets are byte offsets that always sit on char boundaries. The
/// selection is the range between anchor and cursor; it is empty when they
/// coincide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    anchor: usize,
    cursor: usize,
    // Column to return to while moving vertically across shorter lines.
    goal_col: Option<usize>,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// `(start, end)` with `start <= end`.
    pub fn selection(&self) -> (usize, usize) {
        (self.anchor.min(self.cursor), self.anchor.max(self.cursor))
    }

    pub fn has_selection(&self) -> bool {
        self.anchor != self.cursor
    }

    pub fn selected_text(&self) -> &str {
        let (s, e) = self.selection();
        &self.text[s..e]
    }

    /// Replaces the whole text and puts the cursor at the start.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.anchor = 0;
        self.cursor = 0;
        self.goal_col = None;
    }

    pub fn set_selection(&mut self, anchor: usize, cursor: usize) {
        self.anchor = self.snap(anchor);
        self.cursor = self.snap(cursor);
        self.goal_col = None;
    }

    pub fn select_all(&mut self) {
        self.set_selection(0, self.text.len());
    }

    /// Replaces the selection with `s` and leaves the cursor after it.
    pub fn insert(&mut self, s: &str) {
        let (start, end) = self.selection();
        self.text.replace_range(start..end, s);
        let pos = start + s.len();
        self.anchor = pos;
        self.cursor = pos;
        self.goal_col = None;
    }

    /// Returns false when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        if self.has_selection() {
            self.insert("");
            return true;
        }
        match self.prev_boundary(self.cursor) {
            Some(prev) => {
                self.anchor = prev;
                self.insert("");
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self) -> bool {
        if self.has_selection() {
            self.insert("");
            return true;
        }
        match self.next_boundary(self.cursor) {
            Some(next) => {
                self.anchor = next;
                self.insert("");
                true
            }
            None => false,
        }
    }

    pub fn move_left(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            let (s, _) = self.selection();
            self.move_to(s, false);
            return;
        }
        let pos = self.prev_boundary(self.cursor).unwrap_or(0);
        self.move_to(pos, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            let (_, e) = self.selection();
            self.move_to(e, false);
            return;
        }
        let pos = self.next_boundary(self.cursor).unwrap_or(self.text.len());
        self.move_to(pos, extend);
    }

    pub fn move_line_start(&mut self, extend: bool) {
        self.move_to(self.line_start(self.cursor), extend);
    }

    pub fn move_line_end(&mut self, extend: bool) {
        self.move_to(self.line_end(self.cursor), extend);
    }

    pub fn move_up(&mut self, extend: bool) {
        let col = self.goal_col.unwrap_or_else(|| self.cursor_line_col().1);
        let ls = self.line_start(self.cursor);
        let target = if ls == 0 {
            0
        } else {
            let prev_start = self.line_start(ls - 1);
            self.offset_at_col(prev_start, ls - 1, col)
        };
        self.move_to(target, extend);
        self.goal_col = Some(col);
    }

    pub fn move_down(&mut self, extend: bool) {
        let col = self.goal_col.unwrap_or_else(|| self.cursor_line_col().1);
        let le = self.line_end(self.cursor);
        let target = if le == self.text.len() {
            le
        } else {
            let next_start = le + 1;
            let next_end = self.line_end(next_start);
            self.offset_at_col(next_start, next_end, col)
        };
        self.move_to(target, extend);
        self.goal_col = Some(col);
    }

    /// Prepends `unit` to every line touched by the selection and selects
    /// the transformed block.
    pub fn indent_lines(&mut self, unit: &str) {
        let (ls, le) = self.selected_line_span();
        let replaced = self.text[ls..le]
            .split('\n')
            .map(|line| format!("{}{}", unit, line))
            .collect::<Vec<_>>()
            .join("\n");
        self.text.replace_range(ls..le, &replaced);
        self.set_selection(ls, ls + replaced.len());
    }

    /// Removes one leading indent unit (tab, else four spaces, else two
    /// spaces) from every line touched by the selection.
    ///
    /// With a selection the transformed block ends up selected; without one
    /// the cursor keeps its place in the line. Returns false when no line
    /// was indented.
    pub fn outdent_lines(&mut self) -> bool {
        let had_selection = self.has_selection();
        let (ls, le) = self.selected_line_span();
        let mut changed = false;
        let replaced = self.text[ls..le]
            .split('\n')
            .map(|line| {
                let stripped = strip_indent(line);
                changed |= stripped.len() != line.len();
                stripped
            })
            .collect::<Vec<_>>()
            .join("\n");
        if !changed {
            return false;
        }

        let removed = (le - ls) - replaced.len();
        let cursor = self.cursor;
        self.text.replace_range(ls..le, &replaced);
        if had_selection {
            self.set_selection(ls, ls + replaced.len());
        } else {
            let pos = cursor.saturating_sub(removed).max(ls);
            self.set_selection(pos, pos);
        }
        true
    }

    /// Zero-based line and char column of the cursor.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let ls = self.line_start(self.cursor);
        (line, self.text[ls..self.cursor].chars().count())
    }

    fn move_to(&mut self, pos: usize, extend: bool) {
        self.cursor = self.snap(pos);
        if !extend {
            self.anchor = self.cursor;
        }
        self.goal_col = None;
    }

    /// First and one-past-last byte of the lines the selection touches.
    fn selected_line_span(&self) -> (usize, usize) {
        let (start, end) = self.selection();
        (self.line_start(start), self.line_end(end))
    }

    fn line_start(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.text[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.text.len())
    }

    fn offset_at_col(&self, start: usize, end: usize, col: usize) -> usize {
        self.text[start..end]
            .char_indices()
            .nth(col)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }

    fn prev_boundary(&self, pos: usize) -> Option<usize> {
        self.text[..pos]
            .chars()
            .next_back()
            .map(|c| pos - c.len_utf8())
    }

    fn next_boundary(&self, pos: usize) -> Option<usize> {
        self.text[pos..].chars().next().map(|c| pos + c.len_utf8())
    }

    fn snap(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

fn strip_indent(line: &str) -> &str {
    ["\t", "    ", "  "]
        .iter()
        .find_map(|unit| line.strip_prefix(unit))
        .unwrap_or(line)
}

#[cfg(test)]
#[path = "../tests/editor/buffer_tests.rs"]
mod tests;

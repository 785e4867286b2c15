//! Editable input buffer helpers.
//!
//! Cursor positions are char indices so editing stays UTF-8 safe.

/// Editor state for one prompt line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LineBuffer {
    pub(crate) text: String,
    pub(crate) cursor: usize,
}

impl LineBuffer {
    /// Replace the buffer (history recall, autocomplete) and move to the end.
    pub(crate) fn replace(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = char_count(&self.text);
    }

    pub(crate) fn insert(&mut self, ch: char) {
        let byte_idx = byte_index_at_char(&self.text, self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Delete one char immediately before the cursor.
    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        delete_char_range(&mut self.text, self.cursor - 1, self.cursor);
        self.cursor -= 1;
    }

    /// Delete one char at the cursor.
    pub(crate) fn delete(&mut self) {
        if self.cursor < char_count(&self.text) {
            delete_char_range(&mut self.text, self.cursor, self.cursor + 1);
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        if self.cursor < char_count(&self.text) {
            self.cursor += 1;
        }
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = char_count(&self.text);
    }

    /// Emacs-style kill-to-end-of-line.
    pub(crate) fn kill_to_end(&mut self) {
        let end = char_count(&self.text);
        delete_char_range(&mut self.text, self.cursor, end);
    }

    /// Emacs-style kill-to-start-of-line.
    pub(crate) fn kill_to_start(&mut self) {
        delete_char_range(&mut self.text, 0, self.cursor);
        self.cursor = 0;
    }

    /// Emacs-style backward-kill-word.
    pub(crate) fn kill_word_back(&mut self) {
        let start = previous_word_start(&self.text, self.cursor);
        delete_char_range(&mut self.text, start, self.cursor);
        self.cursor = start;
    }
}

/// Delete a char range represented in char indices.
fn delete_char_range(buffer: &mut String, start_char: usize, end_char: usize) {
    if start_char >= end_char {
        return;
    }
    let start = byte_index_at_char(buffer, start_char);
    let end = byte_index_at_char(buffer, end_char);
    buffer.replace_range(start..end, "");
}

/// Return the char index where the previous word starts.
fn previous_word_start(buffer: &str, cursor: usize) -> usize {
    let chars: Vec<char> = buffer.chars().take(cursor).collect();
    let mut idx = chars.len();
    while idx > 0 && chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    while idx > 0 && !chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    idx
}

/// Convert a char index to a byte index, preserving UTF-8 boundaries.
pub(crate) fn byte_index_at_char(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Return total char count for a UTF-8 string.
pub(crate) fn char_count(s: &str) -> usize {
    s.chars().count()
}

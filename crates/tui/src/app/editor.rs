//! Message editor built on tui-input.
//!
//! Provides the editing operations named by the `editor-*` logical events,
//! plus a one-entry kill ring for `editor-yank`.

use tui_input::{Input, InputRequest};

#[derive(Debug, Clone, Default)]
pub struct Editor {
    input: Input,
    kill_ring: String,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Cursor position (character index).
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Access the underlying Input for rendering.
    pub fn inner(&self) -> &Input {
        &self.input
    }

    pub fn kill_ring(&self) -> &str {
        &self.kill_ring
    }

    /// Replace the contents, leaving the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    fn set_value_with_cursor(&mut self, value: String, cursor: usize) {
        let clamped = cursor.min(value.chars().count());
        self.input = Input::new(value);
        self.input.handle(InputRequest::GoToStart);
        for _ in 0..clamped {
            self.input.handle(InputRequest::GoToNextChar);
        }
    }

    /// Take the contents, leaving the editor empty.
    pub fn take(&mut self) -> String {
        let value = self.input.value().to_string();
        self.input.reset();
        value
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.handle(InputRequest::InsertChar(c));
    }

    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.input.handle(InputRequest::InsertChar(c));
        }
    }

    pub fn backspace(&mut self) {
        self.input.handle(InputRequest::DeletePrevChar);
    }

    pub fn delete_char(&mut self) {
        self.input.handle(InputRequest::DeleteNextChar);
    }

    pub fn bol(&mut self) {
        self.input.handle(InputRequest::GoToStart);
    }

    pub fn eol(&mut self) {
        self.input.handle(InputRequest::GoToEnd);
    }

    pub fn prev_char(&mut self) {
        self.input.handle(InputRequest::GoToPrevChar);
    }

    pub fn next_char(&mut self) {
        self.input.handle(InputRequest::GoToNextChar);
    }

    pub fn prev_word(&mut self) {
        self.input.handle(InputRequest::GoToPrevWord);
    }

    pub fn next_word(&mut self) {
        self.input.handle(InputRequest::GoToNextWord);
    }

    pub fn kill_to_eol(&mut self) {
        let chars: Vec<char> = self.input.value().chars().collect();
        let cursor = self.cursor().min(chars.len());
        self.remember(chars[cursor..].iter().collect());
        self.set_value_with_cursor(chars[..cursor].iter().collect(), cursor);
    }

    pub fn kill_to_bol(&mut self) {
        let chars: Vec<char> = self.input.value().chars().collect();
        let cursor = self.cursor().min(chars.len());
        self.remember(chars[..cursor].iter().collect());
        self.set_value_with_cursor(chars[cursor..].iter().collect(), 0);
    }

    pub fn delete_prev_word(&mut self) {
        let chars: Vec<char> = self.input.value().chars().collect();
        let cursor = self.cursor().min(chars.len());
        let mut start = cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        self.remember(chars[start..cursor].iter().collect());
        let remaining: String = chars[..start].iter().chain(&chars[cursor..]).collect();
        self.set_value_with_cursor(remaining, start);
    }

    /// Swap the characters around the cursor; at end of line, swap the last two.
    pub fn transpose_chars(&mut self) {
        let mut chars: Vec<char> = self.input.value().chars().collect();
        let cursor = self.cursor().min(chars.len());
        if cursor == 0 || chars.len() < 2 {
            return;
        }
        let (left, new_cursor) = if cursor == chars.len() {
            (cursor - 2, cursor)
        } else {
            (cursor - 1, cursor + 1)
        };
        chars.swap(left, left + 1);
        self.set_value_with_cursor(chars.into_iter().collect(), new_cursor);
    }

    pub fn yank(&mut self) {
        let text = self.kill_ring.clone();
        self.insert_str(&text);
    }

    fn remember(&mut self, killed: String) {
        if !killed.is_empty() {
            self.kill_ring = killed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(value: &str, cursor: usize) -> Editor {
        let mut e = Editor::new();
        e.set_value_with_cursor(value.to_string(), cursor);
        e
    }

    #[test]
    fn set_value_puts_cursor_at_end() {
        let mut e = Editor::new();
        e.set_value("hello");
        assert_eq!(e.cursor(), 5);
    }

    #[test]
    fn kill_to_eol_and_yank() {
        let mut e = editor("hello world", 5);
        e.kill_to_eol();
        assert_eq!(e.value(), "hello");
        assert_eq!(e.kill_ring(), " world");

        e.bol();
        e.yank();
        assert_eq!(e.value(), " worldhello");
    }

    #[test]
    fn kill_to_bol_moves_cursor_to_start() {
        let mut e = editor("hello world", 6);
        e.kill_to_bol();
        assert_eq!(e.value(), "world");
        assert_eq!(e.cursor(), 0);
        assert_eq!(e.kill_ring(), "hello ");
    }

    #[test]
    fn delete_prev_word_skips_trailing_space() {
        let mut e = editor("one two  ", 9);
        e.delete_prev_word();
        assert_eq!(e.value(), "one ");
        assert_eq!(e.cursor(), 4);
        assert_eq!(e.kill_ring(), "two  ");
    }

    #[test]
    fn empty_kill_keeps_previous_ring() {
        let mut e = editor("abc", 1);
        e.kill_to_eol();
        e.kill_to_eol();
        assert_eq!(e.kill_ring(), "bc");
    }

    #[test]
    fn transpose_in_middle_and_at_end() {
        let mut e = editor("abcd", 2);
        e.transpose_chars();
        assert_eq!(e.value(), "acbd");
        assert_eq!(e.cursor(), 3);

        let mut e = editor("abcd", 4);
        e.transpose_chars();
        assert_eq!(e.value(), "abdc");
        assert_eq!(e.cursor(), 4);

        let mut e = editor("abcd", 0);
        e.transpose_chars();
        assert_eq!(e.value(), "abcd");
    }

    #[test]
    fn take_empties_the_editor() {
        let mut e = editor("draft", 5);
        assert_eq!(e.take(), "draft");
        assert!(e.is_empty());
        assert_eq!(e.cursor(), 0);
    }

    #[test]
    fn insert_and_backspace() {
        let mut e = Editor::new();
        e.insert_str("hi!");
        e.backspace();
        e.insert_char('?');
        assert_eq!(e.value(), "hi?");
    }
}

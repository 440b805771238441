//! Minimal single-line text input state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Edit events a text input understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputEvent {
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    Home,
    End,
    Clear,
}

impl TextInputEvent {
    /// Map a key press to an edit event, if it is one.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => Some(Self::Clear),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char(c) => Some(Self::Insert(c)),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Delete => Some(Self::Delete),
            KeyCode::Left => Some(Self::CursorLeft),
            KeyCode::Right => Some(Self::CursorRight),
            KeyCode::Home => Some(Self::Home),
            KeyCode::End => Some(Self::End),
            _ => None,
        }
    }
}

/// Value and cursor of a single-line input. The cursor is a character index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    pub value: String,
    cursor: usize,
}

impl TextInputState {
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply one edit event. `max_len` bounds the character count.
    pub fn handle_event(&mut self, event: TextInputEvent, max_len: Option<usize>) {
        let char_count = self.value.chars().count();
        match event {
            TextInputEvent::Insert(c) => {
                if max_len.is_some_and(|max| char_count >= max) {
                    return;
                }
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            TextInputEvent::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            TextInputEvent::Delete => {
                if self.cursor < char_count {
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            TextInputEvent::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            TextInputEvent::CursorRight => self.cursor = (self.cursor + 1).min(char_count),
            TextInputEvent::Home => self.cursor = 0,
            TextInputEvent::End => self.cursor = char_count,
            TextInputEvent::Clear => self.clear(),
        }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(input: &mut TextInputState, text: &str) {
        for c in text.chars() {
            input.handle_event(TextInputEvent::Insert(c), None);
        }
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInputState::default();
        typed(&mut input, "abc");
        assert_eq!(input.value, "abc");
        input.handle_event(TextInputEvent::Backspace, None);
        assert_eq!(input.value, "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = TextInputState::with_value("ac");
        input.handle_event(TextInputEvent::CursorLeft, None);
        input.handle_event(TextInputEvent::Insert('b'), None);
        assert_eq!(input.value, "abc");
    }

    #[test]
    fn test_max_len_blocks_insert() {
        let mut input = TextInputState::with_value("2024-01-01");
        input.handle_event(TextInputEvent::Insert('x'), Some(10));
        assert_eq!(input.value, "2024-01-01");
    }

    #[test]
    fn test_non_ascii_editing() {
        let mut input = TextInputState::default();
        typed(&mut input, "gestión");
        assert_eq!(input.value, "gestión");
        input.handle_event(TextInputEvent::Backspace, None);
        input.handle_event(TextInputEvent::Backspace, None);
        assert_eq!(input.value, "gesti");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = TextInputState::with_value("algo");
        input.handle_event(TextInputEvent::Clear, None);
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInputState::with_value("abc");
        input.handle_event(TextInputEvent::Home, None);
        input.handle_event(TextInputEvent::Delete, None);
        assert_eq!(input.value, "bc");
    }

    #[test]
    fn test_from_key_mapping() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(TextInputEvent::from_key(key), Some(TextInputEvent::Insert('a')));
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(TextInputEvent::from_key(ctrl_u), Some(TextInputEvent::Clear));
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(TextInputEvent::from_key(tab), None);
    }
}

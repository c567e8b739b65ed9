//! Single-line text input
//!
//! Holds the edit buffer and cursor for dialog form fields. Rendering is
//! done by the dialogs themselves so they can apply the active palette.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::tui::style::Palette;

/// Editable single-line input state
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in chars
    cursor: usize,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input pre-filled with content, cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset();
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// The current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Render as a line, marking the cursor position when focused
    pub fn line(&self, palette: &Palette, focused: bool) -> Line<'static> {
        if !focused {
            return Line::from(Span::styled(self.content.clone(), palette.text()));
        }

        let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
        let before: String = self.content.chars().take(self.cursor).collect();
        let at: String = self
            .content
            .chars()
            .nth(self.cursor)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = self.content.chars().skip(self.cursor + 1).collect();

        Line::from(vec![
            Span::styled(before, palette.text()),
            Span::styled(at, cursor_style),
            Span::styled(after, palette.text()),
        ])
    }

    fn byte_offset(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

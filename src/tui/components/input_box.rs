//! # InputBox Component
//!
//! Message composition row: a single-line text field and a send button.
//!
//! ```text
//! ╭────────────────────────────────────────╮╭───╮
//! │ Start typing a prompt...               ││ ➤ │
//! ╰────────────────────────────────────────╯╰───╯
//! ```
//!
//! The buffer and cursor are internal state. The theme is a prop synced from
//! `App` every frame. Text wider than the field scrolls horizontally so the
//! cursor stays visible.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::state::ThemeMode;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::palette;

pub const HINT: &str = "Start typing a prompt...";
/// Rows: border + text + border.
pub const HEIGHT: u16 = 3;
const SEND_BUTTON_WIDTH: u16 = 5;
/// Border (1) + padding (1) on the left side of the field.
const TEXT_OFFSET: u16 = 2;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter pressed or send clicked. Carries the buffer as typed.
    Submit(String),
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Current theme (Prop)
    pub theme: ThemeMode,
    /// Cursor position as byte offset in buffer
    cursor: usize,
    /// Send button rect from the last render, for click routing
    send_area: Rect,
}

impl InputBox {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            buffer: String::new(),
            theme,
            cursor: 0,
            send_area: Rect::default(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn send_area(&self) -> Rect {
        self.send_area
    }

    /// Hand the buffer over for sending. Empty buffers are handed over
    /// unchanged so the reducer decides what to ignore.
    pub fn submit(&mut self) -> InputEvent {
        self.cursor = 0;
        InputEvent::Submit(std::mem::take(&mut self.buffer))
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    /// Byte offset where the visible window starts and the cursor's column
    /// within it, for a field `inner_width` columns wide.
    fn viewport(&self, inner_width: u16) -> (usize, u16) {
        let limit = usize::from(inner_width.saturating_sub(1));
        let mut start = self.cursor;
        let mut used = 0usize;
        for (i, c) in self.buffer[..self.cursor].char_indices().rev() {
            let w = c.width().unwrap_or(0);
            if used + w > limit {
                break;
            }
            used += w;
            start = i;
        }
        (start, used as u16)
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = palette(self.theme);
        let [field_area, send_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(SEND_BUTTON_WIDTH)])
                .areas(area);
        self.send_area = send_area;

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(p.primary))
            .padding(Padding::horizontal(1));
        let inner = block.inner(field_area);

        let field = if self.buffer.is_empty() {
            Paragraph::new(HINT).style(Style::default().fg(p.on_surface_variant))
        } else {
            let (start, _) = self.viewport(inner.width);
            Paragraph::new(&self.buffer[start..]).style(Style::default().fg(p.on_surface))
        };
        frame.render_widget(field.block(block), field_area);

        let send = Paragraph::new("➤")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(p.primary).add_modifier(Modifier::BOLD))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(p.primary)),
            );
        frame.render_widget(send, send_area);

        if !inner.is_empty() {
            let (_, column) = self.viewport(inner.width);
            frame.set_cursor_position((field_area.x + TEXT_OFFSET + column, inner.y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field
                let flattened = text.replace(['\r', '\n'], " ");
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete if self.cursor < self.buffer.len() => {
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft if self.cursor > 0 => {
                self.cursor = self.prev_boundary();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorRight if self.cursor < self.buffer.len() => {
                self.cursor = self.next_boundary();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorHome if self.cursor > 0 => {
                self.cursor = 0;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorEnd if self.cursor < self.buffer.len() => {
                self.cursor = self.buffer.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Submit => Some(self.submit()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use unicode_width::UnicodeWidthStr;

    /// Display width of the text before the cursor.
    fn prefix_width(input: &InputBox) -> usize {
        input.buffer[..input.cursor].width()
    }

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new(ThemeMode::Light);
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn typing_and_backspace() {
        let mut input = typed("ab");
        assert_eq!(input.buffer, "ab");
        assert_eq!(input.handle_event(&TuiEvent::Backspace), Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn backspace_on_empty_is_ignored() {
        let mut input = InputBox::new(ThemeMode::Light);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn submit_takes_buffer() {
        let mut input = typed("hello");
        match input.handle_event(&TuiEvent::Submit) {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            other => panic!("Expected Submit event, got {other:?}"),
        }
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn submit_keeps_whitespace() {
        let mut input = typed("   ");
        assert_eq!(input.submit(), InputEvent::Submit("   ".to_string()));
    }

    #[test]
    fn submit_empty_still_emits() {
        let mut input = InputBox::new(ThemeMode::Light);
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(InputEvent::Submit(String::new()))
        );
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut input = typed("héllo");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        input.handle_event(&TuiEvent::CursorRight);
        assert_eq!(input.cursor(), "hé".len());
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "hélo");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('e'));
        assert_eq!(input.buffer, "heélo");
        assert_eq!(prefix_width(&input), 2);
    }

    #[test]
    fn paste_is_flattened_to_one_line() {
        let mut input = InputBox::new(ThemeMode::Light);
        input.handle_event(&TuiEvent::Paste("one\ntwo".to_string()));
        assert_eq!(input.buffer, "one two");
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn viewport_scrolls_to_keep_cursor_visible() {
        let input = typed("abcdefghij");
        // 5 columns: 4 chars of text + cursor cell
        let (start, column) = input.viewport(5);
        assert_eq!(&input.buffer[start..], "ghij");
        assert_eq!(column, 4);
    }

    #[test]
    fn empty_field_shows_hint_and_send_button() {
        let backend = TestBackend::new(50, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new(ThemeMode::Dark);
        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(HINT));
        assert!(text.contains('➤'));
        assert_eq!(input.send_area(), Rect::new(45, 0, 5, 3));
    }
}

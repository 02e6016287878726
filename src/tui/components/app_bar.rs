//! # AppBar Component
//!
//! One-row bar across the top of the window.
//!
//! ```text
//! ☰  AI Chat  New Chat                              [◉ RAG enabled]
//! ```
//!
//! - `☰` toggles the sidebar
//! - the status message follows the title when present
//! - the RAG indicator sits on the right and toggles on click
//!
//! Stateless apart from the borrowed `HitMap`, where it records the menu
//! and RAG click targets.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::hit_map::{Control, HitMap};
use crate::tui::theme::Palette;

const MENU_ICON: &str = " ☰ ";

/// Presentation of the RAG toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RagIndicator {
    pub icon: &'static str,
    pub label: &'static str,
    pub border: Color,
}

pub fn rag_indicator(enabled: bool, palette: &Palette) -> RagIndicator {
    if enabled {
        RagIndicator {
            icon: "◉",
            label: "RAG enabled",
            border: palette.primary,
        }
    } else {
        RagIndicator {
            icon: "○",
            label: "RAG disabled",
            border: palette.on_surface_variant,
        }
    }
}

pub struct AppBar<'a> {
    pub title: &'a str,
    pub status_message: &'a str,
    pub rag_enabled: bool,
    pub palette: &'a Palette,
    pub hits: &'a mut HitMap,
}

impl Component for AppBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let p = self.palette;
        let base = Style::default().bg(p.surface_variant).fg(p.on_surface);

        let mut left = vec![
            Span::styled(MENU_ICON, base.add_modifier(Modifier::BOLD)),
            Span::styled(self.title, base.add_modifier(Modifier::BOLD)),
        ];
        if !self.status_message.is_empty() {
            left.push(Span::styled("  ", base));
            left.push(Span::styled(self.status_message, base.fg(p.on_surface_variant)));
        }
        frame.render_widget(Paragraph::new(Line::from(left)).style(base), area);

        let menu_width = (MENU_ICON.width() as u16).min(area.width);
        self.hits
            .register(Rect::new(area.x, area.y, menu_width, 1), Control::Menu);

        let rag = rag_indicator(self.rag_enabled, p);
        let bracket = base.fg(rag.border).add_modifier(Modifier::BOLD);
        let rag_line = Line::from(vec![
            Span::styled("[", bracket),
            Span::styled(format!("{} {}", rag.icon, rag.label), base.fg(rag.border)),
            Span::styled("]", bracket),
        ]);
        let rag_width = (rag_line.width() as u16).min(area.width.saturating_sub(menu_width));
        // One column of breathing room on the right edge
        let rag_x = (area.x + area.width).saturating_sub(rag_width + 1);
        let rag_area = Rect::new(rag_x.max(area.x + menu_width), area.y, rag_width, 1);
        frame.render_widget(Paragraph::new(rag_line).style(base), rag_area);
        self.hits.register(rag_area, Control::RagToggle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ThemeMode;
    use crate::test_support::buffer_text;
    use crate::tui::theme::palette;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(rag_enabled: bool, status: &str) -> (String, HitMap) {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = HitMap::new();
        terminal
            .draw(|f| {
                AppBar {
                    title: "AI Chat",
                    status_message: status,
                    rag_enabled,
                    palette: palette(ThemeMode::Light),
                    hits: &mut hits,
                }
                .render(f, f.area());
            })
            .unwrap();
        (buffer_text(terminal.backend().buffer()), hits)
    }

    #[test]
    fn shows_title_and_disabled_rag() {
        let (text, hits) = draw(false, "");
        assert!(text.contains("AI Chat"));
        assert!(text.contains("○ RAG disabled"));
        assert_eq!(hits.control_at(1, 0), Some(Control::Menu));
        assert_eq!(hits.control_at(58, 0), Some(Control::RagToggle));
    }

    #[test]
    fn shows_status_and_enabled_rag() {
        let (text, _) = draw(true, "New Chat");
        assert!(text.contains("New Chat"));
        assert!(text.contains("◉ RAG enabled"));
    }

    #[test]
    fn rag_indicator_round_trips() {
        let p = palette(ThemeMode::Dark);
        let off = rag_indicator(false, p);
        let on = rag_indicator(true, p);
        assert_ne!(off, on);
        assert_eq!(on.border, p.primary);
        assert_eq!(off.border, p.on_surface_variant);
        assert_eq!(rag_indicator(false, p), off);
    }
}

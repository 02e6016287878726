//! # Settings Overlay
//!
//! Centered panel opened from the sidebar's ⚙ button (or Ctrl+O). Shows the
//! current display flags and the keyboard shortcuts. Esc dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::state::{SidebarState, ThemeMode};
use crate::tui::component::Component;
use crate::tui::theme::palette;

const SHORTCUTS: &[(&str, &str)] = &[
    ("Ctrl+T", "Toggle light / dark theme"),
    ("Ctrl+B", "Expand / collapse sidebar"),
    ("Ctrl+R", "Toggle RAG indicator"),
    ("Ctrl+N", "New chat"),
    ("Ctrl+O", "Open this panel"),
    ("Enter", "Send message"),
    ("PgUp/PgDn", "Scroll conversation"),
    ("Ctrl+End", "Jump to latest message"),
    ("Esc", "Close panel / quit"),
];

pub struct SettingsPanel<'a> {
    pub theme: ThemeMode,
    pub sidebar: SidebarState,
    pub rag_enabled: bool,
    pub config_path: Option<&'a str>,
}

impl Component for SettingsPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = palette(self.theme);
        let overlay = centered_rect(60, 70, area);
        frame.render_widget(Clear, overlay);

        let key_style = Style::default().fg(p.primary).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(p.on_surface);
        let dim_style = Style::default().fg(p.on_surface_variant);

        let status = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<10}", label), dim_style),
                Span::styled(value, text_style),
            ])
        };

        let mut lines = vec![
            status("Theme", self.theme.label().to_string()),
            status("Sidebar", self.sidebar.label().to_string()),
            status(
                "RAG",
                if self.rag_enabled { "Enabled" } else { "Disabled" }.to_string(),
            ),
        ];
        if let Some(path) = self.config_path {
            lines.push(status("Config", path.to_string()));
        }
        lines.push(Line::default());
        lines.extend(SHORTCUTS.iter().map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{:<11}", key), key_style),
                Span::styled(*what, text_style),
            ])
        }));

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(p.primary))
            .title(" Settings ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(p.surface));

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

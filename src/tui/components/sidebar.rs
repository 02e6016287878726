//! # Sidebar Components
//!
//! The conversation sidebar has two presentations and exactly one of them is
//! drawn per frame, picked from `SidebarState` by the parent:
//!
//! ```text
//! Expanded (30 cols)              Collapsed (5 cols)
//! ╭──────────────────────────╮    ╭───╮
//! │        + New Chat        │    │ + │
//! ╰──────────────────────────╯    ╰───╯
//! ────────────────────────────
//! Recent
//! ╭──────────────────────────╮
//! │ Welcome Chat             │
//! │ Today                    │
//! ╰──────────────────────────╯
//!   Chat 2
//!   Yesterday
//! ────────────────────────────
//!  ☾                        ⚙      ☾
//! ```
//!
//! The recent chat list scrolls (mouse wheel over the list); its offset lives
//! in [`RecentListState`] so it survives collapsing and expanding.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::{RecentChat, ThemeMode};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::hit_map::{Control, HitMap};
use crate::tui::theme::{Palette, palette, theme_toggle_icon};

pub const EXPANDED_WIDTH: u16 = 30;
pub const COLLAPSED_WIDTH: u16 = 5;
/// Rows taken by one recent chat entry (frame + name + time).
pub const ITEM_HEIGHT: u16 = 4;

/// Colours of a recent chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentChatStyle {
    pub bg: Option<Color>,
    pub border: Option<Color>,
    pub name: Color,
    pub time: Color,
}

/// Selected entries are filled and outlined; the rest are bare text.
pub fn recent_chat_style(palette: &Palette, is_selected: bool) -> RecentChatStyle {
    RecentChatStyle {
        bg: is_selected.then_some(palette.selected_chat_bg),
        border: is_selected.then_some(palette.selected_chat_border),
        name: palette.chat_name,
        time: palette.chat_time,
    }
}

/// A single entry in the recent chat list.
#[derive(Clone, Copy)]
pub struct RecentChatItem<'a> {
    pub chat: &'a RecentChat,
    pub is_selected: bool,
    pub palette: &'a Palette,
}

impl Widget for RecentChatItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = recent_chat_style(self.palette, self.is_selected);

        let mut block = match style.border {
            Some(border) => Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .padding(Padding::horizontal(1)),
            // Same inner rect as the bordered variant
            None => Block::new().padding(Padding::new(2, 2, 1, 1)),
        };
        if let Some(bg) = style.bg {
            block = block.style(Style::default().bg(bg));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::styled(
                self.chat.name.as_str(),
                Style::default().fg(style.name).add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.chat.last_active.as_str(), Style::default().fg(style.time)),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Scroll position of the recent chat list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct RecentListState {
    pub scroll_state: ScrollViewState,
    /// List viewport from the last render, for routing wheel events
    area: Rect,
    content_height: u16,
}

impl RecentListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Whether a screen position falls on the list as last drawn.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.area.height)
    }

    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Forget the viewport; the list is not on screen.
    pub fn hide(&mut self) {
        self.area = Rect::default();
    }
}

impl EventHandler for RecentListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// Filled accent button used for "New Chat" in both presentations.
fn render_filled_button(frame: &mut Frame, area: Rect, label: &str, palette: &Palette) {
    let style = Style::default().bg(palette.primary).fg(palette.on_primary);
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style.add_modifier(Modifier::BOLD))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style)
                .style(style),
        );
    frame.render_widget(button, area);
}

fn render_divider(frame: &mut Frame, area: Rect, palette: &Palette) {
    let line = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(palette.on_surface_variant)),
        area,
    );
}

/// Wide presentation: new chat button, recent chats, theme and settings buttons.
pub struct ExpandedSidebar<'a> {
    pub chats: &'a [RecentChat],
    pub selected: usize,
    pub theme: ThemeMode,
    pub list: &'a mut RecentListState,
    pub hits: &'a mut HitMap,
}

impl Component for ExpandedSidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let p = palette(self.theme);
        let inner = area.inner(ratatui::layout::Margin::new(1, 0));
        let [button_area, top_divider, heading_area, list_area, bottom_divider, footer_area] =
            Layout::vertical([Length(3), Length(1), Length(1), Min(0), Length(1), Length(1)])
                .areas(inner);

        render_filled_button(frame, button_area, "+ New Chat", p);
        self.hits.register(button_area, Control::NewChat);

        render_divider(frame, top_divider, p);
        frame.render_widget(
            Paragraph::new("Recent")
                .style(Style::default().fg(p.on_surface).add_modifier(Modifier::BOLD)),
            heading_area,
        );

        self.render_list(frame, list_area, p);

        render_divider(frame, bottom_divider, p);

        let [theme_area, _, settings_area] =
            Layout::horizontal([Length(3), Min(0), Length(3)]).areas(footer_area);
        let icon_style = Style::default().fg(p.on_surface).add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(theme_toggle_icon(self.theme))
                .alignment(Alignment::Center)
                .style(icon_style),
            theme_area,
        );
        self.hits.register(theme_area, Control::ThemeToggle);
        frame.render_widget(
            Paragraph::new("⚙").alignment(Alignment::Center).style(icon_style),
            settings_area,
        );
        self.hits.register(settings_area, Control::Settings);
    }
}

impl ExpandedSidebar<'_> {
    /// Recent chats in a vertical scroll view; the wheel scrolls it.
    fn render_list(&mut self, frame: &mut Frame, area: Rect, p: &Palette) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let content_height = (self.chats.len() as u16).saturating_mul(ITEM_HEIGHT);

        self.list.area = area;
        self.list.content_height = content_height;
        self.list.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, chat) in self.chats.iter().enumerate() {
            let item_area = Rect::new(0, i as u16 * ITEM_HEIGHT, content_width, ITEM_HEIGHT);
            scroll_view.render_widget(
                RecentChatItem {
                    chat,
                    is_selected: i == self.selected,
                    palette: p,
                },
                item_area,
            );
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.list.scroll_state);
    }
}

/// Narrow, icon-only presentation.
pub struct CollapsedSidebar<'a> {
    pub theme: ThemeMode,
    pub hits: &'a mut HitMap,
}

impl Component for CollapsedSidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let p = palette(self.theme);
        let [button_row, _, theme_row] =
            Layout::vertical([Length(3), Min(0), Length(1)]).areas(area);
        let [_, button_area, _] =
            Layout::horizontal([Length(1), Length(3), Min(0)]).areas(button_row);

        render_filled_button(frame, button_area, "+", p);
        self.hits.register(button_area, Control::NewChat);

        frame.render_widget(
            Paragraph::new(theme_toggle_icon(self.theme))
                .alignment(Alignment::Center)
                .style(Style::default().fg(p.on_surface).add_modifier(Modifier::BOLD)),
            theme_row,
        );
        self.hits.register(theme_row, Control::ThemeToggle);
    }
}

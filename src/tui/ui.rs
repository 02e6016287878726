//! Screen composition: lays out the components and draws one frame.
//!
//! ```text
//! ┌──────────────────────── app bar (1 row) ─────────────────────────┐
//! ├──── sidebar ────┬│┬──────────────── chat view ───────────────────┤
//! │ expanded (30)   │││  message list                                │
//! │   or            │││                                              │
//! │ collapsed (5)   │││  input row (3 rows)                          │
//! └─────────────────┴┴┴──────────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::core::state::{App, SidebarState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::sidebar::{COLLAPSED_WIDTH, EXPANDED_WIDTH};
use crate::tui::components::{
    AppBar, CollapsedSidebar, ExpandedSidebar, MessageList, SettingsPanel, input_box,
};
use crate::tui::hit_map::Control;
use crate::tui::theme::palette;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let p = palette(app.theme);
    tui.hit_map.clear();

    frame.render_widget(
        Block::new().style(Style::default().bg(p.surface).fg(p.on_surface)),
        frame.area(),
    );

    let [bar_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    AppBar {
        title: &app.title,
        status_message: &app.status_message,
        rag_enabled: app.rag_enabled,
        palette: p,
        hits: &mut tui.hit_map,
    }
    .render(frame, bar_area);

    let sidebar_width = match app.sidebar {
        SidebarState::Expanded => EXPANDED_WIDTH,
        SidebarState::Collapsed => COLLAPSED_WIDTH,
    };
    let [sidebar_area, divider_area, chat_area] =
        Layout::horizontal([Length(sidebar_width), Length(1), Min(0)]).areas(body_area);

    // Exactly one presentation is drawn
    match app.sidebar {
        SidebarState::Expanded => ExpandedSidebar {
            chats: &app.recent_chats,
            selected: app.selected_chat,
            theme: app.theme,
            list: &mut tui.recent_list,
            hits: &mut tui.hit_map,
        }
        .render(frame, sidebar_area),
        SidebarState::Collapsed => {
            tui.recent_list.hide();
            CollapsedSidebar {
                theme: app.theme,
                hits: &mut tui.hit_map,
            }
            .render(frame, sidebar_area)
        }
    }

    frame.render_widget(
        Block::new()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(p.on_surface_variant)),
        divider_area,
    );

    let [list_area, input_area] =
        Layout::vertical([Min(0), Length(input_box::HEIGHT)]).areas(chat_area);

    MessageList::new(&mut tui.message_list, app.messages(), p).render(frame, list_area);

    tui.input_box.theme = app.theme;
    tui.input_box.render(frame, input_area);
    tui.hit_map.register(tui.input_box.send_area(), Control::Send);

    if tui.settings_open {
        SettingsPanel {
            theme: app.theme,
            sidebar: app.sidebar,
            rag_enabled: app.rag_enabled,
            config_path: tui.config_path.as_deref(),
        }
        .render(frame, frame.area());
        // Controls under the overlay are not clickable while it is open
        tui.hit_map.clear();
    }
}

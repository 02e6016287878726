//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Startup
//!
//! `build_app(initial_state)` assembles a [`Window`] once; `Window::run`
//! then owns the terminal until the user quits.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop sleeps until an event arrives
//! and redraws only after events (including terminal resizes). All pending
//! events are drained before the next draw.

mod component;
pub mod components;
pub mod event;
pub mod hit_map;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use ratatui::Frame;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState, RecentListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::hit_map::{Control, HitMap};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub message_list: MessageListState,
    /// Scroll position of the sidebar's recent chat list
    pub recent_list: RecentListState,
    pub input_box: InputBox,
    /// Click targets of the last frame drawn
    pub hit_map: HitMap,
    pub settings_open: bool,
    /// Shown in the settings panel
    pub config_path: Option<String>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            message_list: MessageListState::new(),
            recent_list: RecentListState::new(),
            input_box: InputBox::new(app.theme),
            hit_map: HitMap::new(),
            settings_open: false,
            config_path: None,
        }
    }
}

/// The chat window: core state, presentation state and window chrome.
pub struct Window {
    pub app: App,
    pub tui: TuiState,
    icon: Option<PathBuf>,
}

/// Assemble the window from its initial state.
pub fn build_app(initial: App) -> Window {
    let tui = TuiState::new(&initial);
    Window {
        app: initial,
        tui,
        icon: None,
    }
}

impl Window {
    pub fn with_icon(mut self, icon: Option<PathBuf>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_config_path(mut self, path: Option<&Path>) -> Self {
        self.tui.config_path = path.map(|p| p.display().to_string());
        self
    }

    pub fn title(&self) -> &str {
        &self.app.title
    }

    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    /// Draw one frame and refresh the click map.
    pub fn draw(&mut self, frame: &mut Frame) {
        ui::draw_ui(frame, &self.app, &mut self.tui);
    }

    /// Route a single event. Click events are resolved against the last
    /// frame drawn.
    pub fn handle_event(&mut self, event: TuiEvent) -> Effect {
        if matches!(event, TuiEvent::Quit) {
            return update(&mut self.app, Action::Quit);
        }

        if self.tui.settings_open {
            if matches!(event, TuiEvent::Escape | TuiEvent::OpenSettings) {
                self.tui.settings_open = false;
            }
            return Effect::None;
        }

        let action = match event {
            TuiEvent::Escape => Some(Action::Quit),
            TuiEvent::Resize => None,
            TuiEvent::ToggleTheme => Some(Action::ToggleTheme),
            TuiEvent::ToggleSidebar => Some(Action::ToggleSidebar),
            TuiEvent::ToggleRag => Some(Action::ToggleRag),
            TuiEvent::NewChat => Some(Action::NewChat),
            TuiEvent::OpenSettings => {
                self.open_settings();
                None
            }
            TuiEvent::Click(column, row) => match self.tui.hit_map.control_at(column, row) {
                Some(control) => self.activate(control),
                None => None,
            },
            TuiEvent::WheelUp(column, row) => {
                self.scroll_at(column, row, TuiEvent::ScrollUp);
                None
            }
            TuiEvent::WheelDown(column, row) => {
                self.scroll_at(column, row, TuiEvent::ScrollDown);
                None
            }
            TuiEvent::ScrollUp
            | TuiEvent::ScrollDown
            | TuiEvent::ScrollPageUp
            | TuiEvent::ScrollPageDown
            | TuiEvent::ScrollToBottom => {
                self.tui.message_list.handle_event(&event);
                None
            }
            other => match self.tui.input_box.handle_event(&other) {
                Some(InputEvent::Submit(text)) => Some(Action::SendMessage(text)),
                _ => None,
            },
        };

        match action {
            Some(action) => self.dispatch(action),
            None => Effect::None,
        }
    }

    /// The wheel scrolls the recent chat list when over it, else the conversation.
    fn scroll_at(&mut self, column: u16, row: u16, scroll: TuiEvent) {
        if self.app.sidebar.is_expanded() && self.tui.recent_list.contains(column, row) {
            self.tui.recent_list.handle_event(&scroll);
        } else {
            self.tui.message_list.handle_event(&scroll);
        }
    }

    fn activate(&mut self, control: Control) -> Option<Action> {
        debug!("Clicked {:?}", control);
        match control {
            Control::Menu => Some(Action::ToggleSidebar),
            Control::ThemeToggle => Some(Action::ToggleTheme),
            Control::RagToggle => Some(Action::ToggleRag),
            Control::NewChat => Some(Action::NewChat),
            Control::Settings => {
                self.open_settings();
                None
            }
            Control::Send => match self.tui.input_box.submit() {
                InputEvent::Submit(text) => Some(Action::SendMessage(text)),
                InputEvent::ContentChanged => None,
            },
        }
    }

    fn open_settings(&mut self) {
        info!("Settings opened");
        self.tui.settings_open = true;
    }

    fn dispatch(&mut self, action: Action) -> Effect {
        let sends = matches!(&action, Action::SendMessage(text) if !text.is_empty());
        let effect = update(&mut self.app, action);
        if sends {
            // Own messages always bring the conversation back into view
            self.tui.message_list.stick_to_bottom = true;
        }
        effect
    }

    /// Take over the terminal and run the event loop until quit.
    pub fn run(mut self) -> io::Result<()> {
        self.report_icon();

        let mut terminal = ratatui::init();
        let _terminal_mode_guard = TerminalModeGuard::new(&self.app.title);
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> io::Result<()> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
                needs_redraw = false;
            }

            let Some(first) = poll_event_timeout(IDLE_POLL)? else {
                continue;
            };
            needs_redraw = true;

            let mut pending = Some(first);
            while let Some(event) = pending {
                if self.handle_event(event) == Effect::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
                pending = poll_event_immediate()?;
            }
        }
    }

    /// A terminal cannot show a window icon; report whether the file is there.
    fn report_icon(&self) {
        match &self.icon {
            Some(path) if path.is_file() => info!("Window icon: {}", path.display()),
            Some(path) => warn!("Window icon not found: {}", path.display()),
            None => debug!("No window icon configured"),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new(title: &str) -> Self {
        if let Err(e) = execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetTitle(title),
            Show,
            SetCursorStyle::SteadyBlock
        ) {
            warn!("Failed to enable terminal modes: {}", e);
        } else {
            info!("Terminal modes enabled (mouse, bracketed paste, title)");
        }
        Self
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

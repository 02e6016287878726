//! # Actions
//!
//! Everything that can happen on the chat screen becomes an `Action`.
//! User clicks the theme button? That's `Action::ToggleTheme`.
//! User presses Enter? That's `Action::SendMessage(text)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the event loop.
//! No I/O happens here apart from logging.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::state::{App, Author, ChatMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    ToggleSidebar,
    ToggleRag,
    SendMessage(String),
    NewChat,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            info!("Theme switched to {}", app.theme.label());
            Effect::None
        }
        Action::ToggleSidebar => {
            app.sidebar = app.sidebar.toggled();
            Effect::None
        }
        Action::ToggleRag => {
            app.rag_enabled = !app.rag_enabled;
            Effect::None
        }
        Action::SendMessage(text) => {
            // Only the exact empty string is ignored; whitespace is kept verbatim.
            if !text.is_empty() {
                app.push_message(ChatMessage::new(text, Author::User, timestamp_now()));
            }
            Effect::None
        }
        Action::NewChat => {
            info!("New Chat requested");
            app.status_message = String::from("New Chat");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Value-returning form of [`update`], for callers that treat state as a value.
pub fn apply_action(mut app: App, action: Action) -> App {
    update(&mut app, action);
    app
}

/// Local wall-clock time in the `04:51 PM` format used for message stamps.
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%I:%M %p").to_string()
}

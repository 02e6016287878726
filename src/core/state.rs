//! # Application State
//!
//! Everything the chat screen knows lives in [`App`]. There is no hidden
//! state inside widgets: the TUI reads this record and draws it.
//!
//! ```text
//! App
//! ├── title: String                 // window + app bar title
//! ├── theme: ThemeMode              // light / dark
//! ├── sidebar: SidebarState         // expanded / collapsed
//! ├── rag_enabled: bool             // cosmetic indicator
//! ├── messages: Vec<ChatMessage>    // append-only
//! ├── recent_chats: Vec<RecentChat> // sidebar entries
//! ├── selected_chat: usize          // highlighted sidebar entry
//! └── status_message: String        // app bar status text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::config::ResolvedConfig;
use crate::core::seed;

pub const DEFAULT_TITLE: &str = "AI Chat";

/// Colour scheme for the whole window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// Which of the two sidebar presentations is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SidebarState {
    Expanded,
    #[default]
    Collapsed,
}

/// Visibility of the expanded and collapsed sidebar containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarVisibility {
    pub expanded: bool,
    pub collapsed: bool,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Expanded => SidebarState::Collapsed,
            SidebarState::Collapsed => SidebarState::Expanded,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == SidebarState::Expanded
    }

    /// The two containers always get complementary flags.
    pub fn visibility(self) -> SidebarVisibility {
        let expanded = self.is_expanded();
        SidebarVisibility {
            expanded,
            collapsed: !expanded,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SidebarState::Expanded => "Expanded",
            SidebarState::Collapsed => "Collapsed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

impl Author {
    pub fn label(self) -> &'static str {
        match self {
            Author::User => "You",
            Author::Bot => "Bot",
        }
    }
}

/// A single entry in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    text: String,
    author: Author,
    timestamp: String,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, author: Author, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author,
            timestamp: timestamp.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// A past conversation listed in the expanded sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentChat {
    pub name: String,
    pub last_active: String,
}

impl RecentChat {
    pub fn new(name: impl Into<String>, last_active: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_active: last_active.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub title: String,
    pub theme: ThemeMode,
    pub sidebar: SidebarState,
    pub rag_enabled: bool,
    /// Append-only. Only `push_message` (called from the reducer) may grow it.
    messages: Vec<ChatMessage>,
    pub recent_chats: Vec<RecentChat>,
    pub selected_chat: usize,
    pub status_message: String,
}

impl App {
    /// Empty screen: no messages, no recent chats, default flags.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            theme: ThemeMode::default(),
            sidebar: SidebarState::default(),
            rag_enabled: false,
            messages: Vec::new(),
            recent_chats: Vec::new(),
            selected_chat: 0,
            status_message: String::new(),
        }
    }

    /// Initial state built from resolved configuration, including the demo
    /// conversation and recent chat list when seeding is enabled.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.title.clone());
        app.theme = config.theme;
        app.sidebar = config.sidebar;
        app.rag_enabled = config.rag_enabled;
        if config.seed_messages {
            app.messages = seed::seed_messages();
            app.recent_chats = seed::seed_recent_chats();
        }
        app
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub(crate) fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

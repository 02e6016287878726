//! # TUI Components
//!
//! All widgets of the chat screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data, including the theme palette,
//! as props and are rebuilt every frame:
//! - `AppBar`: menu button, title, status, RAG indicator
//! - `ExpandedSidebar` / `CollapsedSidebar`: the two sidebar presentations
//! - `RecentChatItem`: one entry of the recent chat list
//! - `Message`: one chat bubble with avatar and timestamp
//! - `SettingsPanel`: overlay with current flags and shortcuts
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state across frames and emit events:
//! - `InputBox`: text field with send button
//! - `MessageList`: scrollable conversation with a height cache
//! - `ExpandedSidebar`: its recent chat list scrolls (`RecentListState`)
//!
//! ### Props-Based Data Flow
//!
//! Nothing reads the theme from global state. A component that needs colours
//! gets a `&Palette` (or the `ThemeMode` to look one up), so switching theme
//! is nothing more than drawing the next frame with the other palette.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── app_bar.rs       (top bar)
//! ├── sidebar.rs       (expanded + collapsed sidebar, recent chat item)
//! ├── message.rs       (single bubble)
//! ├── message_list.rs  (scrollable container)
//! ├── input_box.rs     (composition row)
//! └── settings.rs      (overlay)
//! ```

pub mod app_bar;
pub mod input_box;
pub mod message;
pub mod message_list;
pub mod settings;
pub mod sidebar;

pub use app_bar::AppBar;
pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use settings::SettingsPanel;
pub use sidebar::{CollapsedSidebar, ExpandedSidebar, RecentListState};

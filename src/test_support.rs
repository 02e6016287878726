//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::{Window, build_app};

/// Seeded app with default settings: light theme, collapsed sidebar, RAG off.
pub fn test_app() -> App {
    App::from_config(&ResolvedConfig::default())
}

pub fn test_window() -> Window {
    build_app(test_app())
}

/// Draw one frame of the window and return the resulting buffer.
pub fn render_window(window: &mut Window, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| window.draw(f)).unwrap();
    terminal.backend().buffer().clone()
}

/// All cell symbols of a buffer, row by row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer
        .content()
        .chunks(buffer.area.width.max(1) as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

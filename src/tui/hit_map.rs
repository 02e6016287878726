//! Click targets recorded during rendering.
//!
//! Components register the rect of every clickable control each frame.
//! A mouse click is resolved against the regions of the last frame drawn.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Menu,
    ThemeToggle,
    RagToggle,
    NewChat,
    Settings,
    Send,
}

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Control)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, area: Rect, control: Control) {
        if !area.is_empty() {
            self.regions.push((area, control));
        }
    }

    /// Later registrations sit on top of earlier ones.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, control)| *control)
    }

    pub fn area_of(&self, control: Control) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, c)| *c == control)
            .map(|(area, _)| *area)
    }

    pub fn count(&self, control: Control) -> usize {
        self.regions.iter().filter(|(_, c)| *c == control).count()
    }
}

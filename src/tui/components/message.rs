use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{Author, ChatMessage};
use crate::tui::theme::Palette;

/// Avatar cell: glyph with one column of fill on each side.
const AVATAR_WIDTH: u16 = 3;
/// Gap between avatar and bubble.
const AVATAR_GAP: u16 = 1;
const SIDE_OVERHEAD: u16 = AVATAR_WIDTH + AVATAR_GAP;
/// Horizontal padding inside the bubble (per side).
const BUBBLE_PAD_H: u16 = 1;
/// Bubbles never grow past this share of the row.
const MAX_BUBBLE_PERCENT: u32 = 75;
/// Timestamp row under the bubble.
const TIMESTAMP_ROWS: u16 = 1;
/// Blank row between consecutive messages.
const SPACING: u16 = 1;

/// Wrapped bubble text and the bubble's outer width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleLayout {
    pub lines: Vec<String>,
    pub width: u16,
}

/// Wrap `text` for a row `row_width` columns wide.
///
/// The bubble hugs its longest line, capped at `MAX_BUBBLE_PERCENT` of the
/// space left beside the avatar.
pub fn layout_bubble(text: &str, row_width: u16) -> BubbleLayout {
    let available = row_width.saturating_sub(SIDE_OVERHEAD);
    let max_width = (u32::from(available) * MAX_BUBBLE_PERCENT / 100) as u16;
    let max_inner = max_width.saturating_sub(BUBBLE_PAD_H * 2).max(1);

    let options = textwrap::Options::new(max_inner as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let mut lines: Vec<String> = textwrap::wrap(text, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }

    let longest = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let width = (longest.max(1) + BUBBLE_PAD_H * 2).min(available);
    BubbleLayout { lines, width }
}

/// Background and foreground of a message bubble (and its avatar).
pub fn bubble_colors(author: Author, palette: &Palette) -> (Color, Color) {
    match author {
        Author::User => (palette.primary, palette.on_primary),
        Author::Bot => (palette.primary_container, palette.on_primary_container),
    }
}

fn avatar_glyph(author: Author) -> &'static str {
    match author {
        Author::User => " ● ",
        Author::Bot => " ✦ ",
    }
}

/// A single chat message: avatar, bubble and timestamp.
///
/// User messages hug the right edge with the avatar after the bubble; bot
/// messages hug the left edge with the avatar first. Created fresh each
/// frame by `MessageList`.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub message: &'a ChatMessage,
    pub palette: &'a Palette,
}

impl<'a> Message<'a> {
    pub fn new(message: &'a ChatMessage, palette: &'a Palette) -> Self {
        Self { message, palette }
    }

    /// Rows the message occupies at `width`, including the trailing spacer.
    pub fn calculate_height(message: &ChatMessage, width: u16) -> u16 {
        let layout = layout_bubble(message.text(), width);
        layout.lines.len() as u16 + TIMESTAMP_ROWS + SPACING
    }
}

impl Widget for Message<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let author = self.message.author();
        let layout = layout_bubble(self.message.text(), area.width);
        let (bg, fg) = bubble_colors(author, self.palette);
        let bubble_style = Style::default().bg(bg).fg(fg);

        let available = area.width.saturating_sub(SIDE_OVERHEAD);
        let bubble_height = layout.lines.len() as u16;

        let (avatar_x, bubble_x, stamp_x, stamp_alignment) = match author {
            Author::User => (
                area.x + available + AVATAR_GAP,
                area.x + available - layout.width,
                area.x,
                Alignment::Right,
            ),
            Author::Bot => (
                area.x,
                area.x + SIDE_OVERHEAD,
                area.x + SIDE_OVERHEAD,
                Alignment::Left,
            ),
        };

        let avatar_area = Rect::new(avatar_x, area.y, AVATAR_WIDTH, 1).intersection(area);
        Paragraph::new(avatar_glyph(author))
            .style(bubble_style)
            .render(avatar_area, buf);

        let bubble_area = Rect::new(bubble_x, area.y, layout.width, bubble_height).intersection(area);
        let lines: Vec<Line> = layout.lines.into_iter().map(Line::from).collect();
        Paragraph::new(lines)
            .style(bubble_style)
            .block(Block::new().padding(Padding::horizontal(BUBBLE_PAD_H)))
            .render(bubble_area, buf);

        let stamp_area =
            Rect::new(stamp_x, area.y + bubble_height, available, TIMESTAMP_ROWS).intersection(area);
        Paragraph::new(self.message.timestamp())
            .alignment(stamp_alignment)
            .style(Style::default().fg(self.palette.on_surface_variant))
            .render(stamp_area, buf);
    }
}

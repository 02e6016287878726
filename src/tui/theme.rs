//! Static light/dark colour table.
//!
//! Components never branch on `ThemeMode` themselves: they receive a
//! `&Palette` prop and read the slot they need.

use ratatui::style::Color;

use crate::core::state::ThemeMode;

const PURPLE: Color = Color::Rgb(0x80, 0x00, 0x80);
const PURPLE_100: Color = Color::Rgb(0xE1, 0xBE, 0xE7);
const PURPLE_900: Color = Color::Rgb(0x4A, 0x14, 0x8C);
const GREY: Color = Color::Rgb(0x9E, 0x9E, 0x9E);
const GREY_400: Color = Color::Rgb(0xBD, 0xBD, 0xBD);
const GREY_600: Color = Color::Rgb(0x75, 0x75, 0x75);
const GREY_800: Color = Color::Rgb(0x42, 0x42, 0x42);
const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub surface_variant: Color,
    /// Background of the highlighted recent chat
    pub selected_chat_bg: Color,
    pub selected_chat_border: Color,
    pub chat_name: Color,
    pub chat_time: Color,
}

pub const LIGHT: Palette = Palette {
    primary: PURPLE,
    on_primary: WHITE,
    primary_container: PURPLE_100,
    on_primary_container: BLACK,
    surface: WHITE,
    on_surface: BLACK,
    on_surface_variant: GREY,
    surface_variant: Color::Rgb(0xE7, 0xE0, 0xEC),
    selected_chat_bg: Color::Rgb(0xE7, 0xDD, 0xFF),
    selected_chat_border: PURPLE,
    chat_name: BLACK,
    chat_time: GREY_600,
};

pub const DARK: Palette = Palette {
    primary: PURPLE,
    on_primary: WHITE,
    primary_container: PURPLE_900,
    on_primary_container: WHITE,
    surface: GREY_800,
    on_surface: WHITE,
    on_surface_variant: GREY,
    surface_variant: Color::Rgb(0x49, 0x45, 0x4F),
    selected_chat_bg: Color::Rgb(0x40, 0x38, 0x47),
    selected_chat_border: PURPLE,
    chat_name: WHITE,
    chat_time: GREY_400,
};

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

/// Icon on the theme button: shows the mode a click switches to.
pub fn theme_toggle_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☾",
        ThemeMode::Dark => "☀",
    }
}

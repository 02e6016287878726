use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit, // Ctrl+C
    Escape,
    Submit,
    Resize,

    // Shortcuts mirroring the clickable controls
    ToggleTheme,   // Ctrl+T
    ToggleSidebar, // Ctrl+B
    ToggleRag,     // Ctrl+R
    NewChat,       // Ctrl+N
    OpenSettings,  // Ctrl+O

    // Text editing
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Message list scrolling
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToBottom,

    Click(u16, u16),
    // Mouse wheel at a screen position, routed to whatever list is under it
    WheelUp(u16, u16),
    WheelDown(u16, u16),
}

/// Poll for an event, waiting up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a raw crossterm event to a `TuiEvent`, dropping what the UI ignores.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse.column, mouse.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::WheelUp(mouse.column, mouse.row)),
            MouseEventKind::ScrollDown => Some(TuiEvent::WheelDown(mouse.column, mouse.row)),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
        (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(TuiEvent::ToggleSidebar),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::ToggleRag),
        (KeyModifiers::CONTROL, KeyCode::Char('n')) => Some(TuiEvent::NewChat),
        (KeyModifiers::CONTROL, KeyCode::Char('o')) => Some(TuiEvent::OpenSettings),
        (KeyModifiers::CONTROL, KeyCode::End) => Some(TuiEvent::ScrollToBottom),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn shortcuts_map_to_toggles() {
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('t'))),
            Some(TuiEvent::ToggleTheme)
        );
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('b'))),
            Some(TuiEvent::ToggleSidebar)
        );
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('r'))),
            Some(TuiEvent::ToggleRag)
        );
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::End)),
            Some(TuiEvent::ScrollToBottom)
        );
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::End)),
            Some(TuiEvent::CursorEnd)
        );
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('x'))),
            None
        );
    }

    #[test]
    fn plain_and_shifted_chars_are_input() {
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::Char('t'))),
            Some(TuiEvent::InputChar('t'))
        );
        assert_eq!(
            translate(key(KeyModifiers::SHIFT, KeyCode::Char('T'))),
            Some(TuiEvent::InputChar('T'))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn left_click_carries_position() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(TuiEvent::Click(7, 3)));
    }

    #[test]
    fn wheel_carries_position() {
        let wheel = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 4,
                row: 12,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            translate(wheel(MouseEventKind::ScrollDown)),
            Some(TuiEvent::WheelDown(4, 12))
        );
        assert_eq!(
            translate(wheel(MouseEventKind::ScrollUp)),
            Some(TuiEvent::WheelUp(4, 12))
        );
    }
}

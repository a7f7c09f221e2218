use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Feed into core::update as Actions
    Quit,
    ForceQuit, // Ctrl+C always quits
    Submit,

    // Category selection
    NextCategory,
    PrevCategory,
    JumpCategory(u8), // Digit keys map straight to classNo

    // Consumed by the TUI itself, never reach the core
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
    Resize,
}

/// Poll for an event without blocking.
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                // Ctrl+C force-quits regardless of state
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                // Left/Right (and Tab/BackTab) walk the category strip
                (_, KeyCode::Left) => Some(TuiEvent::PrevCategory),
                (_, KeyCode::Right) => Some(TuiEvent::NextCategory),
                (_, KeyCode::BackTab) => Some(TuiEvent::PrevCategory),
                (_, KeyCode::Tab) => Some(TuiEvent::NextCategory),
                // 0-9 jump straight to that classification
                (_, KeyCode::Char(c)) if c.is_ascii_digit() => {
                    Some(TuiEvent::JumpCategory(c as u8 - b'0'))
                }
                (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                (_, KeyCode::Home) => Some(TuiEvent::ScrollToTop),
                (_, KeyCode::End) => Some(TuiEvent::ScrollToBottom),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

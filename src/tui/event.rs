use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core action (passed to core::update)
    Quit,

    // TUI-local event (handled directly in TUI)
    Resize,
}

/// Translate a raw terminal event. Anything that is not a quit key or a
/// resize maps to `None` and leaves the session untouched.
pub fn translate(event: &Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: &KeyEvent) -> Option<TuiEvent> {
    // Release and repeat events arrive when keyboard enhancement is active
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (KeyModifiers::NONE, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}

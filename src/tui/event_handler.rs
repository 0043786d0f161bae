use super::app_state::Action;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// Blocks until the next terminal event and decodes it.
///
/// Non-key events and keys without a binding yield `None`.
pub(super) fn read_action() -> io::Result<Option<Action>> {
    match event::read()? {
        Event::Key(key_event) => Ok(map_key(key_event)),
        _ => Ok(None),
    }
}

pub(super) fn map_key(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let plain = !key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key_event.code {
        KeyCode::Char('c') if ctrl => Some(Action::Cancel),
        // Raw LF and CR arrive as Ctrl-J / Ctrl-M on some terminals.
        KeyCode::Char('j') | KeyCode::Char('m') if ctrl => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Char('q') if plain => Some(Action::Cancel),
        KeyCode::Char('k') | KeyCode::Char('K') if plain => Some(Action::Up),
        KeyCode::Char('j') | KeyCode::Char('J') if plain => Some(Action::Down),
        KeyCode::Char('g') if plain => Some(Action::First),
        KeyCode::Char('G') if plain => Some(Action::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn cancel_keys() {
        assert_eq!(map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Action::Cancel));
        assert_eq!(map_key(key(KeyCode::Esc, KeyModifiers::NONE)), Some(Action::Cancel));
        assert_eq!(map_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(Action::Cancel));
    }

    #[test]
    fn confirm_keys() {
        assert_eq!(map_key(key(KeyCode::Enter, KeyModifiers::NONE)), Some(Action::Confirm));
        assert_eq!(map_key(key(KeyCode::Char('j'), KeyModifiers::CONTROL)), Some(Action::Confirm));
        assert_eq!(map_key(key(KeyCode::Char('m'), KeyModifiers::CONTROL)), Some(Action::Confirm));
    }

    #[test]
    fn movement_keys_accept_both_cases() {
        assert_eq!(map_key(key(KeyCode::Up, KeyModifiers::NONE)), Some(Action::Up));
        assert_eq!(map_key(key(KeyCode::Char('k'), KeyModifiers::NONE)), Some(Action::Up));
        assert_eq!(map_key(key(KeyCode::Char('K'), KeyModifiers::SHIFT)), Some(Action::Up));
        assert_eq!(map_key(key(KeyCode::Down, KeyModifiers::NONE)), Some(Action::Down));
        assert_eq!(map_key(key(KeyCode::Char('j'), KeyModifiers::NONE)), Some(Action::Down));
        assert_eq!(map_key(key(KeyCode::Char('J'), KeyModifiers::SHIFT)), Some(Action::Down));
    }

    #[test]
    fn jump_keys_are_case_sensitive() {
        assert_eq!(map_key(key(KeyCode::Char('g'), KeyModifiers::NONE)), Some(Action::First));
        assert_eq!(map_key(key(KeyCode::Char('G'), KeyModifiers::SHIFT)), Some(Action::Last));
    }

    #[test]
    fn unbound_and_released_keys_are_ignored() {
        assert_eq!(map_key(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(map_key(key(KeyCode::Char('Q'), KeyModifiers::SHIFT)), None);
        assert_eq!(map_key(key(KeyCode::Char('k'), KeyModifiers::CONTROL)), None);
        assert_eq!(map_key(key(KeyCode::Tab, KeyModifiers::NONE)), None);

        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}

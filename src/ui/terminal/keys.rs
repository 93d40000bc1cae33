//! Translation of crossterm key events into engine keys.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::{Edit, Key};

/// Maps a terminal key event onto what the engine understands.
///
/// Returns `None` for key releases, which the engine never sees.
pub fn engine_key(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match event.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Char(c)
            if !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Key::Edit(Edit::Insert(c))
        }
        KeyCode::Backspace => Key::Edit(Edit::Backspace),
        KeyCode::Delete => Key::Edit(Edit::Delete),
        KeyCode::Left => Key::Edit(Edit::Left),
        KeyCode::Right => Key::Edit(Edit::Right),
        KeyCode::Home => Key::Edit(Edit::Home),
        KeyCode::End => Key::Edit(Edit::End),
        _ => Key::Other,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn special_keys_map_to_engine_keys() {
        assert_eq!(engine_key(&press(KeyCode::Enter, KeyModifiers::NONE)), Some(Key::Enter));
        assert_eq!(engine_key(&press(KeyCode::Up, KeyModifiers::NONE)), Some(Key::ArrowUp));
        assert_eq!(engine_key(&press(KeyCode::Down, KeyModifiers::NONE)), Some(Key::ArrowDown));
    }

    #[test]
    fn typed_characters_become_inserts() {
        assert_eq!(
            engine_key(&press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Key::Edit(Edit::Insert('A')))
        );
        assert_eq!(
            engine_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Other)
        );
    }

    #[test]
    fn releases_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(engine_key(&release), None);
    }

    #[test]
    fn unrelated_keys_pass_through() {
        assert_eq!(engine_key(&press(KeyCode::Tab, KeyModifiers::NONE)), Some(Key::Other));
        assert_eq!(engine_key(&press(KeyCode::F(2), KeyModifiers::NONE)), Some(Key::Other));
    }
}

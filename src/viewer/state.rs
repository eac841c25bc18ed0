use raylib::consts::KeyboardKey;
use tracing::{debug, warn};

use crate::session::{Action, Session};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Advance,     // Next image of the focused gallery
    Retreat,     // Previous image of the focused gallery
    FocusNext,   // Move focus to the next gallery
    FocusPrev,   // Move focus to the previous gallery
}

pub fn key_command(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_D => Some(Command::Advance),
        KeyboardKey::KEY_LEFT | KeyboardKey::KEY_A => Some(Command::Retreat),
        KeyboardKey::KEY_TAB | KeyboardKey::KEY_DOWN => Some(Command::FocusNext),
        KeyboardKey::KEY_UP => Some(Command::FocusPrev),
        _ => None,
    }
}

/// The session plus which gallery the keyboard currently drives.
/// Moving focus never touches a cursor.
pub struct ViewerState {
    pub session: Session,
    focus: usize,
}

impl ViewerState {
    pub fn new(session: Session) -> Self {
        Self { session, focus: 0 }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.session.gallery_ids().nth(self.focus)
    }

    pub fn handle(&mut self, command: Command) {
        let count = self.session.len();
        if count == 0 {
            return;
        }
        match command {
            Command::FocusNext => self.focus = (self.focus + 1) % count,
            Command::FocusPrev => self.focus = (self.focus + count - 1) % count,
            Command::Advance | Command::Retreat => {
                let Some(id) = self.focused_id().map(str::to_string) else {
                    return;
                };
                let action = if command == Command::Advance {
                    Action::Advance(id)
                } else {
                    Action::Retreat(id)
                };
                if let Err(e) = self.session.apply(&action) {
                    warn!(?command, "viewer command ignored: {e}");
                }
            }
        }
        debug!(?command, focus = self.focus, "viewer command");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageContent;

    fn state() -> ViewerState {
        ViewerState::new(Session::from_content(&PageContent::default_report().unwrap()).unwrap())
    }

    fn cursors(s: &ViewerState) -> Vec<usize> {
        (0..s.session.len()).map(|i| s.session.carousel_at(i).unwrap().cursor()).collect()
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(key_command(KeyboardKey::KEY_RIGHT), Some(Command::Advance));
        assert_eq!(key_command(KeyboardKey::KEY_A), Some(Command::Retreat));
        assert_eq!(key_command(KeyboardKey::KEY_TAB), Some(Command::FocusNext));
        assert_eq!(key_command(KeyboardKey::KEY_UP), Some(Command::FocusPrev));
        assert_eq!(key_command(KeyboardKey::KEY_SPACE), None);
    }

    #[test]
    fn navigation_applies_to_focused_gallery_only() {
        let mut s = state();
        s.handle(Command::Advance);
        s.handle(Command::FocusNext);
        s.handle(Command::Retreat);
        s.handle(Command::FocusNext);
        s.handle(Command::Advance);
        s.handle(Command::Advance);
        assert_eq!(cursors(&s), vec![1, 3, 0]);
    }

    #[test]
    fn page_without_galleries_ignores_navigation() {
        let content = PageContent::from_toml_str(r#"title = "Empty""#).unwrap();
        let mut s = ViewerState::new(Session::from_content(&content).unwrap());
        s.handle(Command::Advance);
        s.handle(Command::FocusNext);
        assert_eq!(s.focused_id(), None);
        assert_eq!(s.focus(), 0);
    }

    #[test]
    fn focus_wraps_without_moving_cursors() {
        let mut s = state();
        s.handle(Command::FocusPrev);
        assert_eq!(s.focused_id(), Some("svm"));
        s.handle(Command::FocusNext);
        assert_eq!(s.focus(), 0);
        assert_eq!(cursors(&s), vec![0, 0, 0]);
    }
}

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Keys while the entry field is NOT focused. Space is the pop key here and
/// only here: once focus moves into the field it types a literal space.
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char(' ') => app.pop_task(now),
        KeyCode::Char('i') | KeyCode::Enter => {
            app.mode = Mode::Insert;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

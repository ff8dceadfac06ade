mod insert;
mod navigate;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Until boot finishes the view is not interactive: keys neither edit
    // the entry field nor touch the stack. Quit still works.
    if app.is_booting() {
        if key.code == KeyCode::Char('q') {
            app.should_quit = true;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key, now),
        Mode::Insert => insert::handle_insert(app, key, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stack;
    use crate::tui::theme::Theme;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    pub(super) fn ready_app() -> App {
        let mut app = App::new(
            Stack::default(),
            Theme::default(),
            PathBuf::from("/nonexistent/voidstack/stack.json"),
            Instant::now(),
        );
        app.boot.skip();
        app
    }

    pub(super) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub(super) fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn keys_during_boot_do_not_mutate() {
        let mut app = App::new(
            Stack::default(),
            Theme::default(),
            PathBuf::from("/nonexistent/voidstack/stack.json"),
            Instant::now(),
        );
        assert!(app.is_booting());

        handle_key(&mut app, key(KeyCode::Char(' ')), Instant::now());
        handle_key(&mut app, key(KeyCode::Char('x')), Instant::now());
        handle_key(&mut app, key(KeyCode::Enter), Instant::now());

        assert_eq!(app.stack.len(), 0);
        assert!(app.input.is_empty());
        assert_eq!(app.mode, Mode::Navigate);
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_works_during_boot() {
        let mut app = App::new(
            Stack::default(),
            Theme::default(),
            PathBuf::from("/nonexistent/voidstack/stack.json"),
            Instant::now(),
        );
        handle_key(&mut app, key(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let mut app = ready_app();
        handle_key(&mut app, ctrl('c'), Instant::now());
        assert!(app.should_quit);

        let mut app = ready_app();
        app.mode = Mode::Insert;
        handle_key(&mut app, ctrl('c'), Instant::now());
        assert!(app.should_quit);
    }
}

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::text;

/// Keys while the entry field is focused. Enter commits the field as a
/// push; every printable character, Space included, edits the buffer.
/// Editing is grapheme-aware: the cursor never lands inside a cluster.
pub(super) fn handle_insert(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('w') => delete_word_left(app),
            KeyCode::Char('u') => {
                app.input.replace_range(..app.cursor, "");
                app.cursor = 0;
            }
            KeyCode::Char('a') => app.cursor = 0,
            KeyCode::Char('e') => app.cursor = app.input.len(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.push_task(now),
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Char(c) => {
            app.input.insert(app.cursor, c);
            app.cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if let Some(prev) = text::prev_grapheme_boundary(&app.input, app.cursor) {
                app.input.replace_range(prev..app.cursor, "");
                app.cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = text::next_grapheme_boundary(&app.input, app.cursor) {
                app.input.replace_range(app.cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = text::prev_grapheme_boundary(&app.input, app.cursor) {
                app.cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = text::next_grapheme_boundary(&app.input, app.cursor) {
                app.cursor = next;
            }
        }
        KeyCode::Home => app.cursor = 0,
        KeyCode::End => app.cursor = app.input.len(),
        _ => {}
    }
}

fn delete_word_left(app: &mut App) {
    let start = text::word_boundary_left(&app.input, app.cursor);
    app.input.replace_range(start..app.cursor, "");
    app.cursor = start;
}

use std::path::PathBuf;
use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::model::{Stack, Task};
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render the app into an in-memory buffer and return plain text (no styles).
pub fn render_app(w: u16, h: u16, app: &App) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| super::render(frame, app))
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app that is still on the boot screen (nothing emitted yet).
pub fn booting_app() -> App {
    App::new(
        Stack::default(),
        Theme::default(),
        PathBuf::from("/nonexistent/voidstack/stack.json"),
        Instant::now(),
    )
}

/// An app past its boot sequence, with an empty stack.
pub fn ready_app() -> App {
    let mut app = booting_app();
    app.boot.skip();
    app
}

/// An app past boot with the given tasks; the LAST text is the top of the
/// stack. Timestamps are fixed so renders are deterministic.
pub fn app_with_tasks(texts: &[&str]) -> App {
    let tasks: Vec<Task> = texts
        .iter()
        .rev()
        .enumerate()
        .map(|(i, text)| Task {
            id: 1_700_000_000_000 + i as i64,
            text: (*text).to_string(),
            timestamp: "12:00:00".into(),
        })
        .collect();
    let mut app = ready_app();
    app.stack = Stack::new(tasks);
    app
}

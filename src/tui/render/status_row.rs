use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

const FOOTER: &str = concat!(
    "VOID_STACK v",
    env!("CARGO_PKG_VERSION"),
    " | CYBERPUNK TERMINAL MODE"
);

/// Render the status row (bottom of screen): mode on the left, the app
/// tagline on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mode_label = match app.mode {
        // Empty in navigate mode (clean, like vim normal mode)
        Mode::Navigate => "",
        Mode::Insert => "-- INSERT --",
    };

    let mut spans = vec![Span::styled(
        format!(" {}", mode_label),
        Style::default().fg(app.theme.accent).bg(bg),
    )];

    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let footer_width = FOOTER.chars().count() + 1;
    if content_width + footer_width < width {
        let padding = width - content_width - footer_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            FOOTER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

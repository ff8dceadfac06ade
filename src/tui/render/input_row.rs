use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

const PLACEHOLDER: &str = "ENTER NEW TASK...";

/// Render the entry field and the key hint beneath it.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let field = if app.mode == Mode::Insert {
        // Split at the cursor and draw a block cursor between the halves
        let before = &app.input[..app.cursor];
        let after = &app.input[app.cursor..];
        Line::from(vec![
            Span::styled("> ", Style::default().fg(app.theme.accent)),
            Span::styled(
                before.to_string(),
                Style::default().fg(app.theme.text_bright),
            ),
            Span::styled("\u{258C}", Style::default().fg(app.theme.accent)), // ▌ cursor
            Span::styled(
                after.to_string(),
                Style::default().fg(app.theme.text_bright),
            ),
        ])
    } else if app.input.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(app.theme.dim)),
            Span::styled(PLACEHOLDER, Style::default().fg(app.theme.dim)),
        ])
    } else {
        // Blurred with a draft in the buffer
        Line::from(vec![
            Span::styled("> ", Style::default().fg(app.theme.dim)),
            Span::styled(app.input.clone(), Style::default().fg(app.theme.text)),
        ])
    };

    let hint = Line::from(Span::styled(
        "ENTER: PUSH | SPACE: POP",
        Style::default().fg(app.theme.dim),
    ));

    let lines = vec![field, Line::from(""), hint];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

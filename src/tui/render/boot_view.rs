use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the boot screen: emitted messages, then the title beneath.
/// Messages appear one at a time as the sequence ticks.
pub fn render_boot_view(frame: &mut Frame, app: &App, area: Rect) {
    let messages = app.boot.messages();

    let mut lines: Vec<Line> = Vec::new();
    for message in messages {
        lines.push(Line::from(Span::styled(
            *message,
            Style::default().fg(app.theme.text),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "VOID_STACK",
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    )));

    // Center the block vertically
    let height = area.height as usize;
    let top_pad = height.saturating_sub(lines.len()) / 2;
    let mut padded: Vec<Line> = std::iter::repeat_with(|| Line::from(""))
        .take(top_pad)
        .collect();
    padded.extend(lines);

    let paragraph = Paragraph::new(padded)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

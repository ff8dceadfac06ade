use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::text::{display_width, truncate_to_width};

/// How many hidden tasks get a decorative depth row under the top card
const MAX_DEPTH_ROWS: usize = 3;

const MIN_CARD_WIDTH: usize = 30;

/// Render the stack display: the top task as a card, depth rows for what's
/// buried beneath it, and the stack size. The depth rows carry no data of
/// their own; only the top of a LIFO stack is visible.
pub fn render_stack_view(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    match app.stack.peek() {
        None => {
            lines.push(Line::from(Span::styled(
                "STACK EMPTY",
                Style::default()
                    .fg(app.theme.text_bright)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "ADD A TASK TO BEGIN",
                Style::default().fg(app.theme.dim),
            )));
        }
        Some(top) => {
            let max_card = (area.width as usize).saturating_sub(6).max(MIN_CARD_WIDTH);
            let text = truncate_to_width(&top.text, max_card - 4);
            let added = truncate_to_width(&format!("ADDED: {}", top.timestamp), max_card - 4);
            let inner = display_width(&text).max(display_width(&added)).max(MIN_CARD_WIDTH - 4);

            let card_style = Style::default().fg(app.theme.text);
            lines.push(card_line(format!("┌{}┐", "─".repeat(inner + 2)), card_style));
            lines.push(card_text_line(&text, inner, app, true));
            lines.push(card_text_line(&added, inner, app, false));
            lines.push(card_line(format!("└{}┘", "─".repeat(inner + 2)), card_style));

            // Depth rows for the buried tasks
            let buried = app.stack.len() - 1;
            for depth in 1..=buried.min(MAX_DEPTH_ROWS) {
                let width = (inner + 4).saturating_sub(depth * 2);
                lines.push(Line::from(Span::styled(
                    "░".repeat(width),
                    Style::default().fg(app.theme.shadow),
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("STACK SIZE: {}", app.stack.len()),
        Style::default().fg(app.theme.text),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn card_line(border: String, style: Style) -> Line<'static> {
    Line::from(Span::styled(border, style))
}

fn card_text_line(text: &str, inner: usize, app: &App, bright: bool) -> Line<'static> {
    let pad = inner.saturating_sub(display_width(text));
    let fg = if bright {
        app.theme.text_bright
    } else {
        app.theme.dim
    };
    Line::from(vec![
        Span::styled("│ ", Style::default().fg(app.theme.text)),
        Span::styled(format!("{}{}", text, " ".repeat(pad)), Style::default().fg(fg)),
        Span::styled(" │", Style::default().fg(app.theme.text)),
    ])
}

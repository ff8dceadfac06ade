pub mod boot_view;
pub mod input_row;
pub mod stack_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function, dispatching to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Boot screen owns the whole frame until the sequence finishes
    if app.is_booting() {
        boot_view::render_boot_view(frame, app, area);
        return;
    }

    // Layout: header | stack display | entry field + hint | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    stack_view::render_stack_view(frame, app, chunks[1]);
    input_row::render_input_row(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
}

/// Title + subtitle, centered
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "VOID_STACK",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "LIFO TASK MANAGEMENT SYSTEM",
            Style::default().fg(app.theme.dim),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

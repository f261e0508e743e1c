//! Loading and load-failure screens.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Percentage(45),
        Constraint::Length(1),
        Constraint::Percentage(45),
    ])
    .split(area);

    let widget = Paragraph::new("Loading quiz...")
        .alignment(Alignment::Center)
        .fg(Color::Yellow);
    frame.render_widget(widget, chunks[1]);
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let rows = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Length(8),
        Constraint::Percentage(35),
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(56),
        Constraint::Fill(1),
    ])
    .split(rows[1]);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[R] ", Style::default().fg(Color::Green).bold()),
            Span::styled("Retry", Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "Press [Q] to exit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, columns[1]);
}

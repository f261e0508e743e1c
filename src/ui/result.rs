use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::session::{Session, Summary};

pub fn render(frame: &mut Frame, area: Rect, session: &Session) {
    let Some(summary) = session.summary() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], summary);
    render_controls(frame, chunks[2]);
}

fn grade_color(percentage: usize) -> Color {
    match percentage {
        90.. => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: Summary) {
    let percentage = summary.percentage();
    let color = grade_color(percentage);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Results",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Your score:".fg(Color::Gray)),
        Line::from(Span::styled(
            format!("{} / {}", summary.score, summary.total),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            format!("({}%)", percentage),
            Style::default().fg(color),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r Try Again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::session::Session;

pub fn render(frame: &mut Frame, area: Rect, session: &Session, cursor: usize) {
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], session);
    render_question_text(frame, chunks[1], &question.text);
    render_options(
        frame,
        chunks[2],
        &question.options,
        session.selected_answer(),
        cursor,
    );
    render_primary_action(frame, chunks[3], session);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, session: &Session) {
    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Length(10)]).split(area);

    let title = Paragraph::new(format!("Question {}", session.current_question_number()))
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, columns[0]);

    let progress = Paragraph::new(format!(
        "{}/{}",
        session.current_question_number(),
        session.total_questions()
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);
    frame.render_widget(progress, columns[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    selected: Option<&str>,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = selected == Some(option.as_str());
        let is_highlighted = index == cursor;

        let style = if is_selected {
            Style::default().fg(Color::Green).bold()
        } else if is_highlighted {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let radio = if is_selected { "(*)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", radio), style),
            Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_primary_action(frame: &mut Frame, area: Rect, session: &Session) {
    let style = if session.can_advance() {
        Style::default().fg(Color::Black).bg(Color::Green).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let widget = Paragraph::new(format!("ENTER  {}", session.advance_label()))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  space or 1-9 choose  ·  enter confirm  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

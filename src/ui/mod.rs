mod quiz;
mod result;
mod status;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, QuizPage, Screen};
use crate::models::Phase;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Landing => welcome::render(frame, area, app.class_id()),
        Screen::Quiz(QuizPage::Loading { .. }) => status::render_loading(frame, area),
        Screen::Quiz(QuizPage::Error(err)) => status::render_error(frame, area, err.user_message()),
        Screen::Quiz(QuizPage::Ready(session)) => match session.phase() {
            Phase::Finished => result::render(frame, area, session),
            _ => quiz::render(frame, area, session, app.cursor()),
        },
    }
}

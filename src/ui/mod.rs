//! Screen renderers. Each reads `App` and draws; none of them mutate it.

mod loading;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Loading => loading::render_loading(frame, area, app),
        AppState::Error => loading::render_error(frame, area, app),
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

/// Draws `content` centred vertically and horizontally in `area`.
fn render_centered(frame: &mut Frame, area: Rect, content: Vec<Line>) {
    let height = content.len() as u16;
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(height),
        Constraint::Percentage(40),
    ])
    .split(area);

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}

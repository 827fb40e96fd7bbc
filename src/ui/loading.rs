use ratatui::prelude::*;

use crate::app::App;
use crate::error::QuizError;

use super::render_centered;

pub fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.language().strings();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings.title,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            strings.loading,
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    render_centered(frame, area, content);
}

pub fn render_error(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.language().strings();
    let message = match app.error() {
        Some(QuizError::InsufficientData { .. }) => strings.not_enough_countries,
        _ => strings.load_error,
    };
    let detail = app.error().map(ToString::to_string).unwrap_or_default();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings.title,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(
            strings.error_controls,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    render_centered(frame, area, content);
}

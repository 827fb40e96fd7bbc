use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.language().strings();
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings.title,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(strings.subtitle(app.total_questions()).fg(Color::DarkGray)),
        Line::from(""),
        Line::from(format!("{}: {}", strings.language_label, app.language()).fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            strings.press_enter,
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(strings.to_start.fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new(strings.welcome_controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

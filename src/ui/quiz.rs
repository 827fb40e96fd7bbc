use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Feedback};
use crate::i18n::Strings;
use crate::models::{Country, Question};

const OPTION_LABELS: [char; 4] = ['1', '2', '3', '4'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };
    let strings = app.language().strings();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app, strings);
    render_flag(frame, chunks[1], question.correct());
    render_options(frame, chunks[2], app, question);
    if let Some(feedback) = app.feedback() {
        render_feedback(frame, chunks[3], app, feedback, strings);
    }
    render_controls(frame, chunks[4], app, strings);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, strings: &Strings) {
    let progress = strings.progress(app.current_question_number(), app.total_questions());
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// Terminals cannot draw the SVG, so the emoji stands in and the image
/// URL is listed beneath it.
fn render_flag(frame: &mut Frame, area: Rect, country: &Country) {
    let mut lines = Vec::with_capacity(2);
    if let Some(emoji) = &country.flag_emoji {
        lines.push(Line::from(Span::styled(emoji.as_str(), Style::default().bold())));
    }
    lines.push(Line::from(Span::styled(
        country.flag_url.as_str(),
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let language = app.language();
    let feedback = app.feedback();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = index == app.selected_option();
        let style = match feedback {
            Some(_) if index == question.correct_index => Style::default().fg(Color::Green).bold(),
            Some(fb) if index == fb.selected_index => Style::default().fg(Color::Red).bold(),
            Some(_) => Style::default().fg(Color::DarkGray),
            None if is_selected => Style::default().fg(Color::Cyan).bold(),
            None => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.display_name(language), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App, feedback: &Feedback, strings: &Strings) {
    let (text, color) = if feedback.outcome.correct {
        (strings.correct.to_string(), Color::Green)
    } else {
        let name = feedback.outcome.correct_answer.display_name(app.language());
        (strings.incorrect(name), Color::Red)
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App, strings: &Strings) {
    let text = if app.feedback().is_some() {
        strings.feedback_controls
    } else {
        strings.quiz_controls
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

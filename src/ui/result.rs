use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::i18n::Strings;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.language().strings();
    let Ok(final_score) = app.session().final_score() else {
        return;
    };
    let percentage = calculate_percentage(final_score.score, final_score.total);
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(
        frame,
        chunks[1],
        strings,
        final_score.score,
        final_score.total,
        percentage,
        grade_color,
    );
    render_flag_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3], strings);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    strings: &Strings,
    score: usize,
    total: usize,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings.results,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            strings.final_score(score, total),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Span::styled(
            format!("{:.0}%", percentage),
            Style::default().fg(grade_color),
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

/// One line per flag: the answer and, when missed, what was picked.
fn render_flag_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let language = app.language();
    let questions = app.session().questions();

    let lines: Vec<Line> = app
        .session()
        .answers()
        .iter()
        .filter_map(|answer| {
            let question = questions.get(answer.question_index)?;
            let (symbol, color) = if answer.correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", answer.question_index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    question.correct().display_name(language).to_string(),
                    Style::default().fg(Color::Gray),
                ),
            ];

            if !answer.correct {
                let picked = question
                    .option_index(&answer.selected_id)
                    .map(|i| question.options[i].display_name(language))
                    .unwrap_or_default();
                spans.push(Span::styled(
                    format!("  ({})", picked),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            Some(Line::from(spans))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.result_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, strings: &Strings) {
    let widget = Paragraph::new(strings.result_controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_color() {
        assert_eq!(get_grade_color(calculate_percentage(10, 10)), Color::Green);
        assert_eq!(get_grade_color(calculate_percentage(7, 10)), Color::Cyan);
        assert_eq!(get_grade_color(calculate_percentage(5, 10)), Color::Yellow);
        assert_eq!(get_grade_color(calculate_percentage(0, 10)), Color::Red);
        assert_eq!(calculate_percentage(0, 0), 0.0);
    }
}

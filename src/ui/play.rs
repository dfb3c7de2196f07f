use crate::app::state::AppState;
use crate::quiz::clock::Scheduler;
use crate::quiz::{AnswerLetter, QUESTIONS_PER_SESSION};
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

pub fn render<S: Scheduler>(frame: &mut Frame, area: Rect, state: &AppState<S>) {
    let Some(question) = state.quiz.current_question() else {
        return;
    };
    let session = state.quiz.session();
    let play = layout::play_layout(area);

    render_header(frame, play.header, state);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let mut lines = vec![
        Line::from(Span::styled(question.text.as_str(), Theme::title())),
        Line::from(""),
    ];
    for letter in AnswerLetter::ALL {
        let selected = letter.index() == state.highlighted;
        let (badge, text) = if selected {
            (Theme::option_letter_selected(), Theme::option_selected())
        } else {
            (Theme::option_letter(), Theme::body())
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "❯ " } else { "  " }, Theme::option_selected()),
            Span::styled(format!(" {} ", letter), badge),
            Span::raw(" "),
            Span::styled(question.option(letter), text),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, play.question);

    let shown = (session.current_index + 1).min(QUESTIONS_PER_SESSION);
    let gauge = Gauge::default()
        .gauge_style(Theme::gauge())
        .ratio(shown as f64 / QUESTIONS_PER_SESSION as f64)
        .label("");
    frame.render_widget(gauge, play.progress);
}

fn render_header<S: Scheduler>(frame: &mut Frame, area: Rect, state: &AppState<S>) {
    let session = state.quiz.session();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let timer_style = if state.low_time() {
        Theme::timer_low()
    } else {
        Theme::timer()
    };

    let cells = [
        ("PROGRESS", state.progress_label(), Style::default().fg(Theme::ACCENT), Alignment::Left),
        ("TIME LEFT", format!("{}s", session.time_remaining), timer_style, Alignment::Center),
        ("SCORE", session.score.to_string(), Theme::score(), Alignment::Right),
    ];
    for ((label, value, style, alignment), column) in cells.into_iter().zip(columns.iter()) {
        let cell = Paragraph::new(vec![
            Line::from(Span::styled(label, Theme::label())),
            Line::from(Span::styled(value, style)),
        ])
        .alignment(alignment);
        frame.render_widget(cell, *column);
    }
}

use crate::app::state::AppState;
use crate::quiz::clock::Scheduler;
use crate::quiz::{QUESTIONS_PER_SESSION, TIME_LIMIT_SECS};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render<S: Scheduler>(frame: &mut Frame, area: Rect, state: &AppState<S>) {
    let block = Block::default()
        .title(" Ready for the challenge? ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::uniform(1));

    let rule = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", label), Theme::label()),
            Span::styled(value, Theme::body()),
        ])
    };

    let mut lines = vec![
        rule("Time limit", format!("{} seconds", TIME_LIMIT_SECS)),
        rule("Questions", format!("{} random questions", QUESTIONS_PER_SESSION)),
        Line::from(vec![
            Span::styled(format!("  {:<12}", "Scoring"), Theme::label()),
            Span::styled("+1", Theme::correct()),
            Span::styled(" for a right answer, ", Theme::body()),
            Span::styled("-1", Theme::incorrect()),
            Span::styled(" for a wrong one", Theme::body()),
        ]),
        rule("Pool", format!("{} questions available", state.quiz.pool().len())),
        Line::from(""),
        Line::from(Span::styled(
            "  Unanswered questions when time runs out score nothing.",
            Theme::secondary(),
        )),
        Line::from(""),
    ];
    lines.push(Line::from(vec![
        Span::styled("  Enter ", Theme::key_hint()),
        Span::styled("start the quiz", Theme::secondary()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  q     ", Theme::key_hint()),
        Span::styled("quit", Theme::secondary()),
    ]));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

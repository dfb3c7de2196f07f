use crate::app::state::AppState;
use crate::quiz::clock::Scheduler;
use crate::quiz::{Breakdown, FinishReason, QUESTIONS_PER_SESSION};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::truncate;
use ratatui::prelude::*;
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState,
};

pub fn render<S: Scheduler>(frame: &mut Frame, area: Rect, state: &AppState<S>) {
    let (Some(summary), Some(breakdown)) = (state.quiz.summary(), state.quiz.breakdown()) else {
        return;
    };
    let results = layout::results_layout(area, state.config.ui.show_review);

    let headline = Line::from(vec![
        Span::styled("Quiz over!  ", Theme::heading()),
        Span::styled("Total score: ", Theme::body()),
        Span::styled(summary.score.to_string(), Theme::score()),
    ]);
    frame.render_widget(Paragraph::new(headline).alignment(Alignment::Center), results.score);

    render_chart(frame, results.chart, &breakdown);
    render_counts(frame, results.counts, &breakdown);

    if state.config.ui.show_review {
        render_review(frame, results.review, state);
    }
}

fn render_chart(frame: &mut Frame, area: Rect, breakdown: &Breakdown) {
    let bar = |label: &'static str, value: usize, color: Color| {
        Bar::default()
            .label(label.into())
            .value(value as u64)
            .text_value(format!("{} ({}%)", value, breakdown.percent(value)))
            .style(Style::default().fg(color))
            .value_style(Style::default().fg(Color::Black).bg(color))
    };

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Breakdown ")
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Theme::border()),
        )
        .data(BarGroup::default().bars(&[
            bar("Correct", breakdown.correct, Theme::CORRECT),
            bar("Incorrect", breakdown.incorrect, Theme::INCORRECT),
            bar("Unanswered", breakdown.unanswered, Theme::UNANSWERED),
        ]))
        .bar_width(10)
        .bar_gap(3)
        .max(QUESTIONS_PER_SESSION as u64);
    frame.render_widget(chart, area);
}

fn render_counts(frame: &mut Frame, area: Rect, breakdown: &Breakdown) {
    let row = |label: &'static str, value: usize, style: Style| {
        Line::from(vec![
            Span::styled(format!(" {:<18}", label), style),
            Span::styled(value.to_string(), style.add_modifier(Modifier::BOLD)),
        ])
    };
    let lines = vec![
        Line::from(""),
        row("Correct answers", breakdown.correct, Theme::correct()),
        Line::from(""),
        row("Wrong answers", breakdown.incorrect, Theme::incorrect()),
        Line::from(""),
        row("Unanswered", breakdown.unanswered, Theme::secondary()),
        Line::from(""),
        row("Total questions", breakdown.total(), Theme::body()),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_review<S: Scheduler>(frame: &mut Frame, area: Rect, state: &AppState<S>) {
    let block = Block::default()
        .title(" Answer review ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let session = state.quiz.session();
    let width = inner.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, record) in session.answer_log.iter().enumerate() {
        let (mark, style) = if record.was_correct {
            ("✓", Theme::correct())
        } else {
            ("✗", Theme::incorrect())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", mark), style),
            Span::styled(
                truncate(&format!("{}. {}", i + 1, record.question_text), width),
                Theme::body(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("     Your answer: ", Theme::secondary()),
            Span::styled(record.chosen.to_string(), style.add_modifier(Modifier::BOLD)),
            Span::styled("   Correct answer: ", Theme::secondary()),
            Span::styled(record.correct.to_string(), Theme::correct().add_modifier(Modifier::BOLD)),
        ]));
    }

    let unanswered = session.unanswered();
    if unanswered > 0 {
        let note = match state.quiz.finish_reason() {
            Some(FinishReason::TimeExpired) => format!(
                "  The remaining {} question(s) went unanswered: you ran out of time.",
                unanswered
            ),
            _ => format!("  {} question(s) went unanswered.", unanswered),
        };
        lines.push(Line::from(Span::styled(note, Theme::unanswered())));
    }

    // Each record takes two lines
    let total = lines.len();
    let visible = inner.height as usize;
    let max_start = total.saturating_sub(visible);
    let start = (state.review_scroll * 2).min(max_start);

    let shown: Vec<Line> = lines.into_iter().skip(start).take(visible).collect();
    frame.render_widget(Paragraph::new(shown), inner);

    if total > visible {
        let mut scrollbar_state = ScrollbarState::new(max_start).position(start);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"));
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

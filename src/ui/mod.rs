mod layout;
mod play;
mod results;
mod start;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::quiz::clock::Scheduler;
use crate::quiz::Status;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render<S: Scheduler>(frame: &mut Frame, state: &AppState<S>) {
    let app_layout = layout::compute_layout(frame.area());

    render_title(frame, app_layout.title);
    match state.status() {
        Status::Start => start::render(frame, app_layout.body, state),
        Status::Playing => play::render(frame, app_layout.body, state),
        Status::Finished => results::render(frame, app_layout.body, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    let title = Paragraph::new(vec![
        Line::from(Span::styled("Elephant Study Quiz", Theme::heading())),
        Line::from(Span::styled("Ten questions, thirty seconds", Theme::secondary())),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(title, area);
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut
/// with an ellipsis.
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::quiz::clock::manual::ManualScheduler;
    use crate::quiz::{QuestionPool, SessionController};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &AppState<ManualScheduler>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        buffer_text(&terminal)
    }

    fn state() -> AppState<ManualScheduler> {
        let quiz = SessionController::new(QuestionPool::builtin(), ManualScheduler::default());
        AppState::new(AppConfig::default(), quiz)
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("elephant", 20), "elephant");
        assert_eq!(truncate("elephant", 8), "elephant");
        assert_eq!(truncate("elephant", 5), "elep…");
        assert_eq!(truncate("大象專題", 5), "大象…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_start_screen_shows_rules() {
        let text = draw(&state());
        assert!(text.contains("Elephant Study Quiz"));
        assert!(text.contains("30 seconds"));
        assert!(text.contains("10 random questions"));
    }

    #[test]
    fn test_play_screen_shows_question() {
        let mut s = state();
        s.quiz.start().unwrap();
        let question = s.quiz.current_question().unwrap().clone();
        let text = draw(&s);
        assert!(text.contains("1 / 10"));
        assert!(text.contains("30s"));
        assert!(text.contains(&question.text));
    }

    #[test]
    fn test_results_screen_shows_breakdown_and_review() {
        let mut s = state();
        s.quiz.start().unwrap();
        let first = s.quiz.current_question().unwrap().text.clone();
        s.quiz.select_option(0).unwrap();
        let epoch = s.quiz.epoch();
        for _ in 0..30 {
            s.quiz.tick(epoch);
        }
        let text = draw(&s);
        assert!(text.contains("Total score"));
        assert!(text.contains("Unanswered"));
        let prefix: String = first.chars().take(20).collect();
        assert!(text.contains(&prefix));
        assert!(text.contains("ran out of time"));
    }
}

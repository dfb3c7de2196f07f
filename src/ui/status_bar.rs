use crate::app::state::AppState;
use crate::quiz::clock::Scheduler;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render<S: Scheduler>(frame: &mut Frame, area: Rect, state: &AppState<S>) {
    let mut parts: Vec<Span> = Vec::new();

    // Rejected events are shown until the next transition
    if let Some(message) = &state.status_message {
        parts.push(Span::styled(format!(" {} ", message), Theme::status_error()));
    }

    let hints = format!(" {} ", state.key_hints());
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(hints, Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

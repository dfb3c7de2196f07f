use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(110, 120, 230);
    pub const CORRECT: Color = Color::Rgb(16, 185, 129);
    pub const INCORRECT: Color = Color::Rgb(239, 68, 68);
    pub const UNANSWERED: Color = Color::Rgb(148, 163, 184);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_MUTED).add_modifier(Modifier::BOLD)
    }

    pub fn body() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn timer() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn timer_low() -> Style {
        Style::default()
            .fg(Self::INCORRECT)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    }

    pub fn score() -> Style {
        Style::default().fg(Self::CORRECT).add_modifier(Modifier::BOLD)
    }

    pub fn option_letter() -> Style {
        Style::default().fg(Color::Black).bg(Self::TEXT_SECONDARY)
    }

    pub fn option_letter_selected() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn option_selected() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn correct() -> Style {
        Style::default().fg(Self::CORRECT)
    }

    pub fn incorrect() -> Style {
        Style::default().fg(Self::INCORRECT)
    }

    pub fn unanswered() -> Style {
        Style::default()
            .fg(Self::UNANSWERED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Self::ACCENT).bg(Color::Rgb(40, 44, 52))
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }
}

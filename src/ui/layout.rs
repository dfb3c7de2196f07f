use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Screen body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        title: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

pub struct PlayLayout {
    pub header: Rect,
    pub question: Rect,
    pub progress: Rect,
}

pub fn play_layout(area: Rect) -> PlayLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress / time / score
            Constraint::Min(6),    // Question and options
            Constraint::Length(1), // Progress gauge
        ])
        .split(area);

    PlayLayout {
        header: chunks[0],
        question: chunks[1],
        progress: chunks[2],
    }
}

pub struct ResultsLayout {
    pub score: Rect,
    pub chart: Rect,
    pub counts: Rect,
    pub review: Rect,
}

pub fn results_layout(area: Rect, show_review: bool) -> ResultsLayout {
    let review_height = if show_review { Constraint::Min(4) } else { Constraint::Length(0) };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Total score
            Constraint::Length(10), // Chart and counts
            review_height,
        ])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    ResultsLayout {
        score: rows[0],
        chart: middle[0],
        counts: middle[1],
        review: rows[2],
    }
}

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::quiz::clock::{Epoch, Scheduler};
use crate::quiz::{AnswerLetter, Status, TickOutcome, Transition};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

/// Apply one event to the state. Runs to completion; the returned actions
/// are carried out by the caller before the next event is taken.
pub fn handle_event<S: Scheduler>(state: &mut AppState<S>, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::ClockTick { epoch } => handle_tick(state, epoch),
    }
}

fn handle_tick<S: Scheduler>(state: &mut AppState<S>, epoch: Epoch) -> Vec<Action> {
    match state.quiz.tick(epoch) {
        TickOutcome::Stale => vec![],
        TickOutcome::Counted { .. } => {
            state.dirty = true;
            vec![]
        }
        TickOutcome::Expired => {
            state.review_scroll = 0;
            state.dirty = true;
            finished_actions(state)
        }
    }
}

fn handle_terminal<S: Scheduler>(state: &mut AppState<S>, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key<S: Scheduler>(state: &mut AppState<S>, key: KeyEvent) -> Vec<Action> {
    // Windows also reports releases
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Char('q') {
        return vec![Action::Quit];
    }

    match state.status() {
        Status::Start => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => start_session(state),
            KeyCode::Esc => vec![Action::Quit],
            _ => vec![],
        },
        Status::Playing => match key.code {
            KeyCode::Up => {
                state.highlight_prev();
                vec![]
            }
            KeyCode::Down => {
                state.highlight_next();
                vec![]
            }
            KeyCode::Enter => {
                let option = state.highlighted;
                answer(state, option)
            }
            KeyCode::Char(c @ '1'..='4') => answer(state, c as usize - '1' as usize),
            KeyCode::Char(c) => match AnswerLetter::from_char(c) {
                Some(letter) => answer(state, letter.index()),
                None => vec![],
            },
            KeyCode::Esc => {
                if let Err(e) = state.quiz.return_home() {
                    state.report_error(&e);
                }
                vec![]
            }
            _ => vec![],
        },
        Status::Finished => match key.code {
            KeyCode::Char('r') | KeyCode::Enter => start_session(state),
            KeyCode::Char('h') | KeyCode::Esc => {
                match state.quiz.return_home() {
                    Ok(()) => state.reset_view(),
                    Err(e) => state.report_error(&e),
                }
                vec![]
            }
            KeyCode::Up => {
                state.scroll_review_up();
                vec![]
            }
            KeyCode::Down => {
                state.scroll_review_down();
                vec![]
            }
            _ => vec![],
        },
    }
}

fn start_session<S: Scheduler>(state: &mut AppState<S>) -> Vec<Action> {
    match state.quiz.start() {
        Ok(()) => state.reset_view(),
        Err(e) => state.report_error(&e),
    }
    vec![]
}

fn answer<S: Scheduler>(state: &mut AppState<S>, option: usize) -> Vec<Action> {
    match state.quiz.select_option(option) {
        Ok(Transition::Continued) => {
            state.highlighted = 0;
            state.status_message = None;
            state.dirty = true;
            vec![]
        }
        Ok(Transition::Finished(reason)) => {
            debug!(?reason, "last question answered");
            state.reset_view();
            finished_actions(state)
        }
        Err(e) => {
            state.report_error(&e);
            vec![]
        }
    }
}

fn finished_actions<S: Scheduler>(state: &AppState<S>) -> Vec<Action> {
    match (state.quiz.summary(), state.quiz.finish_reason()) {
        (Some(summary), Some(reason)) => vec![Action::RecordResult {
            summary: *summary,
            reason,
            answers: state.quiz.session().answer_log.clone(),
        }],
        _ => vec![],
    }
}

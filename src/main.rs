mod app;
mod config;
mod logging;
mod quiz;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::config::expand_home;
use crate::logging::ResultLogger;
use crate::quiz::clock::TokioScheduler;
use crate::quiz::{QuestionPool, SessionController};
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    if let Err(e) = logging::init_tracing(&cfg.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let pool = match &cfg.quiz.questions_file {
        Some(path) => QuestionPool::load(&expand_home(&path.to_string_lossy()))?,
        None => QuestionPool::builtin(),
    };
    info!(questions = pool.len(), "question pool ready");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg, pool).await;

    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    pool: QuestionPool,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut result_logger = ResultLogger::new(&cfg.logging);
    let quiz = SessionController::new(pool, TokioScheduler::new(event_tx.clone()));
    let mut state = AppState::new(cfg, quiz);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });
    drop(event_tx);

    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::RecordResult {
                    summary,
                    reason,
                    answers,
                } => result_logger.record(Local::now(), &summary, reason, &answers),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            state.quiz.shutdown();
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    info!("quiz closed");
    Ok(())
}

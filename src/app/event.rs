use crate::quiz::clock::Epoch;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One second elapsed on the countdown armed for `epoch`
    ClockTick { epoch: Epoch },
}

//! Countdown clock.
//!
//! A [`Scheduler`] arms one repeating one-second tick per session. Every
//! armed clock is represented by a handle that owns an explicit
//! [`CancelToken`]; cancelling the handle (or dropping it) stops the ticks.
//! Ticks carry the [`Epoch`] they were armed for so the controller can
//! discard any that were already queued when their session ended.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

/// Session generation number. Incremented on every `start()`.
pub type Epoch = u64;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub trait Scheduler {
    type Handle: ClockHandle;

    /// Arm a repeating tick for `epoch`. The first tick fires one period
    /// after arming.
    fn arm(&mut self, epoch: Epoch) -> Self::Handle;
}

pub trait ClockHandle {
    fn epoch(&self) -> Epoch;

    /// Stop the clock. Calling it more than once is harmless.
    fn cancel(&mut self);

    fn is_armed(&self) -> bool;
}

/// Revocation flag shared between a clock handle and its tick task.
#[derive(Debug)]
pub struct CancelToken {
    tx: watch::Sender<bool>,
}

impl CancelToken {
    pub fn pair() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, rx)
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Arms clocks as tokio tasks that post [`AppEvent::ClockTick`] into the
/// application event channel.
pub struct TokioScheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    period: Duration,
}

impl TokioScheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            period: TICK_PERIOD,
        }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = CountdownHandle;

    fn arm(&mut self, epoch: Epoch) -> CountdownHandle {
        let (token, cancelled) = CancelToken::pair();
        let task = tokio::spawn(run_ticks(epoch, self.period, cancelled, self.event_tx.clone()));
        debug!(epoch, "countdown armed");
        CountdownHandle { epoch, token, task }
    }
}

async fn run_ticks(
    epoch: Epoch,
    period: Duration,
    mut cancelled: watch::Receiver<bool>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    loop {
        tokio::select! {
            // Err means the token itself was dropped
            changed = cancelled.changed() => {
                if changed.is_err() || *cancelled.borrow() {
                    break;
                }
            }
            _ = interval.tick() => {
                if *cancelled.borrow() {
                    break;
                }
                if event_tx.send(AppEvent::ClockTick { epoch }).is_err() {
                    break;
                }
            }
        }
    }
}

/// A live tokio countdown: the cancel token travels with the task handle.
pub struct CountdownHandle {
    epoch: Epoch,
    token: CancelToken,
    task: JoinHandle<()>,
}

impl ClockHandle for CountdownHandle {
    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn cancel(&mut self) {
        if !self.token.is_cancelled() {
            debug!(epoch = self.epoch, "countdown cancelled");
        }
        self.token.cancel();
        self.task.abort();
    }

    fn is_armed(&self) -> bool {
        !self.token.is_cancelled() && !self.task.is_finished()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn drain_ticks(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<Epoch> {
        let mut epochs = Vec::new();
        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::ClockTick { epoch } => epochs.push(epoch),
                other => panic!("unexpected event {:?}", other),
            }
        }
        epochs
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let mut handle = scheduler.arm(4);

        // Nothing fires before the first full period
        time::sleep(Duration::from_millis(900)).await;
        assert!(drain_ticks(&mut rx).is_empty());

        time::sleep(Duration::from_millis(2600)).await;
        assert_eq!(drain_ticks(&mut rx), vec![4, 4, 4]);
        assert!(handle.is_armed());

        handle.cancel();
        time::sleep(Duration::from_secs(10)).await;
        assert!(drain_ticks(&mut rx).is_empty());
        assert!(!handle.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let handle = scheduler.arm(1);
        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(drain_ticks(&mut rx), vec![1]);

        drop(handle);
        time::sleep(Duration::from_secs(5)).await;
        assert!(drain_ticks(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_leaves_single_tick_source() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let mut first = scheduler.arm(1);
        time::sleep(Duration::from_millis(500)).await;
        first.cancel();
        let _second = scheduler.arm(2);

        time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(drain_ticks(&mut rx), vec![2, 2]);
    }

    #[test]
    fn test_cancel_token() {
        let (token, rx) = CancelToken::pair();
        assert!(!token.is_cancelled());
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
        assert!(*rx.borrow());
    }
}

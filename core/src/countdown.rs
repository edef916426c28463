//! Cosmetic per-second counter shown while a lookup is in flight.
//!
//! The counter has no say over the request: it neither times it out nor
//! cancels it. Its task stops on its own at zero and is aborted when the
//! [`Countdown`] handle is dropped, so it can never outlive its owner.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

pub struct Countdown {
    rx: mpsc::Receiver<u8>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Spawns the ticking task. Must be called inside a tokio runtime.
    pub fn start(from: u8) -> Self {
        let (tx, rx) = mpsc::channel(usize::from(from).max(1));

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(TICK);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick completes immediately
            ticker.tick().await;

            let mut left = from;
            while left > 0 {
                ticker.tick().await;
                left -= 1;
                if tx.send(left).await.is_err() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// Waits for the next second. Returns the new remaining value, or `None`
    /// once the counter has reached zero and every tick was consumed.
    pub async fn next_tick(&mut self) -> Option<u8> {
        self.rx.recv().await
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

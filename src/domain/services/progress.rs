#[cfg(test)]
#[path = "progress_test.rs"]
mod tests;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::models::Event;

pub const PROGRESS_TICK_MS: u64 = 500;
pub const PROGRESS_DURATION_MS: u64 = 5000;

/// How much one tick raises a message's progress: sized so the bar reaches
/// 100 when the target duration elapses with no real response.
pub fn tick_increment() -> f64 {
    return 100.0 * PROGRESS_TICK_MS as f64 / PROGRESS_DURATION_MS as f64;
}

/// Cosmetic progress for one instruction message. The task is independent of
/// the real request: it ticks until its own target duration elapses and is
/// never cancelled early, the real response simply overwrites the message.
pub struct ProgressSimulator {}

impl ProgressSimulator {
    pub fn start(id: usize, tx: mpsc::UnboundedSender<Event>) -> JoinHandle<()> {
        return tokio::spawn(async move {
            let mut elapsed = 0;
            while elapsed < PROGRESS_DURATION_MS {
                time::sleep(Duration::from_millis(PROGRESS_TICK_MS)).await;
                elapsed += PROGRESS_TICK_MS;
                if tx.send(Event::InstructionProgress { id }).is_err() {
                    return;
                }
            }
        });
    }
}

//! Time sources for delayed battle continuations.

use std::time::Duration;

/// Waits out the delay of a pending continuation before it fires.
pub trait Scheduler {
    fn wait(&mut self, delay: Duration);
}

/// Fires every continuation immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantScheduler;

impl Scheduler for InstantScheduler {
    fn wait(&mut self, _delay: Duration) {}
}

/// Blocks the current thread for the real delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepScheduler;

impl Scheduler for SleepScheduler {
    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Records requested delays without waiting.
#[derive(Debug, Default, Clone)]
pub struct RecordingScheduler {
    pub waits: Vec<Duration>,
}

impl Scheduler for RecordingScheduler {
    fn wait(&mut self, delay: Duration) {
        self.waits.push(delay);
    }
}

impl RecordingScheduler {
    pub fn total(&self) -> Duration {
        self.waits.iter().sum()
    }
}

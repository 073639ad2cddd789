//! Scope timer for reporting how long a search or perft took.

use std::time::{Duration, Instant};

/// Logs the elapsed time at info level when stopped or dropped.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    reported: bool,
}

impl Timer {
    #[must_use]
    pub fn start() -> Self {
        Timer {
            start: Instant::now(),
            reported: false,
        }
    }

    /// Time since the timer started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log the duration and stop reporting.
    pub fn stop(mut self) -> Duration {
        self.report()
    }

    fn report(&mut self) -> Duration {
        let elapsed = self.elapsed();
        if !self.reported {
            self.reported = true;
            log::info!("Duration: {} ms", elapsed.as_millis());
        }
        elapsed
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.report();
    }
}

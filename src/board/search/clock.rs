use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Wall-clock budget for one search plus an external stop flag.
///
/// The deadline sits behind a mutex so a driver thread can extend or cut
/// it while the search runs; the stop flag can be shared the same way via
/// [`SearchClock::stop_handle`].
#[derive(Debug)]
pub struct SearchClock {
    start_time: Instant,
    deadline: Mutex<Option<Instant>>,
    stop: Arc<AtomicBool>,
}

impl SearchClock {
    /// Start a clock now; `None` means no time limit.
    #[must_use]
    pub fn new(budget: Option<Duration>) -> Self {
        Self::with_stop(budget, Arc::new(AtomicBool::new(false)))
    }

    #[must_use]
    pub fn with_stop(budget: Option<Duration>, stop: Arc<AtomicBool>) -> Self {
        let start_time = Instant::now();
        SearchClock {
            start_time,
            deadline: Mutex::new(budget.map(|b| start_time + b)),
            stop,
        }
    }

    #[must_use]
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        *self.deadline.lock()
    }

    pub fn set_deadline(&self, deadline: Option<Instant>) {
        *self.deadline.lock() = deadline;
    }

    /// Push the deadline back by `extra`. No effect on an unlimited clock.
    pub fn extend(&self, extra: Duration) {
        let mut deadline = self.deadline.lock();
        if let Some(d) = deadline.as_mut() {
            *d += extra;
        }
    }

    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Raise the external stop flag.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Whether the time budget has run out.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.deadline().is_some_and(|d| Instant::now() >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_is_expired_immediately() {
        let clock = SearchClock::new(Some(Duration::ZERO));
        assert!(clock.is_expired());
        assert!(!clock.is_stopped());
    }

    #[test]
    fn unlimited_never_expires() {
        let clock = SearchClock::unlimited();
        assert!(!clock.is_expired());
        clock.extend(Duration::from_secs(1));
        assert!(clock.deadline().is_none());
    }

    #[test]
    fn extend_moves_deadline() {
        let clock = SearchClock::new(Some(Duration::ZERO));
        clock.extend(Duration::from_secs(3600));
        assert!(!clock.is_expired());
    }

    #[test]
    fn stop_flag_is_shared() {
        let clock = SearchClock::unlimited();
        let handle = clock.stop_handle();
        handle.store(true, Ordering::Relaxed);
        assert!(clock.is_stopped());
    }
}

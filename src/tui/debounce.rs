use std::time::{Duration, Instant};

/// Quiet period before a mutation is written back to the store.
pub const SAVE_DELAY: Duration = Duration::from_millis(100);

/// Single-handle save debouncer. Arming replaces any pending deadline, so a
/// burst of mutations produces exactly one write carrying the final state.
#[derive(Debug, Default)]
pub struct SaveDebouncer {
    deadline: Option<Instant>,
}

impl SaveDebouncer {
    /// Schedule (or reschedule) the write SAVE_DELAY from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + SAVE_DELAY);
    }

    /// True exactly once per elapsed deadline; clears the handle.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Release the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_after_delay() {
        let t0 = Instant::now();
        let mut saver = SaveDebouncer::default();
        saver.arm(t0);

        assert!(!saver.fire_due(t0 + ms(99)));
        assert!(saver.fire_due(t0 + ms(100)));
        // Handle cleared: no second fire
        assert!(!saver.fire_due(t0 + ms(200)));
        assert!(!saver.is_pending());
    }

    #[test]
    fn rearming_supersedes_pending_deadline() {
        let t0 = Instant::now();
        let mut saver = SaveDebouncer::default();
        saver.arm(t0);
        saver.arm(t0 + ms(50)); // burst: second mutation inside the window

        // The original deadline no longer fires
        assert!(!saver.fire_due(t0 + ms(100)));
        // Only the superseding one does
        assert!(saver.fire_due(t0 + ms(150)));
        assert!(!saver.fire_due(t0 + ms(300)));
    }

    #[test]
    fn cancelled_never_fires() {
        let t0 = Instant::now();
        let mut saver = SaveDebouncer::default();
        saver.arm(t0);
        saver.cancel();
        assert!(!saver.fire_due(t0 + ms(1000)));
    }

    #[test]
    fn unarmed_never_fires() {
        let mut saver = SaveDebouncer::default();
        assert!(!saver.fire_due(Instant::now()));
    }
}

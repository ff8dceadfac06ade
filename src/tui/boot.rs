use std::time::{Duration, Instant};

/// The fixed startup banner, emitted one line at a time.
pub const BOOT_MESSAGES: [&str; 4] = [
    concat!("VOID_STACK v", env!("CARGO_PKG_VERSION"), " INITIALIZING..."),
    "LOADING TASK MANAGEMENT PROTOCOL...",
    "LIFO STACK SYSTEM READY",
    "WELCOME TO THE VOID",
];

/// Cadence between boot messages.
pub const MESSAGE_CADENCE: Duration = Duration::from_millis(800);

/// Delay after the last message before the UI becomes interactive.
pub const READY_LINGER: Duration = Duration::from_millis(1000);

/// Timed one-shot boot sequence. Runs once per session; once done it stays
/// done. All timing flows through `tick(now)` so the sequence is
/// deterministic under test and trivially cancellable: `cancel` drops the
/// pending deadline and nothing is ever emitted again.
#[derive(Debug)]
pub struct BootSequence {
    emitted: usize,
    /// Next pending deadline; None once done or cancelled.
    deadline: Option<Instant>,
    done: bool,
}

impl BootSequence {
    pub fn new(now: Instant) -> Self {
        BootSequence {
            emitted: 0,
            deadline: Some(now + MESSAGE_CADENCE),
            done: false,
        }
    }

    /// Advance past any elapsed deadlines, emitting messages in order.
    /// Returns true if visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(at) = self.deadline {
            if now < at {
                break;
            }
            if self.emitted < BOOT_MESSAGES.len() {
                self.emitted += 1;
                // Deadlines chain from the elapsed one, not from `now`:
                // a late tick still emits every overdue message.
                self.deadline = if self.emitted == BOOT_MESSAGES.len() {
                    Some(at + READY_LINGER)
                } else {
                    Some(at + MESSAGE_CADENCE)
                };
            } else {
                self.done = true;
                self.deadline = None;
            }
            changed = true;
        }
        changed
    }

    /// Release the pending deadline. After this, no further messages are
    /// emitted and the sequence never completes.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Jump straight to the end: all messages emitted, sequence done.
    pub fn skip(&mut self) {
        self.emitted = BOOT_MESSAGES.len();
        self.deadline = None;
        self.done = true;
    }

    pub fn is_booting(&self) -> bool {
        !self.done
    }

    /// The messages emitted so far, in order.
    pub fn messages(&self) -> &'static [&'static str] {
        &BOOT_MESSAGES[..self.emitted]
    }
}

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A single stacked task. Immutable once created; never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation time in Unix milliseconds. Doubles as the task's identity.
    pub id: i64,
    /// Task text, already trimmed.
    pub text: String,
    /// Human-readable local creation time ("HH:MM:SS").
    pub timestamp: String,
}

impl Task {
    /// Create a task stamped with the current wall clock. Callers are
    /// responsible for trimming; the stack rejects empty text before this.
    pub fn new(text: impl Into<String>) -> Self {
        let now = Local::now();
        Task {
            id: now.timestamp_millis(),
            text: text.into(),
            timestamp: now.format("%H:%M:%S").to_string(),
        }
    }
}

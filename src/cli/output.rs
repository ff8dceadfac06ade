use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: i64,
    pub text: String,
    pub timestamp: String,
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        TaskJson {
            id: task.id,
            text: task.text.clone(),
            timestamp: task.timestamp.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct StackJson {
    pub size: usize,
    pub tasks: Vec<TaskJson>,
}

/// Envelope for pop/peek: `task` is null on an empty stack.
#[derive(Serialize)]
pub struct TopJson {
    pub task: Option<TaskJson>,
    pub size: usize,
}

#[derive(Serialize)]
pub struct ClearedJson {
    pub cleared: usize,
}

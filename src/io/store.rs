use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Error type for store writes. Loads never fail: a bad store is absorbed
/// and the caller starts from an empty stack.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not serialize stack: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Get the store file path, respecting XDG_DATA_HOME.
pub fn store_path() -> PathBuf {
    let data_dir = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    data_dir.join("voidstack").join("stack.json")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the persisted stack from a specific path, top-of-stack first.
/// A missing or unreadable file yields an empty stack. A corrupt file is
/// backed up as .bak and the stack starts empty; the next save overwrites it.
pub fn load_tasks_from(path: &Path) -> Vec<Task> {
    if !path.exists() {
        return Vec::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => tasks,
            Err(e) => {
                let bak = path.with_extension("json.bak");
                let _ = fs::copy(path, &bak);
                tracing::warn!(
                    "could not parse {} (backed up as {}): {}",
                    path.display(),
                    bak.display(),
                    e
                );
                Vec::new()
            }
        },
        Err(e) => {
            tracing::warn!("could not read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Read the persisted stack from the default location.
pub fn load_tasks() -> Vec<Task> {
    load_tasks_from(&store_path())
}

/// Write the full stack to a specific path, overwriting any prior value.
/// The write is atomic: a crash mid-save never leaves a half-written
/// store behind.
pub fn save_tasks_to(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, content.as_bytes())?;
    Ok(())
}

/// Write the full stack to the default location.
pub fn save_tasks(tasks: &[Task]) -> Result<(), StoreError> {
    save_tasks_to(&store_path(), tasks)
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

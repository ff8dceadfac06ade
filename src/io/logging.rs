use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Get the log file path, respecting XDG_STATE_HOME.
pub fn log_path() -> PathBuf {
    let state_dir = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("state"));
    state_dir.join("voidstack").join("voidstack.log")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Install the tracing subscriber when VOIDSTACK_LOG is set (its value is
/// the filter, e.g. "voidstack=debug"). Diagnostics go to a log file:
/// stderr belongs to the terminal UI. Without VOIDSTACK_LOG, events are
/// dropped.
pub fn init() {
    let Ok(filter) = std::env::var("VOIDSTACK_LOG") else {
        return;
    };
    let path = log_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::{config_io, store};
use crate::model::Stack;

use super::boot::BootSequence;
use super::debounce::SaveDebouncer;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode. This is the focus model: `Insert` means the
/// entry field has focus, `Navigate` means it does not. All key
/// arbitration hangs off this one flag: Enter pushes only in Insert,
/// Space pops only in Navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Insert,
}

/// Main application state
pub struct App {
    pub stack: Stack,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Entry field contents
    pub input: String,
    /// Byte offset of the entry-field cursor
    pub cursor: usize,
    /// Startup banner; gates interactivity until done
    pub boot: BootSequence,
    /// The single outstanding write-back handle
    pub saver: SaveDebouncer,
    /// Stack has mutations not yet persisted
    pub dirty: bool,
    pub store_path: PathBuf,
}

impl App {
    pub fn new(stack: Stack, theme: Theme, store_path: PathBuf, now: Instant) -> Self {
        App {
            stack,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            input: String::new(),
            cursor: 0,
            boot: BootSequence::new(now),
            saver: SaveDebouncer::default(),
            dirty: false,
            store_path,
        }
    }

    pub fn is_booting(&self) -> bool {
        self.boot.is_booting()
    }

    /// Push the entry field's contents as a new task. Whitespace-only input
    /// is a silent no-op and the field keeps its contents; on a real push
    /// the field is cleared.
    pub fn push_task(&mut self, now: Instant) {
        if self.input.trim().is_empty() {
            return;
        }
        let raw = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.stack.push_text(&raw);
        self.schedule_save(now);
    }

    /// Pop the top task. Empty stack is a no-op (and schedules no write).
    pub fn pop_task(&mut self, now: Instant) {
        if self.stack.pop().is_some() {
            self.schedule_save(now);
        }
    }

    fn schedule_save(&mut self, now: Instant) {
        self.dirty = true;
        self.saver.arm(now);
    }

    /// Advance timers: boot emission and the pending write-back.
    pub fn tick(&mut self, now: Instant) {
        self.boot.tick(now);
        if self.saver.fire_due(now) {
            self.flush();
        }
    }

    /// Write the stack out now. Failures are logged and dropped; the dirty
    /// flag stays set so a later flush can retry.
    pub fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        match store::save_tasks_to(&self.store_path, self.stack.tasks()) {
            Ok(()) => self.dirty = false,
            Err(e) => {
                tracing::warn!("could not save {}: {}", self.store_path.display(), e);
            }
        }
    }

    /// Release all pending timers. Called before the app goes away so no
    /// timer fires against torn-down state.
    pub fn teardown(&mut self) {
        self.boot.cancel();
        self.saver.cancel();
    }
}

/// Run the TUI application
pub fn run(store_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let store_path = match store_override {
        Some(p) => p.to_path_buf(),
        None => store::store_path(),
    };

    // The stack loads once, up front; the boot sequence only gates the view
    let tasks = store::load_tasks_from(&store_path);
    let config = config_io::read_config();
    let theme = Theme::from_config(&config.ui);
    let mut app = App::new(Stack::new(tasks), theme, store_path, Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Release timers, then persist anything a cancelled debounce would drop
    app.teardown();
    app.flush();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll keeps the boot cadence and save debounce responsive
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn test_app(dir: &TempDir) -> App {
        let store_path = dir.path().join("stack.json");
        App::new(
            Stack::default(),
            Theme::default(),
            store_path,
            Instant::now(),
        )
    }

    #[test]
    fn push_clears_input_and_prepends() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.input = "deploy the thing".into();
        app.cursor = app.input.len();

        app.push_task(Instant::now());

        assert_eq!(app.stack.len(), 1);
        assert_eq!(app.stack.peek().unwrap().text, "deploy the thing");
        assert!(app.input.is_empty());
        assert_eq!(app.cursor, 0);
        assert!(app.saver.is_pending());
    }

    #[test]
    fn whitespace_push_is_noop_and_keeps_input() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.input = "   ".into();
        app.cursor = 3;

        app.push_task(Instant::now());

        assert_eq!(app.stack.len(), 0);
        assert_eq!(app.input, "   ");
        assert!(!app.saver.is_pending());
    }

    #[test]
    fn pop_empty_schedules_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.pop_task(Instant::now());
        assert!(!app.saver.is_pending());
        assert!(!app.dirty);
    }

    #[test]
    fn burst_of_mutations_persists_once_with_final_state() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        let t0 = Instant::now();

        app.input = "X".into();
        app.push_task(t0);
        app.input = "Y".into();
        app.push_task(t0 + ms(50)); // inside the debounce window

        // First deadline superseded: nothing on disk yet
        app.tick(t0 + ms(100));
        assert!(!app.store_path.exists());

        // Superseding deadline fires with the final state
        app.tick(t0 + ms(150));
        let saved = store::load_tasks_from(&app.store_path);
        let texts: Vec<&str> = saved.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Y", "X"]);
        assert!(!app.dirty);

        // No further writes pending
        assert!(!app.saver.is_pending());
    }

    #[test]
    fn no_write_before_first_mutation() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.tick(Instant::now() + ms(5000));
        assert!(!app.store_path.exists());
    }

    #[test]
    fn teardown_cancels_pending_write_and_flush_persists() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        let t0 = Instant::now();
        app.input = "last words".into();
        app.push_task(t0);

        app.teardown();
        assert!(!app.saver.is_pending());
        // The timer is gone, but the exit flush still lands the state
        app.flush();
        let saved = store::load_tasks_from(&app.store_path);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].text, "last words");
    }

    #[test]
    fn flush_without_dirty_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.flush();
        assert!(!app.store_path.exists());
    }

    #[test]
    fn adopts_loaded_stack_independent_of_boot() {
        let tmp = TempDir::new().unwrap();
        let store_path = tmp.path().join("stack.json");
        let seeded = vec![Task {
            id: 1,
            text: "carried over".into(),
            timestamp: "09:00:00".into(),
        }];
        store::save_tasks_to(&store_path, &seeded).unwrap();

        let tasks = store::load_tasks_from(&store_path);
        let app = App::new(
            Stack::new(tasks),
            Theme::default(),
            store_path,
            Instant::now(),
        );
        // Still booting, stack already live
        assert!(app.is_booting());
        assert_eq!(app.stack.len(), 1);
    }
}

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use appy::core::action::{Action, update};
use appy::core::checks::{EnvironmentCheck, SystemChecks};
use appy::core::error::AppError;
use appy::core::state::{App, AppState};
use appy::tui;
use appy::tui::event::{InputSource, KeyPress};
use appy::tui::shutdown::{ShutdownFlag, terminate};
use appy::tui::terminal::{TerminalMode, TerminalSession};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::backend::TestBackend;

// ============================================================================
// Helper Types
// ============================================================================

#[derive(Clone, Default)]
struct CountingMode {
    leaves: Rc<Cell<usize>>,
}

impl TerminalMode for CountingMode {
    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        self.leaves.set(self.leaves.get() + 1);
        Ok(())
    }
}

/// `idle` empty polls, then Ctrl+C on every poll after that.
struct IdleInput {
    idle: usize,
    polls: usize,
}

impl IdleInput {
    fn new(idle: usize) -> Self {
        Self { idle, polls: 0 }
    }
}

impl InputSource for IdleInput {
    fn poll(&mut self) -> io::Result<Option<KeyPress>> {
        self.polls += 1;
        if self.idle > 0 {
            self.idle -= 1;
            return Ok(None);
        }
        Ok(Some(KeyPress::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
    }
}

struct BrokenEnvironment;

impl EnvironmentCheck for BrokenEnvironment {
    fn run(&self) -> Result<(), AppError> {
        Err(AppError::Initialization)
    }
}

struct Finished {
    app: App,
    code: u8,
    stdout: String,
    stderr: String,
    banner_row: String,
    leaves: usize,
}

/// Runs the whole shell against a test backend, the way `main` does.
async fn run_shell<C: EnvironmentCheck>(
    checks: &C,
    mut app: App,
    shutdown: ShutdownFlag,
    idle_polls: usize,
) -> Finished {
    let mode = CountingMode::default();
    let leaves = mode.leaves.clone();
    let mut session = TerminalSession::acquire(TestBackend::new(100, 10), mode).unwrap();
    let mut input = IdleInput::new(idle_polls);

    tui::run(
        &mut session,
        &mut input,
        checks,
        &mut app,
        &shutdown,
        Duration::ZERO,
    )
    .await
    .unwrap();

    let banner_row: String = {
        let buffer = session.terminal().backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect()
    };

    let mut out: Vec<u8> = Vec::new();
    let mut diag: Vec<u8> = Vec::new();
    let code = terminate(&mut session, &app.outcome, &mut out, &mut diag);
    drop(session);

    Finished {
        app,
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(diag).unwrap(),
        banner_row,
        leaves: leaves.get(),
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_clean_run_then_interrupt() {
    let done = run_shell(&SystemChecks, App::new(), ShutdownFlag::default(), 50).await;

    assert_eq!(
        done.app.visited,
        vec![
            AppState::Initializing,
            AppState::LoadingInfo,
            AppState::Rendering,
            AppState::Finished,
        ]
    );
    assert!(done.banner_row.starts_with(" File   About"));
    assert_eq!(done.code, 0);
    assert_eq!(done.stdout, "Debug exit status: 0\n");
    assert!(done.stderr.is_empty());
    assert_eq!(done.leaves, 1);
}

#[tokio::test]
async fn test_initialization_failure() {
    let done = run_shell(&BrokenEnvironment, App::new(), ShutdownFlag::default(), 50).await;

    assert_ne!(done.code, 0);
    assert_eq!(done.stderr, "Error initializing appy, exiting\n");
    assert_eq!(done.stdout, format!("Debug exit status: {}\n", done.code));
    assert!(!done.app.visited.contains(&AppState::Rendering));
    assert_eq!(done.app.state, AppState::Finished);
    assert!(!done.banner_row.contains("File"));
    assert_eq!(done.leaves, 1);
}

#[tokio::test]
async fn test_injected_invalid_state() {
    let mut app = App::new();
    update(&mut app, Action::InjectState(9));

    let done = run_shell(&SystemChecks, app, ShutdownFlag::default(), 50).await;

    assert_eq!(done.app.state, AppState::Finished);
    assert!(done.app.outcome.is_failure());
    assert_eq!(done.stderr, "Invalid application state, exiting\n");
    assert_eq!(done.stdout, "Debug exit status: 1\n");
}

#[tokio::test]
async fn test_interrupt_before_any_state_restores_once() {
    let shutdown = ShutdownFlag::default();
    shutdown.request();

    let done = run_shell(&SystemChecks, App::new(), shutdown, 50).await;

    assert_eq!(done.app.visited, vec![AppState::Initializing]);
    assert_eq!(done.code, 0);
    assert_eq!(done.stdout, "Debug exit status: 0\n");
    // terminate() released, Drop must not release again
    assert_eq!(done.leaves, 1);
}

// ============================================================================
// Throughput
// ============================================================================

#[tokio::test]
async fn test_idle_polling_never_blocks() {
    const IDLE_POLLS: usize = 20_000;

    let mode = CountingMode::default();
    let mut session = TerminalSession::acquire(TestBackend::new(80, 5), mode).unwrap();
    let mut input = IdleInput::new(IDLE_POLLS);
    let mut app = App::new();

    let start = Instant::now();
    tui::run(
        &mut session,
        &mut input,
        &SystemChecks,
        &mut app,
        &ShutdownFlag::default(),
        Duration::ZERO,
    )
    .await
    .unwrap();
    let elapsed = start.elapsed();

    // Every idle poll plus the final Ctrl+C
    assert_eq!(input.polls, IDLE_POLLS + 1);
    assert!(
        elapsed < Duration::from_secs(5),
        "{IDLE_POLLS} idle ticks took {elapsed:?}"
    );
}

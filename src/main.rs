use std::io::{stderr, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use appy::core::action::{Action, update};
use appy::core::checks::SystemChecks;
use appy::core::config::{self, AppyConfig, CliOverrides, ResolvedConfig};
use appy::core::outcome::ExitOutcome;
use appy::core::state::App;
use appy::tui;
use appy::tui::event::CrosstermInput;
use appy::tui::shutdown::{ShutdownFlag, spawn_interrupt_listener, terminate};
use appy::tui::terminal::{CrosstermMode, TerminalSession};
use clap::Parser;
use log::{error, info};
use ratatui::backend::CrosstermBackend;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "appy", version, about = "Terminal front-end for the pkg package manager")]
struct Args {
    /// Config file (default: ~/.appy/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Pause between loop iterations in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Start from a raw state code (debugging)
    #[arg(long, hide = true)]
    start_state: Option<u8>,
}

fn init_logging(config: &ResolvedConfig) {
    // Logs go to a file: the screen belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}; using defaults");
            AppyConfig::default()
        }
    };
    let cli = CliOverrides {
        log_file: args.log_file,
        log_level: args.log_level,
        tick_ms: args.tick_ms,
    };
    let config = config::resolve(&file_config, &cli);
    init_logging(&config);

    info!("appy starting up with {:?}", config);

    let shutdown = ShutdownFlag::default();
    let _listener = spawn_interrupt_listener(shutdown.clone());
    // Let the listener register before the terminal is taken over
    tokio::task::yield_now().await;

    tui::install_panic_hook();
    let mut session = match TerminalSession::acquire(CrosstermBackend::new(stdout()), CrosstermMode)
    {
        Ok(session) => session,
        Err(e) => {
            error!("Unable to configure terminal: {}", e);
            eprintln!("Unable to configure terminal: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new();
    if let Some(code) = args.start_state {
        update(&mut app, Action::InjectState(code));
    }

    if let Err(e) = tui::run(
        &mut session,
        &mut CrosstermInput,
        &SystemChecks,
        &mut app,
        &shutdown,
        config.tick,
    )
    .await
    {
        error!("Terminal I/O error: {}", e);
        app.outcome = ExitOutcome::failure(format!("Terminal I/O error: {e}"));
    }

    let code = terminate(&mut session, &app.outcome, &mut stdout(), &mut stderr());
    ExitCode::from(code)
}

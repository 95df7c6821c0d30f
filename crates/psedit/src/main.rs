//! psedit entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::io_ops;
use core_config::load_from;
use core_input::CrosstermKeySource;
use core_model::EditorModel;
use core_render::TerminalSurface;
use core_terminal::{CrosstermBackend, TerminalBackend};
use psedit::EditorRuntime;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "psedit.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "psedit", version, about = "Minimal terminal text editor")]
struct Args {
    /// File to edit. A missing file starts an empty buffer saved to this path.
    path: PathBuf,
    /// Configuration file path (overrides discovery of `psedit.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|_| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn run(args: Args) -> Result<()> {
    info!(target: "runtime", path = %args.path.display(), "startup");
    let mut config = load_from(args.config.clone())?;
    let mut state = io_ops::load_state(&args.path)
        .with_context(|| format!("cannot open {}", args.path.display()))?;

    let mut backend = CrosstermBackend::new();
    let (cols, rows) = backend.size()?;
    state.settings = config.apply_viewport_height(rows);
    let title = format!("psedit {}", state.display_name());
    backend.set_title(&title)?;

    let guard = backend.enter_guard()?;
    let (rows, cols) = (usize::from(rows), usize::from(cols));
    let model = EditorModel::new(state, rows, cols);
    let surface = TerminalSurface::stdout(rows, cols);
    let mut runtime = EditorRuntime::new(model, config, CrosstermKeySource::new(), surface);
    let outcome = runtime.run();

    guard.restore().context("cannot restore terminal")?;
    let reason = outcome?;
    info!(target: "runtime", %reason, "exit");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "runtime", error = %format!("{e:#}"), "fatal");
            eprintln!("psedit: {e:#}");
            ExitCode::FAILURE
        }
    }
}

mod cli;
mod config;
mod error;
mod models;

use anyhow::Context;
use clap::Parser;
use cli::{App, Cli, TerminalConsole};
use colored::*;
use config::AppConfig;
use error::AppError;
use models::ApplicationState;
use std::fmt::Debug;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    dotenv::dotenv().ok();

    let args = Cli::parse();

    let settings = AppConfig::load(args.config_dir.clone(), args.log_dir.clone())
        .context("Failed to resolve configuration")?;

    // Logs go to a file so they never land on the interactive screen
    let _log_guard = init_logging(settings.log_dir(), &settings.app_name)?;

    info!("Starting {}", settings.app_name);

    let store = settings.store();
    let mut app =
        App::new(settings, store, TerminalConsole::new()).reset_setup_on_start(args.reset_setup);

    match app.run() {
        Ok(()) => {
            info!("Exited from main menu");
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => Ok(report_fatal(
            &e,
            app.state(),
            &mut io::stdout(),
            &mut io::stderr(),
        )),
    }
}

/// Reports an error that ended the run: `ERROR` and the error on `err`, the state
/// snapshot on `out`. The run is not restarted.
fn report_fatal<S: Debug>(
    e: &AppError,
    state: &ApplicationState<S>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitCode {
    error!(
        "Fatal error (programming error: {}): {:?}",
        e.is_programming_error(),
        e
    );

    // Nothing sensible is left to do if the terminal itself is gone.
    let _ = writeln!(err, "{}", "ERROR".red().bold());
    let _ = writeln!(out, "{:#?}", state);
    let _ = writeln!(err, "{}", e.to_string().red());

    ExitCode::FAILURE
}

fn log_file_name(app_name: &str) -> String {
    format!("{}.log", app_name)
}

fn init_logging(log_dir: &Path, app_name: &str) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name(app_name));
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

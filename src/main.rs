mod action;
mod app;
mod cli;
mod components;
mod config;
mod content;
mod error;
mod input;
mod shelf;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use directories::BaseDirs;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();

    // Keep the appender guard alive for the lifetime of the app.
    let _log_guard = init_logging(&cli);

    let mut app = app::App::with_cli(&cli)?;
    app.run()?;

    Ok(())
}

/// Logs go to a file: stdout belongs to the UI.
fn init_logging(cli: &Cli) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_path = cli.log_file.clone().or_else(default_log_path)?;
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = log_path.file_name()?.to_owned();

    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}

fn default_log_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.data_local_dir().join("alcove").join("alcove.log"))
}

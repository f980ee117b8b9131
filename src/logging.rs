use anyhow::{Context, Result};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the console subscriber and, if requested, a file writer.
///
/// Console output goes to stderr so decoded flags on stdout stay clean. The
/// default level is WARN, raised with `-v` and overridable with `RUST_LOG`.
/// `-q` lowers it to ERROR and `-qq` turns logging off, so the binaries print
/// a failure with `eprintln!` as well as logging it.
/// The file layer records source locations so a saved log points back at the
/// code that emitted each event.
/// Keep the returned guard alive until exit or buffered file lines are lost.
pub fn setup_logging(
    log_file_path: Option<PathBuf>,
    verbosity: &Verbosity<WarnLevel>,
) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let (file_layer, guard) = if let Some(ref path) = log_file_path {
        let log_file = File::create(path)
            .with_context(|| format!("Failed to create log file at: {:?}", path))?;
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(log_file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .with_target(false)
            .with_file(true)
            .with_line_number(true);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(path) = log_file_path {
        info!("Logging to file: {:?}", path);
    }

    Ok(guard)
}

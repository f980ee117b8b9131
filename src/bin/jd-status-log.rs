use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use jacdac_status_rs::logging::setup_logging;
use jacdac_status_rs::status::{CAPTURED_LOG, CAPTURED_LOG_START, FlagLayout, FlagSummary, replay};

/// Replay the captured JACDAC status ring, decoding every slot oldest first.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ring slot to start from (the slot the firmware would write next).
    #[arg(short, long, default_value_t = CAPTURED_LOG_START)]
    start: usize,
    /// Bit layout the ring was recorded with.
    #[arg(short = 'L', long, default_value_t = FlagLayout::Capture)]
    layout: FlagLayout,
    /// Print one JSON object per slot instead of plain lines.
    #[arg(short, long)]
    json: bool,
    /// Print per-flag occurrence counts after the replay.
    #[arg(long)]
    summary: bool,
    /// Optional path to a file to write logs to, in addition to the console.
    #[arg(short, long)]
    log_file: Option<PathBuf>,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match setup_logging(cli.log_file.clone(), &cli.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let table = cli.layout.table();
    let records =
        replay(&CAPTURED_LOG, cli.start, &table).context("Cannot replay status ring")?;
    info!(
        start = cli.start,
        end = records.end(),
        capacity = records.capacity(),
        layout = %cli.layout,
        "Replaying captured status ring"
    );

    let mut summary = FlagSummary::new(&table);
    let mut out = BufWriter::new(io::stdout().lock());

    for record in records {
        if cli.json {
            serde_json::to_writer(&mut out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{record}")?;
        }
        summary.record(&record);
    }

    if cli.summary {
        if cli.json {
            serde_json::to_writer(&mut out, &summary)?;
            writeln!(out)?;
        } else {
            write!(out, "{summary}")?;
        }
    }

    out.flush()?;
    Ok(())
}

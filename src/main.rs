use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, warn};

use jacdac_status_rs::logging::setup_logging;
use jacdac_status_rs::status::{FlagLayout, FlagTable, decode, parse_status_word};

const USAGE_MESSAGE: &str = "Invalid args, this script expects one number";

/// Decode a JACDAC physical-layer status word into its flag names.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// The status word (decimal, or 0x/0o/0b prefixed). Exactly one is expected.
    values: Vec<String>,
    /// Bit layout the status word was produced with.
    #[arg(short = 'L', long, default_value_t = FlagLayout::Decoder)]
    layout: FlagLayout,
    /// Print the result as a JSON object instead of one name per line.
    #[arg(short, long)]
    json: bool,
    /// Print the flag table of the selected layout and exit.
    #[arg(long)]
    list: bool,
    /// Optional path to a file to write logs to, in addition to the console.
    #[arg(short, long)]
    log_file: Option<PathBuf>,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.list && cli.values.len() != 1 {
        println!("{USAGE_MESSAGE}");
        return ExitCode::FAILURE;
    }

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
    debug!(layout = %cli.layout, flags = table.len(), "Loaded flag table");

    if cli.list {
        print_table(&table);
        return Ok(());
    }

    let input = &cli.values[0];
    let word = parse_status_word(input).context("Cannot decode status word")?;
    let flags = decode(word, &table);

    let unknown = table.unknown_bits(word);
    if unknown != 0 {
        warn!(
            layout = %cli.layout,
            "Bits {:#06x} of {:#06x} have no flag in this layout",
            unknown,
            word
        );
    }

    if cli.json {
        let output = serde_json::json!({
            "value": word,
            "layout": cli.layout.to_string(),
            "flags": flags,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for flag in flags {
            println!("{flag}");
        }
    }

    Ok(())
}

fn print_table(table: &FlagTable) {
    for flag in table {
        println!("{flag}");
    }
}

//! CLI tool to toggle an ACH file between split and unsplit layouts.
//!
//! Usage:
//!   ach-toggle <file.ach>
//!   ach-toggle <file.ach> --crlf --atomic
//!
//! The file is overwritten with the opposite layout. Without a file argument
//! the tool does nothing.

use ach_toggle::{LineEnding, RECORD_LENGTH, ToggleOptions, WriteStrategy, toggle_file};
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use log::LevelFilter;
use std::path::PathBuf;
use std::process;

/// Toggle an ACH file between one-record-per-line and single-line layouts.
#[derive(Parser)]
#[command(name = "ach-toggle")]
struct Cli {
    /// ACH file to toggle in place
    file: Option<PathBuf>,

    /// End lines with CRLF when splitting
    #[arg(long)]
    crlf: bool,

    /// Write to a temporary file and rename it over the original
    #[arg(long)]
    atomic: bool,

    /// Fixed record length in bytes
    #[arg(
        long,
        default_value_t = RECORD_LENGTH,
        hide = true,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    record_length: usize,

    /// Log each step on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn).parse_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let Some(path) = cli.file else {
        return;
    };

    let opts = ToggleOptions {
        record_len: cli.record_length,
        line_ending: if cli.crlf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        },
        write_strategy: if cli.atomic {
            WriteStrategy::AtomicRename
        } else {
            WriteStrategy::InPlace
        },
    };

    match toggle_file(&path, &opts) {
        Ok(outcome) => println!("{}", outcome.message()),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(e.exit_code());
        }
    }
}

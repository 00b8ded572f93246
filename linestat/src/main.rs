//! # linestat
//!
//! Pretty-prints per-file line-change statistics as a colorized,
//! column-aligned table.
//!
//! ## Overview
//!
//! linestat is a filter: it reads one record per line from stdin and writes
//! the table to stdout. Each record is
//!
//! ```text
//! path additions deletions old_line_count new_line_count
//! ```
//!
//! or, with `--numstat`, `additions deletions path old_line_count new_line_count`
//! (a `git diff --numstat` line with the two line counts appended).
//!
//! ## Usage
//!
//! ```bash
//! printf 'a.txt 3 1 10 12\nb.txt 0 5 5 0\n' | linestat
//!
//! # Skip the summary row
//! linestat --no-summary < stats.txt
//!
//! # Debug logging on stderr
//! linestat -v < stats.txt
//! ```
//!
//! A malformed line aborts the run before anything is printed.

mod logging;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use linestatlib::{render_stream, FieldOrder, RenderOptions};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("linestat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Colorized, column-aligned table of per-file line-change stats read from stdin")
        .arg(
            Arg::new("numstat")
                .long("numstat")
                .action(ArgAction::SetTrue)
                .help("Read lines as 'additions deletions path old new' (git --numstat order)"),
        )
        .arg(
            Arg::new("no-summary")
                .long("no-summary")
                .action(ArgAction::SetTrue)
                .help("Do not append the summary row"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .conflicts_with("quiet")
                .help("Log debug information to stderr (repeat for trace)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only log errors"),
        )
}

/// Build render options from matches
fn build_options(matches: &ArgMatches) -> RenderOptions {
    let order = if matches.get_flag("numstat") {
        FieldOrder::Numstat
    } else {
        FieldOrder::PathFirst
    };

    RenderOptions::new()
        .field_order(order)
        .summary(!matches.get_flag("no-summary"))
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let options = build_options(matches);
    tracing::debug!(?options, "rendering stat table");

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let rows = render_stream(stdin, stdout, &options).context("cannot render stat table")?;

    tracing::debug!(rows, "done");
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let filter = logging::env_filter(matches.get_flag("quiet"), matches.get_count("verbose"));
    logging::init_logging(filter);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

//! CLI binary for MakerBot Stats
//!
//! Converts a `user_stats.json` file, or a directory of job folders that each
//! contain one, into CSV on stdout or in a file.

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, Command};
use makerbot_stats::{convert_path, write_csv, ConvertOptions, Sink};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn long_version() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} (git {})", env!("CARGO_PKG_VERSION"), sha),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn build_command() -> Command {
    Command::new("makerbot_stats")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version())
        .about("Convert MakerBot user_stats.json files into CSV format usable by spreadsheets.")
        .long_about(
            "Convert MakerBot user_stats.json files into CSV format usable by spreadsheets.\n\n\
             Given a file, writes a header row and one data row. Given a directory, every \
             entry in it must be a job folder holding a user_stats.json; each becomes one row.",
        )
        .arg(
            Arg::new("path")
                .help("user_stats.json file, or directory of job folders")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Path to the CSV output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("timestamp")
                .short('t')
                .long("timestamp")
                .help("Prepend a datetime column with each stats file's creation time (UTC)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Legacy switch: convert [path] as a directory of job folders (value ignored)")
                .value_name("VALUE"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output on stderr")
                .action(ArgAction::SetTrue),
        )
}

fn log_filter(debug: bool) -> Result<EnvFilter> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("makerbot_stats=warn"));
    if debug {
        Ok(filter.add_directive("makerbot_stats=debug".parse()?))
    } else {
        Ok(filter)
    }
}

fn init_logging(debug: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug)?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    init_logging(matches.get_flag("debug"))?;

    let input = matches
        .get_one::<PathBuf>("path")
        .ok_or_else(|| anyhow!("No input path given"))?;
    let output = matches.get_one::<PathBuf>("output");

    let options = ConvertOptions {
        include_timestamp: matches.get_flag("timestamp"),
        force_directory: matches.get_one::<String>("csv").is_some(),
    };
    debug!(?input, ?output, ?options, "starting conversion");

    // Table must be complete before the destination is opened.
    let table = convert_path(input, &options)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let sink = Sink::from_option(output.map(PathBuf::as_path), &mut handle);
    write_csv(&table, sink).with_context(|| match output {
        Some(path) => format!("Failed to write CSV file: {}", path.display()),
        None => "Failed to write CSV to stdout".to_string(),
    })?;

    Ok(())
}

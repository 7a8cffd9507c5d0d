//! charset-probe CLI entry point.
//!
//! Parses arguments, installs the per-run log file, runs the probe, and
//! prints the formatted summary. Check failures are reported in the summary
//! and the JSON report; they do not change the exit code. Only argument
//! errors and run-level faults (client construction, report persistence)
//! exit non-zero.

use std::fs;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use charset_probe::cli::Cli;
use charset_probe::output::get_formatter;
use charset_probe::{logging, run_probe, ProbeConfig, RunStamp};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let stamp = RunStamp::now();

    if let Err(e) = fs::create_dir_all(&cli.output_dir) {
        eprintln!("Error: cannot create {}: {}", cli.output_dir.display(), e);
        return ExitCode::from(1);
    }
    if let Err(e) = logging::init(&cli.output_dir, &stamp.compact) {
        eprintln!("Error: {}", e);
        return ExitCode::from(1);
    }

    let config = ProbeConfig {
        url: cli.url.clone(),
        timeout_ms: cli.timeout_ms,
        output_dir: cli.output_dir.clone(),
        stamp,
    };

    let report = match run_probe(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let formatter = get_formatter(&cli.format, cli.no_color);
    println!("{}", formatter.format(&report));

    ExitCode::SUCCESS
}

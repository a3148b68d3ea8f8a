//! omni-context CLI: print progressive-disclosure metadata for a context directory.
//!
//! With no arguments, scans `../../context_files` relative to the executable.
//! The report goes to stdout; logs go to stderr (`RUST_LOG=omni_scanner=debug`).

mod cli;
mod paths;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use omni_scanner::{ContextScanner, ScanError, render_report, to_pretty_json};

use crate::cli::Cli;
use crate::paths::default_context_dir;

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_logger();
    let cli = Cli::parse();
    let scanner = ContextScanner::new(cli.scan_config()?);

    if let Some(file) = &cli.file {
        return match scanner.scan_file(file) {
            Ok(entry) => {
                println!("{}", to_pretty_json(&entry)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(ScanError::NotFound(path)) => {
                println!("File not found: {}", path.display());
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        };
    }

    let root = match cli.root {
        Some(root) => root,
        None => default_context_dir().context("cannot locate the running executable")?,
    };
    log::debug!("Context directory: {}", root.display());

    match scanner.scan_dir(&root) {
        Ok(report) => {
            println!("{}", render_report(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(ScanError::NotFound(path)) => {
            println!("Context directory not found: {}", path.display());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

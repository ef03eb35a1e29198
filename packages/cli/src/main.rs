#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for resume contact extraction.
//!
//! Scans a folder of PDF resumes, extracts each candidate's name, phone
//! number, and email address, and writes the results to a CSV
//! spreadsheet. Run without a subcommand for an interactive menu.
//!
//! Uses `indicatif-log-bridge` (via [`resume_extract_cli_utils::init_logger`])
//! to route `log` output through `indicatif::MultiProgress` so that log
//! lines and progress bars never fight for the terminal.

mod config;
mod interactive;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config::{ExtractArgs, ExtractConfig};

#[derive(Parser)]
#[command(
    name = "resume_extract",
    about = "Extract names, phone numbers, and emails from PDF resumes"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract contact details from every PDF in the data folder
    Extract {
        #[command(flatten)]
        args: ExtractArgs,
    },
    /// List the PDF files that would be processed
    Scan {
        /// Folder containing PDF resumes (searched recursively)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let multi = resume_extract_cli_utils::init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        None => interactive::run(&multi),
        Some(Commands::Extract { args }) => run::extract(&ExtractConfig::from(args), &multi),
        Some(Commands::Scan { data_dir }) => run::scan(&config::data_dir_or_env(data_dir)),
    };

    if let Err(e) = result {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

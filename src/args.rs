//! These structs provide the CLI interface for the fintrack CLI.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// fintrack: A command-line tool for tracking personal finances.
///
/// Transactions are kept in a CSV file with the columns date, description, category and amount.
/// Amounts of zero or more are income and negative amounts are expenses.
///
/// With no subcommand, fintrack loads the transactions file and opens an interactive menu where
/// you can add, view, update, delete, analyze and save transactions and generate a report.
/// Nothing is written back to the file until you choose Save.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub fn new(common: Common, command: Option<Command>) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    /// The subcommand to run. Defaults to `Command::Shell`.
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(Subcommand, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive menu (the default).
    #[default]
    Shell,
    /// Print the transactions as a table and exit.
    View,
    /// Print total income, total expenses and the net balance and exit.
    Analyze,
    /// Write the financial report to the report file, print it and exit.
    Report,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The CSV file transactions are loaded from and saved to by default. Defaults to
    /// financial_transactions.csv in the current directory.
    #[arg(long, env = "FINTRACK_FILE")]
    file: Option<PathBuf>,

    /// The file the report is written to. Defaults to report.txt in the current directory.
    #[arg(long, env = "FINTRACK_REPORT")]
    report: Option<PathBuf>,

    /// A JSON configuration file naming the transactions file and the report file. Paths in it
    /// are relative to the directory holding it. --file and --report take precedence.
    #[arg(long, env = "FINTRACK_CONFIG")]
    config: Option<PathBuf>,
}

impl Common {
    pub fn new(
        log_level: LevelFilter,
        file: Option<PathBuf>,
        report: Option<PathBuf>,
        config: Option<PathBuf>,
    ) -> Self {
        Self {
            log_level,
            file,
            report,
            config,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn report(&self) -> Option<&Path> {
        self.report.as_deref()
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

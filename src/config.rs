//! Configuration for fintrack.
//!
//! Everything has a default, so no configuration file is required. When one is given it is a JSON
//! file naming the transactions file and the report file. Paths given on the command line take
//! precedence over the configuration file.

use crate::{utils, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The transactions file used when none is configured.
pub const DEFAULT_TRANSACTIONS_FILE: &str = "financial_transactions.csv";

/// The report file used when none is configured.
pub const DEFAULT_REPORT_FILE: &str = "report.txt";

/// The `Config` object holds the file paths a session reads from and writes to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    transactions_path: PathBuf,
    report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSACTIONS_FILE, DEFAULT_REPORT_FILE)
    }
}

impl Config {
    pub fn new(transactions_path: impl Into<PathBuf>, report_path: impl Into<PathBuf>) -> Self {
        Self {
            transactions_path: transactions_path.into(),
            report_path: report_path.into(),
        }
    }

    /// Loads a JSON configuration file. Keys that are missing take their defaults, and relative
    /// paths are resolved against the directory that holds the configuration file.
    ///
    /// # Errors
    /// - Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content = utils::read(config_path)?;
        let config_file: ConfigFile = serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse JSON file at {}", config_path.display())
        })?;
        let base = config_path.parent().unwrap_or_else(|| Path::new(""));
        let resolve = |p: Option<PathBuf>, default: &str| match p {
            Some(p) if p.is_absolute() => p,
            Some(p) => base.join(p),
            None => PathBuf::from(default),
        };
        Ok(Self {
            transactions_path: resolve(config_file.transactions_file, DEFAULT_TRANSACTIONS_FILE),
            report_path: resolve(config_file.report_file, DEFAULT_REPORT_FILE),
        })
    }

    /// Builds the configuration from an optional configuration file and optional overrides.
    pub fn resolve(
        config_path: Option<&Path>,
        transactions_path: Option<&Path>,
        report_path: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        if let Some(p) = transactions_path {
            config.transactions_path = p.to_path_buf();
        }
        if let Some(p) = report_path {
            config.report_path = p.to_path_buf();
        }
        Ok(config)
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions_path
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "transactions_file": "data/transactions.csv",
///   "report_file": "out/report.txt"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// The CSV file transactions are loaded from and saved to by default.
    #[serde(default)]
    transactions_file: Option<PathBuf>,

    /// The file the report is written to.
    #[serde(default)]
    report_file: Option<PathBuf>,
}

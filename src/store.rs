//! The in-memory transaction store and its CSV persistence.
//!
//! Records have no identity other than their position. Positions are 1-based wherever a user
//! sees or types them.

use crate::model::{Rejected, Transaction, TransactionRow, TransactionUpdates, HEADERS};
use crate::{utils, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// An insertion-ordered sequence of transactions.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transactions {
    data: Vec<Transaction>,
}

impl Transactions {
    pub fn new(data: Vec<Transaction>) -> Self {
        Self { data }
    }

    /// Loads the transactions file at `path`.
    ///
    /// A file that does not exist is not an error: the result is an empty store with
    /// `Loaded::missing` set. Rows with an invalid date, an invalid amount, or a shape that does
    /// not match the header are skipped with a warning and listed in `Loaded::skipped`.
    ///
    /// # Errors
    /// - Returns an error if the file exists but cannot be opened or its header cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Loaded> {
        let path = path.as_ref();
        let file = match utils::open_if_exists(path)? {
            Some(f) => f,
            None => {
                debug!("{} does not exist", path.display());
                return Ok(Loaded {
                    missing: true,
                    ..Loaded::default()
                });
            }
        };
        debug!("Loading transactions from {}", path.display());
        Self::from_reader(file).with_context(|| format!("Unable to load {}", path.display()))
    }

    /// Parses CSV data with a header row into a store. See `load`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Loaded> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr
            .headers()
            .context("Unable to read the header row")?
            .clone();

        let mut data = Vec::new();
        let mut skipped = Vec::new();

        for result in rdr.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or_default();
                    skipped.push(SkippedRow::new(line, e.to_string()));
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let row: TransactionRow = match record.deserialize(Some(&headers)) {
                Ok(row) => row,
                Err(e) => {
                    skipped.push(SkippedRow::new(line, e.to_string()));
                    continue;
                }
            };

            match row.validate() {
                Ok(transaction) => data.push(transaction),
                Err(rejected) => skipped.push(SkippedRow::new(line, rejected.to_string())),
            }
        }

        for row in &skipped {
            warn!("Skipping malformed transaction row: {row}");
        }

        Ok(Loaded {
            transactions: Transactions::new(data),
            skipped,
            missing: false,
        })
    }

    /// Writes the store to `path` as CSV with a `date,description,category,amount` header,
    /// replacing any existing file. Returns the number of rows written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = utils::create(path)?;
        self.to_writer(file)
            .with_context(|| format!("Unable to write transactions to {}", path.display()))?;
        debug!("Wrote {} transactions to {}", self.len(), path.display());
        Ok(self.len())
    }

    /// Writes the store as CSV to any writer. See `save`.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut wrt = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wrt.write_record(HEADERS)?;
        for transaction in &self.data {
            wrt.serialize(transaction)?;
        }
        wrt.flush()?;
        Ok(())
    }

    pub fn data(&self) -> &[Transaction] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends a transaction to the end of the store.
    pub fn push(&mut self, transaction: Transaction) {
        self.data.push(transaction)
    }

    pub fn get(&self, position: Position) -> Option<&Transaction> {
        self.index(position).ok().map(|ix| &self.data[ix])
    }

    /// Applies `updates` to the transaction at `position` and returns the entries that were not
    /// applied. See `Transaction::apply`.
    ///
    /// # Errors
    /// - Returns `SelectionError::OutOfRange` and changes nothing if `position` is not in the
    ///   store.
    pub fn update(
        &mut self,
        position: Position,
        updates: &TransactionUpdates,
    ) -> std::result::Result<Vec<Rejected>, SelectionError> {
        let ix = self.index(position)?;
        Ok(self.data[ix].apply(updates))
    }

    /// Removes and returns the transaction at `position`.
    ///
    /// # Errors
    /// - Returns `SelectionError::OutOfRange` and changes nothing if `position` is not in the
    ///   store.
    pub fn remove(
        &mut self,
        position: Position,
    ) -> std::result::Result<Transaction, SelectionError> {
        let ix = self.index(position)?;
        Ok(self.data.remove(ix))
    }

    /// Iterates the transactions with their 1-based positions.
    pub fn enumerate(&self) -> impl Iterator<Item = (Position, &Transaction)> {
        self.data
            .iter()
            .enumerate()
            .map(|(ix, t)| (Position(ix as i64 + 1), t))
    }

    fn index(&self, position: Position) -> std::result::Result<usize, SelectionError> {
        let n = position.0;
        if n >= 1 && (n as u64) <= self.data.len() as u64 {
            Ok((n - 1) as usize)
        } else {
            Err(SelectionError::OutOfRange {
                position: n,
                len: self.data.len(),
            })
        }
    }
}

impl FromIterator<Transaction> for Transactions {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The result of loading a transactions file.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    transactions: Transactions,
    skipped: Vec<SkippedRow>,
    missing: bool,
}

impl Loaded {
    pub fn transactions(&self) -> &Transactions {
        &self.transactions
    }

    pub fn into_transactions(self) -> Transactions {
        self.transactions
    }

    /// Rows that were left out of the store, in file order.
    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// `true` if the file did not exist.
    pub fn missing(&self) -> bool {
        self.missing
    }
}

/// A row of the transactions file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// The 1-based line number of the row in the file.
    line: u64,
    reason: String,
}

impl SkippedRow {
    fn new(line: u64, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Display for SkippedRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// A 1-based position in the store as entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(i64);

impl Position {
    pub fn new(n: i64) -> Self {
        Self(n)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for Position {
    type Err = SelectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Position)
            .map_err(|_| SelectionError::NotANumber(s.to_string()))
    }
}

/// The reason a user's selection does not name a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    NotANumber(String),
    OutOfRange { position: i64, len: usize },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::NotANumber(s) => write!(f, "'{s}' is not a number"),
            SelectionError::OutOfRange { position, len } => {
                write!(f, "{position} is not between 1 and {len}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

//! The plain-text financial report.

use crate::analysis::{AnalysisError, CategoryTotals, Summary};
use crate::store::Transactions;
use crate::{utils, Result};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::path::Path;

const TITLE: &str = "----- Financial Report -----";
const FOOTER: &str = "----------------------------";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A snapshot of the store's totals, category breakdown and transactions. `Display` renders the
/// report text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    generated_at: NaiveDateTime,
    summary: Summary,
    categories: CategoryTotals,
    transactions: Transactions,
}

impl Report {
    /// Builds a report stamped with the current local time. See `generated_at`.
    pub fn new(transactions: &Transactions) -> std::result::Result<Self, AnalysisError> {
        Self::generated_at(transactions, Local::now().naive_local())
    }

    /// Builds a report with the given timestamp.
    ///
    /// # Errors
    /// - `AnalysisError::Empty` for an empty store.
    /// - `AnalysisError::Overflow` when a total is too large to represent.
    pub fn generated_at(
        transactions: &Transactions,
        at: NaiveDateTime,
    ) -> std::result::Result<Self, AnalysisError> {
        Ok(Self {
            generated_at: at,
            summary: Summary::of(transactions)?,
            categories: CategoryTotals::of(transactions)?,
            transactions: transactions.clone(),
        })
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn categories(&self) -> &CategoryTotals {
        &self.categories
    }

    /// Writes the rendered report to `path`, replacing any existing file.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        utils::write(path, self.to_string())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(
            f,
            "Generated on: {}",
            self.generated_at.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(f, "Total Transactions: {}", self.summary.count())?;
        writeln!(f, "Total Income: {}", self.summary.income().to_dollars())?;
        writeln!(f, "Total Expenses: {}", self.summary.expenses().to_dollars())?;
        writeln!(f, "Net Balance: {}", self.summary.net().to_dollars())?;
        writeln!(f)?;

        writeln!(f, "Transactions by Category:")?;
        for (category, total) in self.categories.iter() {
            writeln!(f, "  {category}: {}", total.to_dollars())?;
        }
        writeln!(f)?;

        writeln!(f, "All Transactions:")?;
        for t in self.transactions.iter() {
            writeln!(
                f,
                "{} | {} | {} | {}",
                t.date(),
                t.description(),
                t.category(),
                t.amount().to_dollars()
            )?;
        }
        write!(f, "{FOOTER}")
    }
}

//! Analyze command handler.

use crate::analysis::{AnalysisError, Summary};
use crate::commands::Out;
use crate::store::Transactions;
use tracing::warn;

/// Totals income, expenses and the net balance.
///
/// An empty store, or totals too large to represent, produce a notice instead of a summary.
pub fn analyze(transactions: &Transactions) -> Out<Summary> {
    let summary = match Summary::of(transactions) {
        Ok(summary) => summary,
        Err(AnalysisError::Empty) => return "No transactions to analyze.".into(),
        Err(e @ AnalysisError::Overflow) => {
            warn!("Unable to analyze {} transactions: {e}", transactions.len());
            return format!("Unable to analyze finances: {e}.").into();
        }
    };
    let message = format!(
        "Total Income: {}\nTotal Expenses: {}\nNet Balance: {}",
        summary.income().to_dollars(),
        summary.expenses().to_dollars(),
        summary.net().to_dollars()
    );
    Out::new(message, summary)
}

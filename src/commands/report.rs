//! Report command handler.

use crate::analysis::AnalysisError;
use crate::commands::Out;
use crate::report::Report;
use crate::store::Transactions;
use crate::Result;
use std::path::Path;
use tracing::{debug, warn};

/// Builds the financial report, writes it to `path`, and returns its text as the message.
///
/// Nothing is written for an empty store or when the totals are too large to represent.
///
/// # Errors
///
/// - Returns an error if the report file cannot be written.
pub fn report(transactions: &Transactions, path: &Path) -> Result<Out<Report>> {
    let report = match Report::new(transactions) {
        Ok(report) => report,
        Err(AnalysisError::Empty) => return Ok("No transactions to generate report.".into()),
        Err(e @ AnalysisError::Overflow) => {
            warn!("Unable to report on {} transactions: {e}", transactions.len());
            return Ok(format!("Unable to generate report: {e}.").into());
        }
    };
    debug!("Writing report to {}", path.display());
    report.write(path)?;
    let message = format!(
        "{report}\n\nReport generated and saved as {}",
        path.display()
    );
    Ok(Out::new(message, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{sample_transactions, transaction, TestEnv};

    #[test]
    fn test_report_written_verbatim() {
        let env = TestEnv::new();
        let config = env.config();
        let out = report(&sample_transactions(), config.report_path()).unwrap();
        let written = std::fs::read_to_string(config.report_path()).unwrap();
        assert!(written.starts_with("----- Financial Report -----\nGenerated on: "));
        assert!(written.ends_with("----------------------------"));
        assert!(out.message().starts_with(&written));
        assert_eq!(out.structure().unwrap().to_string(), written);
    }

    #[test]
    fn test_report_empty_is_noop() {
        let env = TestEnv::new();
        let config = env.config();
        let out = report(&Transactions::default(), config.report_path()).unwrap();
        assert_eq!(out.message(), "No transactions to generate report.");
        assert!(!config.report_path().exists());
    }

    #[test]
    fn test_report_overflow_writes_nothing() {
        let env = TestEnv::new();
        let config = env.config();
        let transactions: Transactions = vec![
            transaction("2025-01-01", "Loan", "Debt", "-79228162514264337593543950335"),
            transaction("2025-01-02", "Fee", "Debt", "-2"),
        ]
        .into_iter()
        .collect();
        let out = report(&transactions, config.report_path()).unwrap();
        assert_eq!(
            out.message(),
            "Unable to generate report: the totals are too large to compute."
        );
        assert!(!config.report_path().exists());
    }
}

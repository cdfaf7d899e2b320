//! Load command handler.

use crate::commands::Out;
use crate::store::Transactions;
use crate::Result;
use std::path::Path;

/// Loads the transactions file at `path`.
///
/// A missing file produces an empty store and a notice rather than an error. Malformed rows are
/// skipped with a warning each (see `Transactions::load`).
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message with the number of transactions loaded, or the missing-file notice.
/// - The loaded `Transactions`.
///
/// # Errors
///
/// - Returns an error if the file exists but cannot be read.
pub fn load(path: &Path) -> Result<Out<Transactions>> {
    let loaded = Transactions::load(path)?;
    if loaded.missing() {
        return Ok(Out::new(
            format!(
                "{} not found. Starting with empty transaction list.",
                path.display()
            ),
            Transactions::default(),
        ));
    }

    let skipped = loaded.skipped().len();
    let transactions = loaded.into_transactions();
    let mut message = format!("{} transactions loaded.", transactions.len());
    if skipped > 0 {
        message.push_str(&format!(
            " {} malformed row{} skipped.",
            skipped,
            if skipped == 1 { "" } else { "s" }
        ));
    }
    Ok(Out::new(message, transactions))
}

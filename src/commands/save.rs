//! Save command handler.

use crate::commands::Out;
use crate::store::Transactions;
use crate::Result;
use std::path::Path;

/// Writes the store to `path` as CSV, replacing the file. Does nothing if the store is empty.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message naming the file written, or why nothing was written.
/// - The number of transactions written, if any were.
///
/// # Errors
///
/// - Returns an error if the file cannot be created or written.
pub fn save(transactions: &Transactions, path: &Path) -> Result<Out<usize>> {
    if transactions.is_empty() {
        return Ok("No transactions to save.".into());
    }
    let count = transactions.save(path)?;
    Ok(Out::new(
        format!("Transactions saved to {}", path.display()),
        count,
    ))
}

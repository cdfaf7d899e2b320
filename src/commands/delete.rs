//! Delete command handler.

use crate::commands::Out;
use crate::model::Transaction;
use crate::shell::Console;
use crate::store::{Position, SelectionError, Transactions};
use crate::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Lists the transactions, asks which one to delete, and removes it.
///
/// A selection that is not a number or not in the list leaves the store unchanged.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message describing the deleted transaction, or why nothing was deleted.
/// - The removed `Transaction`, if one was removed.
///
/// # Errors
///
/// - Returns an error if the console cannot be read or written.
pub fn delete<R, W>(
    console: &mut Console<R, W>,
    transactions: &mut Transactions,
) -> Result<Out<Transaction>>
where
    R: BufRead,
    W: Write,
{
    if transactions.is_empty() {
        return Ok("No transactions to delete.".into());
    }

    console.say("Transactions:")?;
    for (position, t) in transactions.enumerate() {
        console.say(format!("{position}. {t}"))?;
    }

    let entry = console
        .prompt("Enter the number of the transaction to delete: ")?
        .unwrap_or_default();
    let removed = Position::from_str(&entry).and_then(|p| transactions.remove(p));
    match removed {
        Ok(t) => {
            let message = format!(
                "Deleted transaction: Date: {}, Description: {}, Category: {}, Amount: {}",
                t.date(),
                t.description(),
                t.category(),
                t.amount().to_fixed()
            );
            Ok(Out::new(message, t))
        }
        Err(SelectionError::NotANumber(_)) => Ok("Please enter a valid number.".into()),
        Err(SelectionError::OutOfRange { .. }) => Ok("Invalid transaction number.".into()),
    }
}

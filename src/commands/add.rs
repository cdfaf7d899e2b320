//! Add command handler.

use crate::commands::{Out, CANCEL};
use crate::model::{Amount, Date, Transaction};
use crate::shell::Console;
use crate::store::Transactions;
use crate::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

const CANCELED: &str = "Transaction entry canceled.";

/// Prompts for the fields of a new transaction and appends it to the store.
///
/// The date prompt repeats until a valid `YYYY-MM-DD` date is entered. The amount prompt repeats
/// until a number is entered, unless the entry is the cancel keyword, which abandons the
/// transaction. Running out of input at any prompt also abandons it.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message saying whether the transaction was added or canceled.
/// - The added `Transaction`, if one was added.
///
/// # Errors
///
/// - Returns an error if the console cannot be read or written.
pub fn add<R, W>(
    console: &mut Console<R, W>,
    transactions: &mut Transactions,
) -> Result<Out<Transaction>>
where
    R: BufRead,
    W: Write,
{
    console.say("\nAdd New Transaction")?;

    let date = loop {
        let Some(entry) = console.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(CANCELED.into());
        };
        match Date::from_str(entry.trim()) {
            Ok(date) => break date,
            Err(e) => {
                debug!("Rejected date entry: {e}");
                console.say("Invalid date format. Please enter date as YYYY-MM-DD.")?;
            }
        }
    };

    let Some(description) = console.prompt("Enter description: ")? else {
        return Ok(CANCELED.into());
    };
    let Some(category) = console.prompt("Enter category: ")? else {
        return Ok(CANCELED.into());
    };

    let amount = loop {
        let Some(entry) = console.prompt("Enter amount: ")? else {
            return Ok(CANCELED.into());
        };
        match Amount::from_str(&entry) {
            Ok(amount) => break amount,
            Err(_) if entry.trim().eq_ignore_ascii_case(CANCEL) => {
                return Ok(CANCELED.into());
            }
            Err(e) => {
                debug!("Rejected amount entry: {e}");
                console.say(format!(
                    "Invalid amount. Please enter a numeric value or type '{CANCEL}' to abort."
                ))?;
            }
        }
    };

    let transaction = Transaction::new(date, description.trim(), category.trim(), amount);
    transactions.push(transaction.clone());
    Ok(Out::new("Transaction added successfully.", transaction))
}

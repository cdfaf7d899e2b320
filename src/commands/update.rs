//! Update command handler.

use crate::commands::Out;
use crate::model::{Field, Transaction, TransactionUpdates};
use crate::shell::Console;
use crate::store::{Position, SelectionError, Transactions};
use crate::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::warn;

/// Lists the transactions, asks which one to change, then offers each field for replacement.
///
/// An empty answer keeps a field as it is. A date or amount that does not parse is reported and
/// that field is kept, while the other fields are still updated. A selection that is not a number
/// or not in the list abandons the update without changing anything.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message indicating the outcome.
/// - The `Transaction` as it is after the update, if one was selected.
///
/// # Errors
///
/// - Returns an error if the console cannot be read or written.
pub fn update<R, W>(
    console: &mut Console<R, W>,
    transactions: &mut Transactions,
) -> Result<Out<Transaction>>
where
    R: BufRead,
    W: Write,
{
    if transactions.is_empty() {
        return Ok("No transactions to update.".into());
    }

    for (position, t) in transactions.enumerate() {
        console.say(format!("{position}. {t}"))?;
    }

    let entry = console
        .prompt("Enter the number of the transaction to update: ")?
        .unwrap_or_default();
    let (position, current) = match select(transactions, &entry) {
        Ok(selected) => selected,
        Err(SelectionError::NotANumber(_)) => {
            return Ok("Invalid input. Please enter a number.".into())
        }
        Err(SelectionError::OutOfRange { .. }) => return Ok("Invalid transaction number.".into()),
    };

    let mut ask = |label: String| -> Result<Option<String>> {
        Ok(console.prompt(&label)?.map(|s| s.trim().to_string()))
    };
    let updates = TransactionUpdates {
        date: ask(format!("Enter new date (YYYY-MM-DD) [{}]: ", current.date()))?,
        description: ask(format!("Enter new description [{}]: ", current.description()))?,
        category: ask(format!("Enter new category [{}]: ", current.category()))?,
        amount: ask(format!("Enter new amount [{}]: ", current.amount()))?,
    };

    let rejected = transactions.update(position, &updates)?;
    for r in &rejected {
        warn!("Field '{}' of transaction {position} not updated: {r}", r.field());
        match r.field() {
            Field::Date => console.say("Invalid date format. Date not updated.")?,
            Field::Amount => console.say("Invalid amount. Amount not updated.")?,
            Field::Description | Field::Category => {}
        }
    }

    let updated = transactions.get(position).cloned().unwrap_or(current);
    Ok(Out::new("Transaction updated successfully.", updated))
}

fn select(
    transactions: &Transactions,
    entry: &str,
) -> std::result::Result<(Position, Transaction), SelectionError> {
    let position = Position::from_str(entry)?;
    match transactions.get(position) {
        Some(t) => Ok((position, t.clone())),
        None => Err(SelectionError::OutOfRange {
            position: position.get(),
            len: transactions.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{console, output, sample_transactions};

    #[test]
    fn test_update_empty_store() {
        let mut transactions = Transactions::default();
        let mut c = console("1\n");
        let out = update(&mut c, &mut transactions).unwrap();
        assert_eq!(out.message(), "No transactions to update.");
        assert_eq!(output(&c), "");
    }

    #[test]
    fn test_update_lists_transactions() {
        let mut transactions = sample_transactions();
        let mut c = console("9\n");
        update(&mut c, &mut transactions).unwrap();
        let printed = output(&c);
        assert!(printed.starts_with(
            "1. Date: 2025-01-01, Description: Paycheck, Category: Income, Amount: 100.0\n"
        ));
        assert!(printed.contains("3. Date: 2025-01-03"));
    }

    #[test]
    fn test_update_out_of_range() {
        let mut transactions = sample_transactions();
        for entry in ["0\n", "4\n", "-1\n"] {
            let mut c = console(entry);
            let out = update(&mut c, &mut transactions).unwrap();
            assert_eq!(out.message(), "Invalid transaction number.");
            assert!(out.structure().is_none());
        }
        assert_eq!(transactions, sample_transactions());
    }

    #[test]
    fn test_update_not_a_number() {
        let mut transactions = sample_transactions();
        let mut c = console("second\nNew\n");
        let out = update(&mut c, &mut transactions).unwrap();
        assert_eq!(out.message(), "Invalid input. Please enter a number.");
        assert_eq!(transactions, sample_transactions());
    }

    #[test]
    fn test_update_all_fields() {
        let mut transactions = sample_transactions();
        let mut c = console("2\n2025-01-09\nSupermarket\nHousehold\n-41.10\n");
        let out = update(&mut c, &mut transactions).unwrap();
        assert_eq!(out.message(), "Transaction updated successfully.");
        let t = &transactions.data()[1];
        assert_eq!(t.date().to_string(), "2025-01-09");
        assert_eq!(t.description(), "Supermarket");
        assert_eq!(t.category(), "Household");
        assert_eq!(t.amount().to_fixed(), "-41.10");
        assert_eq!(out.structure(), Some(t));
    }

    #[test]
    fn test_update_partial_success() {
        let mut transactions = sample_transactions();
        let before = transactions.data()[1].clone();
        let mut c = console("2\n\nSupermarket\nHousehold\nforty\n");
        let out = update(&mut c, &mut transactions).unwrap();
        assert_eq!(out.message(), "Transaction updated successfully.");

        let t = &transactions.data()[1];
        assert_eq!(t.date(), before.date());
        assert_eq!(t.amount(), before.amount());
        assert_eq!(t.description(), "Supermarket");
        assert_eq!(t.category(), "Household");

        let printed = output(&c);
        assert!(printed.contains("Invalid amount. Amount not updated."));
        assert!(!printed.contains("Date not updated."));
    }

    #[test]
    fn test_update_invalid_date_keeps_date() {
        let mut transactions = sample_transactions();
        let mut c = console("1\n2025-02-30\n\n\n200\n");
        update(&mut c, &mut transactions).unwrap();
        let t = &transactions.data()[0];
        assert_eq!(t.date().to_string(), "2025-01-01");
        assert_eq!(t.amount().to_fixed(), "200.00");
        assert_eq!(t.description(), "Paycheck");
        assert!(output(&c).contains("Invalid date format. Date not updated."));
    }

    #[test]
    fn test_update_prompts_show_current_values() {
        let mut transactions = sample_transactions();
        let mut c = console("3\n");
        update(&mut c, &mut transactions).unwrap();
        let printed = output(&c);
        assert!(printed.contains("Enter new date (YYYY-MM-DD) [2025-01-03]: "));
        assert!(printed.contains("Enter new description [Refund, partial]: "));
        assert!(printed.contains("Enter new amount [25.5]: "));
        assert_eq!(transactions, sample_transactions());
    }
}

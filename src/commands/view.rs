//! View command handler.

use crate::commands::Out;
use crate::store::Transactions;

/// Renders every transaction as a numbered table.
pub fn view(transactions: &Transactions) -> Out<Transactions> {
    if transactions.is_empty() {
        return "No transactions available.".into();
    }

    let mut lines = vec![
        String::new(),
        "List of Transactions:".to_string(),
        format!(
            "{:<5} {:<12} {:<20} {:<15} {:>10}",
            "No.", "Date", "Description", "Category", "Amount"
        ),
        "-".repeat(75),
    ];
    lines.extend(transactions.enumerate().map(|(position, t)| {
        format!(
            "{:<5} {:<12} {:<20} {:<15} {:>10}",
            position.get(),
            t.date().to_string(),
            t.description(),
            t.category(),
            t.amount().to_fixed()
        )
    }));
    let table = lines.join("\n");
    Out::new(table, transactions.clone())
}

//! Aggregates computed over a `Transactions` store.

use crate::model::{Amount, Transaction};
use crate::store::Transactions;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Income, expense and balance totals for a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    count: usize,
    income: Amount,
    expenses: Amount,
    net: Amount,
}

impl Summary {
    /// Totals `transactions`. Amounts of zero or more are income.
    ///
    /// # Errors
    /// - `AnalysisError::Empty` when there is nothing to total.
    /// - `AnalysisError::Overflow` when a total does not fit in an `Amount`.
    pub fn of(transactions: &Transactions) -> Result<Self, AnalysisError> {
        if transactions.is_empty() {
            return Err(AnalysisError::Empty);
        }
        let mut summary = Summary::default();
        for t in transactions.iter() {
            summary.add(t)?;
        }
        Ok(summary)
    }

    fn add(&mut self, transaction: &Transaction) -> Result<(), AnalysisError> {
        let amount = transaction.amount();
        self.count += 1;
        if amount.is_income() {
            self.income = checked_add(self.income, amount)?;
        } else {
            self.expenses = checked_add(self.expenses, amount.abs())?;
        }
        self.net = checked_add(self.net, amount)?;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The sum of non-negative amounts.
    pub fn income(&self) -> Amount {
        self.income
    }

    /// The magnitude of the sum of negative amounts.
    pub fn expenses(&self) -> Amount {
        self.expenses
    }

    /// The sum of all amounts.
    pub fn net(&self) -> Amount {
        self.net
    }
}

/// The summed amount of each category, in the order each category first appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(Vec<(String, Amount)>);

impl CategoryTotals {
    /// Totals each category of `transactions`.
    ///
    /// # Errors
    /// - `AnalysisError::Overflow` when a category total does not fit in an `Amount`.
    pub fn of(transactions: &Transactions) -> Result<Self, AnalysisError> {
        let mut totals: Vec<(String, Amount)> = Vec::new();
        for t in transactions.iter() {
            match totals.iter_mut().find(|(c, _)| c == t.category()) {
                Some((_, total)) => *total = checked_add(*total, t.amount())?,
                None => totals.push((t.category().to_string(), t.amount())),
            }
        }
        Ok(Self(totals))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.0.iter().map(|(c, a)| (c.as_str(), *a))
    }

    pub fn get(&self, category: &str) -> Option<Amount> {
        self.iter().find(|(c, _)| *c == category).map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sum of every category total, which is the net balance. `None` on overflow.
    pub fn total(&self) -> Option<Amount> {
        self.iter()
            .try_fold(Amount::ZERO, |sum, (_, amount)| sum.checked_add(amount))
    }
}

/// The reason totals could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    /// There are no transactions.
    Empty,
    /// A total is too large to represent.
    Overflow,
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::Empty => write!(f, "there are no transactions"),
            AnalysisError::Overflow => write!(f, "the totals are too large to compute"),
        }
    }
}

impl std::error::Error for AnalysisError {}

fn checked_add(total: Amount, amount: Amount) -> Result<Amount, AnalysisError> {
    total.checked_add(amount).ok_or(AnalysisError::Overflow)
}

use crate::model::{Amount, AmountError, Date, DateError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The category given to a transaction that does not have one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// The columns of the transactions file, in the order they are written.
pub const HEADERS: [&str; 4] = ["date", "description", "category", "amount"];

/// A single income or expense entry.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    date: Date,
    description: String,
    category: String,
    amount: Amount,
}

impl Transaction {
    /// Creates a transaction. A blank `category` becomes `DEFAULT_CATEGORY`.
    pub fn new(
        date: Date,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category: normalize_category(category.into()),
            amount,
        }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Applies the non-empty entries of `updates`. Entries that fail validation leave their field
    /// unchanged and are reported in the returned list; the other fields are still applied.
    pub fn apply(&mut self, updates: &TransactionUpdates) -> Vec<Rejected> {
        let mut rejected = Vec::new();

        if let Some(date) = non_empty(&updates.date) {
            match Date::from_str(date) {
                Ok(date) => self.date = date,
                Err(e) => rejected.push(Rejected::Date(e)),
            }
        }

        if let Some(description) = non_empty(&updates.description) {
            self.description = description.to_string();
        }

        if let Some(category) = non_empty(&updates.category) {
            self.category = category.to_string();
        }

        if let Some(amount) = non_empty(&updates.amount) {
            match Amount::from_str(amount) {
                Ok(amount) => self.amount = amount,
                Err(e) => rejected.push(Rejected::Amount(e)),
            }
        }

        rejected
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Date: {}, Description: {}, Category: {}, Amount: {}",
            self.date, self.description, self.category, self.amount
        )
    }
}

fn normalize_category(category: String) -> String {
    if category.trim().is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category
    }
}

fn non_empty(entry: &Option<String>) -> Option<&str> {
    entry.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Raw replacement entries for the fields of a `Transaction`. `None` or an empty string leaves
/// the field as it is.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdates {
    pub date: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
}

/// A field entry that was not applied during an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    Date(DateError),
    Amount(AmountError),
}

impl Rejected {
    pub fn field(&self) -> Field {
        match self {
            Rejected::Date(_) => Field::Date,
            Rejected::Amount(_) => Field::Amount,
        }
    }
}

impl Display for Rejected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejected::Date(e) => write!(f, "{e}"),
            Rejected::Amount(e) => write!(f, "{e}"),
        }
    }
}

/// The fields of a transaction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Date,
    Description,
    Category,
    Amount,
}

serde_plain::derive_display_from_serialize!(Field);
serde_plain::derive_fromstr_from_deserialize!(Field);

/// A row of the transactions file before validation. Columns are matched by header name, so
/// their order in the file does not matter and unknown columns are ignored.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize)]
pub(crate) struct TransactionRow {
    pub(crate) date: String,
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) category: Option<String>,
    pub(crate) amount: String,
}

impl TransactionRow {
    pub(crate) fn validate(self) -> Result<Transaction, Rejected> {
        let date = Date::from_str(&self.date).map_err(Rejected::Date)?;
        let amount = Amount::from_str(&self.amount).map_err(Rejected::Amount)?;
        Ok(Transaction::new(
            date,
            self.description,
            self.category.unwrap_or_default(),
            amount,
        ))
    }
}

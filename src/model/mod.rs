//! Types that represent the core data model, such as `Transaction` and `Amount`.
mod amount;
mod date;
mod transaction;

pub use amount::{Amount, AmountError};
pub use date::{is_valid_date, Date, DateError, DATE_FORMAT};
pub(crate) use transaction::TransactionRow;
pub use transaction::{
    Field, Rejected, Transaction, TransactionUpdates, DEFAULT_CATEGORY, HEADERS,
};

//! fintrack keeps a list of personal finance transactions in a CSV file and provides an
//! interactive menu for adding, viewing, updating, deleting, analyzing and saving them, along
//! with a plain-text report.

pub mod analysis;
pub mod args;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod report;
pub mod shell;
pub mod store;
mod utils;


pub use config::{Config, DEFAULT_REPORT_FILE, DEFAULT_TRANSACTIONS_FILE};
pub use error::Error;
pub use error::Result;
pub use store::Transactions;

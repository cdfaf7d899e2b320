//! Command handlers for fintrack.
//!
//! This module contains one handler for each menu operation. Handlers that need answers from the
//! user take a `Console`; the rest work on the store alone. Recoverable problems such as an empty
//! store or a bad selection are not errors: they come back as the `Out` message.

mod add;
mod analyze;
mod delete;
mod load;
mod report;
mod save;
mod update;
mod view;

use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info};

pub use add::add;
pub use analyze::analyze;
pub use delete::delete;
pub use load::load;
pub use report::report;
pub use save::save;
pub use update::update;
pub use view::view;

/// The value typed at the amount prompt to abandon adding a transaction. Case-insensitive.
pub const CANCEL: &str = "cancel";

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, structured data to both the interactive shell and the one-shot subcommands.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Take the structured data stored in `structure`.
    pub fn into_structure(self) -> Option<T> {
        self.structure
    }

    /// Print the message to `info!` and the structured data (if it exists) as JSON to `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        self.debug_structure();
    }

    /// Print the message to stdout and the structured data (if it exists) as JSON to `debug!`.
    pub fn show(&self) {
        println!("{}", self.message);
        self.debug_structure();
    }

    fn debug_structure(&self) {
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_message_only() {
        let out: Out<u32> = "nothing to do".into();
        assert_eq!(out.message(), "nothing to do");
        assert!(out.structure().is_none());
    }

    #[test]
    fn test_out_with_structure() {
        let out = Out::new("done", 7u32);
        assert_eq!(out.structure(), Some(&7));
        assert_eq!(out.into_structure(), Some(7));
    }
}

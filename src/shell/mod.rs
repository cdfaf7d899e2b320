//! The interactive menu.
//!
//! A `Shell` owns the session's `Transactions` and hands it to each command by reference. Nothing
//! is written to disk unless the user picks Save or Generate Report.

mod console;

pub use console::Console;

use crate::commands;
use crate::store::Transactions;
use crate::{Config, Result};
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, trace, warn};

/// The options of the main menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Add,
    View,
    Update,
    Delete,
    Analyze,
    Save,
    Report,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Load,
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Analyze,
        MenuChoice::Save,
        MenuChoice::Report,
        MenuChoice::Exit,
    ];

    /// The number typed to pick this option.
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map(|ix| ix + 1)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Load => "Load Transactions",
            MenuChoice::Add => "Add Transaction",
            MenuChoice::View => "View Transactions",
            MenuChoice::Update => "Update Transaction",
            MenuChoice::Delete => "Delete Transaction",
            MenuChoice::Analyze => "Analyze Finances",
            MenuChoice::Save => "Save Transactions",
            MenuChoice::Report => "Generate Report",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|ix| Self::ALL.get(ix).copied())
            .ok_or_else(|| s.to_string())
    }
}

/// Whether the menu loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive session over a `Console`.
#[derive(Debug)]
pub struct Shell<R, W> {
    console: Console<R, W>,
    config: Config,
    transactions: Transactions,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(console: Console<R, W>, config: Config, transactions: Transactions) -> Self {
        Self {
            console,
            config,
            transactions,
        }
    }

    pub fn transactions(&self) -> &Transactions {
        &self.transactions
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Shows the menu and runs commands until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// - Returns an error if the console fails or a file cannot be written while saving or
    ///   generating the report.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(entry) = self.console.prompt("Choose an option: ")? else {
                debug!("End of input, leaving the menu");
                break;
            };
            let choice = match MenuChoice::from_str(&entry) {
                Ok(choice) => choice,
                Err(bad) => {
                    self.console.say(format!(
                        "Invalid choice '{}'. Please select a number between 1 and {}.",
                        bad.trim(),
                        MenuChoice::ALL.len()
                    ))?;
                    continue;
                }
            };
            trace!("Menu choice {choice:?}");
            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.say("\nPersonal Finance Tracker")?;
        for choice in MenuChoice::ALL {
            self.console.say(choice)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        let message = match choice {
            MenuChoice::Load => match self.ask_path("Enter filename to load from")? {
                None => "Load canceled.".to_string(),
                Some(path) => match commands::load(&path) {
                    Ok(out) => {
                        let message = out.message().to_string();
                        self.transactions = out.into_structure().unwrap_or_default();
                        message
                    }
                    Err(e) => {
                        warn!("Keeping the current transactions: {e:#}");
                        format!("{e:#}")
                    }
                },
            },
            MenuChoice::Add => commands::add(&mut self.console, &mut self.transactions)?
                .message()
                .to_string(),
            MenuChoice::View => commands::view(&self.transactions).message().to_string(),
            MenuChoice::Update => commands::update(&mut self.console, &mut self.transactions)?
                .message()
                .to_string(),
            MenuChoice::Delete => commands::delete(&mut self.console, &mut self.transactions)?
                .message()
                .to_string(),
            MenuChoice::Analyze => commands::analyze(&self.transactions).message().to_string(),
            MenuChoice::Save => match self.ask_path("Enter filename to save to")? {
                None => "Save canceled.".to_string(),
                Some(path) => commands::save(&self.transactions, &path)?
                    .message()
                    .to_string(),
            },
            MenuChoice::Report => commands::report(&self.transactions, self.config.report_path())?
                .message()
                .to_string(),
            MenuChoice::Exit => {
                self.console.say("Exiting the program. Goodbye!")?;
                return Ok(Flow::Exit);
            }
        };
        self.console.say(message)?;
        Ok(Flow::Continue)
    }

    /// Asks for a file path, offering the configured transactions file as the default. Returns
    /// `None` if the input ends before an answer is given.
    fn ask_path(&mut self, label: &str) -> Result<Option<PathBuf>> {
        let default = self.config.transactions_path().to_path_buf();
        let Some(entry) = self
            .console
            .prompt(&format!("{label} [{}]: ", default.display()))?
        else {
            return Ok(None);
        };
        let entry = entry.trim();
        Ok(Some(if entry.is_empty() {
            default
        } else {
            PathBuf::from(entry)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{console, output, sample_transactions, transaction, TestEnv};
    use std::io::Cursor;

    type TestShell = Shell<Cursor<Vec<u8>>, Vec<u8>>;

    fn shell(env: &TestEnv, input: &str, transactions: Transactions) -> TestShell {
        Shell::new(console(input), env.config(), transactions)
    }

    fn printed(shell: &TestShell) -> String {
        output(shell.console())
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::from_str("1").unwrap(), MenuChoice::Load);
        assert_eq!(MenuChoice::from_str(" 9 ").unwrap(), MenuChoice::Exit);
        assert!(MenuChoice::from_str("0").is_err());
        assert!(MenuChoice::from_str("10").is_err());
        assert!(MenuChoice::from_str("view").is_err());
    }

    #[test]
    fn test_menu_display() {
        assert_eq!(MenuChoice::Save.to_string(), "7. Save Transactions");
        assert_eq!(MenuChoice::Exit.number(), 9);
    }

    #[test]
    fn test_exit() {
        let env = TestEnv::new();
        let mut s = shell(&env, "9\n", sample_transactions());
        s.run().unwrap();
        let out = printed(&s);
        assert!(out.contains("1. Load Transactions\n"));
        assert!(out.contains("9. Exit\n"));
        assert!(out.ends_with("Exiting the program. Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let env = TestEnv::new();
        let mut s = shell(&env, "", Transactions::default());
        s.run().unwrap();
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let env = TestEnv::new();
        let mut s = shell(&env, "42\n9\n", Transactions::default());
        s.run().unwrap();
        let out = printed(&s);
        assert!(out.contains("Invalid choice '42'. Please select a number between 1 and 9."));
        assert_eq!(out.matches("Personal Finance Tracker").count(), 2);
    }

    #[test]
    fn test_add_then_delete() {
        let env = TestEnv::new();
        let input = "2\n2025-03-01\nRent\nHousing\n-900\n5\n1\n9\n";
        let mut s = shell(&env, input, sample_transactions());
        s.run().unwrap();
        let descriptions: Vec<&str> = s.transactions().iter().map(|t| t.description()).collect();
        assert_eq!(descriptions, vec!["Groceries", "Refund, partial", "Rent"]);
    }

    #[test]
    fn test_analyze_and_view() {
        let env = TestEnv::new();
        let mut s = shell(&env, "6\n3\n9\n", sample_transactions());
        s.run().unwrap();
        let out = printed(&s);
        assert!(out.contains("Net Balance: $85.50"));
        assert!(out.contains("List of Transactions:"));
    }

    #[test]
    fn test_save_default_path_then_load() {
        let env = TestEnv::new();
        let mut s = shell(&env, "7\n\n9\n", sample_transactions());
        s.run().unwrap();
        assert!(env.config().transactions_path().is_file());

        let mut s = shell(&env, "1\n\n9\n", Transactions::default());
        s.run().unwrap();
        assert_eq!(s.transactions().len(), 3);
        assert!(printed(&s).contains("3 transactions loaded."));
    }

    #[test]
    fn test_save_to_entered_path() {
        let env = TestEnv::new();
        let target = env.path("elsewhere.csv");
        let input = format!("7\n{}\n9\n", target.display());
        let mut s = shell(&env, &input, sample_transactions());
        s.run().unwrap();
        assert!(target.is_file());
        assert!(!env.config().transactions_path().exists());
    }

    #[test]
    fn test_load_missing_file_empties_store() {
        let env = TestEnv::new();
        let input = format!("1\n{}\n9\n", env.path("missing.csv").display());
        let mut s = shell(&env, &input, sample_transactions());
        s.run().unwrap();
        assert!(s.transactions().is_empty());
        assert!(printed(&s).contains("Starting with empty transaction list."));
    }

    #[test]
    fn test_report() {
        let env = TestEnv::new();
        let mut s = shell(&env, "8\n9\n", sample_transactions());
        s.run().unwrap();
        let report = std::fs::read_to_string(env.config().report_path()).unwrap();
        assert!(report.contains("Total Transactions: 3"));
        assert!(printed(&s).contains(&report));
    }

    #[test]
    fn test_save_failure_ends_session() {
        let env = TestEnv::new();
        let input = format!("7\n{}\n9\n", env.path("no-dir").join("x.csv").display());
        let mut s = shell(&env, &input, sample_transactions());
        assert!(s.run().is_err());
    }

    #[test]
    fn test_unreadable_load_keeps_session() {
        let env = TestEnv::new();
        let input = format!(
            "2\n2025-03-01\nRent\nHousing\n-900\n1\n{}\n3\n9\n",
            env.dir().display()
        );
        let mut s = shell(&env, &input, sample_transactions());
        s.run().unwrap();
        assert_eq!(s.transactions().len(), 4);
        assert_eq!(s.transactions().data()[3].description(), "Rent");
        let out = printed(&s);
        assert!(out.contains("Unable to load"));
        assert!(out.contains("Rent"));
        assert!(out.ends_with("Exiting the program. Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_at_save_prompt_writes_nothing() {
        let env = TestEnv::new();
        env.write_transactions("date,description,category,amount\n2025-01-01,Keep,Me,1\n");
        let mut s = shell(&env, "7\n", Transactions::default());
        s.run().unwrap();
        assert!(printed(&s).contains("Save canceled."));

        let mut s = shell(&env, "7\n", sample_transactions());
        s.run().unwrap();
        let kept = std::fs::read_to_string(env.config().transactions_path()).unwrap();
        assert!(kept.contains("Keep,Me,1"));
    }

    #[test]
    fn test_end_of_input_at_load_prompt_keeps_store() {
        let env = TestEnv::new();
        let mut s = shell(&env, "1\n", sample_transactions());
        s.run().unwrap();
        assert_eq!(s.transactions(), &sample_transactions());
        assert!(printed(&s).contains("Load canceled."));
    }

    #[test]
    fn test_overflowing_totals_keep_session() {
        let env = TestEnv::new();
        let transactions: Transactions = vec![
            transaction("2025-01-01", "Jackpot", "Income", "79228162514264337593543950335"),
            transaction("2025-01-02", "Interest", "Income", "1"),
        ]
        .into_iter()
        .collect();
        let mut s = shell(&env, "6\n8\n9\n", transactions);
        s.run().unwrap();
        let out = printed(&s);
        assert!(out.contains("Unable to analyze finances"));
        assert!(out.contains("Unable to generate report"));
        assert!(out.ends_with("Exiting the program. Goodbye!\n"));
    }
}

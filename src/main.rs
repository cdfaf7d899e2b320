use clap::Parser;
use fintrack::args::{Args, Command};
use fintrack::shell::{Console, Shell};
use fintrack::{commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let common = args.common();
    let config = Config::resolve(common.config(), common.file(), common.report())?;
    debug!(
        "Transactions file {}, report file {}",
        config.transactions_path().display(),
        config.report_path().display()
    );

    let loaded = commands::load(config.transactions_path())?;

    // Route to appropriate command handler
    match args.command() {
        Command::Shell => {
            let mut console = Console::stdio();
            console.say(loaded.message())?;
            let transactions = loaded.into_structure().unwrap_or_default();
            Shell::new(console, config, transactions).run()?
        }
        Command::View => {
            loaded.print();
            let transactions = loaded.into_structure().unwrap_or_default();
            commands::view(&transactions).show()
        }
        Command::Analyze => {
            loaded.print();
            let transactions = loaded.into_structure().unwrap_or_default();
            commands::analyze(&transactions).show()
        }
        Command::Report => {
            loaded.print();
            let transactions = loaded.into_structure().unwrap_or_default();
            commands::report(&transactions, config.report_path())?.show()
        }
    }
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

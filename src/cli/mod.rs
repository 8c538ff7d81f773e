//! Command-line front end: a one-shot demo, repository setup, and a
//! line-oriented session read from stdin.

pub mod output;
pub mod session;

use std::{env, io, path::PathBuf};

use crate::{
    config::{Config, ConfigManager},
    errors::{TrackerError, TrackerResult},
    ledger::{Ledger, TransactionKind},
    repo::{self, RepoIdentity, RepoSetup},
};

pub use session::Session;

const DEFAULT_DEMO_BUDGET: f64 = 1500.0;

const USAGE: &str = "Usage: finance_tracker_cli [command]\n\
     Commands:\n  \
     (none)            read session commands from stdin\n  \
     demo [budget]     chart and summarize a sample month\n  \
     init-repo <path>  create a git repository with a README";

pub fn run_cli() -> TrackerResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = ConfigManager::new().load()?;
    tracing::debug!(?config, "configuration loaded");

    match args.first().map(String::as_str) {
        None => {
            let stdin = io::stdin();
            Session::new(config).run_script(stdin.lock())
        }
        Some("demo") => {
            let budget = match args.get(1) {
                Some(raw) => session::parse_number(raw)?,
                None => DEFAULT_DEMO_BUDGET,
            };
            run_demo(config, budget);
            Ok(())
        }
        Some("init-repo") => {
            let path = args.get(1).map(PathBuf::from).ok_or_else(usage_error)?;
            init_repo(&config, path)
        }
        Some("help" | "-h" | "--help") => {
            eprintln!("{USAGE}");
            Ok(())
        }
        Some(_) => Err(usage_error()),
    }
}

/// Sample month used by `demo`.
pub fn demo_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_transaction("2025-03-01", "Groceries", 50.0, TransactionKind::Expense);
    ledger.add_transaction("2025-03-02", "Salary", 2000.0, TransactionKind::Income);
    ledger.add_transaction("2025-03-03", "Rent", 800.0, TransactionKind::Expense);
    ledger.add_transaction("2025-03-04", "Entertainment", 100.0, TransactionKind::Expense);
    ledger
}

fn run_demo(config: Config, budget: f64) {
    let session = Session::with_ledger(demo_ledger(), config);
    session.print_spending();
    session.print_summary(budget);
}

fn init_repo(config: &Config, path: PathBuf) -> TrackerResult<()> {
    match repo::setup_repository(&path, &RepoIdentity::from(config))? {
        RepoSetup::Initialized(path) => {
            output::success(format!("Initialized repository at {}", path.display()))
        }
        RepoSetup::AlreadyInitialized(_) => output::info("Git repository already initialized."),
    }
    Ok(())
}

fn usage_error() -> TrackerError {
    TrackerError::InvalidInput(USAGE.to_string())
}

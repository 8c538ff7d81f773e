//! The append-only transaction ledger and the figures derived from it.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use ledger::Ledger;
pub use summary::{BudgetSummary, CategoryTotals};
pub use transaction::{Transaction, TransactionKind};

#![doc(test(attr(deny(warnings))))]

//! Finance Tracker records income and expense transactions in an append-only
//! ledger, aggregates spending by category, and derives budget summaries.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod repo;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Finance Tracker tracing initialized.");
    });
}

use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::errors::TrackerError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded movement of money. Immutable once added to a ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    date: String,
    category: String,
    amount: f64,
    kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            kind,
        }
    }

    /// The date exactly as it was recorded.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Interprets the recorded date as `YYYY-MM-DD`, if it has that shape.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), ISO_DATE_FORMAT).ok()
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Closed classification of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(TrackerError::InvalidKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_is_case_insensitive() {
        assert_eq!(
            "Expense".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(
            " INCOME ".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
    }

    #[test]
    fn kind_parsing_rejects_unknown_labels() {
        let err = "Transfer".parse::<TransactionKind>().unwrap_err();
        assert!(matches!(err, TrackerError::InvalidKind(ref raw) if raw == "Transfer"));
        assert!(err.to_string().contains("Transfer"));
    }

    #[test]
    fn date_is_kept_verbatim() {
        let txn = Transaction::new("March 1st", "Misc", 3.0, TransactionKind::Expense);
        assert_eq!(txn.date(), "March 1st");
        assert!(txn.calendar_date().is_none());
    }

    #[test]
    fn iso_dates_resolve_to_calendar_dates() {
        let txn = Transaction::new("2025-03-01", "Groceries", 50.0, TransactionKind::Expense);
        assert_eq!(
            txn.calendar_date(),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
    }
}

use super::{
    summary::{BudgetSummary, CategoryTotals},
    transaction::{Transaction, TransactionKind},
};

/// Append-only, insertion-ordered record of transactions.
///
/// There is no update or delete; [`Ledger::view_transactions`] hands out a
/// shared slice, so callers cannot rewrite history through it.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one transaction. Amounts are summed with their sign as given.
    pub fn add_transaction(
        &mut self,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
    ) {
        let transaction = Transaction::new(date, category, amount, kind);
        if transaction.amount() < 0.0 {
            tracing::warn!(
                category = transaction.category(),
                amount = transaction.amount(),
                "recording negative amount"
            );
        }
        tracing::debug!(
            date = transaction.date(),
            category = transaction.category(),
            amount = transaction.amount(),
            kind = %transaction.kind(),
            "transaction added"
        );
        self.transactions.push(transaction);
    }

    pub fn view_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn aggregate_expenses_by_category(&self) -> CategoryTotals {
        let mut totals = CategoryTotals::new();
        for txn in self.transactions.iter().filter(|txn| txn.is_expense()) {
            totals.accumulate(txn.category(), txn.amount());
        }
        totals
    }

    pub fn compute_budget_summary(&self, budget_limit: f64) -> BudgetSummary {
        let total_income = self.total_for(TransactionKind::Income);
        let total_expenses = self.total_for(TransactionKind::Expense);
        BudgetSummary::from_parts(total_income, total_expenses, budget_limit)
    }

    fn total_for(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.kind() == kind)
            .map(Transaction::amount)
            .sum()
    }
}

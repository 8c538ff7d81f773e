use std::collections::BTreeMap;

/// Expense totals keyed by category, iterated in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals(BTreeMap<String, f64>);

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn accumulate(&mut self, category: &str, amount: f64) {
        *self.0.entry(category.to_string()).or_insert(0.0) += amount;
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// Largest single category total, if any.
    pub fn max_total(&self) -> Option<f64> {
        self.0.values().copied().reduce(f64::max)
    }
}

/// Income, spending, and what is left over against a budget limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub remaining_budget: f64,
    pub total_savings: f64,
}

impl BudgetSummary {
    pub fn from_parts(total_income: f64, total_expenses: f64, budget_limit: f64) -> Self {
        Self {
            total_income,
            total_expenses,
            remaining_budget: budget_limit - total_expenses,
            total_savings: total_income - total_expenses,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget < 0.0
    }
}

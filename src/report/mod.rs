//! Plain-text presentation of ledger figures: the spending chart, the budget
//! summary lines, and the transaction listing.

pub mod table;

use crate::ledger::{BudgetSummary, CategoryTotals, Transaction};

use table::{Alignment, Table, TableColumn};

pub const CHART_TITLE: &str = "Monthly Spending by Category";
pub const CHART_AXIS_LABEL: &str = "Amount Spent";

const BAR_GLYPH: &str = "#";

/// Upper bound on bar length, whatever the configured width.
pub const MAX_CHART_WIDTH: usize = 200;

/// Formats a money amount, dropping decimals for whole values.
///
/// ```
/// use finance_tracker::report::format_amount;
///
/// assert_eq!(format_amount(2000.0, "$"), "$2000");
/// assert_eq!(format_amount(12.5, "$"), "$12.50");
/// assert_eq!(format_amount(-50.0, "$"), "-$50");
/// ```
pub fn format_amount(value: f64, symbol: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude.is_finite() && magnitude.fract() == 0.0 {
        format!("{sign}{symbol}{magnitude:.0}")
    } else {
        format!("{sign}{symbol}{magnitude:.2}")
    }
}

pub fn render_budget_summary(summary: &BudgetSummary, symbol: &str) -> Vec<String> {
    vec![
        format!("Total Income: {}", format_amount(summary.total_income, symbol)),
        format!("Total Expenses: {}", format_amount(summary.total_expenses, symbol)),
        format!(
            "Remaining Budget: {}",
            format_amount(summary.remaining_budget, symbol)
        ),
        format!("Total Savings: {}", format_amount(summary.total_savings, symbol)),
    ]
}

/// Horizontal bar chart of expense totals, one bar per category.
///
/// The largest positive total spans `width` columns (at most
/// [`MAX_CHART_WIDTH`]); other bars scale linearly and non-positive totals
/// draw no bar.
pub fn render_spending_chart(totals: &CategoryTotals, width: usize, symbol: &str) -> String {
    let width = width.min(MAX_CHART_WIDTH);
    let mut lines = vec![CHART_TITLE.to_string(), format!("({CHART_AXIS_LABEL})")];

    if totals.is_empty() {
        lines.push("(no expenses recorded)".to_string());
        return lines.join("\n");
    }

    let peak = totals.max_total().filter(|max| *max > 0.0);
    let label_width = totals
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    for (name, total) in totals.iter() {
        let bar_len = match peak {
            Some(max) if total > 0.0 => ((total / max) * width as f64).round() as usize,
            _ => 0,
        };
        let bar = BAR_GLYPH.repeat(bar_len.min(width));
        lines.push(format!(
            "{name:<label_width$} | {bar:<width$} {}",
            format_amount(total, symbol)
        ));
    }

    lines.join("\n")
}

pub fn render_transactions(transactions: &[Transaction], symbol: &str) -> Vec<String> {
    let mut table = Table::new(vec![
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Type", Alignment::Left),
    ]);
    for txn in transactions {
        table.push_row(vec![
            txn.date().to_string(),
            txn.category().to_string(),
            format_amount(txn.amount(), symbol),
            txn.kind().to_string(),
        ]);
    }

    let mut lines = table.render();
    if transactions.is_empty() {
        lines.push("(no transactions recorded)".to_string());
    }
    lines
}

use std::io::BufRead;

use shell_words::split;

use crate::{
    cli::output,
    config::Config,
    errors::{TrackerError, TrackerResult},
    ledger::{Ledger, TransactionKind},
    report,
};

const HELP_TEXT: &[&str] = &[
    "add <date> <category> <amount> <income|expense>",
    "list",
    "spending",
    "summary <budget>",
    "help",
    "exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// One CLI session: a fresh ledger fed by commands, one per line.
pub struct Session {
    ledger: Ledger,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            ledger: Ledger::new(),
            config,
        }
    }

    /// Starts from an already populated ledger.
    pub fn with_ledger(ledger: Ledger, config: Config) -> Self {
        Self { ledger, config }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Executes every line from `input` until `exit` or end of input.
    ///
    /// Bad lines are reported and skipped; only read failures abort.
    pub fn run_script(&mut self, input: impl BufRead) -> TrackerResult<()> {
        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) => {
                    tracing::debug!(line = line.trim(), error = %err, "command rejected");
                    output::error(err);
                }
            }
        }
        Ok(())
    }

    pub(crate) fn handle_line(&mut self, line: &str) -> TrackerResult<LoopControl> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(LoopControl::Continue);
        }

        let tokens = split(trimmed).map_err(|err| TrackerError::InvalidInput(err.to_string()))?;
        let Some((command, args)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };

        match command.to_ascii_lowercase().as_str() {
            "add" => self.add(args)?,
            "list" => {
                expect_args("list", args, 0)?;
                output::section("Transactions");
                output::lines(report::render_transactions(
                    self.ledger.view_transactions(),
                    &self.config.currency_symbol,
                ));
            }
            "spending" => {
                expect_args("spending", args, 0)?;
                self.print_spending();
            }
            "summary" => {
                expect_args("summary <budget>", args, 1)?;
                let budget = parse_number(&args[0])?;
                self.print_summary(budget);
            }
            "help" => output::lines(HELP_TEXT.iter()),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            other => {
                return Err(TrackerError::InvalidInput(format!(
                    "unknown command `{other}` (try `help`)"
                )))
            }
        }
        Ok(LoopControl::Continue)
    }

    fn add(&mut self, args: &[String]) -> TrackerResult<()> {
        expect_args("add <date> <category> <amount> <income|expense>", args, 4)?;
        let amount = parse_amount(&args[2])?;
        let kind: TransactionKind = args[3].parse()?;
        self.ledger
            .add_transaction(args[0].as_str(), args[1].as_str(), amount, kind);
        if let Some(txn) = self.ledger.view_transactions().last() {
            if txn.calendar_date().is_none() {
                output::warning(format!(
                    "Date `{}` is not YYYY-MM-DD; stored as given.",
                    txn.date()
                ));
            }
        }
        output::success(format!(
            "Recorded {kind} of {} in {}",
            report::format_amount(amount, &self.config.currency_symbol),
            args[1]
        ));
        Ok(())
    }

    pub fn print_spending(&self) {
        let totals = self.ledger.aggregate_expenses_by_category();
        output::info(report::render_spending_chart(
            &totals,
            self.config.chart_width,
            &self.config.currency_symbol,
        ));
    }

    pub fn print_summary(&self, budget: f64) {
        let summary = self.ledger.compute_budget_summary(budget);
        output::section("Budget Summary");
        output::lines(report::render_budget_summary(
            &summary,
            &self.config.currency_symbol,
        ));
        if summary.is_over_budget() {
            output::warning("Expenses exceed the budget limit.");
        }
    }
}

fn expect_args(usage: &str, args: &[String], count: usize) -> TrackerResult<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(TrackerError::InvalidInput(format!("usage: {usage}")))
    }
}

pub(crate) fn parse_number(raw: &str) -> TrackerResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| TrackerError::InvalidAmount(format!("`{raw}` is not a number")))
}

/// Transaction amounts entered at the prompt must be non-negative.
fn parse_amount(raw: &str) -> TrackerResult<f64> {
    let value = parse_number(raw)?;
    if value < 0.0 {
        return Err(TrackerError::InvalidAmount(format!(
            "`{raw}` is negative; record refunds as income"
        )));
    }
    Ok(value)
}

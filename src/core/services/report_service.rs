//! Text rendering for the expense listing and the budget summary.

use std::fmt::{self, Write as _};

use crate::{
    currency::format_cents,
    ledger::{BudgetLimit, Ledger},
};

use super::summary_service::{CategoryStatus, SummaryService};

pub const ALL_EXPENSES_HEADER: &str = "All Expenses (categories A-Z; dates newest-oldest)";
pub const BUDGET_SUMMARY_HEADER: &str = "Budget Summary";
pub const NO_LIMIT_MARKER: &str = "(no limit)";
pub const UNBOUNDED_MARKER: &str = "(unbounded)";
pub const OVERSPENT_MARKER: &str = "[OVERSPENT]";

const DATE_INDENT: &str = "   ";

pub struct ReportService;

impl ReportService {
    /// Lists every expense: categories ascending, dates newest first.
    pub fn all_expenses_summary(ledger: &Ledger) -> String {
        let mut out = String::new();
        push_line(&mut out, format_args!("{ALL_EXPENSES_HEADER}"));
        for category in ledger.categories() {
            push_line(&mut out, format_args!("{category}:"));
            for (date, amount) in ledger.expenses_for(&category).iter().rev() {
                push_line(
                    &mut out,
                    format_args!("{DATE_INDENT}{date}: {}", format_cents(*amount)),
                );
            }
        }
        out
    }

    /// Income, expenses and remaining budget, then one line per category with
    /// its limit, spending and remaining room.
    pub fn budget_summary(ledger: &Ledger) -> String {
        let mut out = String::new();
        push_line(&mut out, format_args!("{BUDGET_SUMMARY_HEADER}"));
        push_line(
            &mut out,
            format_args!("Income: {}", format_cents(ledger.monthly_income())),
        );
        push_line(
            &mut out,
            format_args!(
                "Expenses: {}",
                format_cents(SummaryService::total_expenses(ledger))
            ),
        );
        push_line(
            &mut out,
            format_args!(
                "Remaining Budget: {}",
                format_cents(SummaryService::left_to_budget(ledger))
            ),
        );
        for status in SummaryService::category_statuses(ledger) {
            push_line(&mut out, format_args!("{}", category_line(&status)));
        }
        out
    }
}

fn category_line(status: &CategoryStatus) -> String {
    let spent = format_cents(status.spent);
    match (status.limit, status.remaining) {
        (BudgetLimit::Limited(limit), Some(remaining)) => {
            let mut line = format!(
                " - {}: limit = {}, spent = {spent}, remaining = {}",
                status.name,
                format_cents(limit),
                format_cents(remaining)
            );
            if status.overspent() {
                line.push(' ');
                line.push_str(OVERSPENT_MARKER);
            }
            line
        }
        _ => format!(
            " - {}: limit = {NO_LIMIT_MARKER}, spent = {spent}, remaining = {UNBOUNDED_MARKER}",
            status.name
        ),
    }
}

fn push_line(out: &mut String, line: fmt::Arguments<'_>) {
    writeln!(out, "{line}").ok();
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ledger{{income={}, expenses={}, leftToBudget={}, categories={}}}",
            format_cents(self.monthly_income()),
            format_cents(SummaryService::total_expenses(self)),
            format_cents(SummaryService::left_to_budget(self)),
            self.categories().len()
        )
    }
}

#![allow(dead_code)]

use budget_tracker::ledger::Ledger;

/// Builds a ledger from `(category, date, cents)` triples plus income and limits.
pub fn ledger_with(income: i64, limits: &[(&str, i64)], expenses: &[(&str, &str, i64)]) -> Ledger {
    let mut ledger = Ledger::new();
    ledger.set_monthly_income(income).expect("valid income");
    for (category, limit) in limits {
        ledger
            .set_budget_limit(category, *limit)
            .expect("valid limit");
    }
    for (category, date, amount) in expenses {
        ledger
            .add_expense(category, date, *amount)
            .expect("valid expense");
    }
    ledger
}

/// Position of the first line containing `needle`.
pub fn line_index(text: &str, needle: &str) -> Option<usize> {
    text.lines().position(|line| line.contains(needle))
}

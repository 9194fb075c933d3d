mod common;

use std::collections::BTreeSet;

use budget_tracker::{
    core::services::{ReportService, SummaryService},
    errors::LedgerError,
    ledger::{BudgetLimit, Ledger},
};
use common::ledger_with;

#[test]
fn repeated_expenses_for_same_pair_sum() {
    for (a, b) in [(0, 0), (1, 2), (10_000, 5_050), (i64::MAX / 2, i64::MAX / 2)] {
        let mut ledger = Ledger::new();
        ledger.add_expense("Food", "2025-11-01", a).expect("first");
        ledger.add_expense("Food", "2025-11-01", b).expect("second");
        assert_eq!(ledger.expense_amount("Food", "2025-11-01"), a + b);
    }
}

#[test]
fn categories_are_union_of_expenses_and_limits() {
    let mut ledger = Ledger::new();
    ledger.set_budget_limit("Rent", 120_000).expect("limit");
    ledger.add_expense("Food", "2025-11-01", 500).expect("expense");
    ledger.set_budget_limit("Food", 40_000).expect("limit");
    ledger.add_expense("Misc", "2025-11-03", 75).expect("expense");

    let expected: BTreeSet<String> = ["Food", "Misc", "Rent"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(ledger.categories(), expected);
}

#[test]
fn queries_on_unknown_categories_return_empty_or_zero() {
    let ledger = Ledger::new();
    assert!(ledger.expense_dates("Nope").is_empty());
    assert!(ledger.expenses_for("   ").is_empty());
    assert_eq!(ledger.expense_amount("Nope", "2025-11-01"), 0);
    assert_eq!(ledger.expense_amount("Nope", "not-a-date"), 0);
    assert_eq!(SummaryService::category_expense(&ledger, "Nope"), 0);
    assert_eq!(ledger.budget_limit("Nope"), BudgetLimit::NoLimit);
}

#[test]
fn left_to_budget_never_negative() {
    let mut ledger = ledger_with(50_000, &[], &[]);
    ledger
        .add_expense("Coffee", "2025-12-01", 120_000)
        .expect("expense");
    assert_eq!(SummaryService::left_to_budget(&ledger), 0);

    ledger
        .add_expense("Coffee", "2025-12-02", i64::MAX - 120_000)
        .expect("expense");
    assert_eq!(SummaryService::left_to_budget(&ledger), 0);
    assert_eq!(SummaryService::total_expenses(&ledger), i64::MAX);
}

#[test]
fn totals_past_cents_range_are_rejected_not_clamped() {
    let mut ledger = ledger_with(0, &[], &[("Rent", "2025-12-01", i64::MAX)]);
    let snapshot = ledger.clone();

    let err = ledger
        .add_expense("Coffee", "2025-12-02", 1)
        .expect_err("total would exceed the cents range");
    assert!(matches!(err, LedgerError::AmountOverflow { .. }));
    assert_eq!(ledger, snapshot);

    let summary = ReportService::budget_summary(&ledger);
    assert!(
        summary.contains("Expenses: $92233720368547758.07"),
        "unexpected summary:\n{summary}"
    );
}

#[test]
fn cleared_limit_keeps_category_in_reports() {
    let mut ledger = ledger_with(0, &[("Travel", 30_000)], &[]);
    ledger.clear_budget_limit("Travel").expect("clear");

    assert!(ledger.categories().contains("Travel"));
    assert_eq!(ledger.budget_limit("Travel"), BudgetLimit::NoLimit);

    let summary = ReportService::budget_summary(&ledger);
    assert!(
        summary.contains(" - Travel: limit = (no limit), spent = $0.00, remaining = (unbounded)"),
        "unexpected summary:\n{summary}"
    );
    let listing = ReportService::all_expenses_summary(&ledger);
    assert!(listing.contains("Travel:"), "unexpected listing:\n{listing}");
}

#[test]
fn missing_limit_reads_as_no_limit() {
    let ledger = ledger_with(0, &[], &[("Misc", "2025-11-22", 7_500)]);
    assert_eq!(ledger.budget_limit("Misc"), BudgetLimit::NoLimit);

    let summary = ReportService::budget_summary(&ledger);
    assert!(
        summary.contains(" - Misc: limit = (no limit), spent = $75.00, remaining = (unbounded)"),
        "unexpected summary:\n{summary}"
    );
}

#[test]
fn each_precondition_has_its_own_error() {
    let mut ledger = Ledger::new();
    assert_eq!(
        ledger.add_expense("  ", "2025-10-01", 5),
        Err(LedgerError::EmptyCategory)
    );
    assert_eq!(
        ledger.add_expense("Food", "2025/10/01", 5),
        Err(LedgerError::MalformedDate("2025/10/01".into()))
    );
    assert_eq!(
        ledger.add_expense("Food", "20é-11-01", 5),
        Err(LedgerError::MalformedDate("20é-11-01".into()))
    );
    assert_eq!(
        ledger.add_expense("Food", "2025-10-01", -5),
        Err(LedgerError::NegativeAmount {
            field: "amount",
            value: -5
        })
    );
    assert_eq!(
        ledger.set_monthly_income(-1),
        Err(LedgerError::NegativeAmount {
            field: "income",
            value: -1
        })
    );
    assert_eq!(
        ledger.set_budget_limit("Food", -100),
        Err(LedgerError::NegativeAmount {
            field: "limit",
            value: -100
        })
    );
    assert_eq!(
        ledger.clear_budget_limit(""),
        Err(LedgerError::EmptyCategory)
    );
}

#[test]
fn rejected_mutations_leave_state_untouched() {
    let mut ledger = ledger_with(
        300_000,
        &[("Food", 40_000)],
        &[("Food", "2025-10-01", 1_000)],
    );
    let snapshot = ledger.clone();

    let err = ledger
        .add_expense("Food", "2025-10-01", -5)
        .expect_err("negative amount must be rejected");
    assert!(matches!(err, LedgerError::NegativeAmount { .. }));
    assert!(ledger.set_monthly_income(-10).is_err());
    assert!(ledger.set_budget_limit("Food", -1).is_err());
    assert!(ledger.add_expense("", "2025-10-01", 5).is_err());
    assert!(ledger.add_expense("Food", "20251001", 5).is_err());

    assert_eq!(ledger, snapshot);
}

#[test]
fn queries_are_idempotent_and_pure() {
    let ledger = ledger_with(
        450_000,
        &[("Food", 50_000), ("Travel", 30_000)],
        &[
            ("Food", "2025-11-01", 10_000),
            ("Food", "2025-11-12", 20_000),
            ("Travel", "2025-11-20", 15_000),
        ],
    );
    let reference = ledger_with(
        450_000,
        &[("Food", 50_000), ("Travel", 30_000)],
        &[
            ("Food", "2025-11-01", 10_000),
            ("Food", "2025-11-12", 20_000),
            ("Travel", "2025-11-20", 15_000),
        ],
    );

    assert_eq!(
        SummaryService::category_expense(&ledger, "Food"),
        SummaryService::category_expense(&ledger, "Food")
    );
    assert_eq!(ledger.expense_dates("Food"), ledger.expense_dates("Food"));
    assert_eq!(
        ReportService::budget_summary(&ledger),
        ReportService::budget_summary(&ledger)
    );
    assert_eq!(
        ReportService::all_expenses_summary(&ledger),
        ReportService::all_expenses_summary(&ledger)
    );
    assert_eq!(ledger, reference);
}

#[test]
fn equality_compares_all_state() {
    let base = ledger_with(100, &[("Food", 50)], &[("Food", "2025-11-01", 10)]);

    let mut other = base.clone();
    assert_eq!(base, other);

    other.set_budget_limit("Food", 51).expect("limit");
    assert_ne!(base, other);

    let mut other = base.clone();
    other.add_expense("Food", "2025-11-01", 0).expect("zero expense");
    assert_eq!(base, other);
    other.add_expense("Food", "2025-11-02", 0).expect("zero expense");
    assert_ne!(base, other);
}

//! Aggregates derived from ledger reads: category totals, the overall
//! remaining budget, and per-category limit status.

use crate::{
    currency::Cents,
    ledger::{validate_date, BudgetLimit, Ledger},
};

/// Length of a `YYYY-MM` month prefix.
const MONTH_PREFIX_LENGTH: usize = 7;

/// Spending against the limit for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStatus {
    pub name: String,
    pub limit: BudgetLimit,
    pub spent: Cents,
    /// `None` when the category has no limit.
    pub remaining: Option<Cents>,
}

impl CategoryStatus {
    pub fn overspent(&self) -> bool {
        self.remaining.is_some_and(|remaining| remaining < 0)
    }
}

/// Per-category total for a single month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCategoryTotal {
    pub name: String,
    pub spent: Cents,
}

/// Stateless aggregation over [`Ledger`] reads. Nothing here mutates the ledger.
pub struct SummaryService;

impl SummaryService {
    /// Sum over every date recorded for `category`; zero when unknown.
    pub fn category_expense(ledger: &Ledger, category: &str) -> Cents {
        ledger
            .expenses_for(category)
            .values()
            .sum()
    }

    pub fn total_expenses(ledger: &Ledger) -> Cents {
        ledger
            .categories()
            .iter()
            .map(|category| Self::category_expense(ledger, category))
            .sum()
    }

    /// Income minus total expenses, floored at zero.
    pub fn left_to_budget(ledger: &Ledger) -> Cents {
        (ledger.monthly_income() - Self::total_expenses(ledger)).max(0)
    }

    /// One status per category, in ascending category order.
    pub fn category_statuses(ledger: &Ledger) -> Vec<CategoryStatus> {
        ledger
            .categories()
            .into_iter()
            .map(|name| {
                let limit = ledger.budget_limit(&name);
                let spent = Self::category_expense(ledger, &name);
                CategoryStatus {
                    remaining: limit.remaining(spent),
                    name,
                    limit,
                    spent,
                }
            })
            .collect()
    }

    /// Sum of the category's amounts dated within `month` (`YYYY-MM`).
    ///
    /// A malformed month matches nothing.
    pub fn category_expense_for_month(ledger: &Ledger, category: &str, month: &str) -> Cents {
        if !is_month_prefix(month) {
            return 0;
        }
        ledger
            .expenses_for(category)
            .iter()
            .filter(|(date, _)| date.starts_with(month))
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Month totals for every category, ascending by name.
    pub fn monthly_totals(ledger: &Ledger, month: &str) -> Vec<MonthlyCategoryTotal> {
        ledger
            .categories()
            .into_iter()
            .map(|name| MonthlyCategoryTotal {
                spent: Self::category_expense_for_month(ledger, &name, month),
                name,
            })
            .collect()
    }
}

/// True for a `YYYY-MM` prefix with the dash in the ISO position.
pub fn is_month_prefix(month: &str) -> bool {
    month.len() == MONTH_PREFIX_LENGTH && validate_date(&format!("{month}-01")).is_ok()
}

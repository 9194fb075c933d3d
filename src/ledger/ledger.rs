use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use super::{
    budget::BudgetLimit,
    validation::{validate_amount, validate_category, validate_date},
};
use crate::{
    currency::Cents,
    errors::{LedgerError, Result},
};

/// Mutable budget state: monthly income, expenses keyed by category then date,
/// and the per-category limits.
///
/// Reads never hand out references into the maps; collections come back as
/// owned copies and unknown categories read as empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    monthly_income: Cents,
    expenses: BTreeMap<String, BTreeMap<String, Cents>>,
    limits: BTreeMap<String, BudgetLimit>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the monthly income.
    pub fn set_monthly_income(&mut self, income: Cents) -> Result<()> {
        let income = validate_amount("income", income).map_err(rejected)?;
        self.monthly_income = income;
        debug!(income, "monthly income set");
        Ok(())
    }

    pub fn monthly_income(&self) -> Cents {
        self.monthly_income
    }

    /// Records `amount` against `(category, date)`, summing with any amount
    /// already stored for that pair.
    ///
    /// The sum of every stored amount stays within [`Cents`], so an expense
    /// that would push the ledger-wide total past `Cents::MAX` is rejected.
    pub fn add_expense(&mut self, category: &str, date: &str, amount: Cents) -> Result<()> {
        validate_category(category).map_err(rejected)?;
        validate_date(date).map_err(rejected)?;
        let amount = validate_amount("amount", amount).map_err(rejected)?;

        if self.stored_total().checked_add(amount).is_none() {
            return Err(rejected(LedgerError::AmountOverflow {
                category: category.to_string(),
                date: date.to_string(),
            }));
        }
        let total = self.expense_amount(category, date) + amount;

        self.expenses
            .entry(category.to_string())
            .or_default()
            .insert(date.to_string(), total);
        debug!(category, date, amount, total, "expense recorded");
        Ok(())
    }

    /// Replaces the limit for `category`.
    pub fn set_budget_limit(&mut self, category: &str, limit: Cents) -> Result<()> {
        validate_category(category).map_err(rejected)?;
        let limit = validate_amount("limit", limit).map_err(rejected)?;
        self.limits.insert(category.to_string(), BudgetLimit::Limited(limit));
        debug!(category, limit, "budget limit set");
        Ok(())
    }

    /// Sets `category` to [`BudgetLimit::NoLimit`].
    ///
    /// The category stays in [`Ledger::categories`] even without expenses.
    pub fn clear_budget_limit(&mut self, category: &str) -> Result<()> {
        validate_category(category).map_err(rejected)?;
        self.limits.insert(category.to_string(), BudgetLimit::NoLimit);
        debug!(category, "budget limit cleared");
        Ok(())
    }

    /// Union of categories with expenses and categories with limits.
    pub fn categories(&self) -> BTreeSet<String> {
        self.expenses
            .keys()
            .chain(self.limits.keys())
            .cloned()
            .collect()
    }

    pub fn expense_dates(&self, category: &str) -> BTreeSet<String> {
        self.expenses
            .get(category)
            .map(|by_date| by_date.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn expense_amount(&self, category: &str, date: &str) -> Cents {
        self.expenses
            .get(category)
            .and_then(|by_date| by_date.get(date))
            .copied()
            .unwrap_or(0)
    }

    /// Copy of the date → amount entries for `category`.
    pub fn expenses_for(&self, category: &str) -> BTreeMap<String, Cents> {
        self.expenses.get(category).cloned().unwrap_or_default()
    }

    pub fn budget_limit(&self, category: &str) -> BudgetLimit {
        self.limits.get(category).copied().unwrap_or_default()
    }

    fn stored_total(&self) -> Cents {
        self.expenses.values().flat_map(BTreeMap::values).sum()
    }

    /// Resets to the freshly created state.
    pub fn clear(&mut self) {
        *self = Self::default();
        debug!("ledger cleared");
    }
}

fn rejected(err: LedgerError) -> LedgerError {
    warn!(error = %err, "ledger mutation rejected");
    err
}

use crate::currency::Cents;

/// A spending cap for a category, or the explicit absence of one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BudgetLimit {
    Limited(Cents),
    #[default]
    NoLimit,
}

impl BudgetLimit {
    /// Returns the cap in cents when one is set.
    pub fn cents(&self) -> Option<Cents> {
        match self {
            BudgetLimit::Limited(cents) => Some(*cents),
            BudgetLimit::NoLimit => None,
        }
    }

    /// Remaining room under the cap; `None` when the category is unbounded.
    ///
    /// The result goes negative once `spent` exceeds the cap.
    pub fn remaining(&self, spent: Cents) -> Option<Cents> {
        self.cents().map(|limit| limit.saturating_sub(spent))
    }
}

//! Budget service
//!
//! Planned amounts are set here; actuals only move through posted
//! transactions.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetCategory, BudgetSection, Books, Money};

/// Service for editing the budget
pub struct BudgetService<'a> {
    books: &'a mut Books,
}

impl<'a> BudgetService<'a> {
    pub fn new(books: &'a mut Books) -> Self {
        Self { books }
    }

    /// Set the planned amount for an existing category
    pub fn set_budget(
        &mut self,
        section: BudgetSection,
        name: &str,
        amount: Money,
    ) -> LedgerResult<BudgetCategory> {
        if amount.is_negative() {
            return Err(LedgerError::Validation(
                "Budget amount cannot be negative".into(),
            ));
        }

        let category = self
            .books
            .budget_mut()
            .set_budget(section, name.trim(), amount)?
            .clone();

        tracing::info!(%section, category = %category.name, budget = %amount, "budget set");
        Ok(category)
    }

    /// Add a category to a section, optionally with a planned amount
    pub fn add_category(
        &mut self,
        section: BudgetSection,
        name: &str,
        budget: Option<Money>,
    ) -> LedgerResult<BudgetCategory> {
        if budget.map_or(false, |b| b.is_negative()) {
            return Err(LedgerError::Validation(
                "Budget amount cannot be negative".into(),
            ));
        }

        let name = self.books.budget_mut().add_category(section, name)?.name.clone();
        let category = match budget {
            Some(amount) => self.books.budget_mut().set_budget(section, &name, amount)?.clone(),
            None => BudgetCategory::new(name),
        };

        tracing::info!(%section, category = %category.name, "budget category added");
        Ok(category)
    }
}

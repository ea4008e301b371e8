//! Fundraising service

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Books, FundraisingInitiative, LifecycleStatus, Money};

/// Fields for a new fundraising initiative
#[derive(Debug, Clone)]
pub struct InitiativeInput {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub coordinator: String,
    pub goal_amount: Money,
}

/// Service for fundraising initiatives
pub struct FundraisingService<'a> {
    books: &'a mut Books,
}

impl<'a> FundraisingService<'a> {
    pub fn new(books: &'a mut Books) -> Self {
        Self { books }
    }

    /// Find an initiative by ID or case-insensitive name
    pub fn find<'b>(books: &'b Books, reference: &str) -> Option<&'b FundraisingInitiative> {
        let reference = reference.trim();
        books
            .fundraising()
            .iter()
            .find(|i| i.id.matches(reference))
            .or_else(|| {
                books
                    .fundraising()
                    .iter()
                    .find(|i| i.name.eq_ignore_ascii_case(reference))
            })
    }

    /// Add an initiative in the Planning state
    pub fn add(&mut self, input: InitiativeInput) -> LedgerResult<FundraisingInitiative> {
        let initiative = FundraisingInitiative::new(
            input.name.trim(),
            input.start_date,
            input.end_date,
            input.coordinator.trim(),
            input.goal_amount,
        );
        initiative
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.books.push_initiative(initiative.clone());
        tracing::info!(id = %initiative.id, name = %initiative.name, "fundraising initiative added");
        Ok(initiative)
    }

    /// Replace the raised and spent totals of an initiative
    pub fn record_progress(
        &mut self,
        reference: &str,
        actual_raised: Money,
        expenses: Money,
    ) -> LedgerResult<FundraisingInitiative> {
        if actual_raised.is_negative() || expenses.is_negative() {
            return Err(LedgerError::Validation(
                "Raised and expense amounts cannot be negative".into(),
            ));
        }

        let initiative = self.find_mut(reference)?;
        initiative.record_progress(actual_raised, expenses);
        tracing::info!(
            id = %initiative.id,
            net = %initiative.net_proceeds,
            "fundraising progress recorded"
        );
        Ok(initiative.clone())
    }

    /// Move an initiative to a new lifecycle status
    pub fn set_status(
        &mut self,
        reference: &str,
        status: LifecycleStatus,
    ) -> LedgerResult<FundraisingInitiative> {
        let initiative = self.find_mut(reference)?;
        let from = initiative.status;
        initiative.set_status(status)?;
        tracing::info!(id = %initiative.id, %from, to = %status, "fundraising status changed");
        Ok(initiative.clone())
    }

    fn find_mut(&mut self, reference: &str) -> LedgerResult<&mut FundraisingInitiative> {
        let index = Self::find(self.books, reference)
            .and_then(|found| {
                self.books
                    .fundraising()
                    .iter()
                    .position(|i| i.id == found.id)
            })
            .ok_or_else(|| LedgerError::initiative_not_found(reference))?;
        Ok(&mut self.books.fundraising_mut()[index])
    }
}

//! Event sub-budget model
//!
//! Events carry their own projected and actual figures. Actuals are entered by
//! hand and are not linked to the main transaction list.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EventId;
use super::money::Money;
use super::status::LifecycleStatus;
use crate::error::LedgerResult;

/// A source of income for an event (ticket sales, donations...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub source: String,
    pub amount: Money,
    #[serde(default)]
    pub notes: String,
}

/// A cost incurred for an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub item: String,
    pub amount: Money,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub notes: String,
}

/// A committee event with its own budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: EventId,

    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub coordinator: String,

    #[serde(default)]
    pub projected_income: Money,
    #[serde(default)]
    pub projected_expenses: Money,
    #[serde(default)]
    pub actual_income: Money,
    #[serde(default)]
    pub actual_expenses: Money,

    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,
    #[serde(default)]
    pub expense_items: Vec<ExpenseItem>,

    #[serde(default)]
    pub status: LifecycleStatus,

    /// When the event was created
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Create an event in the Planning state with no actuals
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        location: impl Into<String>,
        coordinator: impl Into<String>,
        projected_income: Money,
        projected_expenses: Money,
    ) -> Self {
        Self {
            id: EventId::new(),
            name: name.into(),
            date,
            location: location.into(),
            coordinator: coordinator.into(),
            projected_income,
            projected_expenses,
            actual_income: Money::zero(),
            actual_expenses: Money::zero(),
            income_sources: Vec::new(),
            expense_items: Vec::new(),
            status: LifecycleStatus::Planning,
            created_at: Utc::now(),
        }
    }

    pub fn projected_net(&self) -> Money {
        self.projected_income - self.projected_expenses
    }

    pub fn actual_net(&self) -> Money {
        self.actual_income - self.actual_expenses
    }

    /// Record money received for the event
    pub fn record_income(&mut self, source: IncomeSource) {
        self.actual_income += source.amount;
        self.income_sources.push(source);
    }

    /// Record money spent on the event
    pub fn record_expense(&mut self, item: ExpenseItem) {
        self.actual_expenses += item.amount;
        self.expense_items.push(item);
    }

    /// Move the event along its lifecycle
    pub fn set_status(&mut self, next: LifecycleStatus) -> LedgerResult<()> {
        self.status = self.status.transition_to(next)?;
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.name,
            self.date.format("%Y-%m-%d"),
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prom() -> Event {
        Event::new(
            "Prom",
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            "School Hall",
            "Events Coordinator",
            Money::from_units(800),
            Money::from_units(650),
        )
    }

    #[test]
    fn test_new_event_starts_planning() {
        let event = prom();
        assert_eq!(event.status, LifecycleStatus::Planning);
        assert!(event.actual_income.is_zero());
        assert_eq!(event.projected_net(), Money::from_units(150));
    }

    #[test]
    fn test_record_income_and_expense() {
        let mut event = prom();
        event.record_income(IncomeSource {
            source: "Tickets".into(),
            amount: Money::from_units(500),
            notes: String::new(),
        });
        event.record_expense(ExpenseItem {
            item: "Catering".into(),
            amount: Money::from_units(320),
            vendor: "Caterer Co".into(),
            notes: String::new(),
        });

        assert_eq!(event.actual_income, Money::from_units(500));
        assert_eq!(event.actual_expenses, Money::from_units(320));
        assert_eq!(event.actual_net(), Money::from_units(180));
        assert_eq!(event.income_sources.len(), 1);
        assert_eq!(event.expense_items.len(), 1);
    }

    #[test]
    fn test_status_changes_are_validated() {
        let mut event = prom();
        event.set_status(LifecycleStatus::Active).unwrap();
        event.set_status(LifecycleStatus::Completed).unwrap();
        assert!(event.set_status(LifecycleStatus::Cancelled).is_err());
        assert_eq!(event.status, LifecycleStatus::Completed);
    }
}

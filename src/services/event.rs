//! Event service
//!
//! Events carry their own projected and actual figures. Recording event income
//! or spending does not post a ledger transaction.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Books, Event, ExpenseItem, IncomeSource, LifecycleStatus, Money};

/// Fields for a new event
#[derive(Debug, Clone)]
pub struct EventInput {
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub coordinator: String,
    pub projected_income: Money,
    pub projected_expenses: Money,
}

/// Service for event management
pub struct EventService<'a> {
    books: &'a mut Books,
}

impl<'a> EventService<'a> {
    pub fn new(books: &'a mut Books) -> Self {
        Self { books }
    }

    /// Find an event by ID or case-insensitive name
    pub fn find<'b>(books: &'b Books, reference: &str) -> Option<&'b Event> {
        let reference = reference.trim();
        books
            .events()
            .iter()
            .find(|e| e.id.matches(reference))
            .or_else(|| {
                books
                    .events()
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(reference))
            })
    }

    /// Create an event in the Planning state
    pub fn create(&mut self, input: EventInput) -> Event {
        let event = Event::new(
            input.name.trim(),
            input.date,
            input.location.trim(),
            input.coordinator.trim(),
            input.projected_income,
            input.projected_expenses,
        );
        self.books.push_event(event.clone());

        tracing::info!(id = %event.id, name = %event.name, "event created");
        event
    }

    /// Record money received for an event
    pub fn record_income(&mut self, reference: &str, source: IncomeSource) -> LedgerResult<Event> {
        if source.amount.is_negative() {
            return Err(LedgerError::Validation(
                "Income amount cannot be negative".into(),
            ));
        }

        let event = self.find_mut(reference)?;
        event.record_income(source);
        tracing::info!(id = %event.id, actual_income = %event.actual_income, "event income recorded");
        Ok(event.clone())
    }

    /// Record money spent on an event
    pub fn record_expense(&mut self, reference: &str, item: ExpenseItem) -> LedgerResult<Event> {
        if item.amount.is_negative() {
            return Err(LedgerError::Validation(
                "Expense amount cannot be negative".into(),
            ));
        }

        let event = self.find_mut(reference)?;
        event.record_expense(item);
        tracing::info!(id = %event.id, actual_expenses = %event.actual_expenses, "event expense recorded");
        Ok(event.clone())
    }

    /// Move an event to a new lifecycle status
    pub fn set_status(&mut self, reference: &str, status: LifecycleStatus) -> LedgerResult<Event> {
        let event = self.find_mut(reference)?;
        let from = event.status;
        event.set_status(status)?;
        tracing::info!(id = %event.id, %from, to = %status, "event status changed");
        Ok(event.clone())
    }

    fn find_mut(&mut self, reference: &str) -> LedgerResult<&mut Event> {
        let index = Self::find(self.books, reference)
            .and_then(|found| self.books.events().iter().position(|e| e.id == found.id))
            .ok_or_else(|| LedgerError::event_not_found(reference))?;
        Ok(&mut self.books.events_mut()[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spring_fair() -> EventInput {
        EventInput {
            name: "Spring Fair".into(),
            date: NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
            location: "Main Hall".into(),
            coordinator: "Events Coordinator".into(),
            projected_income: Money::from_units(1200),
            projected_expenses: Money::from_units(450),
        }
    }

    #[test]
    fn test_create_starts_in_planning() {
        let mut books = Books::new();
        let event = EventService::new(&mut books).create(spring_fair());
        assert_eq!(event.status, LifecycleStatus::Planning);
        assert_eq!(event.projected_net(), Money::from_units(750));
        assert!(event.actual_income.is_zero());
        assert_eq!(books.events().len(), 1);
    }

    #[test]
    fn test_find_by_name_or_id() {
        let mut books = Books::new();
        let event = EventService::new(&mut books).create(spring_fair());

        assert!(EventService::find(&books, "spring fair").is_some());
        assert!(EventService::find(&books, &event.id.to_string()).is_some());
        assert!(EventService::find(&books, &event.id.as_uuid().to_string()).is_some());
        assert!(EventService::find(&books, "Winter Fair").is_none());
    }

    #[test]
    fn test_record_income_and_expense() {
        let mut books = Books::new();
        let mut service = EventService::new(&mut books);
        service.create(spring_fair());

        service
            .record_income(
                "Spring Fair",
                IncomeSource {
                    source: "Ticket sales".into(),
                    amount: Money::from_units(900),
                    notes: String::new(),
                },
            )
            .unwrap();
        let event = service
            .record_expense(
                "Spring Fair",
                ExpenseItem {
                    item: "Tables".into(),
                    amount: Money::from_units(120),
                    vendor: "Hire Co".into(),
                    notes: String::new(),
                },
            )
            .unwrap();

        assert_eq!(event.actual_net(), Money::from_units(780));
        assert_eq!(event.income_sources.len(), 1);
        assert_eq!(event.expense_items[0].vendor, "Hire Co");
        assert!(books.transactions().is_empty());
    }

    #[test]
    fn test_unknown_event() {
        let mut books = Books::new();
        let err = EventService::new(&mut books)
            .set_status("Nope", LifecycleStatus::Active)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_completed_event_cannot_reopen() {
        let mut books = Books::new();
        let mut service = EventService::new(&mut books);
        service.create(spring_fair());

        service.set_status("Spring Fair", LifecycleStatus::Active).unwrap();
        service.set_status("Spring Fair", LifecycleStatus::Completed).unwrap();
        let err = service
            .set_status("Spring Fair", LifecycleStatus::Active)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTransition { .. }));
        assert_eq!(books.events()[0].status, LifecycleStatus::Completed);
    }
}

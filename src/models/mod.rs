//! Core data models for the committee ledger
//!
//! This module contains the data structures of the bookkeeping domain:
//! transactions, the two-section budget, events and fundraising initiatives,
//! gathered together in [`Books`].

pub mod authorizer;
pub mod books;
pub mod budget;
pub mod event;
pub mod fundraising;
pub mod ids;
pub mod money;
pub mod status;
pub mod transaction;

pub use authorizer::{AuthorizationLevel, Authorizer, HIGH_VALUE_THRESHOLD};
pub use books::Books;
pub use budget::{Budget, BudgetCategory, BudgetSection};
pub use event::{Event, ExpenseItem, IncomeSource};
pub use fundraising::FundraisingInitiative;
pub use ids::{EventId, InitiativeId, TransactionId};
pub use money::Money;
pub use status::LifecycleStatus;
pub use transaction::{Transaction, TransactionInput};

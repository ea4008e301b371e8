//! Service layer for the committee ledger
//!
//! Services provide the business rules on top of [`Books`](crate::models::Books):
//! validation, the authorization matrix, budget actuals and lifecycle moves.
//! Read-only calculations live in [`LedgerService`]; the others borrow the
//! books mutably for one operation.

pub mod budget;
pub mod event;
pub mod fundraising;
pub mod ledger;
pub mod transaction;

pub use budget::BudgetService;
pub use event::{EventInput, EventService};
pub use fundraising::{FundraisingService, InitiativeInput};
pub use ledger::{FundsSummary, LedgerService, TransactionFilter, EMERGENCY_RESERVE_PERCENT};
pub use transaction::TransactionService;

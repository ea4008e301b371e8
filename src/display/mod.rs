//! Display formatting for terminal output
//!
//! List views are rendered as tables; detail views as aligned key/value
//! lines. Every formatter takes the display currency code from settings.

pub mod budget;
pub mod event;
pub mod fundraising;
pub mod report;
pub mod transaction;

pub use budget::{format_budget, format_budget_table};
pub use event::{format_event_details, format_event_list};
pub use fundraising::{format_initiative_details, format_initiative_list};
pub use transaction::{format_transaction_details, format_transaction_table};

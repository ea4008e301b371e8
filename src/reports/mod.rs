//! Reports for the committee ledger
//!
//! - `monthly`: income and spending recorded in one calendar month, with the
//!   current funds snapshot
//! - `dashboard`: the landing page summary for a signed-in role

pub mod dashboard;
pub mod monthly;

pub use dashboard::{BudgetRow, Dashboard};
pub use monthly::MonthlyReport;

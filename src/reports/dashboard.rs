//! Dashboard
//!
//! The landing view after login: the funds snapshot, latest transactions,
//! budget against actuals and the shortcuts the role may use.

use serde::Serialize;

use crate::auth::{Page, Role};
use crate::display::report::heading;
use crate::display::{format_budget_table, format_transaction_table};
use crate::models::{Books, BudgetSection, Money, Transaction};
use crate::services::{FundsSummary, LedgerService};

/// Budget against actual for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetRow {
    pub category: String,
    pub budget: Money,
    pub actual: Money,
    /// Actual minus budget
    pub variance: Money,
}

/// Everything shown on the dashboard for one role
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub role: Role,
    pub funds: FundsSummary,
    /// Newest first
    pub recent_transactions: Vec<Transaction>,
    pub income: Vec<BudgetRow>,
    pub expenses: Vec<BudgetRow>,
    pub quick_actions: Vec<Page>,
}

impl Dashboard {
    pub fn build(books: &Books, role: Role, recent_limit: usize) -> Self {
        let ledger = LedgerService::new(books);
        let rows = |section: BudgetSection| -> Vec<BudgetRow> {
            books
                .budget()
                .section(section)
                .iter()
                .map(|c| BudgetRow {
                    category: c.name.clone(),
                    budget: c.budget,
                    actual: c.actual,
                    variance: c.variance(),
                })
                .collect()
        };

        Self {
            role,
            funds: ledger.summary(),
            recent_transactions: ledger
                .recent_transactions(recent_limit)
                .into_iter()
                .cloned()
                .collect(),
            income: rows(BudgetSection::Income),
            expenses: rows(BudgetSection::Expenses),
            quick_actions: role.quick_actions().to_vec(),
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, organization: &str, currency_code: &str) -> String {
        let fmt = |m: Money| m.format_with_code(currency_code);
        let mut output = heading(&format!("{} Dashboard", organization));

        output.push_str(&format!("{:<20} {:>16}\n", "Total Balance:", fmt(self.funds.balance)));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Emergency Reserve:",
            fmt(self.funds.emergency_reserve)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n\n",
            "Available Funds:",
            fmt(self.funds.available_funds)
        ));

        output.push_str("Recent Transactions\n");
        let recent: Vec<&Transaction> = self.recent_transactions.iter().collect();
        output.push_str(&format_transaction_table(&recent, currency_code));
        output.push('\n');

        for (title, rows) in [("Income", &self.income), ("Expenses", &self.expenses)] {
            let table = format_budget_table(
                rows.iter().map(|r| (r.category.as_str(), r.budget, r.actual)),
                currency_code,
            );
            output.push_str(&format!("{} Budget vs Actual\n{}\n\n", title, table));
        }

        output.push_str("Quick Actions\n");
        for page in &self.quick_actions {
            output.push_str(&format!("  {:<14} {}\n", page.to_string(), quick_action_command(*page)));
        }

        output
    }
}

/// CLI command behind a dashboard shortcut
pub fn quick_action_command(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "ledger dashboard",
        Page::Transactions => "ledger transaction add",
        Page::Budget => "ledger budget show",
        Page::Events => "ledger event list",
        Page::Fundraising => "ledger fundraising list",
        Page::Reports => "ledger report monthly",
        Page::Settings => "ledger settings show",
    }
}

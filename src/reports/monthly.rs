//! Monthly Report
//!
//! Selects transactions by the month they were recorded in (not the posting
//! date the user typed) and bundles them with the ledger-wide balance, reserve
//! and available funds.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::io::Write;

use crate::display::report::truncate;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Books, Money, Transaction};
use crate::services::LedgerService;

/// Income and spending for one month
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses for the month
    pub net: Money,
    /// Transactions recorded in the month, in posting order
    pub transactions: Vec<Transaction>,
    /// Ledger-wide balance at the time of the report
    pub current_balance: Money,
    pub emergency_reserve: Money,
    pub available_funds: Money,
}

impl MonthlyReport {
    /// Generate a report; missing month or year default to today's
    pub fn generate(books: &Books, month: Option<u32>, year: Option<i32>) -> LedgerResult<Self> {
        Self::generate_as_of(books, month, year, Local::now().date_naive())
    }

    /// Generate a report with defaults taken from `today`
    pub fn generate_as_of(
        books: &Books,
        month: Option<u32>,
        year: Option<i32>,
        today: NaiveDate,
    ) -> LedgerResult<Self> {
        let month = month.unwrap_or_else(|| today.month());
        let year = year.unwrap_or_else(|| today.year());

        if !(1..=12).contains(&month) {
            return Err(LedgerError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }

        let ledger = LedgerService::new(books);
        let transactions: Vec<Transaction> = ledger
            .transactions_recorded_in(month, year)
            .into_iter()
            .cloned()
            .collect();

        let total_income: Money = transactions.iter().map(|t| t.income).sum();
        let total_expenses: Money = transactions.iter().map(|t| t.expense).sum();
        let funds = ledger.summary();

        Ok(Self {
            month,
            year,
            total_income,
            total_expenses,
            net: total_income - total_expenses,
            transactions,
            current_balance: funds.balance,
            emergency_reserve: funds.emergency_reserve,
            available_funds: funds.available_funds,
        })
    }

    /// "March 2024"
    pub fn period_label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{:02}/{}", self.month, self.year))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_code: &str) -> String {
        let fmt = |m: Money| m.format_with_code(currency_code);
        let mut output = String::new();

        output.push_str(&format!("Monthly Report - {}\n", self.period_label()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str(&format!("{:<24} {:>16}\n", "Income:", fmt(self.total_income)));
        output.push_str(&format!("{:<24} {:>16}\n", "Expenses:", fmt(self.total_expenses)));
        output.push_str(&format!("{:<24} {:>16}\n", "Net:", fmt(self.net)));
        output.push('\n');

        if self.transactions.is_empty() {
            output.push_str("No transactions recorded this month.\n");
        } else {
            output.push_str(&format!(
                "{:<10} {:<24} {:<20} {:>14}\n",
                "Date", "Description", "Category", "Amount"
            ));
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for txn in &self.transactions {
                output.push_str(&format!(
                    "{:<10} {:<24} {:<20} {:>14}\n",
                    txn.date.format("%Y-%m-%d"),
                    truncate(&txn.description, 24),
                    truncate(&txn.category, 20),
                    fmt(txn.net())
                ));
            }
        }

        output.push('\n');
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>16}\n", "Current Balance:", fmt(self.current_balance)));
        output.push_str(&format!(
            "{:<24} {:>16}\n",
            "Emergency Reserve:",
            fmt(self.emergency_reserve)
        ));
        output.push_str(&format!(
            "{:<24} {:>16}\n",
            "Available Funds:",
            fmt(self.available_funds)
        ));

        output
    }

    /// Export the month's transactions plus a totals row as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record([
            "Date",
            "Description",
            "Category",
            "Income",
            "Expense",
            "Authorized By",
            "Receipt",
            "Recorded At",
        ])
        .map_err(export_err)?;

        for txn in &self.transactions {
            let recorded_at = txn
                .recorded_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();
            csv.write_record([
                txn.date.format("%Y-%m-%d").to_string(),
                txn.description.clone(),
                txn.category.clone(),
                txn.income.to_decimal_string(),
                txn.expense.to_decimal_string(),
                txn.authorized_by.to_string(),
                txn.receipt_number.clone(),
                recorded_at,
            ])
            .map_err(export_err)?;
        }

        csv.write_record([
            String::new(),
            format!("TOTAL {}", self.period_label()),
            String::new(),
            self.total_income.to_decimal_string(),
            self.total_expenses.to_decimal_string(),
            String::new(),
            String::new(),
            String::new(),
        ])
        .map_err(export_err)?;

        csv.flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        Ok(())
    }
}

//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Authorized By")]
    authorized_by: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, currency_code: &str) -> Self {
        let amount = |m: crate::models::Money| {
            if m.is_zero() {
                String::new()
            } else {
                m.format_with_code(currency_code)
            }
        };

        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: truncate(&txn.description, 30),
            category: truncate(&txn.category, 24),
            income: amount(txn.income),
            expense: amount(txn.expense),
            authorized_by: txn.authorized_by.to_string(),
        }
    }
}

/// Table of transactions
pub fn format_transaction_table(transactions: &[&Transaction], currency_code: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|t| TransactionRow::new(t, currency_code));
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Full details of one transaction
pub fn format_transaction_details(txn: &Transaction, currency_code: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction:   {}\n", txn.id));
    output.push_str(&format!("Date:          {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description:   {}\n", txn.description));
    output.push_str(&format!("Category:      {}\n", txn.category));
    if txn.income.is_positive() {
        output.push_str(&format!(
            "Income:        {}\n",
            txn.income.format_with_code(currency_code)
        ));
    }
    if txn.expense.is_positive() {
        output.push_str(&format!(
            "Expense:       {}\n",
            txn.expense.format_with_code(currency_code)
        ));
    }
    output.push_str(&format!("Authorized by: {}\n", txn.authorized_by));

    if !txn.receipt_number.is_empty() {
        output.push_str(&format!("Receipt:       {}\n", txn.receipt_number));
    }
    if !txn.notes.is_empty() {
        output.push_str(&format!("Notes:         {}\n", txn.notes));
    }
    if let Some(recorded_at) = txn.recorded_at {
        output.push_str(&format!(
            "Recorded:      {}\n",
            recorded_at.format("%Y-%m-%d %H:%M:%S")
        ));
    }

    output
}

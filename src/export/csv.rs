//! CSV export of the transaction list

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Write transactions as CSV, one row per transaction
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> LedgerResult<()> {
    let export_err = |e: csv::Error| LedgerError::Export(e.to_string());
    let mut out = csv::Writer::from_writer(writer);

    out.write_record([
        "ID",
        "Date",
        "Description",
        "Category",
        "Income",
        "Expense",
        "Authorized By",
        "Receipt",
        "Notes",
        "Recorded At",
    ])
    .map_err(export_err)?;

    for txn in transactions {
        out.write_record([
            txn.id.to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            txn.category.clone(),
            txn.income.to_decimal_string(),
            txn.expense.to_decimal_string(),
            txn.authorized_by.to_string(),
            txn.receipt_number.clone(),
            txn.notes.clone(),
            txn.recorded_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        ])
        .map_err(export_err)?;
    }

    out.flush().map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Authorizer, Money, TransactionId};
    use chrono::NaiveDate;

    #[test]
    fn test_transactions_csv() {
        let txn = Transaction {
            id: TransactionId::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            description: "Prints, large".into(),
            category: "Yearbook".into(),
            income: Money::zero(),
            expense: Money::from_cents(120_50),
            authorized_by: Authorizer::SchoolAdmin,
            receipt_number: String::new(),
            notes: "said \"rush\"".into(),
            recorded_at: "2024-03-10T08:30:00".parse().ok(),
        };

        let mut output = Vec::new();
        export_transactions_csv(&[txn], &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("\"Prints, large\""));
        assert!(lines[1].contains("0.00,120.50,School Admin"));
        assert!(lines[1].contains("\"said \"\"rush\"\"\""));
        assert!(lines[1].ends_with("2024-03-10 08:30:00"));
    }

    #[test]
    fn test_empty_export_has_header() {
        let mut output = Vec::new();
        export_transactions_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}

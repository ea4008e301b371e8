//! JSON export of the complete books

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Books, Budget, Event, FundraisingInitiative, Transaction};
use crate::services::{FundsSummary, LedgerService};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything in the books plus derived totals
#[derive(Debug, Clone, Serialize)]
pub struct FullExport<'a> {
    pub schema_version: &'static str,
    pub exported_at: DateTime<Utc>,
    /// Version of the program that wrote the export
    pub app_version: &'static str,
    pub organization_name: &'a str,
    pub funds: FundsSummary,
    pub transactions: &'a [Transaction],
    pub budget: &'a Budget,
    pub events: &'a [Event],
    pub fundraising: &'a [FundraisingInitiative],
    pub metadata: ExportMetadata,
}

/// Counts and ranges for a quick look at an export
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub event_count: usize,
    pub initiative_count: usize,
    /// Earliest posting date
    pub earliest_transaction: Option<String>,
    /// Latest posting date
    pub latest_transaction: Option<String>,
}

impl<'a> FullExport<'a> {
    pub fn from_books(books: &'a Books, organization_name: &'a str) -> Self {
        let transactions = books.transactions();
        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            event_count: books.events().len(),
            initiative_count: books.fundraising().len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            organization_name,
            funds: LedgerService::new(books).summary(),
            transactions,
            budget: books.budget(),
            events: books.events(),
            fundraising: books.fundraising(),
            metadata,
        }
    }
}

/// Write the full export as JSON
pub fn export_full_json<W: Write>(
    books: &Books,
    organization_name: &str,
    writer: W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = FullExport::from_books(books, organization_name);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Authorizer, Money, TransactionInput};
    use crate::services::TransactionService;
    use chrono::NaiveDate;

    fn books() -> Books {
        let mut books = Books::new();
        let mut service = TransactionService::new(&mut books);
        for (day, amount) in [(12, 40), (3, 60)] {
            let input = TransactionInput::income(
                NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                "Sponsor",
                "Sponsorships",
                Money::from_units(amount),
            )
            .authorized_by(Authorizer::Chair);
            service.post(input).unwrap();
        }
        books
    }

    #[test]
    fn test_metadata() {
        let books = books();
        let export = FullExport::from_books(&books, "PTA");

        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.event_count, 0);
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2024-03-03"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2024-03-12"));
        assert_eq!(export.funds.emergency_reserve, Money::from_units(15));
    }

    #[test]
    fn test_json_output() {
        let books = books();
        let mut output = Vec::new();
        export_full_json(&books, "PTA", &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["organization_name"], "PTA");
        assert_eq!(value["transactions"].as_array().unwrap().len(), 2);
        assert!(value["budget"]["income"].is_array());
    }
}

//! CLI command handlers
//!
//! Each handler opens the page it needs on the session, runs one operation,
//! then saves the books and appends to the audit log if anything changed.

pub mod auth;
pub mod budget;
pub mod event;
pub mod export;
pub mod fundraising;
pub mod report;
pub mod settings;
pub mod transaction;

pub use self::auth::{handle_auth_command, AuthCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use event::{handle_event_command, EventCommands};
pub use export::{handle_export_command, ExportArgs};
pub use fundraising::{handle_fundraising_command, FundraisingCommands};
pub use report::{handle_dashboard_command, handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Authorizer, Money};

/// Parse an amount argument such as "150", "99.50" or "KD 12.25"
pub(crate) fn parse_amount(field: &str, value: &str) -> LedgerResult<Money> {
    Money::parse(value).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid {} '{}'. Use a format like '100' or '99.50': {}",
            field, value, e
        ))
    })
}

/// Parse an optional amount, treating absence as zero
pub(crate) fn parse_optional_amount(field: &str, value: Option<&str>) -> LedgerResult<Money> {
    value.map_or(Ok(Money::zero()), |v| parse_amount(field, v))
}

/// Parse a YYYY-MM-DD date
pub(crate) fn parse_date(value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", value))
    })
}

/// Parse an optional date, defaulting to today
pub(crate) fn parse_date_or_today(value: Option<&str>) -> LedgerResult<NaiveDate> {
    match value {
        Some(v) => parse_date(v),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub(crate) fn parse_authorizer(value: &str) -> LedgerResult<Authorizer> {
    value.parse().map_err(|_| {
        let known: Vec<_> = Authorizer::all().iter().map(|a| a.name()).collect();
        LedgerError::Validation(format!(
            "Unknown authorizer '{}'. Expected one of: {}",
            value,
            known.join(", ")
        ))
    })
}

/// Send output to a file when a path is given, otherwise to stdout
pub(crate) fn with_output<F>(path: Option<&Path>, write: F) -> LedgerResult<()>
where
    F: FnOnce(&mut dyn Write) -> LedgerResult<()>,
{
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write(&mut lock)?;
            writeln!(lock).map_err(LedgerError::from)
        }
    }
}

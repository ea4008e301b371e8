//! CLI command for data export

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::with_output;
use crate::auth::Page;
use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::session::Session;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Full books, machine-readable
    Json,
    /// Full books, human-readable
    Yaml,
    /// Transactions only
    Csv,
}

/// Arguments for `ledger export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (prints to the terminal when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compact JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(
    settings: &Settings,
    session: &Session,
    args: ExportArgs,
) -> LedgerResult<()> {
    session.require(Page::Reports)?;

    let books = session.books();
    let organization = settings.organization_name.as_str();

    with_output(args.output.as_deref(), |w| match args.format {
        ExportFormat::Json => export_full_json(books, organization, w, !args.compact),
        ExportFormat::Yaml => export_full_yaml(books, organization, w),
        ExportFormat::Csv => export_transactions_csv(books.transactions(), w),
    })?;

    tracing::info!(format = ?args.format, "books exported");
    Ok(())
}

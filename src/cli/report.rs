//! CLI commands for reports
//!
//! The monthly report and the audit trail, plus the dashboard.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use super::with_output;
use crate::auth::Page;
use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::{Dashboard, MonthlyReport};
use crate::session::Session;
use crate::storage::Storage;

/// Output format for the monthly report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Terminal table
    Text,
    Json,
    Yaml,
    /// Transactions plus a totals row
    Csv,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income and expenses recorded in one month
    Monthly {
        /// Month number (1-12), defaults to the current month
        #[arg(short, long)]
        month: Option<u32>,

        /// Year, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Write to a file instead of the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the most recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    session.require(Page::Reports)?;

    match cmd {
        ReportCommands::Monthly {
            month,
            year,
            format,
            output,
        } => {
            let report = MonthlyReport::generate(session.books(), month, year)?;
            let code = settings.currency_code.as_str();

            with_output(output.as_deref(), |w| match format {
                ReportFormat::Text => w
                    .write_all(report.format_terminal(code).as_bytes())
                    .map_err(LedgerError::from),
                ReportFormat::Json => serde_json::to_writer_pretty(w, &report)
                    .map_err(|e| LedgerError::Export(e.to_string())),
                ReportFormat::Yaml => serde_yaml::to_writer(w, &report)
                    .map_err(|e| LedgerError::Export(e.to_string())),
                ReportFormat::Csv => report.export_csv(w),
            })
        }

        ReportCommands::Audit { limit } => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
            Ok(())
        }
    }
}

/// Show the dashboard for the signed-in role
pub fn handle_dashboard_command(settings: &Settings, session: &Session) -> LedgerResult<()> {
    session.require(Page::Dashboard)?;

    let dashboard = Dashboard::build(
        session.books(),
        session.role(),
        settings.recent_transactions_limit,
    );
    print!(
        "{}",
        dashboard.format_terminal(&settings.organization_name, &settings.currency_code)
    );
    println!("Signed in as {} ({})", session.username(), session.role());
    Ok(())
}

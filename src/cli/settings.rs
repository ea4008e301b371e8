//! Settings CLI commands

use clap::Subcommand;

use crate::audit::EntityType;
use crate::auth::Page;
use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::session::Session;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings and the committee roster
    Show,
    /// Change a setting or assign a committee office
    Set {
        /// Setting key, e.g. organization_name or chair
        key: String,
        /// New value (empty to clear an office)
        value: String,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    storage: &Storage,
    settings: &mut Settings,
    session: &Session,
    cmd: SettingsCommands,
) -> LedgerResult<()> {
    session.require(Page::Settings)?;

    match cmd {
        SettingsCommands::Show => {
            println!("Organization:        {}", settings.organization_name);
            println!("Currency:            {}", settings.currency_code);
            println!("Date format:         {}", settings.date_format);
            println!("Recent transactions: {}", settings.recent_transactions_limit);
            println!();
            println!("Committee");
            for (office, holder) in settings.committee.offices() {
                println!("  {:<20} {}", office.name(), holder);
            }
            println!();
            println!("Settings file: {}", storage.paths().settings_file().display());
        }

        SettingsCommands::Set { key, value } => {
            let before = settings.clone();
            settings.set(&key, &value)?;
            settings.save(storage.paths())?;
            storage.log_update(
                session.username(),
                EntityType::Settings,
                key.trim(),
                None,
                &before,
                &*settings,
            )?;

            tracing::info!(key = %key.trim(), "setting changed");
            println!("Updated {}", key.trim());
        }
    }

    Ok(())
}

//! Fundraising CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::audit::EntityType;
use crate::auth::Page;
use crate::config::settings::Settings;
use crate::display::{format_initiative_details, format_initiative_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Books, FundraisingInitiative, LifecycleStatus};
use crate::services::{FundraisingService, InitiativeInput};
use crate::session::Session;
use crate::storage::Storage;

/// Fundraising subcommands
#[derive(Subcommand)]
pub enum FundraisingCommands {
    /// Start tracking a fundraising initiative
    Add {
        name: String,
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,
        #[arg(short, long, default_value = "")]
        coordinator: String,
        /// Target amount to raise
        #[arg(short, long)]
        goal: String,
    },
    /// List initiatives with progress toward their goals
    List,
    /// Show one initiative
    Show {
        /// Initiative name or ID
        initiative: String,
    },
    /// Update the amount raised and spent so far
    Update {
        /// Initiative name or ID
        initiative: String,
        /// Total raised to date
        #[arg(short, long)]
        raised: Option<String>,
        /// Total spent to date
        #[arg(short, long)]
        expenses: Option<String>,
    },
    /// Change an initiative's status (planning, active, completed, cancelled)
    Status {
        /// Initiative name or ID
        initiative: String,
        status: LifecycleStatus,
    },
}

/// Handle a fundraising command
pub fn handle_fundraising_command(
    storage: &Storage,
    settings: &Settings,
    session: &mut Session,
    cmd: FundraisingCommands,
) -> LedgerResult<()> {
    let code = settings.currency_code.as_str();
    let actor = session.username().to_string();
    let books = session.open(Page::Fundraising)?;

    match cmd {
        FundraisingCommands::Add {
            name,
            start,
            end,
            coordinator,
            goal,
        } => {
            let input = InitiativeInput {
                name,
                start_date: parse_date(&start)?,
                end_date: parse_date(&end)?,
                coordinator,
                goal_amount: parse_amount("goal", &goal)?,
            };

            let initiative = FundraisingService::new(books).add(input)?;
            storage.save_books(books)?;
            storage.log_create(
                &actor,
                EntityType::FundraisingInitiative,
                initiative.id.to_string(),
                Some(initiative.name.clone()),
                &initiative,
            )?;

            println!("Added fundraising initiative: {}", initiative.name);
            println!("  ID:   {}", initiative.id);
            println!("  Goal: {}", initiative.goal_amount.format_with_code(code));
        }

        FundraisingCommands::List => {
            print!("{}", format_initiative_list(books.fundraising(), code));
        }

        FundraisingCommands::Show { initiative } => {
            let initiative = find_initiative(books, &initiative)?;
            print!("{}", format_initiative_details(&initiative, code));
        }

        FundraisingCommands::Update {
            initiative,
            raised,
            expenses,
        } => {
            let before = find_initiative(books, &initiative)?;
            // Unspecified figures keep their current value
            let raised = match raised.as_deref() {
                Some(value) => parse_amount("raised", value)?,
                None => before.actual_raised,
            };
            let expenses = match expenses.as_deref() {
                Some(value) => parse_amount("expenses", value)?,
                None => before.expenses,
            };

            let after =
                FundraisingService::new(books).record_progress(&initiative, raised, expenses)?;
            save_and_log(storage, &actor, books, &before, &after)?;

            println!(
                "'{}': raised {}, net {} ({:.1}% of goal)",
                after.name,
                after.actual_raised.format_with_code(code),
                after.net_proceeds.format_with_code(code),
                after.goal_progress()
            );
        }

        FundraisingCommands::Status { initiative, status } => {
            let before = find_initiative(books, &initiative)?;
            let after = FundraisingService::new(books).set_status(&initiative, status)?;
            save_and_log(storage, &actor, books, &before, &after)?;

            println!("Initiative '{}' is now {}", after.name, after.status);
        }
    }

    Ok(())
}

fn find_initiative(books: &Books, reference: &str) -> LedgerResult<FundraisingInitiative> {
    FundraisingService::find(books, reference)
        .cloned()
        .ok_or_else(|| LedgerError::initiative_not_found(reference))
}

fn save_and_log(
    storage: &Storage,
    actor: &str,
    books: &Books,
    before: &FundraisingInitiative,
    after: &FundraisingInitiative,
) -> LedgerResult<()> {
    storage.save_books(books)?;
    storage.log_update(
        actor,
        EntityType::FundraisingInitiative,
        after.id.to_string(),
        Some(after.name.clone()),
        before,
        after,
    )
}

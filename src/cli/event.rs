//! Event CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date_or_today, parse_optional_amount};
use crate::audit::EntityType;
use crate::auth::Page;
use crate::config::settings::Settings;
use crate::display::{format_event_details, format_event_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Books, Event, ExpenseItem, IncomeSource, LifecycleStatus};
use crate::services::{EventInput, EventService};
use crate::session::Session;
use crate::storage::Storage;

/// Event subcommands
#[derive(Subcommand)]
pub enum EventCommands {
    /// Plan a new event
    Create {
        name: String,
        /// Event date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long, default_value = "")]
        location: String,
        #[arg(short, long, default_value = "")]
        coordinator: String,
        /// Expected income
        #[arg(long)]
        projected_income: Option<String>,
        /// Expected expenses
        #[arg(long)]
        projected_expenses: Option<String>,
    },
    /// List events
    List,
    /// Show an event with its income and expense lines
    Show {
        /// Event name or ID
        event: String,
    },
    /// Record income received for an event
    Income {
        /// Event name or ID
        event: String,
        /// Where the money came from (e.g. "Ticket sales")
        source: String,
        amount: String,
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// Record money spent on an event
    Expense {
        /// Event name or ID
        event: String,
        /// What was bought
        item: String,
        amount: String,
        #[arg(short, long, default_value = "")]
        vendor: String,
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// Change an event's status (planning, active, completed, cancelled)
    Status {
        /// Event name or ID
        event: String,
        status: LifecycleStatus,
    },
}

/// Handle an event command
pub fn handle_event_command(
    storage: &Storage,
    settings: &Settings,
    session: &mut Session,
    cmd: EventCommands,
) -> LedgerResult<()> {
    let code = settings.currency_code.as_str();
    let actor = session.username().to_string();
    let books = session.open(Page::Events)?;

    match cmd {
        EventCommands::Create {
            name,
            date,
            location,
            coordinator,
            projected_income,
            projected_expenses,
        } => {
            if name.trim().is_empty() {
                return Err(LedgerError::Validation("Event name is required".into()));
            }
            let input = EventInput {
                name,
                date: parse_date_or_today(date.as_deref())?,
                location,
                coordinator,
                projected_income: parse_optional_amount(
                    "projected income",
                    projected_income.as_deref(),
                )?,
                projected_expenses: parse_optional_amount(
                    "projected expenses",
                    projected_expenses.as_deref(),
                )?,
            };

            let event = EventService::new(books).create(input);
            storage.save_books(books)?;
            storage.log_create(
                &actor,
                EntityType::Event,
                event.id.to_string(),
                Some(event.name.clone()),
                &event,
            )?;

            println!("Created event: {}", event.name);
            println!("  ID: {}", event.id);
        }

        EventCommands::List => {
            print!("{}", format_event_list(books.events(), code));
        }

        EventCommands::Show { event } => {
            let event = EventService::find(books, &event)
                .ok_or_else(|| LedgerError::event_not_found(&event))?;
            print!("{}", format_event_details(event, code));
        }

        EventCommands::Income {
            event,
            source,
            amount,
            notes,
        } => {
            let before = find_event(books, &event)?;
            let source = IncomeSource {
                source,
                amount: parse_amount("amount", &amount)?,
                notes,
            };
            let after = EventService::new(books).record_income(&event, source)?;
            save_and_log(storage, &actor, books, &before, &after)?;

            println!(
                "Recorded income for '{}'. Actual income: {}",
                after.name,
                after.actual_income.format_with_code(code)
            );
        }

        EventCommands::Expense {
            event,
            item,
            amount,
            vendor,
            notes,
        } => {
            let before = find_event(books, &event)?;
            let item = ExpenseItem {
                item,
                amount: parse_amount("amount", &amount)?,
                vendor,
                notes,
            };
            let after = EventService::new(books).record_expense(&event, item)?;
            save_and_log(storage, &actor, books, &before, &after)?;

            println!(
                "Recorded expense for '{}'. Actual expenses: {}",
                after.name,
                after.actual_expenses.format_with_code(code)
            );
        }

        EventCommands::Status { event, status } => {
            let before = find_event(books, &event)?;
            let after = EventService::new(books).set_status(&event, status)?;
            save_and_log(storage, &actor, books, &before, &after)?;

            println!("Event '{}' is now {}", after.name, after.status);
        }
    }

    Ok(())
}

fn find_event(books: &Books, reference: &str) -> LedgerResult<Event> {
    EventService::find(books, reference)
        .cloned()
        .ok_or_else(|| LedgerError::event_not_found(reference))
}

fn save_and_log(
    storage: &Storage,
    actor: &str,
    books: &Books,
    before: &Event,
    after: &Event,
) -> LedgerResult<()> {
    storage.save_books(books)?;
    storage.log_update(
        actor,
        EntityType::Event,
        after.id.to_string(),
        Some(after.name.clone()),
        before,
        after,
    )
}

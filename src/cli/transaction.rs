//! Transaction CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_authorizer, parse_date, parse_date_or_today, parse_optional_amount};
use crate::audit::EntityType;
use crate::auth::Page;
use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionInput;
use crate::services::{LedgerService, TransactionFilter, TransactionService};
use crate::session::Session;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Post a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Budget category
        category: String,
        /// Money received (e.g. "75.00")
        #[arg(short, long)]
        income: Option<String>,
        /// Money spent (e.g. "120.50")
        #[arg(short, long)]
        expense: Option<String>,
        /// Who approved it (Chair, Deputy Chair, Treasurer, Secretary,
        /// Events Coordinator, School Admin, Committee Vote)
        #[arg(short, long)]
        authorized_by: Option<String>,
        /// Posting date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Receipt number
        #[arg(short, long)]
        receipt: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by category name
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of most recent transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show one transaction
    Show {
        /// Transaction ID
        id: String,
    },
    /// Show who must approve an amount in a category
    Authorizers {
        category: String,
        amount: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    session: &mut Session,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let code = settings.currency_code.as_str();
    let actor = session.username().to_string();
    let books = session.open(Page::Transactions)?;

    match cmd {
        TransactionCommands::Add {
            description,
            category,
            income,
            expense,
            authorized_by,
            date,
            receipt,
            notes,
        } => {
            if income.is_none() && expense.is_none() {
                return Err(LedgerError::Validation(
                    "Provide an amount with --income or --expense".into(),
                ));
            }

            let mut input = TransactionInput::income(
                parse_date_or_today(date.as_deref())?,
                description,
                category,
                parse_optional_amount("income", income.as_deref())?,
            );
            input.expense = parse_optional_amount("expense", expense.as_deref())?;
            if let Some(name) = authorized_by.as_deref() {
                input = input.authorized_by(parse_authorizer(name)?);
            }
            if let Some(receipt) = receipt {
                input = input.receipt(receipt);
            }
            if let Some(notes) = notes {
                input = input.notes(notes);
            }

            let txn = TransactionService::new(books).post(input)?;
            storage.save_books(books)?;
            storage.log_create(
                &actor,
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.description.clone()),
                &txn,
            )?;

            println!("Transaction recorded successfully!");
            print!("{}", format_transaction_details(&txn, code));

            let ledger = LedgerService::new(books);
            println!();
            println!("Balance:         {}", ledger.balance().format_with_code(code));
            println!(
                "Available funds: {}",
                ledger.available_funds().format_with_code(code)
            );
        }

        TransactionCommands::List {
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(from) = from {
                filter = filter.from(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.to(parse_date(&to)?);
            }

            let transactions = LedgerService::new(books).transactions(&filter);
            print!("{}", format_transaction_table(&transactions, code));
        }

        TransactionCommands::Show { id } => {
            let txn = books
                .transactions()
                .iter()
                .find(|t| t.id.matches(&id))
                .ok_or_else(|| LedgerError::NotFound {
                    entity_type: "Transaction",
                    identifier: id.clone(),
                })?;
            print!("{}", format_transaction_details(txn, code));
        }

        TransactionCommands::Authorizers { category, amount } => {
            let amount = parse_amount("amount", &amount)?;
            let ledger = LedgerService::new(books);
            let level = ledger.authorization_level(amount, &category);
            let names: Vec<_> = level.required().iter().map(|a| a.name()).collect();

            println!(
                "{} in '{}' ({}): {}",
                amount.format_with_code(code),
                category,
                level.label(),
                names.join(" or ")
            );
            println!("A Committee Vote can approve any transaction.");
        }
    }

    Ok(())
}

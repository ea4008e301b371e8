//! Budget CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::audit::EntityType;
use crate::auth::Page;
use crate::config::settings::Settings;
use crate::display::format_budget;
use crate::error::{LedgerError, LedgerResult};
use crate::models::BudgetSection;
use crate::services::BudgetService;
use crate::session::Session;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budget against actuals for both sections
    Show,
    /// Set the planned amount for a category
    Set {
        /// Section: income or expenses
        section: BudgetSection,
        /// Category name
        category: String,
        /// Planned amount
        amount: String,
    },
    /// Add a category to a section
    AddCategory {
        /// Section: income or expenses
        section: BudgetSection,
        /// Category name
        name: String,
        /// Planned amount
        #[arg(short, long)]
        budget: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    session: &mut Session,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let code = settings.currency_code.as_str();
    let actor = session.username().to_string();
    let books = session.open(Page::Budget)?;

    match cmd {
        BudgetCommands::Show => {
            print!("{}", format_budget(books.budget(), code));
        }

        BudgetCommands::Set {
            section,
            category,
            amount,
        } => {
            let amount = parse_amount("budget amount", &amount)?;
            let before = books
                .budget()
                .category(section, category.trim())
                .cloned()
                .ok_or_else(|| LedgerError::category_not_found(&category))?;

            let after = BudgetService::new(books).set_budget(section, &category, amount)?;
            storage.save_books(books)?;
            storage.log_update(
                &actor,
                EntityType::BudgetCategory,
                format!("{}/{}", section, after.name),
                Some(after.name.clone()),
                &before,
                &after,
            )?;

            println!(
                "Budget for '{}' ({}) set to {}",
                after.name,
                section,
                after.budget.format_with_code(code)
            );
        }

        BudgetCommands::AddCategory {
            section,
            name,
            budget,
        } => {
            let budget = budget
                .as_deref()
                .map(|b| parse_amount("budget amount", b))
                .transpose()?;

            let category = BudgetService::new(books).add_category(section, &name, budget)?;
            storage.save_books(books)?;
            storage.log_create(
                &actor,
                EntityType::BudgetCategory,
                format!("{}/{}", section, category.name),
                Some(category.name.clone()),
                &category,
            )?;

            println!(
                "Added category '{}' to {} with budget {}",
                category.name,
                section,
                category.budget.format_with_code(code)
            );
        }
    }

    Ok(())
}

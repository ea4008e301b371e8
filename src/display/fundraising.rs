//! Fundraising display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_bar, format_percentage, truncate};
use crate::models::FundraisingInitiative;

#[derive(Tabled)]
struct InitiativeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Initiative")]
    name: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Goal")]
    goal: String,
    #[tabled(rename = "Raised")]
    raised: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

pub fn format_initiative_list(initiatives: &[FundraisingInitiative], currency_code: &str) -> String {
    if initiatives.is_empty() {
        return "No fundraising initiatives found.\n".to_string();
    }

    let rows = initiatives.iter().map(|i| InitiativeRow {
        id: i.id.to_string(),
        name: truncate(&i.name, 28),
        dates: format!(
            "{} to {}",
            i.start_date.format("%Y-%m-%d"),
            i.end_date.format("%Y-%m-%d")
        ),
        status: i.status.to_string(),
        goal: i.goal_amount.format_with_code(currency_code),
        raised: i.actual_raised.format_with_code(currency_code),
        net: i.net_proceeds.format_with_code(currency_code),
        progress: format_percentage(i.goal_progress()),
    });
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

pub fn format_initiative_details(initiative: &FundraisingInitiative, currency_code: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Initiative:   {}\n", initiative.name));
    output.push_str(&format!("ID:           {}\n", initiative.id));
    output.push_str(&format!(
        "Dates:        {} to {}\n",
        initiative.start_date.format("%Y-%m-%d"),
        initiative.end_date.format("%Y-%m-%d")
    ));
    if !initiative.coordinator.is_empty() {
        output.push_str(&format!("Coordinator:  {}\n", initiative.coordinator));
    }
    output.push_str(&format!("Status:       {}\n", initiative.status));
    output.push_str(&format!(
        "Goal:         {}\n",
        initiative.goal_amount.format_with_code(currency_code)
    ));
    output.push_str(&format!(
        "Raised:       {}\n",
        initiative.actual_raised.format_with_code(currency_code)
    ));
    output.push_str(&format!(
        "Expenses:     {}\n",
        initiative.expenses.format_with_code(currency_code)
    ));
    output.push_str(&format!(
        "Net proceeds: {}\n",
        initiative.net_proceeds.format_with_code(currency_code)
    ));
    output.push_str(&format!(
        "Progress:     {} {}\n",
        format_bar(initiative.goal_progress(), 100.0, 20),
        format_percentage(initiative.goal_progress())
    ));

    output
}

//! Event display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{Event, Money};

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Event")]
    name: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Projected Net")]
    projected_net: String,
    #[tabled(rename = "Actual Net")]
    actual_net: String,
}

pub fn format_event_list(events: &[Event], currency_code: &str) -> String {
    if events.is_empty() {
        return "No events found.\n".to_string();
    }

    let rows = events.iter().map(|e| EventRow {
        id: e.id.to_string(),
        name: truncate(&e.name, 28),
        date: e.date.format("%Y-%m-%d").to_string(),
        status: e.status.to_string(),
        projected_net: e.projected_net().format_with_code(currency_code),
        actual_net: e.actual_net().format_with_code(currency_code),
    });
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Event sub-budget: projected against actual, then the itemised lines
pub fn format_event_details(event: &Event, currency_code: &str) -> String {
    let fmt = |m: Money| m.format_with_code(currency_code);
    let mut output = String::new();

    output.push_str(&format!("Event:       {}\n", event.name));
    output.push_str(&format!("ID:          {}\n", event.id));
    output.push_str(&format!("Date:        {}\n", event.date.format("%Y-%m-%d")));
    if !event.location.is_empty() {
        output.push_str(&format!("Location:    {}\n", event.location));
    }
    if !event.coordinator.is_empty() {
        output.push_str(&format!("Coordinator: {}\n", event.coordinator));
    }
    output.push_str(&format!("Status:      {}\n\n", event.status));

    output.push_str(&format!("{:<12} {:>16} {:>16}\n", "", "Projected", "Actual"));
    output.push_str(&format!(
        "{:<12} {:>16} {:>16}\n",
        "Income",
        fmt(event.projected_income),
        fmt(event.actual_income)
    ));
    output.push_str(&format!(
        "{:<12} {:>16} {:>16}\n",
        "Expenses",
        fmt(event.projected_expenses),
        fmt(event.actual_expenses)
    ));
    output.push_str(&format!(
        "{:<12} {:>16} {:>16}\n",
        "Net",
        fmt(event.projected_net()),
        fmt(event.actual_net())
    ));

    if !event.income_sources.is_empty() {
        output.push_str("\nIncome sources:\n");
        for source in &event.income_sources {
            output.push_str(&format!("  {:<30} {:>16}\n", source.source, fmt(source.amount)));
        }
    }

    if !event.expense_items.is_empty() {
        output.push_str("\nExpense items:\n");
        for item in &event.expense_items {
            let vendor = if item.vendor.is_empty() {
                String::new()
            } else {
                format!(" ({})", item.vendor)
            };
            output.push_str(&format!(
                "  {:<30} {:>16}\n",
                format!("{}{}", item.item, vendor),
                fmt(item.amount)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseItem;
    use chrono::NaiveDate;

    fn fair() -> Event {
        let mut event = Event::new(
            "Spring Fair",
            NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
            "Main Hall",
            "",
            Money::from_units(1200),
            Money::from_units(450),
        );
        event.record_expense(ExpenseItem {
            item: "Tables".into(),
            amount: Money::from_units(120),
            vendor: "Hire Co".into(),
            notes: String::new(),
        });
        event
    }

    #[test]
    fn test_event_list() {
        let output = format_event_list(&[fair()], "KD");
        assert!(output.contains("Spring Fair"));
        assert!(output.contains("KD 750.00"));
        assert!(output.contains("-KD 120.00"));
        assert_eq!(format_event_list(&[], "KD"), "No events found.\n");
    }

    #[test]
    fn test_event_details() {
        let output = format_event_details(&fair(), "KD");
        assert!(output.contains("Location:    Main Hall"));
        assert!(!output.contains("Coordinator:"));
        assert!(output.contains("Tables (Hire Co)"));
        assert!(!output.contains("Income sources:"));
    }
}

//! Budget display formatting

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Budget, BudgetSection, Money};

#[derive(Tabled)]
struct BudgetLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Variance")]
    variance: String,
}

impl BudgetLine {
    fn new(category: &str, budget: Money, actual: Money, currency_code: &str) -> Self {
        Self {
            category: category.to_string(),
            budget: budget.format_with_code(currency_code),
            actual: actual.format_with_code(currency_code),
            variance: (actual - budget).format_with_code(currency_code),
        }
    }
}

/// Category / Budget / Actual / Variance table from `(name, budget, actual)` rows
pub fn format_budget_table<'a, I>(rows: I, currency_code: &str) -> String
where
    I: IntoIterator<Item = (&'a str, Money, Money)>,
{
    let lines = rows
        .into_iter()
        .map(|(name, budget, actual)| BudgetLine::new(name, budget, actual, currency_code));
    let mut table = Table::new(lines);
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// One table per budget section with a totals line
pub fn format_budget(budget: &Budget, currency_code: &str) -> String {
    let mut output = String::new();

    for &section in BudgetSection::all() {
        let rows = budget
            .section(section)
            .iter()
            .map(|c| (c.name.as_str(), c.budget, c.actual))
            .chain(std::iter::once((
                "TOTAL",
                budget.total_budget(section),
                budget.total_actual(section),
            )));

        output.push_str(&format!(
            "{}\n{}\n\n",
            section_title(section),
            format_budget_table(rows, currency_code)
        ));
    }

    output
}

fn section_title(section: BudgetSection) -> &'static str {
    match section {
        BudgetSection::Income => "INCOME",
        BudgetSection::Expenses => "EXPENSES",
    }
}

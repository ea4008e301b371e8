//! Budget model
//!
//! The budget has two sections, income and expenses. Each section holds named
//! categories with a planned amount and the actual amount posted so far.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::LedgerError;

/// One of the two halves of the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetSection {
    Income,
    Expenses,
}

impl BudgetSection {
    /// Both sections in display order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expenses]
    }

    /// Catch-all category for amounts whose category is not budgeted
    pub fn fallback_category(&self) -> &'static str {
        match self {
            Self::Income => "Other Income",
            Self::Expenses => "Other Expenses",
        }
    }
}

impl fmt::Display for BudgetSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expenses => write!(f, "expenses"),
        }
    }
}

impl FromStr for BudgetSection {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expenses" | "expense" => Ok(Self::Expenses),
            other => Err(LedgerError::Validation(format!(
                "Unknown budget section '{}'. Use income or expenses",
                other
            ))),
        }
    }
}

/// A named bucket within a budget section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name, unique within its section
    pub name: String,

    /// Planned amount
    #[serde(default)]
    pub budget: Money,

    /// Amount posted by transactions
    #[serde(default)]
    pub actual: Money,
}

impl BudgetCategory {
    /// Create a category with nothing planned or posted
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            budget: Money::zero(),
            actual: Money::zero(),
        }
    }

    /// Actual minus budget
    pub fn variance(&self) -> Money {
        self.actual - self.budget
    }
}

/// Default income categories for a new committee budget
pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &[
    "Fundraising Events",
    "Merchandise Sales",
    "Sponsorships",
    "Other Income",
];

/// Default expense categories for a new committee budget
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Event Expenses",
    "Merchandise Production",
    "Marketing/Promotion",
    "Yearbook",
    "Graduation",
    "School Trips",
    "Emergency Reserve",
    "Other Expenses",
];

/// The committee budget: income and expense categories in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    income: Vec<BudgetCategory>,
    #[serde(default)]
    expenses: Vec<BudgetCategory>,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME_CATEGORIES
                .iter()
                .map(|name| BudgetCategory::new(*name))
                .collect(),
            expenses: DEFAULT_EXPENSE_CATEGORIES
                .iter()
                .map(|name| BudgetCategory::new(*name))
                .collect(),
        }
    }
}

impl Budget {
    /// Categories of one section
    pub fn section(&self, section: BudgetSection) -> &[BudgetCategory] {
        match section {
            BudgetSection::Income => &self.income,
            BudgetSection::Expenses => &self.expenses,
        }
    }

    fn section_mut(&mut self, section: BudgetSection) -> &mut Vec<BudgetCategory> {
        match section {
            BudgetSection::Income => &mut self.income,
            BudgetSection::Expenses => &mut self.expenses,
        }
    }

    /// Look up a category by exact name
    pub fn category(&self, section: BudgetSection, name: &str) -> Option<&BudgetCategory> {
        self.section(section).iter().find(|c| c.name == name)
    }

    /// Check whether a section contains a category
    pub fn contains(&self, section: BudgetSection, name: &str) -> bool {
        self.category(section, name).is_some()
    }

    /// Check whether either section contains a category
    pub fn is_budgeted(&self, name: &str) -> bool {
        BudgetSection::all().iter().any(|s| self.contains(*s, name))
    }

    /// Add `amount` to the actual of `name`, or of the section's catch-all
    ///
    /// Returns the name of the category that was credited. The catch-all is
    /// recreated if a loaded budget no longer has it.
    pub fn record_actual(&mut self, section: BudgetSection, name: &str, amount: Money) -> String {
        let categories = self.section_mut(section);

        if let Some(category) = categories.iter_mut().find(|c| c.name == name) {
            category.actual += amount;
            return category.name.clone();
        }

        let fallback = section.fallback_category();
        match categories.iter_mut().find(|c| c.name == fallback) {
            Some(category) => category.actual += amount,
            None => {
                let mut category = BudgetCategory::new(fallback);
                category.actual = amount;
                categories.push(category);
            }
        }
        fallback.to_string()
    }

    /// Set the planned amount of an existing category
    pub fn set_budget(
        &mut self,
        section: BudgetSection,
        name: &str,
        amount: Money,
    ) -> Result<&BudgetCategory, LedgerError> {
        let category = self
            .section_mut(section)
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| LedgerError::category_not_found(format!("{} ({})", name, section)))?;
        category.budget = amount;
        Ok(category)
    }

    /// Add a new category at the end of a section
    pub fn add_category(
        &mut self,
        section: BudgetSection,
        name: &str,
    ) -> Result<&BudgetCategory, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        let categories = self.section_mut(section);
        if categories.iter().any(|c| c.name.eq_ignore_ascii_case(name)) {
            return Err(LedgerError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        categories.push(BudgetCategory::new(name));
        Ok(&categories[categories.len() - 1])
    }

    /// Total planned amount of a section
    pub fn total_budget(&self, section: BudgetSection) -> Money {
        self.section(section).iter().map(|c| c.budget).sum()
    }

    /// Total actual amount of a section
    pub fn total_actual(&self, section: BudgetSection) -> Money {
        self.section(section).iter().map(|c| c.actual).sum()
    }
}

//! Transaction model
//!
//! A transaction records money coming in or going out against a budget
//! category. Transactions are immutable once posted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::authorizer::Authorizer;
use super::ids::TransactionId;
use super::money::Money;

/// A posted income or expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Date the money moved
    pub date: NaiveDate,

    /// What the transaction was for
    pub description: String,

    /// Budget category name, or free text outside the budget
    pub category: String,

    /// Money received
    #[serde(default)]
    pub income: Money,

    /// Money paid out
    #[serde(default)]
    pub expense: Money,

    /// Who approved the transaction
    pub authorized_by: Authorizer,

    /// Receipt reference
    #[serde(default)]
    pub receipt_number: String,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// When the transaction was recorded (local time)
    ///
    /// `None` when a loaded file carried a timestamp that could not be parsed.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub recorded_at: Option<NaiveDateTime>,
}

impl Transaction {
    /// The amount that drives authorization: the larger of income and expense
    pub fn amount(&self) -> Money {
        self.income.max(self.expense)
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    /// Check if this transaction brings money in
    pub fn is_income(&self) -> bool {
        self.income.is_positive()
    }

    /// Check if this transaction pays money out
    pub fn is_expense(&self) -> bool {
        self.expense.is_positive()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.net()
        )
    }
}

/// Parse a recorded-at timestamp, accepting naive ISO-8601 or RFC 3339
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Input for posting a new transaction
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub income: Money,
    pub expense: Money,
    pub authorized_by: Option<Authorizer>,
    pub receipt_number: String,
    pub notes: String,
}

impl TransactionInput {
    /// Start an input for an income entry
    pub fn income(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category: category.into(),
            income: amount,
            expense: Money::zero(),
            authorized_by: None,
            receipt_number: String::new(),
            notes: String::new(),
        }
    }

    /// Start an input for an expense entry
    pub fn expense(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            income: Money::zero(),
            expense: amount,
            ..Self::income(date, description, category, Money::zero())
        }
    }

    /// Set the authorizer
    pub fn authorized_by(mut self, authorizer: Authorizer) -> Self {
        self.authorized_by = Some(authorizer);
        self
    }

    /// Set the receipt reference
    pub fn receipt(mut self, receipt_number: impl Into<String>) -> Self {
        self.receipt_number = receipt_number.into();
        self
    }

    /// Set the notes
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            id: TransactionId::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            description: "Bake sale".into(),
            category: "Fundraising Events".into(),
            income: Money::from_units(75),
            expense: Money::zero(),
            authorized_by: Authorizer::Chair,
            receipt_number: "R-001".into(),
            notes: String::new(),
            recorded_at: parse_timestamp("2024-03-10T09:30:00"),
        }
    }

    #[test]
    fn test_amount_and_net() {
        let mut txn = sample();
        assert_eq!(txn.amount(), Money::from_units(75));
        assert_eq!(txn.net(), Money::from_units(75));

        txn.income = Money::zero();
        txn.expense = Money::from_units(20);
        assert_eq!(txn.amount(), Money::from_units(20));
        assert_eq!(txn.net(), Money::from_units(-20));
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-03-10T09:30:00").is_some());
        assert!(parse_timestamp("2024-03-10T09:30:00.123456").is_some());
        assert!(parse_timestamp("2024-03-10T09:30:00+03:00").is_some());
        assert!(parse_timestamp("last tuesday").is_none());
    }

    #[test]
    fn test_malformed_timestamp_loads_as_none() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["recorded_at"] = serde_json::json!("not-a-date");
        let txn: Transaction = serde_json::from_value(value).unwrap();
        assert!(txn.recorded_at.is_none());
    }

    #[test]
    fn test_serialization() {
        let txn = sample();
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.recorded_at, deserialized.recorded_at);
        assert_eq!(deserialized.authorized_by, Authorizer::Chair);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", sample()),
            "2024-03-10 Bake sale [Fundraising Events] KD 75.00"
        );
    }

    #[test]
    fn test_input_builders() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let input = TransactionInput::expense(date, "Posters", "Marketing/Promotion", Money::from_units(12))
            .authorized_by(Authorizer::Chair)
            .receipt("R-9");
        assert_eq!(input.expense, Money::from_units(12));
        assert!(input.income.is_zero());
        assert_eq!(input.authorized_by, Some(Authorizer::Chair));
        assert_eq!(input.receipt_number, "R-9");
    }
}

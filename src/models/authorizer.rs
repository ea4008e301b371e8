//! Authorizers and the spending authorization matrix
//!
//! Every transaction names who approved it. The required approver depends on
//! the amount and on whether the category is part of the budget.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Amounts strictly above this need a second signature
pub const HIGH_VALUE_THRESHOLD: Money = Money::from_units(100);

/// Who approved a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authorizer {
    Chair,
    #[serde(rename = "Deputy Chair")]
    DeputyChair,
    Treasurer,
    Secretary,
    #[serde(rename = "Events Coordinator")]
    EventsCoordinator,
    #[serde(rename = "School Admin")]
    SchoolAdmin,
    /// Satisfies every requirement
    #[serde(rename = "Committee Vote")]
    CommitteeVote,
}

impl Authorizer {
    /// All authorizers in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Chair,
            Self::DeputyChair,
            Self::Treasurer,
            Self::Secretary,
            Self::EventsCoordinator,
            Self::SchoolAdmin,
            Self::CommitteeVote,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chair => "Chair",
            Self::DeputyChair => "Deputy Chair",
            Self::Treasurer => "Treasurer",
            Self::Secretary => "Secretary",
            Self::EventsCoordinator => "Events Coordinator",
            Self::SchoolAdmin => "School Admin",
            Self::CommitteeVote => "Committee Vote",
        }
    }

    /// Whether this authorizer satisfies a requirement
    pub fn satisfies(&self, required: &[Authorizer]) -> bool {
        *self == Self::CommitteeVote || required.contains(self)
    }
}

impl fmt::Display for Authorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Authorizer {
    type Err = AuthorizerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        Self::all()
            .iter()
            .copied()
            .find(|a| a.name().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| AuthorizerParseError(s.to_string()))
    }
}

/// Error returned when an authorizer name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizerParseError(pub String);

impl fmt::Display for AuthorizerParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown authorizer '{}'", self.0)
    }
}

impl std::error::Error for AuthorizerParseError {}

/// Tier of the authorization matrix a transaction falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationLevel {
    /// Budgeted category, amount up to and including the threshold
    Standard,
    /// Budgeted category, amount above the threshold
    HighValue,
    /// Category outside the budget
    NewCategory,
}

impl AuthorizationLevel {
    /// Classify an amount for a category that is or is not budgeted
    pub fn classify(amount: Money, category_is_budgeted: bool) -> Self {
        if !category_is_budgeted {
            Self::NewCategory
        } else if amount > HIGH_VALUE_THRESHOLD {
            Self::HighValue
        } else {
            Self::Standard
        }
    }

    /// Authorizers accepted at this level
    pub fn required(&self) -> &'static [Authorizer] {
        match self {
            Self::Standard => &[Authorizer::Chair],
            Self::HighValue => &[Authorizer::Chair, Authorizer::SchoolAdmin],
            Self::NewCategory => &[Authorizer::CommitteeVote],
        }
    }

    /// Label used in the authorization matrix
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Under 100 KD",
            Self::HighValue => "Over 100 KD",
            Self::NewCategory => "New Category",
        }
    }
}

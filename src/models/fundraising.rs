//! Fundraising initiative model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InitiativeId;
use super::money::Money;
use super::status::LifecycleStatus;
use crate::error::LedgerResult;

/// A fundraising drive with a goal and running totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundraisingInitiative {
    /// Unique identifier
    pub id: InitiativeId,

    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub coordinator: String,

    pub goal_amount: Money,
    #[serde(default)]
    pub actual_raised: Money,
    #[serde(default)]
    pub expenses: Money,
    /// Always actual_raised - expenses
    #[serde(default)]
    pub net_proceeds: Money,

    #[serde(default)]
    pub status: LifecycleStatus,

    /// When the initiative was created
    pub created_at: DateTime<Utc>,
}

impl FundraisingInitiative {
    /// Create an initiative in the Planning state
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        coordinator: impl Into<String>,
        goal_amount: Money,
    ) -> Self {
        Self {
            id: InitiativeId::new(),
            name: name.into(),
            start_date,
            end_date,
            coordinator: coordinator.into(),
            goal_amount,
            actual_raised: Money::zero(),
            expenses: Money::zero(),
            net_proceeds: Money::zero(),
            status: LifecycleStatus::Planning,
            created_at: Utc::now(),
        }
    }

    /// Replace the raised and spent figures and recompute net proceeds
    pub fn record_progress(&mut self, actual_raised: Money, expenses: Money) {
        self.actual_raised = actual_raised;
        self.expenses = expenses;
        self.net_proceeds = actual_raised - expenses;
    }

    /// Percentage of the goal raised so far (0 when there is no goal)
    pub fn goal_progress(&self) -> f64 {
        if self.goal_amount.is_positive() {
            self.actual_raised.as_f64() / self.goal_amount.as_f64() * 100.0
        } else {
            0.0
        }
    }

    /// Move the initiative along its lifecycle
    pub fn set_status(&mut self, next: LifecycleStatus) -> LedgerResult<()> {
        self.status = self.status.transition_to(next)?;
        Ok(())
    }

    /// Validate the initiative
    pub fn validate(&self) -> Result<(), FundraisingValidationError> {
        if self.name.trim().is_empty() {
            return Err(FundraisingValidationError::EmptyName);
        }

        if self.end_date < self.start_date {
            return Err(FundraisingValidationError::EndsBeforeStart);
        }

        if self.goal_amount.is_negative() {
            return Err(FundraisingValidationError::NegativeGoal);
        }

        Ok(())
    }
}

impl fmt::Display for FundraisingInitiative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} to {}, {})",
            self.name,
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d"),
            self.status
        )
    }
}

/// Validation errors for fundraising initiatives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundraisingValidationError {
    EmptyName,
    EndsBeforeStart,
    NegativeGoal,
}

impl fmt::Display for FundraisingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Initiative name cannot be empty"),
            Self::EndsBeforeStart => write!(f, "End date cannot be before start date"),
            Self::NegativeGoal => write!(f, "Goal amount cannot be negative"),
        }
    }
}

impl std::error::Error for FundraisingValidationError {}

//! The committee's books: everything one session works on
//!
//! Lists are append-only. Mutation goes through the service layer, which keeps
//! the budget actuals in step with the transaction list.

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::event::Event;
use super::fundraising::FundraisingInitiative;
use super::transaction::Transaction;

/// Current snapshot schema version
pub const BOOKS_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    BOOKS_SCHEMA_VERSION
}

/// In-memory domain state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Books {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    budget: Budget,
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    fundraising: Vec<FundraisingInitiative>,
}

impl Default for Books {
    fn default() -> Self {
        Self {
            schema_version: BOOKS_SCHEMA_VERSION,
            transactions: Vec::new(),
            budget: Budget::default(),
            events: Vec::new(),
            fundraising: Vec::new(),
        }
    }
}

impl Books {
    /// Fresh books with the default committee budget
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// All transactions in posting order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn fundraising(&self) -> &[FundraisingInitiative] {
        &self.fundraising
    }

    pub(crate) fn push_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub(crate) fn budget_mut(&mut self) -> &mut Budget {
        &mut self.budget
    }

    pub(crate) fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub(crate) fn events_mut(&mut self) -> &mut [Event] {
        &mut self.events
    }

    pub(crate) fn push_initiative(&mut self, initiative: FundraisingInitiative) {
        self.fundraising.push(initiative);
    }

    pub(crate) fn fundraising_mut(&mut self) -> &mut [FundraisingInitiative] {
        &mut self.fundraising
    }
}

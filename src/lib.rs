//! Committee Ledger - bookkeeping for a school committee
//!
//! This library provides the core functionality behind the `ledger` command:
//! a single-ledger record of income and expenses with an authorization
//! matrix, a two-section budget, event and fundraising tracking, and
//! role-based access for an admin and a read-only viewer.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, committee roster and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budget, events, initiatives)
//! - `auth`: Credential store and role-based page access
//! - `session`: The signed-in user and the books they work on
//! - `storage`: JSON snapshot storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Dashboard and monthly report
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use committee_ledger::config::{paths::LedgerPaths, settings::Settings};
//! use committee_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let books = Storage::new(paths)?.load_books()?;
//! ```

pub mod audit;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use models::{Books, Money};
pub use session::Session;

//! Configuration module for the committee ledger
//!
//! This module provides configuration management including:
//! - data directory resolution
//! - committee settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{CommitteeRoster, Settings};

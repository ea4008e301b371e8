//! Audit trail for the committee ledger
//!
//! Every change to the books is appended to `audit.log` as one JSON line
//! recording who made it, what changed and the before/after values.
//!
//! - `AuditEntry`: one recorded change
//! - `AuditLogger`: append-only JSONL writer and reader
//! - `generate_diff`: short summary of changed fields between two snapshots

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

//! Export module for the committee ledger
//!
//! - CSV: the transaction list (spreadsheet-compatible)
//! - JSON: machine-readable full export of the books
//! - YAML: human-readable full export of the books

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

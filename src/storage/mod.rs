//! Storage layer for the committee ledger
//!
//! The books live in one JSON snapshot (`data/books.json`) that is loaded at
//! the start of a command and written back atomically after a change. Changes
//! are also appended to the audit log.

pub mod file_io;
pub mod init;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::books::BOOKS_SCHEMA_VERSION;
use crate::models::Books;

/// Access to the books snapshot and the audit log
pub struct Storage {
    paths: LedgerPaths,
    audit: AuditLogger,
}

impl Storage {
    /// Open storage under `paths`, creating the directories if needed
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the books, or fresh books with the default budget if none are saved
    pub fn load_books(&self) -> LedgerResult<Books> {
        let books: Books = read_json(self.paths.books_file())?;

        if books.schema_version() > BOOKS_SCHEMA_VERSION {
            return Err(LedgerError::Storage(format!(
                "Books file uses schema version {} but this build supports up to {}",
                books.schema_version(),
                BOOKS_SCHEMA_VERSION
            )));
        }

        tracing::debug!(
            transactions = books.transactions().len(),
            events = books.events().len(),
            initiatives = books.fundraising().len(),
            "books loaded"
        );
        Ok(books)
    }

    /// Write the books snapshot
    pub fn save_books(&self, books: &Books) -> LedgerResult<()> {
        write_json_atomic(self.paths.books_file(), books)?;
        tracing::debug!(path = %self.paths.books_file().display(), "books saved");
        Ok(())
    }

    /// Record a newly created record in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        actor: &str,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> LedgerResult<()> {
        self.audit.log(&AuditEntry::create(
            actor,
            entity_type,
            entity_id,
            entity_name,
            entity,
        ))
    }

    /// Record a change to an existing record in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        actor: &str,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> LedgerResult<()> {
        self.audit.log(&AuditEntry::update(
            actor,
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Authorizer, Money, TransactionInput};
    use crate::services::TransactionService;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (Storage::new(paths).unwrap(), temp_dir)
    }

    #[test]
    fn test_storage_creation() {
        let (_storage, temp_dir) = test_storage();
        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_books_survive_save_and_load() {
        let (storage, _temp) = test_storage();
        let mut books = storage.load_books().unwrap();

        let input = TransactionInput::income(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            "Bake sale",
            "Fundraising Events",
            Money::from_units(75),
        )
        .authorized_by(Authorizer::Chair);
        TransactionService::new(&mut books).post(input).unwrap();
        storage.save_books(&books).unwrap();

        let loaded = storage.load_books().unwrap();
        assert_eq!(loaded.transactions().len(), 1);
        assert_eq!(loaded.transactions()[0].description, "Bake sale");
        assert_eq!(
            loaded
                .budget()
                .category(crate::models::BudgetSection::Income, "Fundraising Events")
                .unwrap()
                .actual,
            Money::from_units(75)
        );
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let (storage, _temp) = test_storage();
        std::fs::write(
            storage.paths().books_file(),
            format!(r#"{{"schema_version": {}}}"#, BOOKS_SCHEMA_VERSION + 1),
        )
        .unwrap();

        assert!(matches!(
            storage.load_books(),
            Err(LedgerError::Storage(_))
        ));
    }

    #[test]
    fn test_audit_helpers() {
        let (storage, _temp) = test_storage();
        storage
            .log_create("admin", EntityType::Settings, "settings", None, &"created")
            .unwrap();
        storage
            .log_update("admin", EntityType::Settings, "settings", None, &1, &2)
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[1].diff_summary.as_deref(), Some("value: 1 -> 2"));
    }
}

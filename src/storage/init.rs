//! First-run setup of the data directory

use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::LedgerError;
use crate::models::Books;

use super::file_io::write_json_atomic;

/// Create the data directory with default settings and empty books
///
/// Existing files are left alone. Returns `true` if anything was created.
pub fn initialize_storage(paths: &LedgerPaths) -> Result<bool, LedgerError> {
    paths.ensure_directories()?;
    let mut created = false;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
        created = true;
    }

    if !paths.books_file().exists() {
        write_json_atomic(paths.books_file(), &Books::new())?;
        created = true;
    }

    if created {
        tracing::info!(path = %paths.base_dir().display(), "data directory initialized");
    }
    Ok(created)
}

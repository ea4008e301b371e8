//! YAML export of the complete books

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::FullExport;
use crate::models::Books;

/// Write the full export as YAML with a comment header
pub fn export_full_yaml<W: Write>(
    books: &Books,
    organization_name: &str,
    mut writer: W,
) -> LedgerResult<()> {
    let export = FullExport::from_books(books, organization_name);
    let export_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# {} ledger export", organization_name).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::EXPORT_SCHEMA_VERSION;

    #[test]
    fn test_yaml_export() {
        let books = Books::new();
        let mut output = Vec::new();
        export_full_yaml(&books, "Grade 12 Committee", &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Grade 12 Committee ledger export"));
        assert!(yaml.contains("Other Expenses"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["schema_version"].as_str(), Some(EXPORT_SCHEMA_VERSION));
        assert_eq!(parsed["metadata"]["transaction_count"].as_u64(), Some(0));
    }
}

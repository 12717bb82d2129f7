//! @acp:module "Table Reader"
//! @acp:summary "Read header-keyed CSV tables into rows"
//! @acp:domain search
//! @acp:layer io

use std::path::Path;

use crate::error::{Result, UiProError};

use super::rows::SearchRow;

/// Read every record of a headed CSV file.
///
/// Records that fail to parse are skipped with a warning; a missing file is
/// [`UiProError::DataFileMissing`].
pub fn read_rows(path: &Path) -> Result<Vec<SearchRow>> {
    if !path.exists() {
        return Err(UiProError::DataFileMissing {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        match record {
            Ok(record) => rows.push(headers.iter().zip(record.iter()).collect()),
            Err(e) => {
                tracing::warn!("Skipping malformed record {} in {:?}: {}", line + 1, path, e);
            }
        }
    }

    tracing::debug!("Read {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_keys_by_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.csv");
        std::fs::write(
            &path,
            "Style Category,Keywords\nMinimalism,\"clean, simple\"\nBrutalism,bold\n",
        )
        .unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Keywords"), "clean, simple");
        assert_eq!(rows[1].get("Style Category"), "Brutalism");
    }

    #[test]
    fn test_short_record_leaves_columns_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.csv");
        std::fs::write(&path, "Product Type,Primary (Hex),Notes\nSaaS,#2563EB\n").unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[0].get("Primary (Hex)"), "#2563EB");
        assert!(!rows[0].contains("Notes"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rows(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, UiProError::DataFileMissing { .. }));
    }
}

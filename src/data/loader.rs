// ============================================================
// Layer 4 — CSV Record Loader
// ============================================================
// Reads a headered CSV file with (at least) a `Text` and a
// `Label` column. Extra columns are ignored.
//
//   Text,Label
//   "What a lovely film, really.",positive
//   "Dull.",negative
//
// Parsing is delegated to the csv crate (quoting, embedded
// commas and newlines) with serde deserialising each row.
//
// Any row that cannot be read, or whose Text or Label cell is
// empty, aborts the whole load with a MalformedRecord error.
//
// Reference: csv crate documentation (Reader::deserialize)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::error::PipelineError;
use crate::domain::record::RawRecord;
use crate::domain::traits::RecordSource;

/// Shape of one CSV row. Empty cells deserialise to None.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Text")]
    text: Option<String>,
    #[serde(rename = "Label")]
    label: Option<String>,
}

/// Loads labeled records from a CSV file.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<RawRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open data file '{}'", self.path.display()))?;

        let mut records = Vec::new();

        for (i, row) in reader.deserialize::<CsvRow>().enumerate() {
            let number = i + 1;
            let row = row.map_err(|e| PipelineError::malformed(number, e.to_string()))?;
            records.push(into_record(number, row)?);
        }

        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Reject rows with an empty Text or Label cell
fn into_record(number: usize, row: CsvRow) -> Result<RawRecord, PipelineError> {
    let text = row
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| PipelineError::malformed(number, "missing Text"))?;
    let label = row
        .label
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| PipelineError::malformed(number, "missing Label"))?;
    Ok(RawRecord::new(number, text, label))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Write `contents` to a unique file in the system temp dir
    fn temp_csv(name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "textprep_loader_{}_{}.csv",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reads_text_and_label() {
        let path = temp_csv(
            "ok",
            "Text,Label,Extra\n\"Hello, world\",1,x\nsecond row,0,y\n",
        );
        let records = CsvLoader::new(&path).load_all().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], RawRecord::new(1, "Hello, world", "1"));
        assert_eq!(records[1].number, 2);
        assert_eq!(records[1].label, "0");
    }

    #[test]
    fn test_empty_label_is_malformed() {
        let path = temp_csv("nolabel", "Text,Label\nfine,1\nbroken,\n");
        let err = CsvLoader::new(&path).load_all().unwrap_err();
        fs::remove_file(&path).ok();

        let err = err.downcast::<PipelineError>().unwrap();
        assert_eq!(err, PipelineError::malformed(2, "missing Label"));
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let path = temp_csv("nocol", "Text,Other\nfine,1\n");
        let err = CsvLoader::new(&path).load_all().unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(
            err.downcast::<PipelineError>().unwrap(),
            PipelineError::MalformedRecord { record: 1, .. }
        ));
    }

    #[test]
    fn test_non_utf8_row_is_malformed() {
        let mut bytes = b"Text,Label\nfine,1\n".to_vec();
        bytes.extend_from_slice(b"caf\xe9 latin-1,0\n");
        let path = temp_csv("latin1", bytes);
        let err = CsvLoader::new(&path).load_all().unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(
            err.downcast::<PipelineError>().unwrap(),
            PipelineError::MalformedRecord { record: 2, .. }
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        let loader = CsvLoader::new("/definitely/not/here.csv");
        assert!(loader.load_all().is_err());
    }

    #[test]
    fn test_header_only_gives_no_records() {
        let path = temp_csv("empty", "Text,Label\n");
        let records = CsvLoader::new(&path).load_all().unwrap();
        fs::remove_file(&path).ok();
        assert!(records.is_empty());
    }
}

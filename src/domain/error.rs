// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// Typed failures of the data preparation run. Every variant is
// fatal: the run aborts and no partial dataset is produced.
//
// A token missing from the vocabulary is NOT in this list.
// It resolves to the unknown index during encoding.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Reverse lookup with an index the vocabulary never assigned
    #[error("index {index} is out of range for a vocabulary of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// A raw record is missing a field or fails cleaning/normalisation.
    /// `record` is 1-based, counting data rows after the header.
    #[error("malformed record #{record}: {reason}")]
    MalformedRecord { record: usize, reason: String },

    /// Missing or invalid configuration, detected before any data is read
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A persisted vocabulary that breaks the index invariants
    #[error("invalid vocabulary: {0}")]
    InvalidVocab(String),
}

impl PipelineError {
    pub fn malformed(record: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record,
            reason: reason.into(),
        }
    }
}

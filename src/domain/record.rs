// ============================================================
// Layer 3 — RawRecord Domain Type
// ============================================================
// One labeled row exactly as it was read from the source file,
// before any cleaning or label normalisation.
//
// `number` is the 1-based position among data rows (the header
// is not counted). It travels with the record so that a failure
// during cleaning or label encoding can name the offending row.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 1-based data row number
    pub number: usize,

    /// Free text, uncleaned
    pub text: String,

    /// Categorical label as written in the file
    pub label: String,
}

impl RawRecord {
    pub fn new(number: usize, text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            label: label.into(),
        }
    }
}

// ============================================================
// Layer 4 — Label Encoder
// ============================================================
// Turns the categorical Label column into class indices.
//
// Three schemes:
//   Numeric   — labels are already 0, 1, 2, ... and are used
//               as-is ("1" → 1); values from MAX_CLASSES up are
//               rejected, since the label space is sized from the
//               largest label
//   Classes   — a fixed, ordered class list; the index is the
//               position in the list ("neg","pos": pos → 1)
//   Discover  — indices are handed out in the order labels are
//               first seen while walking the dataset
//
// Class names are matched after trimming and lowercasing, so
// "Positive " and "positive" are the same class.
//
// Anything that does not fit the scheme is a malformed record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::error::PipelineError;

/// Numeric labels must be below this
pub const MAX_CLASSES: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelScheme {
    #[default]
    Numeric,
    Classes(Vec<String>),
    Discover,
}

#[derive(Debug, Clone)]
pub struct LabelEncoder {
    scheme: LabelScheme,
    /// Known class names in index order (Classes / Discover)
    classes: Vec<String>,
    index: HashMap<String, usize>,
    /// Largest label seen under Numeric
    max_numeric: Option<usize>,
}

impl LabelEncoder {
    pub fn new(scheme: LabelScheme) -> Self {
        let mut encoder = Self {
            scheme: scheme.clone(),
            classes: Vec::new(),
            index: HashMap::new(),
            max_numeric: None,
        };
        if let LabelScheme::Classes(names) = scheme {
            for name in names {
                encoder.insert(normalise(&name));
            }
        }
        encoder
    }

    /// Encode the label of data row `record`.
    pub fn encode(&mut self, record: usize, raw: &str) -> Result<usize, PipelineError> {
        let label = normalise(raw);
        if label.is_empty() {
            return Err(PipelineError::malformed(record, "empty label"));
        }

        match self.scheme {
            LabelScheme::Numeric => {
                let value: usize = label.parse().map_err(|_| {
                    PipelineError::malformed(
                        record,
                        format!("label {raw:?} is not a non-negative integer"),
                    )
                })?;
                if value >= MAX_CLASSES {
                    return Err(PipelineError::malformed(
                        record,
                        format!("label {raw:?} exceeds the class limit of {MAX_CLASSES}"),
                    ));
                }
                self.max_numeric = Some(self.max_numeric.map_or(value, |m| m.max(value)));
                Ok(value)
            }
            LabelScheme::Classes(_) => self.index.get(&label).copied().ok_or_else(|| {
                PipelineError::malformed(
                    record,
                    format!("label {raw:?} is not one of {:?}", self.classes),
                )
            }),
            LabelScheme::Discover => Ok(self.insert(label)),
        }
    }

    /// Index of `name`, assigning the next free one if unseen
    fn insert(&mut self, name: String) -> usize {
        if let Some(&idx) = self.index.get(&name) {
            return idx;
        }
        let idx = self.classes.len();
        self.index.insert(name.clone(), idx);
        self.classes.push(name);
        idx
    }

    /// Size of the label space seen or declared so far
    pub fn num_classes(&self) -> usize {
        match self.scheme {
            LabelScheme::Numeric => self
                .max_numeric
                .and_then(|m| m.checked_add(1))
                .unwrap_or(0),
            _ => self.classes.len(),
        }
    }

    /// Class names in index order
    pub fn classes(&self) -> Vec<String> {
        match self.scheme {
            LabelScheme::Numeric => (0..self.num_classes()).map(|i| i.to_string()).collect(),
            _ => self.classes.clone(),
        }
    }
}

fn normalise(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_labels() {
        let mut enc = LabelEncoder::new(LabelScheme::Numeric);
        assert_eq!(enc.encode(1, "1").unwrap(), 1);
        assert_eq!(enc.encode(2, " 0 ").unwrap(), 0);
        assert_eq!(enc.encode(3, "3").unwrap(), 3);
        assert_eq!(enc.num_classes(), 4);
        assert!(enc.encode(4, "pos").is_err());
        assert!(enc.encode(5, "-1").is_err());
    }

    #[test]
    fn test_numeric_label_limits() {
        let mut enc = LabelEncoder::new(LabelScheme::Numeric);
        for raw in [
            "18446744073709551616", // does not fit a usize
            "18446744073709551615", // usize::MAX
            "4294967297",           // past u32::MAX
            "2147483648",           // past i32::MAX
            "65536",                // first value over the limit
        ] {
            assert!(
                matches!(
                    enc.encode(3, raw),
                    Err(PipelineError::MalformedRecord { record: 3, .. })
                ),
                "{raw} should be rejected"
            );
        }
        // Rejected labels leave the label space untouched
        assert_eq!(enc.num_classes(), 0);
        assert!(enc.classes().is_empty());

        assert_eq!(enc.encode(4, "65535").unwrap(), MAX_CLASSES - 1);
        assert_eq!(enc.num_classes(), MAX_CLASSES);
    }

    #[test]
    fn test_fixed_classes() {
        let mut enc = LabelEncoder::new(LabelScheme::Classes(vec![
            "negative".into(),
            "Positive".into(),
        ]));
        assert_eq!(enc.encode(1, "POSITIVE").unwrap(), 1);
        assert_eq!(enc.encode(2, "negative").unwrap(), 0);
        assert_eq!(
            enc.encode(7, "neutral"),
            Err(PipelineError::malformed(
                7,
                "label \"neutral\" is not one of [\"negative\", \"positive\"]"
            ))
        );
        assert_eq!(enc.num_classes(), 2);
    }

    #[test]
    fn test_discover_in_first_seen_order() {
        let mut enc = LabelEncoder::new(LabelScheme::Discover);
        let got: Vec<usize> = ["spam", "ham", "spam", "eggs"]
            .iter()
            .enumerate()
            .map(|(i, l)| enc.encode(i + 1, l).unwrap())
            .collect();
        assert_eq!(got, vec![0, 1, 0, 2]);
        assert_eq!(enc.classes(), vec!["spam", "ham", "eggs"]);
    }

    #[test]
    fn test_blank_label_rejected() {
        let mut enc = LabelEncoder::new(LabelScheme::Discover);
        assert!(matches!(
            enc.encode(9, "   "),
            Err(PipelineError::MalformedRecord { record: 9, .. })
        ));
    }
}

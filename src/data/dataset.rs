use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// One encoded, fixed-width record and its class index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextClassificationItem {
    pub tokens: Vec<usize>,
    pub label:  usize,
}

impl TextClassificationItem {
    pub fn new(tokens: Vec<usize>, label: usize) -> Self {
        Self { tokens, label }
    }

    /// Number of positions that are not `pad_index`
    pub fn content_len(&self, pad_index: usize) -> usize {
        self.tokens.iter().filter(|&&t| t != pad_index).count()
    }
}

/// The labeled dataset: padded token rows aligned with labels.
pub struct EncodedDataset {
    items: Vec<TextClassificationItem>,
}

impl EncodedDataset {
    pub fn new(items: Vec<TextClassificationItem>) -> Self { Self { items } }

    pub fn sample_count(&self) -> usize { self.items.len() }

    pub fn items(&self) -> &[TextClassificationItem] { &self.items }

    /// Width shared by every row, None when the dataset is empty
    pub fn row_width(&self) -> Option<usize> {
        self.items.first().map(|i| i.tokens.len())
    }
}

impl Dataset<TextClassificationItem> for EncodedDataset {
    fn get(&self, index: usize) -> Option<TextClassificationItem> {
        self.items.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

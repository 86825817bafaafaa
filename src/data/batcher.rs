// ============================================================
// Layer 4 — Text Classification Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec of encoded
// records into tensors.
//
// How batching works here:
//   Input:  N TextClassificationItems, each with L token ids
//   Output: TextClassificationBatch
//             tokens   [N, L]  Int
//             labels   [N]     Int
//             mask_pad [N, L]  Bool (true where tokens == pad)
//
//   Rows are already truncated/padded to the same width, so the
//   token ids are flattened and reshaped:
//   [r1_t1, ..., r1_tL, r2_t1, ..., rN_tL] → [N, L]
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::TextClassificationItem;

// ─── TextClassificationBatch ──────────────────────────────────────────────────
/// A batch of encoded records ready for a classifier forward pass.
#[derive(Debug, Clone)]
pub struct TextClassificationBatch<B: Backend> {
    /// Token ids — shape: [batch_size, pad_length]
    pub tokens: Tensor<B, 2, Int>,

    /// Class indices — shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,

    /// Padding mask — shape: [batch_size, pad_length]
    pub mask_pad: Tensor<B, 2, Bool>,
}

// ─── TextClassificationBatcher ────────────────────────────────────────────────
/// Holds the target device and the vocabulary's padding index.
#[derive(Clone, Debug)]
pub struct TextClassificationBatcher<B: Backend> {
    pub device:    B::Device,
    pub pad_index: usize,
}

impl<B: Backend> TextClassificationBatcher<B> {
    pub fn new(device: B::Device, pad_index: usize) -> Self {
        Self { device, pad_index }
    }
}

impl<B: Backend> Batcher<TextClassificationItem, TextClassificationBatch<B>>
    for TextClassificationBatcher<B>
{
    fn batch(&self, items: Vec<TextClassificationItem>) -> TextClassificationBatch<B> {
        let batch_size = items.len();
        // Every row has the same (padded) width
        let seq_len = items.first().map_or(0, |i| i.tokens.len());

        let tokens_flat: Vec<i64> = items
            .iter()
            .flat_map(|i| i.tokens.iter().map(|&t| to_int(t)))
            .collect();

        let labels: Vec<i64> = items.iter().map(|i| to_int(i.label)).collect();

        let tokens = Tensor::<B, 1, Int>::from_ints(tokens_flat.as_slice(), &self.device)
            .reshape([batch_size, seq_len]);

        let labels = Tensor::<B, 1, Int>::from_ints(labels.as_slice(), &self.device);

        let mask_pad = tokens.clone().equal_elem(to_int(self.pad_index));

        TextClassificationBatch {
            tokens,
            labels,
            mask_pad,
        }
    }
}

/// Token ids index into a Vec and labels are below `MAX_CLASSES`,
/// so both are at most `isize::MAX` and convert to i64 exactly.
fn to_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

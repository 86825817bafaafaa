// ============================================================
// Layer 4 — DataLoader Construction
// ============================================================
// Hands an EncodedDataset to Burn's DataLoaderBuilder.
//
//   training split → shuffled every epoch (seeded)
//   test split     → fixed order
//
// Burn may fetch with several worker threads while iterating;
// everything before this point is single-threaded.
//
// Reference: Burn Book §4 (DataLoader)

use std::sync::Arc;

use burn::{
    data::dataloader::{DataLoader, DataLoaderBuilder},
    prelude::*,
};

use crate::data::{
    batcher::{TextClassificationBatch, TextClassificationBatcher},
    dataset::EncodedDataset,
};

/// Options for one loader
#[derive(Debug, Clone, Copy)]
pub struct LoaderOptions {
    pub batch_size:  usize,
    /// Shuffle each epoch (training mode)
    pub shuffle:     bool,
    pub seed:        u64,
    pub num_workers: usize,
}

/// Build an iterable of batches over `dataset`.
pub fn build_dataloader<B: Backend>(
    dataset: EncodedDataset,
    batcher: TextClassificationBatcher<B>,
    opts:    LoaderOptions,
) -> Arc<dyn DataLoader<TextClassificationBatch<B>>> {
    tracing::debug!(
        "DataLoader: {} samples, batch_size={}, shuffle={}, workers={}",
        dataset.sample_count(),
        opts.batch_size,
        opts.shuffle,
        opts.num_workers,
    );

    let mut builder = DataLoaderBuilder::new(batcher).batch_size(opts.batch_size);

    // One worker means the plain single-threaded loader
    if opts.num_workers > 1 {
        builder = builder.num_workers(opts.num_workers);
    }

    if opts.shuffle {
        builder.shuffle(opts.seed).build(dataset)
    } else {
        builder.build(dataset)
    }
}

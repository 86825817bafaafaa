// ============================================================
// Layer 2 — PrepareUseCase (Dataset Assembler)
// ============================================================
// Orchestrates the full data preparation run in order:
//
//   Step 1: Validate configuration     (before any I/O)
//   Step 2: Load raw records           (Layer 4 - data)
//   Step 3: Clean + tokenize text      (Layer 4 - data)
//   Step 4: Normalise labels           (Layer 4 - data)
//   Step 5: Build the vocabulary       (Layer 3 - domain)
//   Step 6: Encode + pad every record  (Layer 3 - domain)
//   Step 7: Collect statistics         (Layer 6 - infra)
//   Step 8: Train/test split           (Layer 4 - data)
//   Step 9: Build data loaders         (Layer 4 - data)
//   Step 10: Persist vocab/config      (Layer 6 - infra)
//
// The first failing record aborts the run; no partial dataset
// is ever returned.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §4 (Datasets and Dataloaders)

use std::sync::Arc;

use anyhow::{Context, Result};
use burn::{data::dataloader::DataLoader, prelude::*};
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::{TextClassificationBatch, TextClassificationBatcher},
    dataloader::{build_dataloader, LoaderOptions},
    dataset::{EncodedDataset, TextClassificationItem},
    labels::{LabelEncoder, LabelScheme},
    loader::CsvLoader,
    preprocessor::Preprocessor,
    splitter::split_train_test,
};
use crate::domain::{
    error::PipelineError,
    padding::truncate_pad,
    traits::{Persistable, RecordSource},
    vocab::{Vocab, PAD_TOKEN},
};
use crate::infra::{
    prepared_store::PreparedStore,
    stats::DatasetStats,
};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Everything a preparation run needs. Serialisable so it can be
// saved next to the vocabulary and reloaded by the `encode` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub data_path:     String,
    pub min_freq:      usize,
    pub pad_length:    usize,
    pub batch_size:    usize,
    #[serde(default)]
    pub test_fraction: f64,
    #[serde(default = "default_seed")]
    pub seed:          u64,
    #[serde(default = "default_num_workers")]
    pub num_workers:   usize,
    #[serde(default)]
    pub labels:        LabelScheme,
    #[serde(default)]
    pub out_dir:       Option<String>,
}

fn default_seed() -> u64 { 100 }

fn default_num_workers() -> usize { 1 }

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path:     "data/train.csv".to_string(),
            min_freq:      1,
            pad_length:    64,
            batch_size:    32,
            test_fraction: 0.0,
            seed:          default_seed(),
            num_workers:   default_num_workers(),
            labels:        LabelScheme::Numeric,
            out_dir:       None,
        }
    }
}

impl PipelineConfig {
    /// Read a config previously written as JSON
    pub fn from_json_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config '{path}'"))?;
        serde_json::from_str(&json).with_context(|| format!("Cannot parse config '{path}'"))
    }

    /// Reject configurations that cannot produce a dataset.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let invalid = |msg: String| Err(PipelineError::Configuration(msg));

        if self.data_path.trim().is_empty() {
            return invalid("data_path is empty".to_string());
        }
        if self.min_freq == 0 {
            return invalid("min_freq must be at least 1".to_string());
        }
        if self.pad_length == 0 {
            return invalid("pad_length must be at least 1".to_string());
        }
        if self.batch_size == 0 {
            return invalid("batch_size must be at least 1".to_string());
        }
        if self.num_workers == 0 {
            return invalid("num_workers must be at least 1".to_string());
        }
        if !(0.0..1.0).contains(&self.test_fraction) {
            return invalid(format!(
                "test_fraction must be in [0, 1), got {}",
                self.test_fraction
            ));
        }
        if let LabelScheme::Classes(classes) = &self.labels {
            if classes.is_empty() {
                return invalid("class list is empty".to_string());
            }
        }
        Ok(())
    }
}

// ─── PreparedData ─────────────────────────────────────────────────────────────
/// Output of a run: the vocabulary plus iterable batches.
pub struct PreparedData<B: Backend> {
    pub vocab:     Vocab,
    pub pad_index: usize,
    /// Class names in label-index order
    pub classes:   Vec<String>,
    pub stats:     DatasetStats,
    /// Shuffled training batches
    pub train:     Arc<dyn DataLoader<TextClassificationBatch<B>>>,
    /// Fixed-order held-out batches, when test_fraction > 0
    pub test:      Option<Arc<dyn DataLoader<TextClassificationBatch<B>>>>,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PipelineConfig,
}

impl PrepareUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline against the CSV file named in the config
    pub fn execute<B: Backend>(&self, device: &B::Device) -> Result<PreparedData<B>> {
        let loader = CsvLoader::new(&self.config.data_path);
        self.execute_with(&loader, device)
    }

    /// Run the pipeline against any record source
    pub fn execute_with<B: Backend>(
        &self,
        source: &dyn RecordSource,
        device: &B::Device,
    ) -> Result<PreparedData<B>> {
        let cfg = &self.config;

        // ── Step 1: Validate configuration ────────────────────────────────────
        cfg.validate()?;

        // ── Step 2: Load raw records ──────────────────────────────────────────
        let records = source.load_all()?;
        if records.is_empty() {
            tracing::warn!("No records loaded; the dataset will be empty");
        }

        // ── Steps 3-4: Clean text and normalise labels ────────────────────────
        let preprocessor = Preprocessor::new();
        let mut label_encoder = LabelEncoder::new(cfg.labels.clone());

        let mut corpus: Vec<Vec<String>> = Vec::with_capacity(records.len());
        let mut labels: Vec<usize> = Vec::with_capacity(records.len());
        for record in &records {
            corpus.push(preprocessor.tokenize(&record.text));
            labels.push(label_encoder.encode(record.number, &record.label)?);
        }

        // ── Step 5: Build the vocabulary over the full corpus ─────────────────
        let vocab = Vocab::new(&corpus, cfg.min_freq, &[PAD_TOKEN]);
        let pad_index = vocab.lookup_one(PAD_TOKEN);
        tracing::info!(
            "Vocabulary: {} tokens (min_freq={}, pad index={})",
            vocab.len(),
            cfg.min_freq,
            pad_index
        );

        // ── Step 6: Encode and pad every record ───────────────────────────────
        let items: Vec<TextClassificationItem> = corpus
            .iter()
            .zip(&labels)
            .map(|(tokens, &label)| {
                let ids = vocab.lookup_many(tokens);
                TextClassificationItem::new(truncate_pad(&ids, cfg.pad_length, pad_index), label)
            })
            .collect();

        // ── Step 7: Statistics ────────────────────────────────────────────────
        let classes = label_encoder.classes();
        let mut stats = DatasetStats::collect(&vocab, &corpus, &labels, cfg.pad_length, classes.len());

        // ── Step 8: Train / test split ────────────────────────────────────────
        let (train_items, test_items) = split_train_test(items, cfg.test_fraction, cfg.seed);
        stats.train_records = train_items.len();
        stats.test_records = test_items.len();
        stats.log();

        // ── Step 9: Data loaders ──────────────────────────────────────────────
        let batcher = TextClassificationBatcher::<B>::new(device.clone(), pad_index);
        let opts = LoaderOptions {
            batch_size:  cfg.batch_size,
            shuffle:     true,
            seed:        cfg.seed,
            num_workers: cfg.num_workers,
        };

        let train = build_dataloader(EncodedDataset::new(train_items), batcher.clone(), opts);
        let test = if test_items.is_empty() {
            None
        } else {
            let opts = LoaderOptions { shuffle: false, ..opts };
            Some(build_dataloader(EncodedDataset::new(test_items), batcher, opts))
        };

        // ── Step 10: Persist for later encoding ───────────────────────────────
        if let Some(dir) = &cfg.out_dir {
            let store = PreparedStore::new(dir)?;
            vocab.save(&store.vocab_path())?;
            store.save_config(cfg)?;
            store.save_stats(&stats)?;
            tracing::info!("Saved vocabulary and config to '{}'", dir);
        }

        Ok(PreparedData {
            vocab,
            pad_index,
            classes,
            stats,
            train,
            test,
        })
    }
}

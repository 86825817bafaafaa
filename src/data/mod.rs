// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the CSV file on disk and the batches a
// training loop iterates over.
//
// The pipeline flows in this order:
//
//   data.csv (Text, Label)
//       │
//       ▼
//   CsvLoader         → reads rows into RawRecords
//       │
//       ▼
//   Preprocessor      → cleans text, splits into tokens
//   LabelEncoder      → maps labels to class indices
//       │
//       ▼
//   Vocab + padding   → (Layer 3) token ids, fixed width
//       │
//       ▼
//   split_train_test  → optional seeded hold-out split
//       │
//       ▼
//   EncodedDataset    → implements Burn's Dataset trait
//       │
//       ▼
//   TextClassificationBatcher → stacks rows into tensors
//       │
//       ▼
//   build_dataloader  → batch size + shuffle flag
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Reads labeled rows from a CSV file
pub mod loader;

/// Cleans raw text and splits it into tokens
pub mod preprocessor;

/// Maps raw labels to class indices
pub mod labels;

/// Implements Burn's Dataset trait for encoded records
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Wraps Burn's DataLoaderBuilder
pub mod dataloader;

/// Shuffles and splits data into train/test sets
pub mod splitter;

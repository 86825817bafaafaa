// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to one business
// layer:
//
//   vocab_store.rs    — Vocab persistence
//                       Writes the vocabulary as JSON and
//                       rebuilds it (with invariant checks)
//                       on load.
//
//   prepared_store.rs — The output directory of a run
//                       vocab.json, pipeline_config.json and
//                       stats.json live side by side so the
//                       `encode` command can reproduce the
//                       exact encoding used for the dataset.
//
//   stats.rs          — Dataset statistics
//                       Vocabulary coverage, truncation and
//                       label distribution, logged and saved.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            serde_json crate documentation

/// Vocabulary saving and loading
pub mod vocab_store;

/// Output directory layout for a preparation run
pub mod prepared_store;

/// Dataset statistics report
pub mod stats;

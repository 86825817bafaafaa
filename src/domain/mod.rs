// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// The heart of the pipeline: plain Rust types with no burn,
// no file I/O and no CLI concerns.
//
//   counter.rs  — corpus token counting (insertion ordered)
//   vocab.rs    — token <-> index vocabulary
//   padding.rs  — fixed-length truncate/pad transform
//   record.rs   — a raw labeled record as read from disk
//   traits.rs   — abstractions other layers implement
//   error.rs    — typed pipeline errors
//
// Everything here is deterministic and unit-testable without
// touching the filesystem or a tensor backend.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Token frequency table over a tokenized corpus
pub mod counter;

// Frequency-ranked vocabulary with unknown/reserved tokens
pub mod vocab;

// Truncate / right-pad index sequences
pub mod padding;

// One labeled text record before cleaning
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;

// Error taxonomy shared by every layer
pub mod error;

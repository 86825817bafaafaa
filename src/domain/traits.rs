// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to its collaborators through
// these traits, so a different storage format or persistence
// backend only needs a new implementation:
//   - CsvLoader   implements RecordSource
//   - Vocab       implements Persistable (infra::vocab_store)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::record::RawRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the full list of raw labeled records.
///
/// The whole corpus is materialised at once: the vocabulary needs
/// a complete counting pass before any record can be encoded.
pub trait RecordSource {
    /// Load every record, failing on the first malformed one
    fn load_all(&self) -> Result<Vec<RawRecord>>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &str) -> Result<()>;

    /// Load a component's state from the given path
    fn load(path: &str) -> Result<Self>;
}

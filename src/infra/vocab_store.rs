// ============================================================
// Layer 6 — Vocab Store
// ============================================================
// JSON persistence for the vocabulary.
//
// File format:
//   {
//     "tokens":      ["<unk>", "<pad>", "a", "b", "c"],
//     "token_freqs": [["a", 2], ["b", 2], ["c", 1]]
//   }
//
// `tokens` is idx_to_token; the inverse map is rebuilt on load.
// Loading goes through Vocab::from_parts, so a hand-edited file
// with a duplicate token or without "<unk>" at index 0 fails.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::traits::Persistable;
use crate::domain::vocab::Vocab;

#[derive(Debug, Serialize, Deserialize)]
struct VocabFile {
    tokens:      Vec<String>,
    token_freqs: Vec<(String, usize)>,
}

impl Persistable for Vocab {
    fn save(&self, path: &str) -> Result<()> {
        let file = VocabFile {
            tokens:      self.tokens().to_vec(),
            token_freqs: self.token_freqs().to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(path, json)
            .with_context(|| format!("Cannot write vocabulary to '{path}'"))?;
        tracing::debug!("Saved vocabulary ({} tokens) to '{}'", self.len(), path);
        Ok(())
    }

    fn load(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read vocabulary '{path}'"))?;
        let file: VocabFile = serde_json::from_str(&json)
            .with_context(|| format!("Cannot parse vocabulary '{path}'"))?;
        let vocab = Vocab::from_parts(file.tokens, file.token_freqs)
            .with_context(|| format!("Vocabulary '{path}' is inconsistent"))?;
        tracing::debug!("Loaded vocabulary ({} tokens) from '{}'", vocab.len(), path);
        Ok(vocab)
    }
}

// ============================================================
// Layer 2 — EncodeUseCase
// ============================================================
// Encodes new text with the vocabulary of an earlier `prepare`
// run, the same way the training records were encoded:
//
//   Step 1: Load vocab.json + pipeline_config.json  (Layer 6)
//   Step 2: Clean and tokenize the text             (Layer 4)
//   Step 3: Look up every token (unknown → 0)       (Layer 3)
//   Step 4: Truncate / pad to pad_length            (Layer 3)
//   Step 5: Reverse lookup of the padded row        (Layer 3)

use anyhow::Result;

use crate::data::preprocessor::Preprocessor;
use crate::domain::{
    padding::truncate_pad,
    traits::Persistable,
    vocab::{Vocab, PAD_TOKEN},
};
use crate::infra::prepared_store::PreparedStore;

/// Result of encoding one piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText {
    /// Cleaned tokens
    pub tokens:  Vec<String>,
    /// One index per token, before padding
    pub ids:     Vec<usize>,
    /// Exactly pad_length indices
    pub padded:  Vec<usize>,
    /// Reverse lookup of `padded`
    pub decoded: Vec<String>,
}

pub struct EncodeUseCase {
    vocab:      Vocab,
    pad_length: usize,
    pad_index:  usize,
    preprocessor: Preprocessor,
}

impl EncodeUseCase {
    /// Load the vocabulary and config saved in `prepared_dir`
    pub fn new(prepared_dir: impl Into<String>) -> Result<Self> {
        let store = PreparedStore::open(prepared_dir)?;
        let config = store.load_config()?;
        config.validate()?;
        let vocab = Vocab::load(&store.vocab_path())?;
        Ok(Self::from_vocab(vocab, config.pad_length))
    }

    pub fn from_vocab(vocab: Vocab, pad_length: usize) -> Self {
        let pad_index = vocab.lookup_one(PAD_TOKEN);
        Self {
            vocab,
            pad_length,
            pad_index,
            preprocessor: Preprocessor::new(),
        }
    }

    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    pub fn encode(&self, text: &str) -> Result<EncodedText> {
        let tokens = self.preprocessor.tokenize(text);
        let ids = self.vocab.lookup_many(&tokens);
        let padded = truncate_pad(&ids, self.pad_length, self.pad_index);
        let decoded = self
            .vocab
            .to_tokens(&padded)?
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(EncodedText {
            tokens,
            ids,
            padded,
            decoded,
        })
    }
}

// ============================================================
// Layer 3 — Vocabulary
// ============================================================
// A deterministic, bidirectional mapping between tokens and
// small non-negative integer indices.
//
// Index layout:
//   0                  → "<unk>" (always)
//   1 ..= R            → reserved tokens, in the order given
//   R+1 ..             → corpus tokens with count >= min_freq,
//                        most frequent first, ties kept in
//                        first-occurrence order
//
// Example (min_freq = 1, reserved = ["<pad>"]):
//   corpus       = [["a","b","a"], ["b","c"]]
//   idx_to_token = ["<unk>", "<pad>", "a", "b", "c"]
//
// Construction stops at the first corpus entry below min_freq.
// Counts are non-increasing after the sort, so every later entry
// is below the threshold as well.
//
// Unknown tokens encode to Vocab::UNK. Decoding an index the
// vocabulary never assigned is an IndexOutOfRange error.
//
// Reference: Rust Book §8 (Vectors, Hash Maps)

use std::collections::HashMap;

use crate::domain::counter::count_corpus;
use crate::domain::error::PipelineError;

/// Marker stored at index 0
pub const UNK_TOKEN: &str = "<unk>";

/// Reserved token used to pad sequences to a fixed length
pub const PAD_TOKEN: &str = "<pad>";

/// Input to [`Vocab::lookup`]: one token or a sequence of tokens.
#[derive(Debug, Clone, Copy)]
pub enum Tokens<'a> {
    Single(&'a str),
    Many(&'a [String]),
}

/// Output of [`Vocab::lookup`], mirroring the shape of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indices {
    Single(usize),
    Many(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocab {
    idx_to_token: Vec<String>,
    token_to_idx: HashMap<String, usize>,
    /// Corpus (token, count) pairs, most frequent first
    token_freqs: Vec<(String, usize)>,
}

impl Vocab {
    /// Index of the unknown-token marker in every vocabulary
    pub const UNK: usize = 0;

    /// Build a vocabulary over `corpus`.
    ///
    /// `min_freq` is an inclusive lower bound on a token's corpus count.
    /// Reserved tokens are placed right after `<unk>`; a reserved token
    /// that also occurs in the corpus keeps its reserved index.
    pub fn new<C, R, T, S>(corpus: C, min_freq: usize, reserved_tokens: &[S]) -> Self
    where
        C: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
        S: AsRef<str>,
    {
        let token_freqs = count_corpus(corpus).sorted_by_freq();

        let mut vocab = Self {
            idx_to_token: Vec::new(),
            token_to_idx: HashMap::new(),
            token_freqs: Vec::new(),
        };

        vocab.push(UNK_TOKEN);
        for token in reserved_tokens {
            vocab.push(token.as_ref());
        }

        for (token, freq) in &token_freqs {
            if *freq < min_freq {
                break;
            }
            vocab.push(token);
        }

        tracing::debug!(
            "Vocabulary built: {} entries ({} distinct corpus tokens, min_freq={})",
            vocab.len(),
            token_freqs.len(),
            min_freq
        );

        vocab.token_freqs = token_freqs;
        vocab
    }

    /// Rebuild a vocabulary from its persisted parts.
    ///
    /// Fails if index 0 is not `<unk>` or a token appears twice.
    pub fn from_parts(
        idx_to_token: Vec<String>,
        token_freqs: Vec<(String, usize)>,
    ) -> Result<Self, PipelineError> {
        match idx_to_token.first() {
            Some(first) if first == UNK_TOKEN => {}
            Some(first) => {
                return Err(PipelineError::InvalidVocab(format!(
                    "index 0 must be {UNK_TOKEN:?}, found {first:?}"
                )))
            }
            None => return Err(PipelineError::InvalidVocab("no tokens".to_string())),
        }

        let mut token_to_idx = HashMap::with_capacity(idx_to_token.len());
        for (idx, token) in idx_to_token.iter().enumerate() {
            if token_to_idx.insert(token.clone(), idx).is_some() {
                return Err(PipelineError::InvalidVocab(format!(
                    "token {token:?} appears more than once"
                )));
            }
        }

        Ok(Self {
            idx_to_token,
            token_to_idx,
            token_freqs,
        })
    }

    /// Append `token` unless it already has an index
    fn push(&mut self, token: &str) {
        if !self.token_to_idx.contains_key(token) {
            self.token_to_idx
                .insert(token.to_string(), self.idx_to_token.len());
            self.idx_to_token.push(token.to_string());
        }
    }

    /// Always [`Vocab::UNK`]
    pub fn unk(&self) -> usize {
        Self::UNK
    }

    pub fn len(&self) -> usize {
        self.idx_to_token.len()
    }

    /// Never true: `<unk>` is always present
    pub fn is_empty(&self) -> bool {
        self.idx_to_token.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.token_to_idx.contains_key(token)
    }

    /// All tokens in index order
    pub fn tokens(&self) -> &[String] {
        &self.idx_to_token
    }

    /// Corpus (token, count) pairs, most frequent first.
    /// Includes tokens that fell below `min_freq`.
    pub fn token_freqs(&self) -> &[(String, usize)] {
        &self.token_freqs
    }

    // ── Encoding ─────────────────────────────────────────────────────────────

    /// Index of `token`, or [`Vocab::UNK`] if it was never added
    pub fn lookup_one(&self, token: &str) -> usize {
        self.token_to_idx.get(token).copied().unwrap_or(Self::UNK)
    }

    /// Encode one record
    pub fn lookup_many<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<usize> {
        tokens.iter().map(|t| self.lookup_one(t.as_ref())).collect()
    }

    /// Encode a list of records, keeping the nesting
    pub fn lookup_batch<R: AsRef<[T]>, T: AsRef<str>>(&self, records: &[R]) -> Vec<Vec<usize>> {
        records.iter().map(|r| self.lookup_many(r.as_ref())).collect()
    }

    /// Encode either a single token or a token sequence
    pub fn lookup(&self, tokens: Tokens<'_>) -> Indices {
        match tokens {
            Tokens::Single(token) => Indices::Single(self.lookup_one(token)),
            Tokens::Many(seq) => Indices::Many(self.lookup_many(seq)),
        }
    }

    // ── Decoding ─────────────────────────────────────────────────────────────

    pub fn to_token(&self, index: usize) -> Result<&str, PipelineError> {
        self.idx_to_token
            .get(index)
            .map(String::as_str)
            .ok_or(PipelineError::IndexOutOfRange {
                index,
                size: self.len(),
            })
    }

    /// Decode a sequence of indices; fails on the first out-of-range index
    pub fn to_tokens(&self, indices: &[usize]) -> Result<Vec<&str>, PipelineError> {
        indices.iter().map(|&i| self.to_token(i)).collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Vec<Vec<&'static str>> {
        vec![vec!["a", "b", "a"], vec!["b", "c"]]
    }

    #[test]
    fn test_layout_unk_reserved_then_by_frequency() {
        let vocab = Vocab::new(&sample_corpus(), 1, &[PAD_TOKEN]);
        assert_eq!(vocab.tokens(), ["<unk>", "<pad>", "a", "b", "c"]);
        assert_eq!(vocab.lookup_one("a"), 2);
        assert_eq!(vocab.lookup_one("z"), 0);
        assert_eq!(vocab.lookup_one(PAD_TOKEN), 1);
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_threshold_above_every_count() {
        let vocab = Vocab::new(&sample_corpus(), 3, &[PAD_TOKEN]);
        assert_eq!(vocab.tokens(), ["<unk>", "<pad>"]);
    }

    #[test]
    fn test_threshold_stops_at_first_rare_token() {
        let vocab = Vocab::new(&sample_corpus(), 2, &[PAD_TOKEN]);
        assert_eq!(vocab.tokens(), ["<unk>", "<pad>", "a", "b"]);
        assert_eq!(vocab.lookup_one("c"), Vocab::UNK);
    }

    #[test]
    fn test_empty_corpus_keeps_reserved() {
        let corpus: Vec<Vec<String>> = Vec::new();
        let vocab = Vocab::new(&corpus, 1, &["<pad>", "<bos>"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.to_token(0).unwrap(), UNK_TOKEN);
    }

    #[test]
    fn test_no_reserved_tokens() {
        let none: [&str; 0] = [];
        let vocab = Vocab::new(&sample_corpus(), 1, &none);
        assert_eq!(vocab.tokens(), ["<unk>", "a", "b", "c"]);
    }

    #[test]
    fn test_reserved_token_in_corpus_is_not_duplicated() {
        let corpus = vec![vec!["b", "b", "a"]];
        let vocab = Vocab::new(&corpus, 1, &["b", "b", "<unk>"]);
        assert_eq!(vocab.tokens(), ["<unk>", "b", "a"]);
        assert_eq!(vocab.lookup_one("b"), 1);
    }

    #[test]
    fn test_every_index_round_trips() {
        let corpus = vec![
            vec!["the", "cat", "sat"],
            vec!["on", "the", "mat"],
            vec!["the", "end"],
        ];
        let vocab = Vocab::new(&corpus, 1, &[PAD_TOKEN]);
        for i in 0..vocab.len() {
            let token = vocab.to_token(i).unwrap();
            assert_eq!(vocab.lookup_one(token), i);
        }
    }

    #[test]
    fn test_size_formula() {
        // 1 (unk) + 1 (pad) + distinct tokens with count >= 2
        let corpus = vec![vec!["x", "y", "x"], vec!["y", "z", "w", "x"]];
        let vocab = Vocab::new(&corpus, 2, &[PAD_TOKEN]);
        assert_eq!(vocab.len(), 1 + 1 + 2);
    }

    #[test]
    fn test_raising_min_freq_never_grows_vocab() {
        let corpus = vec![
            vec!["a", "a", "a", "b", "b", "c"],
            vec!["d", "a", "b", "e", "e"],
        ];
        let mut last = usize::MAX;
        for min_freq in 1..=6 {
            let size = Vocab::new(&corpus, min_freq, &[PAD_TOKEN]).len();
            assert!(size <= last, "min_freq={min_freq} grew the vocabulary");
            last = size;
        }
    }

    #[test]
    fn test_lookup_shapes() {
        let vocab = Vocab::new(&sample_corpus(), 1, &[PAD_TOKEN]);
        let seq = vec!["c".to_string(), "q".to_string(), "a".to_string()];

        assert_eq!(vocab.lookup(Tokens::Single("b")), Indices::Single(3));
        assert_eq!(vocab.lookup(Tokens::Many(&seq)), Indices::Many(vec![4, 0, 2]));
        assert_eq!(
            vocab.lookup_batch(&[vec!["a", "b"], vec![], vec!["zz"]]),
            vec![vec![2, 3], vec![], vec![0]]
        );
    }

    #[test]
    fn test_reverse_lookup() {
        let vocab = Vocab::new(&sample_corpus(), 1, &[PAD_TOKEN]);
        assert_eq!(vocab.to_tokens(&[2, 4, 1]).unwrap(), vec!["a", "c", "<pad>"]);
        assert_eq!(
            vocab.to_tokens(&[2, 5]),
            Err(PipelineError::IndexOutOfRange { index: 5, size: 5 })
        );
    }

    #[test]
    fn test_unknown_index_is_zero() {
        let vocab = Vocab::new(&sample_corpus(), 1, &[PAD_TOKEN]);
        assert_eq!(vocab.unk(), 0);
        assert_eq!(vocab.to_token(vocab.unk()).unwrap(), UNK_TOKEN);
    }

    #[test]
    fn test_from_parts_validates() {
        let vocab = Vocab::new(&sample_corpus(), 1, &[PAD_TOKEN]);
        let rebuilt =
            Vocab::from_parts(vocab.tokens().to_vec(), vocab.token_freqs().to_vec()).unwrap();
        assert_eq!(rebuilt, vocab);

        let bad_head = Vocab::from_parts(vec!["a".into(), "<unk>".into()], Vec::new());
        assert!(matches!(bad_head, Err(PipelineError::InvalidVocab(_))));

        let dup = Vocab::from_parts(vec!["<unk>".into(), "a".into(), "a".into()], Vec::new());
        assert!(matches!(dup, Err(PipelineError::InvalidVocab(_))));

        assert!(Vocab::from_parts(Vec::new(), Vec::new()).is_err());
    }
}

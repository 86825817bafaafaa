// ============================================================
// Layer 6 — Dataset Statistics
// ============================================================
// Summarises one preparation run so the chosen min_freq and
// pad_length can be judged at a glance.
//
// Recorded per run:
//   - records / train_records / test_records
//   - vocab_size:        entries in the vocabulary
//   - distinct_tokens:   distinct tokens in the cleaned corpus
//   - total_tokens:      token occurrences in the corpus
//   - unk_tokens:        occurrences that encode to <unk>
//                        (tokens below min_freq)
//   - truncated_records: records longer than pad_length
//   - mean_length / max_length: tokens per record before padding
//   - class_counts:      records per label index
//
// How to read them:
//   - A high unk_tokens / total_tokens ratio → min_freq is too
//     aggressive for this corpus
//   - Many truncated_records → pad_length cuts off content
//
// Output file: <out_dir>/stats.json
//
// Reference: serde_json crate documentation

use serde::{Deserialize, Serialize};

use crate::domain::vocab::Vocab;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub records:           usize,
    pub train_records:     usize,
    pub test_records:      usize,
    pub vocab_size:        usize,
    pub distinct_tokens:   usize,
    pub total_tokens:      usize,
    pub unk_tokens:        usize,
    pub truncated_records: usize,
    pub mean_length:       f64,
    pub max_length:        usize,
    pub class_counts:      Vec<usize>,
}

impl DatasetStats {
    /// Gather statistics over the tokenized corpus and its labels.
    /// Split sizes are filled in by the caller once the split is made.
    pub fn collect(
        vocab:       &Vocab,
        corpus:      &[Vec<String>],
        labels:      &[usize],
        pad_length:  usize,
        num_classes: usize,
    ) -> Self {
        let total_tokens: usize = corpus.iter().map(Vec::len).sum();

        let unk_tokens = corpus
            .iter()
            .flatten()
            .filter(|t| vocab.lookup_one(t) == Vocab::UNK)
            .count();

        let mut class_counts = vec![0usize; num_classes];
        for &label in labels {
            if label >= class_counts.len() {
                class_counts.resize(label + 1, 0);
            }
            class_counts[label] += 1;
        }

        Self {
            records:           corpus.len(),
            train_records:     corpus.len(),
            test_records:      0,
            vocab_size:        vocab.len(),
            distinct_tokens:   vocab.token_freqs().len(),
            total_tokens,
            unk_tokens,
            truncated_records: corpus.iter().filter(|r| r.len() > pad_length).count(),
            mean_length:       total_tokens as f64 / corpus.len().max(1) as f64,
            max_length:        corpus.iter().map(Vec::len).max().unwrap_or(0),
            class_counts,
        }
    }

    /// Share of token occurrences that encode to <unk>
    pub fn unk_rate(&self) -> f64 {
        self.unk_tokens as f64 / self.total_tokens.max(1) as f64
    }

    pub fn log(&self) {
        tracing::info!(
            "Dataset: {} records ({} train / {} test), vocab={}, distinct tokens={}",
            self.records,
            self.train_records,
            self.test_records,
            self.vocab_size,
            self.distinct_tokens,
        );
        tracing::info!(
            "Tokens: total={}, unk={} ({:.2}%), mean length={:.1}, max length={}, truncated records={}",
            self.total_tokens,
            self.unk_tokens,
            self.unk_rate() * 100.0,
            self.mean_length,
            self.max_length,
            self.truncated_records,
        );
        tracing::debug!("Class counts: {:?}", self.class_counts);
    }
}

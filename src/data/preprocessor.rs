// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans raw review/sentence text before it reaches the
// vocabulary, then splits it on whitespace.
//
// Cleaning steps (applied in order):
//   1. Lowercase
//   2. Keep letters, digits and apostrophes
//   3. Pad the punctuation marks , ! ? ( ) with spaces so each
//      becomes its own token
//   4. Anything else becomes a space
//   5. Split English contractions off their stem:
//        don't → do n't     it's → it 's     we'll → we 'll
//   6. Collapse whitespace runs and trim
//
// Example:
//   "Don't STOP, it's great!!"
//   → "do n't stop , it 's great ! !"
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

/// Punctuation kept as standalone tokens
const KEPT_PUNCTUATION: [char; 5] = [',', '!', '?', '(', ')'];

/// Contraction suffixes split off their stem, longest match first
const CONTRACTIONS: [&str; 6] = ["n't", "'ve", "'re", "'ll", "'s", "'d"];

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw text string for tokenisation.
    pub fn clean(&self, text: &str) -> String {
        // ── Steps 1-4: character level ────────────────────────────────────────
        let mut spaced = String::with_capacity(text.len());
        for c in text.chars().flat_map(char::to_lowercase) {
            if c.is_alphanumeric() || c == '\'' {
                spaced.push(c);
            } else if KEPT_PUNCTUATION.contains(&c) {
                spaced.push(' ');
                spaced.push(c);
                spaced.push(' ');
            } else {
                spaced.push(' ');
            }
        }

        // ── Steps 5-6: word level ─────────────────────────────────────────────
        let mut words: Vec<&str> = Vec::new();
        for word in spaced.split_whitespace() {
            match split_contraction(word) {
                Some((stem, suffix)) => {
                    words.push(stem);
                    words.push(suffix);
                }
                None => words.push(word),
            }
        }
        words.join(" ")
    }

    /// Clean `text` and split it into tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.clean(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// "don't" → ("do", "n't"). Bare suffixes like "'s" are left alone.
fn split_contraction(word: &str) -> Option<(&str, &str)> {
    CONTRACTIONS.iter().find_map(|suffix| {
        word.strip_suffix(suffix)
            .filter(|stem| !stem.is_empty())
            .map(|stem| (stem, &word[stem.len()..]))
    })
}

// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles encoded records with a seeded RNG and holds out a
// fraction of them as a test set.
//
//   test_fraction = 0.0  → no shuffle, everything is training
//   test_fraction = 0.4  → 60% train / 40% test
//
// The same seed always produces the same split, so a prepared
// dataset can be rebuilt exactly.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: rand crate documentation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Shuffle `samples` and split into (train, test).
///
/// # Arguments
/// * `samples`       - All encoded samples (consumed)
/// * `test_fraction` - Proportion held out, in [0.0, 1.0)
/// * `seed`          - RNG seed for the shuffle
pub fn split_train_test<T>(mut samples: Vec<T>, test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    if test_fraction <= 0.0 {
        return (samples, Vec::new());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total    = samples.len();
    let n_test   = ((total as f64) * test_fraction).round() as usize;
    let split_at = total - n_test.min(total);

    // split_off(n) leaves [0..n) in samples and returns [n..total)
    let test = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} train, {} test (seed={})",
        samples.len(),
        test.len(),
        seed,
    );

    (samples, test)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test) = split_train_test(items, 0.4, 100);
        assert_eq!(train.len(), 60);
        assert_eq!(test.len(),  40);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize> = (0..50).collect();
        let (train, test) = split_train_test(items, 0.3, 1);
        let mut all: Vec<usize> = train.into_iter().chain(test).collect();
        all.sort();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_test((0..30).collect::<Vec<usize>>(), 0.5, 42);
        let b = split_train_test((0..30).collect::<Vec<usize>>(), 0.5, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_fraction_keeps_order() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test) = split_train_test(items, 0.0, 3);
        assert_eq!(train, (0..10).collect::<Vec<_>>());
        assert!(test.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let (train, test) = split_train_test(Vec::<usize>::new(), 0.2, 0);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }
}

// ============================================================
// Layer 3 — Sequence Padder
// ============================================================
// Forces an encoded record to an exact length so every row of
// the dataset matrix has the same width.
//
//   longer than pad_length  → keep the first pad_length indices
//   otherwise               → right-pad with padding_index
//
// Examples (padding_index = 1):
//   [2,3,4]       , 5 → [2,3,4,1,1]
//   [2,3,4,5,6]   , 3 → [2,3,4]
//   anything      , 0 → []
//
// Reference: Rust Book §8 (Vectors and Slices)

/// Truncate or right-pad `indices` to exactly `pad_length` entries.
/// The input is left untouched.
pub fn truncate_pad(indices: &[usize], pad_length: usize, padding_index: usize) -> Vec<usize> {
    if indices.len() > pad_length {
        return indices[..pad_length].to_vec();
    }
    let mut padded = Vec::with_capacity(pad_length);
    padded.extend_from_slice(indices);
    padded.resize(pad_length, padding_index);
    padded
}

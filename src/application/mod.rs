// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal each (preparing a dataset, encoding new text).
//
// Rules for this layer:
//   - No vocabulary or padding logic here (that's Layer 3)
//   - No printing here (that's Layer 1)
//   - No direct file formats (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dataset preparation workflow
pub mod prepare_use_case;

// Encoding new text with a saved vocabulary
pub mod encode_use_case;

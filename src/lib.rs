// ============================================================
// textprep — library root
// ============================================================
// Layers, outermost first:
//   cli          (L1)  clap commands used by the binary
//   application  (L2)  prepare / encode use cases
//   domain       (L3)  counter, vocabulary, padder, errors
//   data         (L4)  CSV loading, cleaning, labels, burn data
//   infra        (L6)  persistence and run statistics
//
// The binary in main.rs only wires logging and dispatches the CLI;
// everything else is usable as a library.

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use application::prepare_use_case::{PipelineConfig, PrepareUseCase, PreparedData};
pub use domain::error::PipelineError;
pub use domain::vocab::{Indices, Tokens, Vocab};

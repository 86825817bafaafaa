// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — builds vocabulary + batched dataset from CSV
//   2. `encode`  — encodes text with a saved vocabulary
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use burn::backend::{ndarray::NdArrayDevice, NdArray};
use clap::Parser;
use commands::{Commands, EncodeArgs, PrepareArgs};

use crate::application::prepare_use_case::PipelineConfig;

#[derive(Parser, Debug)]
#[command(
    name = "textprep",
    version = "0.1.0",
    about = "Build a vocabulary and padded, batched datasets from labeled text."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Encode(args)  => run_encode(args),
        }
    }
}

/// Handles the `prepare` subcommand.
/// Runs the pipeline, then walks the training batches once.
fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    let config = match args.config.clone() {
        Some(path) => PipelineConfig::from_json_file(&path)?,
        None       => args.into(),
    };
    tracing::info!("Preparing dataset from: {}", config.data_path);

    let device = NdArrayDevice::default();
    let prepared = PrepareUseCase::new(config).execute::<NdArray>(&device)?;

    let mut batches = 0usize;
    let mut samples = 0usize;
    for batch in prepared.train.iter() {
        if batches == 0 {
            tracing::info!(
                "First batch: tokens {:?}, labels {:?}",
                batch.tokens.dims(),
                batch.labels.dims()
            );
        }
        batches += 1;
        samples += batch.labels.dims()[0];
    }

    println!("Vocabulary size: {}", prepared.vocab.len());
    println!("Classes:         {:?}", prepared.classes);
    println!("Train:           {} samples in {} batches", samples, batches);
    if let Some(test) = &prepared.test {
        println!("Test:            {} batches", test.iter().count());
    }
    println!("Unknown tokens:  {:.2}%", prepared.stats.unk_rate() * 100.0);
    Ok(())
}

/// Handles the `encode` subcommand.
fn run_encode(args: EncodeArgs) -> Result<()> {
    use crate::application::encode_use_case::EncodeUseCase;

    let use_case = EncodeUseCase::new(args.prepared_dir)?;
    let encoded = use_case.encode(&args.text)?;

    println!("Tokens:  {:?}", encoded.tokens);
    println!("Indices: {:?}", encoded.padded);
    println!("Decoded: {}", encoded.decoded.join(" "));
    Ok(())
}

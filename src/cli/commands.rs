// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `encode`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::prepare_use_case::PipelineConfig;
use crate::data::labels::LabelScheme;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary and batched dataset from a CSV file
    Prepare(PrepareArgs),

    /// Encode text with the vocabulary of an earlier `prepare` run
    Encode(EncodeArgs),
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// CSV file with `Text` and `Label` columns
    #[arg(long, default_value = "data/train.csv")]
    pub data_path: String,

    /// Minimum corpus count (inclusive) for a token to get its own index
    #[arg(long, default_value_t = 1)]
    pub min_freq: usize,

    /// Every record is truncated or padded to this many tokens
    #[arg(long, default_value_t = 64)]
    pub pad_length: usize,

    /// Records per batch
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Fraction of records held out as a test set
    #[arg(long, default_value_t = 0.0)]
    pub test_fraction: f64,

    /// Seed for the split and the per-epoch shuffle
    #[arg(long, default_value_t = 100)]
    pub seed: u64,

    /// Data loader worker threads
    #[arg(long, default_value_t = 1)]
    pub num_workers: usize,

    /// Ordered class names, e.g. `--classes negative,positive`.
    /// Without this (or --discover-labels) labels must be integers.
    #[arg(long, value_delimiter = ',', conflicts_with = "discover_labels")]
    pub classes: Option<Vec<String>>,

    /// Assign class indices in the order labels first appear
    #[arg(long)]
    pub discover_labels: bool,

    /// Directory to save vocab.json, pipeline_config.json and stats.json
    #[arg(long)]
    pub out_dir: Option<String>,

    /// Read the whole configuration from a JSON file instead of flags
    #[arg(
        long,
        conflicts_with_all = [
            "data_path", "min_freq", "pad_length", "batch_size", "test_fraction",
            "seed", "num_workers", "classes", "discover_labels", "out_dir",
        ]
    )]
    pub config: Option<String>,
}

/// Convert CLI PrepareArgs into the application-layer PipelineConfig.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PipelineConfig {
    fn from(a: PrepareArgs) -> Self {
        let labels = match (a.classes, a.discover_labels) {
            (Some(classes), _) => LabelScheme::Classes(classes),
            (None, true)       => LabelScheme::Discover,
            (None, false)      => LabelScheme::Numeric,
        };
        PipelineConfig {
            data_path:     a.data_path,
            min_freq:      a.min_freq,
            pad_length:    a.pad_length,
            batch_size:    a.batch_size,
            test_fraction: a.test_fraction,
            seed:          a.seed,
            num_workers:   a.num_workers,
            labels,
            out_dir:       a.out_dir,
        }
    }
}

/// All arguments for the `encode` command
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to encode
    #[arg(long)]
    pub text: String,

    /// Output directory of the `prepare` run
    #[arg(long, default_value = "prepared")]
    pub prepared_dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn prepare_config(args: &[&str]) -> PipelineConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Prepare(a) => a.into(),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = prepare_config(&["textprep", "prepare"]);
        assert_eq!(cfg.min_freq, 1);
        assert_eq!(cfg.pad_length, 64);
        assert_eq!(cfg.batch_size, 32);
        assert_eq!(cfg.labels, LabelScheme::Numeric);
        assert!(cfg.out_dir.is_none());
    }

    #[test]
    fn test_config_file_excludes_other_flags() {
        let err = Cli::try_parse_from([
            "textprep", "prepare", "--config", "run.json", "--pad-length", "10",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let cli = Cli::try_parse_from(["textprep", "prepare", "--config", "run.json"]).unwrap();
        match cli.command {
            Commands::Prepare(a) => assert_eq!(a.config.as_deref(), Some("run.json")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_class_list() {
        let cfg = prepare_config(&[
            "textprep", "prepare", "--data-path", "r.csv", "--classes", "neg,pos", "--pad-length", "10",
        ]);
        assert_eq!(cfg.data_path, "r.csv");
        assert_eq!(cfg.pad_length, 10);
        assert_eq!(cfg.labels, LabelScheme::Classes(vec!["neg".into(), "pos".into()]));
    }

    #[test]
    fn test_classes_conflict_with_discover() {
        let parsed = Cli::try_parse_from([
            "textprep", "prepare", "--classes", "a,b", "--discover-labels",
        ]);
        assert!(parsed.is_err());
    }
}

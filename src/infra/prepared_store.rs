// ============================================================
// Layer 6 — Prepared Store
// ============================================================
// The output directory of a preparation run:
//
//   <out_dir>/
//     vocab.json            ← token list + corpus frequencies
//     pipeline_config.json  ← the PipelineConfig that built it
//     stats.json            ← DatasetStats of the run
//
// The `encode` command reads vocab.json and the config back so
// new text is cleaned, encoded and padded exactly like the
// training data was.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::prepare_use_case::PipelineConfig;
use crate::infra::stats::DatasetStats;

pub struct PreparedStore {
    dir: PathBuf,
}

impl PreparedStore {
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open an existing output directory without creating it
    pub fn open(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());
        anyhow::ensure!(
            dir.is_dir(),
            "Prepared directory '{}' does not exist",
            dir.display()
        );
        Ok(Self { dir })
    }

    pub fn vocab_path(&self) -> String {
        self.dir.join("vocab.json").to_string_lossy().into_owned()
    }

    pub fn save_config(&self, cfg: &PipelineConfig) -> Result<()> {
        let path = self.dir.join("pipeline_config.json");
        fs::write(&path, serde_json::to_string_pretty(cfg)?)
            .with_context(|| format!("Cannot write '{}'", path.display()))
    }

    pub fn load_config(&self) -> Result<PipelineConfig> {
        let path = self.dir.join("pipeline_config.json");
        PipelineConfig::from_json_file(&path.to_string_lossy())
    }

    pub fn save_stats(&self, stats: &DatasetStats) -> Result<()> {
        let path = self.dir.join("stats.json");
        fs::write(&path, serde_json::to_string_pretty(stats)?)
            .with_context(|| format!("Cannot write '{}'", path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::labels::LabelScheme;

    #[test]
    fn test_config_round_trip() {
        let dir = std::env::temp_dir().join(format!("textprep_store_{}", std::process::id()));
        let store = PreparedStore::new(dir.to_string_lossy()).unwrap();

        let cfg = PipelineConfig {
            data_path: "reviews.csv".to_string(),
            labels: LabelScheme::Classes(vec!["neg".into(), "pos".into()]),
            ..Default::default()
        };
        store.save_config(&cfg).unwrap();
        let loaded = PreparedStore::open(dir.to_string_lossy()).unwrap().load_config().unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_open_missing_dir_fails() {
        assert!(PreparedStore::open("/no/such/prepared/dir").is_err());
    }
}

// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates a full dataset preparation run in order:
//
//   Step 1: Reset the output tree          (infra::layout)
//   Step 2: Caption pipeline               (CaptionsUseCase)
//   Step 3: Scan *.jpg + read the lists    (data::loader)
//   Step 4: Partition the image paths      (data::splitter)
//   Step 5: Normalize + write per split    (imaging)
//   Step 6: Write manifest.json            (infra::manifest)
//
// Everything is sequential. Images stream through one at a
// time: each is normalized and written before the next is
// decoded. The first failure aborts the run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::captions_use_case::CaptionsUseCase;
use crate::data::{
    loader::{list_images, load_partition_sets},
    splitter::partition_images,
};
use crate::domain::{partition::Partition, traits::ImageNormalizer};
use crate::imaging::writer::ImageWriter;
use crate::infra::{layout::OutputLayout, manifest::RunManifest, progress};

// Default locations of the Flickr8k release files
pub const DEFAULT_CAPTIONS_FILE:        &str = "./data/raw/Flickr8k.token.txt";
pub const DEFAULT_IMAGES_DIR:           &str = "./data/raw/Flicker8k_Dataset";
pub const DEFAULT_OUTPUT_CAPTIONS_FILE: &str = "./data/processed/captions.txt";
pub const DEFAULT_OUTPUT_IMAGES_DIR:    &str = "./data/processed/images";
pub const DEFAULT_TRAIN_LIST:           &str = "./data/raw/Flickr_8k.trainImages.txt";
pub const DEFAULT_VAL_LIST:             &str = "./data/raw/Flickr_8k.devImages.txt";
pub const DEFAULT_TEST_LIST:            &str = "./data/raw/Flickr_8k.testImages.txt";

// ─── Configuration ───────────────────────────────────────────────────────────
// Every path the run reads or writes. Serialisable so it can be
// loaded from a JSON file and recorded in the run manifest.
// Missing JSON fields fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareConfig {
    pub captions_file:        PathBuf,
    pub images_dir:           PathBuf,
    pub output_captions_file: PathBuf,
    pub output_images_dir:    PathBuf,
    pub train_list:           PathBuf,
    pub val_list:             PathBuf,
    pub test_list:            PathBuf,
    pub show_progress:        bool,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            captions_file:        DEFAULT_CAPTIONS_FILE.into(),
            images_dir:           DEFAULT_IMAGES_DIR.into(),
            output_captions_file: DEFAULT_OUTPUT_CAPTIONS_FILE.into(),
            output_images_dir:    DEFAULT_OUTPUT_IMAGES_DIR.into(),
            train_list:           DEFAULT_TRAIN_LIST.into(),
            val_list:             DEFAULT_VAL_LIST.into(),
            test_list:            DEFAULT_TEST_LIST.into(),
            show_progress:        true,
        }
    }
}

impl PrepareConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config JSON in '{}'", path.display()))
    }

    /// Output tree described by this configuration
    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.output_images_dir, &self.output_captions_file)
    }
}

// ─── Run statistics ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionStats {
    /// Distinct image identifiers in the captions file
    pub identifiers: usize,
    /// Lines written (one per caption)
    pub captions: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStats {
    pub train: usize,
    pub val:   usize,
    pub test:  usize,
    /// Scanned images listed in none of the membership files
    pub unlisted: usize,
}

impl ImageStats {
    fn record(&mut self, partition: Partition, written: usize) {
        match partition {
            Partition::Train => self.train = written,
            Partition::Val   => self.val = written,
            Partition::Test  => self.test = written,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareReport {
    pub captions: CaptionStats,
    pub images:   ImageStats,
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
// Owns the config and the image normalizer; runs the whole pipeline.
pub struct PrepareUseCase<N> {
    config:     PrepareConfig,
    normalizer: N,
}

impl<N: ImageNormalizer> PrepareUseCase<N> {
    pub fn new(config: PrepareConfig, normalizer: N) -> Self {
        Self { config, normalizer }
    }

    /// Execute the full preparation run end to end
    pub fn execute(&self) -> Result<PrepareReport> {
        let layout = self.config.layout();

        // ── Step 1: Start from an empty output tree ───────────────────────────
        layout.reset()?;

        // ── Step 2: Captions ──────────────────────────────────────────────────
        let captions = CaptionsUseCase::new(self.config.clone()).run_pipeline()?;

        // ── Steps 3-5: Images ─────────────────────────────────────────────────
        let images = self.prepare_images(&layout)?;

        // ── Step 6: Record what was produced ──────────────────────────────────
        let report   = PrepareReport { captions, images };
        let manifest = RunManifest::new(self.config.clone(), report.clone());
        manifest.save(layout.images_dir())?;

        Ok(report)
    }

    fn prepare_images(&self, layout: &OutputLayout) -> Result<ImageStats> {
        let cfg = &self.config;
        tracing::info!("Preprocessing images from '{}'", cfg.images_dir.display());

        // ── Step 3: Scan + membership lists ───────────────────────────────────
        let images = list_images(&cfg.images_dir)?;
        let sets   = load_partition_sets(&cfg.train_list, &cfg.val_list, &cfg.test_list)?;

        // ── Step 4: Partition ─────────────────────────────────────────────────
        let partitions = partition_images(images, &sets);
        tracing::info!(
            "Split: {} train, {} val, {} test ({} unlisted)",
            partitions.train.len(),
            partitions.val.len(),
            partitions.test.len(),
            partitions.dropped,
        );

        // ── Step 5: Normalize and write, one partition at a time ──────────────
        let mut stats = ImageStats { unlisted: partitions.dropped, ..ImageStats::default() };

        for partition in Partition::ALL {
            let paths  = partitions.get(partition);
            let writer = ImageWriter::new(layout.partition_dir(partition));
            let bar    = progress::stage_bar(
                paths.len() as u64,
                &format!("Processing {partition} images"),
                cfg.show_progress,
            );

            tracing::info!("Saving {} images...", partition);
            let normalized = paths.iter().map(|path| {
                self.normalizer
                    .normalize(path)
                    .map(|image| (path.clone(), image))
            });
            let written = writer.write_all(normalized, &bar)?;

            stats.record(partition, written);
        }

        Ok(stats)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_config_uses_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("prep.json");
        fs::write(&path, r#"{ "images_dir": "/photos", "show_progress": false }"#).unwrap();

        let cfg = PrepareConfig::load(&path).unwrap();
        assert_eq!(cfg.images_dir, PathBuf::from("/photos"));
        assert!(!cfg.show_progress);
        assert_eq!(cfg.captions_file, PathBuf::from(DEFAULT_CAPTIONS_FILE));
    }

    #[test]
    fn test_invalid_json_config() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("prep.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(PrepareConfig::load(&path).is_err());
    }

    #[test]
    fn test_config_json_roundtrip() {
        let cfg  = PrepareConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PrepareConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}

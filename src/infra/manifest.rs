// ============================================================
// Layer 6 — Run Manifest
// ============================================================
// After a full run, records the effective configuration and
// the produced counts next to the images:
//
//   <output_images_dir>/manifest.json
//   {
//     "config": { "captions_file": "...", ... },
//     "report": {
//       "captions": { "identifiers": 8092, "captions": 40460 },
//       "images":   { "train": 6000, "val": 1000, "test": 1000, "unlisted": 91 }
//     }
//   }
//
// The manifest lives inside the image tree, so the next run's
// reset removes it together with the images.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::prepare_use_case::{PrepareConfig, PrepareReport};

/// File name of the manifest inside the output image directory
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub config: PrepareConfig,
    pub report: PrepareReport,
}

impl RunManifest {
    pub fn new(config: PrepareConfig, report: PrepareReport) -> Self {
        Self { config, report }
    }

    /// Write the manifest as pretty JSON into `dir`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::debug!("Saved run manifest to '{}'", path.display());
        Ok(path)
    }

    /// Read a manifest previously written into `dir` by [`RunManifest::save`].
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read manifest '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid manifest JSON in '{}'", path.display()))
    }
}

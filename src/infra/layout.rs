// ============================================================
// Layer 6 — Output Layout
// ============================================================
// Owns the on-disk shape of a prepared dataset:
//
//   <output_captions_file>          captions.txt
//   <output_images_dir>/
//       train/  val/  test/         normalized images
//       manifest.json               run summary
//
// Every run starts from scratch: `reset` deletes the whole image
// tree and the captions file, then recreates the three
// partition directories.
//
// Why delete instead of overwrite?
//   A membership list may change between runs. An image that
//   moved from val to test would otherwise stay behind in val/,
//   and the same photo would end up in two partitions.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::partition::Partition;

#[derive(Debug, Clone)]
pub struct OutputLayout {
    images_dir:    PathBuf,
    captions_file: PathBuf,
}

impl OutputLayout {
    pub fn new(images_dir: impl Into<PathBuf>, captions_file: impl Into<PathBuf>) -> Self {
        Self {
            images_dir:    images_dir.into(),
            captions_file: captions_file.into(),
        }
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn captions_file(&self) -> &Path {
        &self.captions_file
    }

    /// Directory holding the images of one partition
    pub fn partition_dir(&self, partition: Partition) -> PathBuf {
        self.images_dir.join(partition.dir_name())
    }

    /// Wipe all previous output and create empty partition directories.
    pub fn reset(&self) -> Result<()> {
        tracing::info!("Cleaning up the output directories...");
        if self.images_dir.exists() {
            fs::remove_dir_all(&self.images_dir).with_context(|| {
                format!("Cannot remove '{}'", self.images_dir.display())
            })?;
        }
        self.remove_captions_file()?;

        tracing::info!("Creating output directories...");
        for partition in Partition::ALL {
            let dir = self.partition_dir(partition);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Cannot create '{}'", dir.display()))?;
        }
        self.ensure_captions_parent()
    }

    /// Remove only the captions file (used by the captions-only run).
    pub fn reset_captions(&self) -> Result<()> {
        self.remove_captions_file()?;
        self.ensure_captions_parent()
    }

    fn remove_captions_file(&self) -> Result<()> {
        if self.captions_file.exists() {
            fs::remove_file(&self.captions_file).with_context(|| {
                format!("Cannot remove '{}'", self.captions_file.display())
            })?;
        }
        Ok(())
    }

    fn ensure_captions_parent(&self) -> Result<()> {
        match self.captions_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display())),
            _ => Ok(()),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_wipes_previous_output() {
        let root   = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(root.path().join("images"), root.path().join("captions.txt"));

        fs::create_dir_all(root.path().join("images/train")).unwrap();
        fs::write(root.path().join("images/train/old.jpg"), b"x").unwrap();
        fs::write(root.path().join("images/stray.txt"), b"x").unwrap();
        fs::write(root.path().join("captions.txt"), b"old").unwrap();

        layout.reset().unwrap();

        assert!(!root.path().join("captions.txt").exists());
        assert!(!root.path().join("images/stray.txt").exists());
        for p in Partition::ALL {
            let dir = layout.partition_dir(p);
            assert!(dir.is_dir());
            assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        }
    }

    #[test]
    fn test_reset_on_fresh_tree() {
        let root   = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(
            root.path().join("processed/images"),
            root.path().join("processed/captions.txt"),
        );
        layout.reset().unwrap();
        assert!(root.path().join("processed/images/val").is_dir());
    }

    #[test]
    fn test_reset_captions_keeps_images() {
        let root   = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(root.path().join("images"), root.path().join("captions.txt"));
        layout.reset().unwrap();
        fs::write(layout.partition_dir(Partition::Test).join("k.jpg"), b"x").unwrap();
        fs::write(layout.captions_file(), b"old").unwrap();

        layout.reset_captions().unwrap();

        assert!(!layout.captions_file().exists());
        assert!(layout.partition_dir(Partition::Test).join("k.jpg").exists());
    }
}

// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// File-system reads for the raw dataset:
//
//   load_doc            — whole caption file as one String
//   split_lines         — universal-newline line iterator
//   read_membership     — one bare filename per line → HashSet
//   load_partition_sets — the three membership files at once
//   list_images         — every *.jpg directly inside a folder
//
// A missing or unreadable file is fatal: the error carries the
// offending path and propagates up to main.

use anyhow::{bail, Context, Result};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::domain::partition::PartitionSets;

/// Extension matched by the image scan (the `*.jpg` glob)
pub const IMAGE_EXTENSION: &str = "jpg";

/// Read an entire text file into memory.
pub fn load_doc(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))
}

/// Iterate the lines of `text`, treating `"\r\n"`, `"\r"` and `"\n"`
/// all as line breaks. A trailing break yields a final empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Read a membership list: one bare filename per line.
/// Lines are trimmed and blank lines ignored.
pub fn read_membership(path: &Path) -> Result<HashSet<String>> {
    let text = load_doc(path)?;
    let names: HashSet<String> = split_lines(&text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!("Read {} names from '{}'", names.len(), path.display());
    Ok(names)
}

/// Load the train, validation, and test membership lists.
pub fn load_partition_sets(train: &Path, val: &Path, test: &Path) -> Result<PartitionSets> {
    Ok(PartitionSets::new(
        read_membership(train)?,
        read_membership(val)?,
        read_membership(test)?,
    ))
}

/// List every `.jpg` file directly inside `dir`.
///
/// Hidden files are skipped, matching shell glob semantics.
/// The result is sorted by path so runs are reproducible
/// regardless of directory enumeration order.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Image directory '{}' does not exist", dir.display());
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory '{}'", dir.display()))?
    {
        let entry = entry?;
        let path  = entry.path();

        if !path.is_file() {
            continue;
        }

        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(true, |n| n.starts_with('.'));
        if hidden {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) == Some(IMAGE_EXTENSION) {
            images.push(path);
        }
    }

    images.sort();
    tracing::info!("Found {} images in '{}'", images.len(), dir.display());
    Ok(images)
}

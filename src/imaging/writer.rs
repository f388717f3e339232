// ============================================================
// Layer 5 — Image Writer
// ============================================================
// Stores normalized images in one partition directory:
//
//   /raw/Flicker8k_Dataset/123_abc.jpg
//        → <dest>/123_abc.jpg
//
// The encoder is chosen from the file extension. Existing files
// with the same name are overwritten.

use anyhow::{anyhow, Context, Result};
use image::RgbImage;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// Writes images into a single destination directory.
#[derive(Debug, Clone)]
pub struct ImageWriter {
    dest: PathBuf,
}

impl ImageWriter {
    pub fn new(dest: impl Into<PathBuf>) -> Self {
        Self { dest: dest.into() }
    }

    /// Save `image` under the base name of `source`.
    /// Returns the path that was written.
    pub fn write(&self, source: &Path, image: &RgbImage) -> Result<PathBuf> {
        let name = source
            .file_name()
            .ok_or_else(|| anyhow!("'{}' has no file name", source.display()))?;
        let target = self.dest.join(name);

        image
            .save(&target)
            .with_context(|| format!("Cannot save image '{}'", target.display()))?;

        Ok(target)
    }

    /// Write a stream of `(source path, image)` pairs, one image at a
    /// time, stopping at the first error. Returns the number written.
    pub fn write_all<I>(&self, images: I, bar: &ProgressBar) -> Result<usize>
    where
        I: IntoIterator<Item = Result<(PathBuf, RgbImage)>>,
    {
        let mut written = 0usize;
        for item in images {
            let (source, image) = item?;
            self.write(&source, &image)?;
            written += 1;
            bar.inc(1);
        }
        bar.finish_and_clear();

        tracing::debug!("Saved {} images to '{}'", written, self.dest.display());
        Ok(written)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_write_uses_source_basename() {
        let dir    = tempfile::tempdir().unwrap();
        let writer = ImageWriter::new(dir.path());
        let img    = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));

        let written = writer.write(Path::new("/some/where/else/123_abc.png"), &img).unwrap();

        assert_eq!(written, dir.path().join("123_abc.png"));
        let back = image::open(&written).unwrap().to_rgb8();
        assert_eq!(back, img);
    }

    #[test]
    fn test_write_all_stops_at_first_error() {
        let dir    = tempfile::tempdir().unwrap();
        let writer = ImageWriter::new(dir.path());
        let img    = RgbImage::new(2, 2);

        let items: Vec<Result<(PathBuf, RgbImage)>> = vec![
            Ok((PathBuf::from("a.jpg"), img.clone())),
            Err(anyhow!("decode failed")),
            Ok((PathBuf::from("c.jpg"), img)),
        ];
        let err = writer.write_all(items, &ProgressBar::hidden()).unwrap_err();

        assert!(err.to_string().contains("decode failed"));
        assert!(dir.path().join("a.jpg").exists());
        assert!(!dir.path().join("c.jpg").exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir    = tempfile::tempdir().unwrap();
        let writer = ImageWriter::new(dir.path());
        std::fs::write(dir.path().join("x.png"), b"old").unwrap();

        writer.write(Path::new("x.png"), &RgbImage::new(3, 3)).unwrap();
        let back = image::open(dir.path().join("x.png")).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (3, 3));
    }
}

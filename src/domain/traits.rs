// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline never decodes or transforms pixels itself; it
// asks an ImageNormalizer for a ready-to-store image.
//
// Implementations:
//   - InceptionNormalizer → 299×299, InceptionV3 input range
//                           baked into the stored pixels
//   - test fakes          → fixed-size blank images, so the
//                           partitioning / writing logic runs
//                           without decoding anything

use anyhow::Result;
use image::RgbImage;
use std::path::Path;

// ─── ImageNormalizer ──────────────────────────────────────────────────────────
/// Turns a source image file into the normalized image that is
/// written to the prepared dataset.
pub trait ImageNormalizer {
    /// Load `path` and return the normalized image.
    /// Any decode failure is returned as an error; callers abort.
    fn normalize(&self, path: &Path) -> Result<RgbImage>;
}

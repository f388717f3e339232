// ============================================================
// Layer 5 — Inception Normalizer
// ============================================================
// Turns a source photo into the stored 299×299 training image:
//
//   1. Decode and force 8-bit RGB
//   2. Resize to 299×299 (nearest neighbour)
//   3. Map into the InceptionV3 input range
//        x = v / 127.5 - 1                  [0, 255] → [-1, 1]
//   4. Rescale back to displayable pixels over the whole image
//        x = x - min(x)
//        x = x / max(x)      (only when max(x) != 0)
//        p = trunc(x * 255)
//
// Why go to the model range and back?
//   The stored JPEGs are loaded later by a training job that
//   applies no further transform. Running the model's own
//   preprocessing here and stretching the result back into
//   [0, 255] bakes that normalization into the pixels.
//
// What the stretch does to a photo:
//   Step 3 is affine, so after step 4 each image is contrast
//   stretched: its darkest channel value becomes 0 and its
//   brightest becomes 255. A uniform image has max(x) == 0 and
//   comes out black.
//
// Reference: Szegedy et al. (2016) Rethinking the Inception
//            Architecture for Computer Vision
//            image crate documentation (imageops::resize)

use anyhow::{anyhow, Context, Result};
use image::{imageops::FilterType, RgbImage};
use std::path::Path;

use crate::domain::traits::ImageNormalizer;

/// Square input side expected by InceptionV3
pub const INCEPTION_INPUT_SIZE: u32 = 299;

/// Production normalizer used by the `prepare` command.
#[derive(Debug, Clone, Copy)]
pub struct InceptionNormalizer {
    pub width:  u32,
    pub height: u32,
    pub filter: FilterType,
}

impl Default for InceptionNormalizer {
    fn default() -> Self {
        Self {
            width:  INCEPTION_INPUT_SIZE,
            height: INCEPTION_INPUT_SIZE,
            filter: FilterType::Nearest,
        }
    }
}

impl InceptionNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize an already-decoded image and bake in the model range.
    pub fn normalize_image(&self, image: &RgbImage) -> Result<RgbImage> {
        let resized = image::imageops::resize(image, self.width, self.height, self.filter);
        to_display_range(&resized)
    }
}

impl ImageNormalizer for InceptionNormalizer {
    fn normalize(&self, path: &Path) -> Result<RgbImage> {
        let decoded = image::open(path)
            .with_context(|| format!("Cannot decode image '{}'", path.display()))?
            .to_rgb8();

        self.normalize_image(&decoded)
            .with_context(|| format!("Cannot normalize image '{}'", path.display()))
    }
}

/// InceptionV3 `preprocess_input`: `[0, 255]` → `[-1, 1]`
pub fn inception_preprocess(value: u8) -> f32 {
    f32::from(value) / 127.5 - 1.0
}

/// Apply the model transform, then min–max rescale back to `u8`.
fn to_display_range(image: &RgbImage) -> Result<RgbImage> {
    let (width, height) = image.dimensions();

    let values: Vec<f32> = image.as_raw().iter().map(|&v| inception_preprocess(v)).collect();
    if values.is_empty() {
        return Ok(image.clone());
    }

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let mut shifted: Vec<f32> = values.iter().map(|v| v - min).collect();

    let max = shifted.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if max != 0.0 {
        shifted.iter_mut().for_each(|v| *v /= max);
    }

    // `as u8` truncates toward zero and saturates, like a uint8 cast
    let pixels: Vec<u8> = shifted.iter().map(|v| (v * 255.0) as u8).collect();

    RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| anyhow!("Pixel buffer does not match {width}x{height}"))
}

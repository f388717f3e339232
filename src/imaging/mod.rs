// ============================================================
// Layer 5 — Imaging Layer
// ============================================================
// Pixel work lives here and only here; the data and application
// layers see images as opaque `RgbImage` values produced through
// the ImageNormalizer trait.
//
//   normalizer.rs — InceptionNormalizer: decode, resize to
//                   299×299, apply the InceptionV3 input
//                   transform, rescale back to displayable
//                   8-bit pixels
//
//   writer.rs     — ImageWriter: store a normalized image in a
//                   partition directory under its original
//                   file name

/// Resize + model normalization
pub mod normalizer;

/// Persist normalized images
pub mod writer;

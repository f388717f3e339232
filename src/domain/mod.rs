// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing the dataset:
//
//   caption.rs   — CaptionMapping: image identifier → captions,
//                  kept in first-appearance order
//   partition.rs — Partition (train / val / test), the three
//                  membership sets and the partitioned path lists
//   traits.rs    — ImageNormalizer, the capability seam between
//                  the pipeline and the vision-model transform
//
// Rules for this layer:
//   - NO file I/O
//   - NO progress reporting or logging setup
//   - Only structs, enums, and traits

/// Identifier → ordered caption list
pub mod caption;

/// Train / validation / test membership and results
pub mod partition;

/// Core abstractions implemented by other layers
pub mod traits;

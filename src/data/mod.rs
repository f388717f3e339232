// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw Flickr8k files and the prepared
// captions file / partitioned image lists.
//
//   Flickr8k.token.txt              *.jpg + three list files
//       │                                  │
//       ▼                                  ▼
//   loader::load_doc               loader::list_images
//       │                          loader::load_partition_sets
//       ▼                                  │
//   captions::load_descriptions            ▼
//       │                          splitter::partition_images
//       ▼                                  │
//   preprocessor::CaptionCleaner           ▼
//       │                          (imaging layer: normalize
//       ▼                           and write each image)
//   writer::save_descriptions
//
// Each module does one step and is tested on its own.

/// Reads caption text, membership lists, and the image directory
pub mod loader;

/// Parses raw caption text into a CaptionMapping
pub mod captions;

/// Normalises captions into the training vocabulary surface
pub mod preprocessor;

/// Splits image paths into train / val / test
pub mod splitter;

/// Writes the cleaned captions file
pub mod writer;

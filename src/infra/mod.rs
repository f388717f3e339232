// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the other layers:
//
//   layout.rs   — Output tree ownership: wipes the previous
//                 run's images and captions file, recreates
//                 train/ val/ test/
//
//   manifest.rs — Run manifest: the effective configuration
//                 and produced counts, saved as JSON next to
//                 the images
//
//   progress.rs — indicatif progress bars for long loops

/// Output directory cleanup and creation
pub mod layout;

/// JSON run summary
pub mod manifest;

/// Progress bar construction
pub mod progress;

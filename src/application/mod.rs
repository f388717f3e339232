// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data, imaging, and infra layers:
//
//   captions_use_case — caption file only:
//                       load → map → clean → save
//
//   prepare_use_case  — full dataset run:
//                       reset output tree, caption pipeline,
//                       partition + normalize + write images,
//                       write the run manifest
//
// No parsing, pixel math, or CLI types here; only sequencing.

/// Caption-only workflow
pub mod captions_use_case;

/// Full dataset preparation workflow and its configuration
pub mod prepare_use_case;

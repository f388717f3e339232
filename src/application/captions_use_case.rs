// ============================================================
// Layer 2 — CaptionsUseCase
// ============================================================
// Runs the caption pipeline in order:
//
//   Step 1: Read the raw token file       (data::loader)
//   Step 2: Build identifier → captions   (data::captions)
//   Step 3: Clean every caption           (data::preprocessor)
//   Step 4: Write the captions file       (data::writer)

use anyhow::Result;

use crate::application::prepare_use_case::{CaptionStats, PrepareConfig};
use crate::data::{
    captions::load_descriptions,
    loader::load_doc,
    preprocessor::CaptionCleaner,
    writer::save_descriptions,
};

pub struct CaptionsUseCase {
    config:  PrepareConfig,
    cleaner: CaptionCleaner,
}

impl CaptionsUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config, cleaner: CaptionCleaner::new() }
    }

    /// Delete any previous captions file, then regenerate it.
    pub fn execute(&self) -> Result<CaptionStats> {
        self.config.layout().reset_captions()?;
        self.run_pipeline()
    }

    /// Caption pipeline without touching anything else on disk.
    /// The caller is responsible for clearing previous output.
    pub(crate) fn run_pipeline(&self) -> Result<CaptionStats> {
        let cfg = &self.config;
        tracing::info!("Preprocessing captions from '{}'", cfg.captions_file.display());

        // ── Step 1: Read raw text ─────────────────────────────────────────────
        let doc = load_doc(&cfg.captions_file)?;

        // ── Step 2: Group captions by image identifier ────────────────────────
        let descriptions = load_descriptions(&doc);
        tracing::info!(
            "Loaded {} captions for {} images",
            descriptions.caption_count(),
            descriptions.len()
        );

        // ── Step 3: Clean ─────────────────────────────────────────────────────
        let cleaned = self.cleaner.clean_descriptions(&descriptions);

        // ── Step 4: Persist ───────────────────────────────────────────────────
        let captions = save_descriptions(&cleaned, &cfg.output_captions_file, cfg.show_progress)?;

        Ok(CaptionStats {
            identifiers: cleaned.len(),
            captions,
        })
    }
}

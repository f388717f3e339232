// ============================================================
// Layer 4 — Caption Writer
// ============================================================
// Serialises a CaptionMapping as a flat text file:
//
//   1000268201_693b08cb0e startseq  child in pink dress ... endseq
//   1000268201_693b08cb0e startseq  girl going into ... endseq
//   ...
//
// One line per caption; the identifier repeats for each of its
// captions. Lines follow mapping order, then caption order, so
// the same mapping always produces the same bytes.

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::domain::caption::CaptionMapping;
use crate::infra::progress;

/// Write `descriptions` to `path`, replacing any existing file.
/// Returns the number of lines written.
pub fn save_descriptions(
    descriptions: &CaptionMapping,
    path:         &Path,
    show_progress: bool,
) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create captions file '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    let bar = progress::stage_bar(descriptions.len() as u64, "Saving descriptions", show_progress);
    let mut lines = 0usize;

    for (id, captions) in descriptions.iter() {
        for caption in captions {
            writeln!(out, "{id} {caption}")
                .with_context(|| format!("Cannot write to '{}'", path.display()))?;
            lines += 1;
        }
        bar.inc(1);
    }

    out.flush()
        .with_context(|| format!("Cannot flush '{}'", path.display()))?;
    bar.finish_and_clear();

    tracing::info!("Wrote {} captions to '{}'", lines, path.display());
    Ok(lines)
}

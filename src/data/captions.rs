// ============================================================
// Layer 4 — Caption Mapper
// ============================================================
// Parses the raw Flickr8k token file into a CaptionMapping.
//
// Line format:
//   1000268201_693b08cb0e.jpg#0 A child in a pink dress ...
//   └─────── raw id ──────────┘ └────── caption ────────┘
//
// The identifier is the raw id up to (not including) its first
// '.', so "1000268201_693b08cb0e.jpg#0" → "1000268201_693b08cb0e".
// The caption tokens are re-joined with single spaces.
//
// Why normalise line endings first?
//   Token files travel between platforms; a CRLF copy must parse
//   exactly like the LF original. Every "\r\n" and bare "\r" is
//   a line break, so a stray one-character line stays shorter
//   than the 2-character minimum and is skipped rather than
//   turning into an identifier with an empty caption.

use crate::data::{loader::split_lines, preprocessor::split_tokens};
use crate::domain::caption::CaptionMapping;

/// Lines shorter than this (in characters) are ignored
pub const MIN_LINE_CHARS: usize = 2;

/// Build the identifier → captions mapping from raw caption text.
///
/// Short lines (trailing blank lines, stray single characters) and
/// whitespace-only lines are skipped silently.
pub fn load_descriptions(doc: &str) -> CaptionMapping {
    let mut mapping = CaptionMapping::new();

    for line in split_lines(doc) {
        if line.chars().count() < MIN_LINE_CHARS {
            continue;
        }

        let mut tokens = split_tokens(line);
        let Some(raw_id) = tokens.next() else {
            continue;
        };

        let image_id = raw_id.split('.').next().unwrap_or(raw_id);
        let caption  = tokens.collect::<Vec<_>>().join(" ");

        mapping.push(image_id, caption);
    }

    tracing::debug!(
        "Parsed {} captions for {} images",
        mapping.caption_count(),
        mapping.len()
    );
    mapping
}

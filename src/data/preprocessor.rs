// ============================================================
// Layer 4 — Caption Cleaner
// ============================================================
// Normalises each caption into the token surface the caption
// model is trained on.
//
// Cleaning steps (applied in order, per caption):
//   1. Split on whitespace
//   2. Lowercase every token
//   3. Strip ASCII punctuation characters from every token
//        !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
//   4. Drop tokens of length ≤ 1   ("a", "s" left by "'s", ...)
//   5. Drop tokens with any non-letter char ("2", "3rd", ...)
//   6. Wrap with the boundary markers and re-join with spaces
//
// Example:
//   "A girl in a pink dress ."
//     → "startseq  girl in pink dress endseq"
//
// Why a fixed punctuation set instead of a regex?
//   The cleaned captions define the vocabulary every downstream
//   model sees. Stripping exactly the 32 ASCII punctuation
//   characters means "dog's" becomes "dogs" and "well-known"
//   becomes "wellknown", identically on every run and platform.
//   Non-ASCII punctuation ("—", "¿") is left in place and then
//   rejected by step 5 together with its token.
//
// What counts as a letter?
//   Only characters whose Unicode general category is a letter:
//   Lu, Ll, Lt, Lm, Lo. The broader Alphabetic property also
//   admits letter-numbers ("ⅻ", category Nl) and combining
//   vowel signs ("ि", category Mc/Mn); tokens containing those
//   are dropped, as are digits.
//
// Whitespace follows the same rule as the caption mapper: the
// Unicode White_Space characters plus the ASCII separators
// U+001C..U+001F.
//
// The start marker renders with a trailing space, so there are
// always two spaces between it and the first word (and an
// empty caption becomes "startseq  endseq").
//
// Cleaning is a pure function of its input. It is NOT
// idempotent: cleaning an already-cleaned caption keeps the old
// markers as ordinary words and wraps a second pair around them.
//
// Reference: Unicode Standard Annex #44 (General_Category values)
//            unicode-general-category crate documentation

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::domain::caption::CaptionMapping;

/// Token marking the start of every cleaned caption
pub const START_MARKER: &str = "startseq";

/// Token marking the end of every cleaned caption
pub const END_MARKER: &str = "endseq";

/// Stateless caption normaliser.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptionCleaner;

impl CaptionCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Clean a single caption string.
    pub fn clean(&self, caption: &str) -> String {
        let words = split_tokens(caption)
            .map(str::to_lowercase)
            .map(|w| strip_punctuation(&w))
            .filter(|w| w.chars().count() > 1)
            .filter(|w| w.chars().all(is_letter));

        let mut tokens = vec![format!("{START_MARKER} ")];
        tokens.extend(words);
        tokens.push(END_MARKER.to_string());

        tokens.join(" ")
    }

    /// Return a new mapping with every caption cleaned.
    /// The input mapping is left untouched.
    pub fn clean_descriptions(&self, descriptions: &CaptionMapping) -> CaptionMapping {
        descriptions.map_captions(|caption| self.clean(caption))
    }
}

/// Clean every caption in `descriptions` with the default cleaner.
pub fn clean_descriptions(descriptions: &CaptionMapping) -> CaptionMapping {
    CaptionCleaner::new().clean_descriptions(descriptions)
}

/// True for characters in one of the letter categories Lu, Ll, Lt, Lm, Lo.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Token separator: Unicode whitespace plus the ASCII file, group,
/// record and unit separators.
pub fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Split `text` into non-empty whitespace-delimited tokens.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_token_separator).filter(|t| !t.is_empty())
}

/// Remove every ASCII punctuation character, keeping everything else.
fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

// ============================================================
// Layer 3 — CaptionMapping Domain Type
// ============================================================
// Maps an image identifier (the file name without extension)
// to every caption written for that image.
//
// Example (Flickr8k):
//   "1000268201_693b08cb0e" → [
//       "A child in a pink dress is climbing up a set of stairs .",
//       "A girl going into a wooden building .",
//       ...
//   ]
//
// Ordering:
//   Identifiers iterate in the order they first appear in the
//   source file; captions keep their appearance order. The
//   captions file written from a mapping is therefore stable
//   for a given input.

use std::collections::HashMap;

/// Ordered mapping from image identifier to its captions.
///
/// Every identifier present maps to a non-empty list: entries are
/// only created by [`CaptionMapping::push`], which always appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionMapping {
    /// (identifier, captions) in first-appearance order
    entries: Vec<(String, Vec<String>)>,

    /// identifier → position in `entries`
    index: HashMap<String, usize>,
}

impl CaptionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a caption for `id`. A repeated identifier accumulates
    /// captions rather than replacing them.
    pub fn push(&mut self, id: impl Into<String>, caption: impl Into<String>) {
        let id = id.into();
        match self.index.get(&id) {
            Some(&pos) => self.entries[pos].1.push(caption.into()),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, vec![caption.into()]));
            }
        }
    }

    /// Captions recorded for `id`, if any
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.index
            .get(id)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of captions across all identifiers
    pub fn caption_count(&self) -> usize {
        self.entries.iter().map(|(_, caps)| caps.len()).sum()
    }

    /// Iterate identifiers and their captions in mapping order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(id, caps)| (id.as_str(), caps.as_slice()))
    }

    /// Build a new mapping with `f` applied to every caption.
    /// Identifier order and caption order are preserved.
    pub fn map_captions<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let entries = self
            .entries
            .iter()
            .map(|(id, caps)| {
                (id.clone(), caps.iter().map(|c| f(c.as_str())).collect())
            })
            .collect();

        Self { entries, index: self.index.clone() }
    }
}

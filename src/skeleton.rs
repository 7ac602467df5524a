//! Canonical lowercase-ASCII projection of a string and style-independent substring search.


use crate::classify::classify;


/// One scalar value of the source string together with its canonical lowercase form.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
struct SkeletonEntry {
    original: char,
    canonical: char,
}


/// The canonical lowercase-ASCII projection of a string.
///
/// One entry is kept per scalar value of the source, in order: index *i* in the skeleton
/// denotes the same position as scalar value *i* of the source, with no merging or
/// splitting. This alignment is what makes index-based splicing of replacements into the
/// source safe.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Skeleton {
    entries: Vec<SkeletonEntry>,
}
impl Skeleton {
    /// Builds the skeleton of a string.
    ///
    /// Every scalar value is classified; the canonical entry is the recovered ASCII
    /// character where one exists and the original character otherwise, lowercased.
    pub fn new(text: &str) -> Self {
        let entries = text.chars()
            .map(|c| SkeletonEntry {
                original: c,
                canonical: classify(c).canonical().to_ascii_lowercase(),
            })
            .collect();
        Self {
            entries,
        }
    }

    /// The number of entries, equal to the source string's scalar-value count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The canonical projection as a string.
    pub fn canonical_string(&self) -> String {
        self.entries.iter().map(|e| e.canonical).collect()
    }

    /// Finds every position where `needle_lower` matches the canonical projection, in
    /// ascending start order.
    ///
    /// Every starting position is tested independently, so overlapping matches are all
    /// reported: the needle `"aa"` matches the skeleton `"aaa"` at starts 0 and 1. An empty
    /// needle never matches.
    pub fn find(&self, needle_lower: &str) -> Vec<Occurrence> {
        let needle: Vec<char> = needle_lower.chars().collect();
        if needle.is_empty() || needle.len() > self.entries.len() {
            return Vec::new();
        }

        let mut occurrences = Vec::new();
        for start in 0..=(self.entries.len() - needle.len()) {
            let window = &self.entries[start..start+needle.len()];
            let is_match = window.iter()
                .zip(&needle)
                .all(|(entry, needle_char)| entry.canonical == *needle_char);
            if is_match {
                occurrences.push(Occurrence {
                    start,
                    len: needle.len(),
                    sample: window.iter().map(|e| e.original).collect(),
                });
            }
        }
        occurrences
    }
}


/// A match of an ASCII needle against a skeleton.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Occurrence {
    /// Start position, in scalar values.
    pub start: usize,

    /// Length, in scalar values; equal to the needle's scalar-value count.
    pub len: usize,

    /// The original (possibly stylized) substring that matched. This is the style
    /// reference when generating a replacement.
    pub sample: String,
}

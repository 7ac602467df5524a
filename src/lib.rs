//! Style-preserving replacement of decoratively stylized Unicode names.
//!
//! Names often appear in text not as plain ASCII but "stylized": written with mathematical
//! bold/italic/fraktur/double-struck letters, fullwidth letters, circled letters, or letters
//! carrying diacritics. A literal-string replace misses those occurrences entirely. This
//! crate projects text onto a canonical lowercase-ASCII *skeleton* (one element per scalar
//! value, order-preserving), searches that skeleton for plain-ASCII names, and splices in
//! replacements re-encoded character by character into the style of whatever was matched.
//!
//! ```
//! use fancy_replace::apply_mapping;
//!
//! // "Boss" written in mathematical bold
//! let replaced = apply_mapping("hi \u{1D401}\u{1D428}\u{1D42C}\u{1D42C}", "Boss", "Core");
//! assert_eq!(replaced, "hi \u{1D402}\u{1D428}\u{1D42B}\u{1D41E}");
//! ```
//!
//! The engine is total over all string inputs and purely functional; the optional `archive`
//! feature adds the surrounding batch pipeline that applies a mapping list to every text
//! file (and file name) inside a ZIP archive.

pub mod blocks;
pub mod classify;
pub mod replace;
pub mod skeleton;

#[cfg(feature = "archive")]
pub mod archive;
#[cfg(feature = "serde")]
mod ser_de;


pub use crate::replace::{apply_mapping, apply_mappings, stylize};


#[cfg(not(feature = "tracing"))]
macro_rules! no_trace {
    ($($bla:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
pub(crate) use no_trace;


/// An ordered pair of a plain original name and its plain replacement.
///
/// Mappings are applied in list order by [`apply_mappings`]; each mapping scans the text
/// already rewritten by the previous one.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Mapping {
    /// The name to search for, independent of styling.
    pub original: String,

    /// The name to substitute, re-styled per occurrence.
    pub replacement: String,
}
impl Mapping {
    pub fn new<O: Into<String>, R: Into<String>>(original: O, replacement: R) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}

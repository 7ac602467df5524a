//! Classification of single scalar values into their canonical ASCII form and style.


use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::blocks::{block_range_for, StyleBlock};


/// The result of classifying one Unicode scalar value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClassifiedChar {
    /// An ASCII letter or digit, taken unchanged.
    Plain(char),

    /// A stylized rendering of an ASCII letter from one of the decorative blocks.
    Styled { ascii: char, block: StyleBlock, is_upper: bool },

    /// An ASCII letter or digit recovered by canonical decomposition and combining-mark
    /// removal. No decorative style is associated with it.
    Diacritic(char),

    /// Anything else (punctuation, spaces, unrelated scripts); kept verbatim.
    Unmapped(char),
}
impl ClassifiedChar {
    /// Returns the canonical character: the recovered ASCII form where one exists, the
    /// original character otherwise.
    pub fn canonical(&self) -> char {
        match self {
            Self::Plain(c) => *c,
            Self::Styled { ascii, .. } => *ascii,
            Self::Diacritic(c) => *c,
            Self::Unmapped(c) => *c,
        }
    }

    /// Whether this scalar value stands for an ASCII letter or digit once canonicalized.
    pub fn bears_letter_or_digit(&self) -> bool {
        !matches!(self, Self::Unmapped(_))
    }
}


/// Classifies one scalar value.
///
/// Total over all of Unicode: any scalar value that is neither ASCII alphanumeric, part of a
/// decorative range, nor reducible to a single ASCII alphanumeric by decomposition comes back
/// as [`ClassifiedChar::Unmapped`].
pub fn classify(c: char) -> ClassifiedChar {
    if c.is_ascii_alphanumeric() {
        return ClassifiedChar::Plain(c);
    }

    if let Some(range) = block_range_for(c) {
        return ClassifiedChar::Styled {
            ascii: range.decode(c),
            block: range.block,
            is_upper: range.is_upper(),
        };
    }

    // compatibility decomposition with combining marks stripped
    let mut decomposed = std::iter::once(c)
        .nfkd()
        .filter(|d| d.general_category_group() != GeneralCategoryGroup::Mark);
    if let Some(first) = decomposed.next() {
        if decomposed.next().is_none() && first.is_ascii_alphanumeric() {
            return ClassifiedChar::Diacritic(first);
        }
    }

    ClassifiedChar::Unmapped(c)
}

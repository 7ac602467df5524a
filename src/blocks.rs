//! The static table of decorative Unicode alphabet ranges.
//!
//! One sorted table backs both directions: the classifier looks a scalar value up to recover
//! its ASCII letter and style, and the stylizer re-encodes ASCII letters into a previously
//! detected style. Keeping both on the same table keeps them consistent by construction.


use std::cmp::Ordering;


/// Code point of the fullwidth uppercase "Ａ".
pub(crate) const FULLWIDTH_UPPER_BASE: u32 = 0xFF21;
/// Code point of the fullwidth lowercase "ａ".
pub(crate) const FULLWIDTH_LOWER_BASE: u32 = 0xFF41;
/// Code point of the circled uppercase "Ⓐ".
pub(crate) const CIRCLED_UPPER_BASE: u32 = 0x24B6;
/// Code point of the circled lowercase "ⓐ".
pub(crate) const CIRCLED_LOWER_BASE: u32 = 0x24D0;


/// A decorative Unicode alphabet family that renders ASCII letters in a distinctive visual
/// style.
///
/// Every family consists of one or two runs of exactly 26 contiguous code points mapping 1:1
/// to A–Z and a–z. None of the covered families remap ASCII digits.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StyleBlock {
    /// Fullwidth Latin letters (U+FF21… uppercase, U+FF41… lowercase).
    Fullwidth,

    /// One of the 13 mathematical alphanumeric sub-blocks (bold, italic, fraktur, …),
    /// identified by the code points of its "A" and "a".
    MathVariant { upper_base: u32, lower_base: u32 },

    /// Circled Latin letters. The base is the one of the case that was actually sampled;
    /// re-encoding keeps that case.
    Circled { base: u32 },
}
impl StyleBlock {
    /// Re-encodes one ASCII character into this block.
    ///
    /// Letters are moved to the block's range at their own case-relative offset; anything
    /// else (digits, punctuation) is returned unchanged, since no covered block defines a
    /// digit range.
    pub fn encode(&self, c: char) -> char {
        if !c.is_ascii_alphabetic() {
            return c;
        }
        let is_upper = c.is_ascii_uppercase();
        let index = if is_upper {
            (c as u32) - ('A' as u32)
        } else {
            (c as u32) - ('a' as u32)
        };
        let base = match self {
            Self::Fullwidth => if is_upper { FULLWIDTH_UPPER_BASE } else { FULLWIDTH_LOWER_BASE },
            Self::MathVariant { upper_base, lower_base } => if is_upper { *upper_base } else { *lower_base },
            Self::Circled { base } => *base,
        };
        char::from_u32(base + index).unwrap()
    }
}


/// One row of the style table: a contiguous run of 26 code points standing in for A–Z or
/// a–z.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct BlockRange {
    pub first: char,
    pub last: char,
    /// `'A'` for an uppercase run, `'a'` for a lowercase run.
    pub ascii_base: char,
    pub block: StyleBlock,
}
impl BlockRange {
    pub const fn new(first: char, last: char, ascii_base: char, block: StyleBlock) -> Self {
        Self {
            first,
            last,
            ascii_base,
            block,
        }
    }

    /// Recovers the ASCII letter standing behind a code point of this range.
    pub fn decode(&self, c: char) -> char {
        char::from_u32((self.ascii_base as u32) + ((c as u32) - (self.first as u32))).unwrap()
    }

    /// Whether this range stands in for A–Z (as opposed to a–z).
    pub fn is_upper(&self) -> bool {
        self.ascii_base == 'A'
    }
}


const fn math(upper_base: u32, lower_base: u32) -> StyleBlock {
    StyleBlock::MathVariant { upper_base, lower_base }
}

/// All decorative ranges, sorted by code point for binary search.
pub(crate) const BLOCK_RANGES: [BlockRange; 30] = [
    // circled
    BlockRange::new('\u{24B6}', '\u{24CF}', 'A', StyleBlock::Circled { base: CIRCLED_UPPER_BASE }),
    BlockRange::new('\u{24D0}', '\u{24E9}', 'a', StyleBlock::Circled { base: CIRCLED_LOWER_BASE }),

    // fullwidth
    BlockRange::new('\u{FF21}', '\u{FF3A}', 'A', StyleBlock::Fullwidth),
    BlockRange::new('\u{FF41}', '\u{FF5A}', 'a', StyleBlock::Fullwidth),

    // mathematical bold
    BlockRange::new('\u{1D400}', '\u{1D419}', 'A', math(0x1D400, 0x1D41A)),
    BlockRange::new('\u{1D41A}', '\u{1D433}', 'a', math(0x1D400, 0x1D41A)),

    // mathematical italic
    BlockRange::new('\u{1D434}', '\u{1D44D}', 'A', math(0x1D434, 0x1D44E)),
    BlockRange::new('\u{1D44E}', '\u{1D467}', 'a', math(0x1D434, 0x1D44E)),

    // mathematical bold italic
    BlockRange::new('\u{1D468}', '\u{1D481}', 'A', math(0x1D468, 0x1D482)),
    BlockRange::new('\u{1D482}', '\u{1D49B}', 'a', math(0x1D468, 0x1D482)),

    // mathematical script
    BlockRange::new('\u{1D49C}', '\u{1D4B5}', 'A', math(0x1D49C, 0x1D4B6)),
    BlockRange::new('\u{1D4B6}', '\u{1D4CF}', 'a', math(0x1D49C, 0x1D4B6)),

    // mathematical bold script
    BlockRange::new('\u{1D4D0}', '\u{1D4E9}', 'A', math(0x1D4D0, 0x1D4EA)),
    BlockRange::new('\u{1D4EA}', '\u{1D503}', 'a', math(0x1D4D0, 0x1D4EA)),

    // mathematical fraktur
    BlockRange::new('\u{1D504}', '\u{1D51D}', 'A', math(0x1D504, 0x1D51E)),
    BlockRange::new('\u{1D51E}', '\u{1D537}', 'a', math(0x1D504, 0x1D51E)),

    // mathematical double-struck
    BlockRange::new('\u{1D538}', '\u{1D551}', 'A', math(0x1D538, 0x1D552)),
    BlockRange::new('\u{1D552}', '\u{1D56B}', 'a', math(0x1D538, 0x1D552)),

    // mathematical bold fraktur
    BlockRange::new('\u{1D56C}', '\u{1D585}', 'A', math(0x1D56C, 0x1D586)),
    BlockRange::new('\u{1D586}', '\u{1D59F}', 'a', math(0x1D56C, 0x1D586)),

    // mathematical sans-serif
    BlockRange::new('\u{1D5A0}', '\u{1D5B9}', 'A', math(0x1D5A0, 0x1D5BA)),
    BlockRange::new('\u{1D5BA}', '\u{1D5D3}', 'a', math(0x1D5A0, 0x1D5BA)),

    // mathematical sans-serif bold
    BlockRange::new('\u{1D5D4}', '\u{1D5ED}', 'A', math(0x1D5D4, 0x1D5EE)),
    BlockRange::new('\u{1D5EE}', '\u{1D607}', 'a', math(0x1D5D4, 0x1D5EE)),

    // mathematical sans-serif italic
    BlockRange::new('\u{1D608}', '\u{1D621}', 'A', math(0x1D608, 0x1D622)),
    BlockRange::new('\u{1D622}', '\u{1D63B}', 'a', math(0x1D608, 0x1D622)),

    // mathematical sans-serif bold italic
    BlockRange::new('\u{1D63C}', '\u{1D655}', 'A', math(0x1D63C, 0x1D656)),
    BlockRange::new('\u{1D656}', '\u{1D66F}', 'a', math(0x1D63C, 0x1D656)),

    // mathematical monospace
    BlockRange::new('\u{1D670}', '\u{1D689}', 'A', math(0x1D670, 0x1D68A)),
    BlockRange::new('\u{1D68A}', '\u{1D6A3}', 'a', math(0x1D670, 0x1D68A)),
];


/// Obtains the decorative range containing the given scalar value, if any.
pub(crate) fn block_range_for(needle: char) -> Option<&'static BlockRange> {
    BLOCK_RANGES.binary_search_by(|range| {
        if range.first <= needle && needle <= range.last {
            Ordering::Equal
        } else if range.first > needle {
            // range is greater than the needle
            Ordering::Greater
        } else {
            // range is less than the needle
            Ordering::Less
        }
    })
        .ok()
        .map(|i| &BLOCK_RANGES[i])
}

//! The style-preserving replacement engine.


use std::borrow::Cow;

#[cfg(feature = "tracing")] use tracing::{instrument, trace};

use crate::Mapping;
use crate::classify::{classify, ClassifiedChar};
use crate::skeleton::Skeleton;
#[cfg(not(feature = "tracing"))] use crate::no_trace as trace;


/// Re-encodes a plain replacement string into the visual style of a sample span.
///
/// The sample span is a previously matched, possibly stylized, slice of original text. Its
/// letter-bearing scalar values (plain, styled or diacritic) are lined up with the
/// replacement position by position:
///
/// * a styled sample letter moves the replacement character into the same decorative block,
///   at the offset given by the replacement character's own case;
/// * a plain or diacritic sample letter yields plain ASCII, uppercased exactly when the
///   sample character is an ASCII uppercase letter;
/// * a missing sample letter (replacement longer than the sample has letters) yields plain
///   lowercase.
///
/// The output always has the same scalar-value count as `replacement`.
pub fn stylize(replacement: &str, sample: &str) -> String {
    let sample_letters: Vec<char> = sample.chars()
        .filter(|&c| classify(c).bears_letter_or_digit())
        .collect();

    let mut output = String::with_capacity(replacement.len() * 4);
    for (i, replacement_char) in replacement.chars().enumerate() {
        let sample_char = match sample_letters.get(i) {
            Some(&sc) => sc,
            None => {
                // ran out of sample letters; trailing characters default to lowercase
                output.push(replacement_char.to_ascii_lowercase());
                continue;
            },
        };
        match classify(sample_char) {
            ClassifiedChar::Styled { block, .. } => {
                output.push(block.encode(replacement_char));
            },
            _ => {
                // no decorative block on the sample; follow its ASCII case
                if sample_char.is_ascii_uppercase() {
                    output.push(replacement_char.to_ascii_uppercase());
                } else {
                    output.push(replacement_char.to_ascii_lowercase());
                }
            },
        }
    }
    output
}


/// Replaces every occurrence of `original` in `text` — plain, stylized or
/// diacritic-decorated — with a style-matched rendition of `replacement`.
///
/// Matching is performed against the skeleton of `text` using the skeleton of `original`,
/// so the original name itself may be supplied in any styling. Returns the input borrowed
/// and unchanged when nothing matches; an empty `original` or `replacement` is a no-op.
/// This function never fails.
#[cfg_attr(feature = "tracing", instrument(skip_all))]
pub fn apply_mapping<'a>(text: &'a str, original: &str, replacement: &str) -> Cow<'a, str> {
    if original.is_empty() || replacement.is_empty() {
        return Cow::Borrowed(text);
    }

    let needle = Skeleton::new(original).canonical_string();
    let skeleton = Skeleton::new(text);
    let occurrences = skeleton.find(&needle);
    if occurrences.is_empty() {
        return Cow::Borrowed(text);
    }
    trace!("replacing {} occurrence(s) of {:?}", occurrences.len(), original);

    // splice back-to-front so earlier start indexes stay valid
    let mut scalars: Vec<char> = text.chars().collect();
    for occurrence in occurrences.iter().rev() {
        let styled = stylize(replacement, &occurrence.sample);
        scalars.splice(occurrence.start..occurrence.start+occurrence.len, styled.chars());
    }
    Cow::Owned(scalars.into_iter().collect())
}


/// Applies every mapping in order, each one scanning the previous one's output.
///
/// Mappings are not isolated from one another: a later mapping can match text introduced
/// by an earlier one.
pub fn apply_mappings<'a>(text: &'a str, mappings: &[Mapping]) -> Cow<'a, str> {
    mappings.iter()
        .fold(Cow::Borrowed(text), |current, mapping| {
            match apply_mapping(&current, &mapping.original, &mapping.replacement) {
                Cow::Borrowed(_) => current,
                Cow::Owned(next) => Cow::Owned(next),
            }
        })
}

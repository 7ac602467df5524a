//! End-to-end checks of the public replacement API across the decorative alphabets.

use fancy_replace::{apply_mapping, apply_mappings, Mapping};
use fancy_replace::skeleton::Skeleton;


#[test]
fn skeleton_length_matches_scalar_count() {
    for s in [
        "",
        "plain ascii",
        "Ｆｕｌｌｗｉｄｔｈ ＆ ｆｒｉｅｎｄｓ",
        "\u{1D504}\u{1D52F}\u{1D51E}\u{1D52C}\u{1D531}\u{1D532}\u{1D52F}",
        "mixed 🦀 Ⓦⓞⓡⓛⓓ café",
    ] {
        assert_eq!(Skeleton::new(s).len(), s.chars().count());
    }
}

#[test]
fn replaces_across_every_math_variant() {
    // "ok" spelled in each of the 13 mathematical sub-blocks (lowercase bases)
    let lower_bases: [u32; 13] = [
        0x1D41A, 0x1D44E, 0x1D482, 0x1D4B6, 0x1D4EA, 0x1D51E, 0x1D552,
        0x1D586, 0x1D5BA, 0x1D5EE, 0x1D622, 0x1D656, 0x1D68A,
    ];
    for base in lower_bases {
        let o = char::from_u32(base + 14).unwrap();
        let k = char::from_u32(base + 10).unwrap();
        let text = format!("{}{}?", o, k);
        let replaced = apply_mapping(&text, "ok", "no");
        let n = char::from_u32(base + 13).unwrap();
        assert_eq!(replaced, format!("{}{}?", n, o), "base {:#X}", base);
    }
}

#[test]
fn replaces_fullwidth_and_circled() {
    assert_eq!(apply_mapping("ｈｅｌｌｏ", "hello", "howdy"), "ｈｏｗｄｙ");
    assert_eq!(apply_mapping("Ⓗⓘ", "hi", "yo"), "Ⓨⓞ");
}

#[test]
fn styled_original_names_match_too() {
    // the original name may itself be stylized; both sides collapse to the same skeleton
    let replaced = apply_mapping("BossLady said", "\u{1D401}ossLady", "SuzzyCore");
    assert_eq!(replaced, "SuzzYcore said");
}

#[test]
fn mapping_list_is_an_ordered_fold() {
    let mappings = [
        Mapping::new("alpha", "beta"),
        Mapping::new("beta", "gamma"),
    ];
    assert_eq!(apply_mappings("alpha", &mappings), "gamma");

    // the reverse order stops after one rewrite
    let reversed = [
        Mapping::new("beta", "gamma"),
        Mapping::new("alpha", "beta"),
    ];
    assert_eq!(apply_mappings("alpha", &reversed), "beta");
}

#[test]
fn mixed_styles_within_one_occurrence() {
    // fullwidth Ｂ, plain o, bold 𝐬, circled ⓢ
    let text = "\u{FF22}o\u{1D42C}\u{24E2}";
    let replaced = apply_mapping(text, "boss", "lady");
    assert_eq!(replaced, "\u{FF4C}a\u{1D41D}\u{24E8}");
}

//! Font family pools per alias.
//!
//! Each pool mixes families that name their alias (`DejaVu Sans Mono` under
//! `monospace`) with script fonts that do not (`Lohit Devanagari` under
//! `sans-serif`), so generated groups exercise the attention marker.

use fontquery_core::{AliasTag, GenericFamily, ResolutionRecord};
use rand::Rng;
use rand::rngs::StdRng;

const SANS: &[&str] = &[
    "DejaVu Sans",
    "Noto Sans",
    "Liberation Sans",
    "Cantarell",
    "Noto Sans CJK JP",
    "Noto Sans CJK KR",
    "Noto Sans Thai",
    "Lohit Devanagari",
    "Lohit Bengali",
    "Khmer OS",
];

const SERIF: &[&str] = &[
    "DejaVu Serif",
    "Noto Serif",
    "Liberation Serif",
    "Noto Serif CJK JP",
    "Noto Serif CJK KR",
    "Noto Serif Thai",
    "Lohit Devanagari",
    "Paktype Naskh Basic",
];

const MONO: &[&str] = &[
    "DejaVu Sans Mono",
    "Noto Sans Mono",
    "Liberation Mono",
    "Source Code Pro",
    "Noto Sans Mono CJK JP",
    "Noto Sans CJK KR",
    "VL Gothic",
];

const EXTENSION: &[&str] = &["Noto Color Emoji", "Symbola", "Unifont", "Noto Sans Symbols"];

/// Family pool for `alias`.
pub fn pool(alias: &AliasTag) -> &'static [&'static str] {
    match alias {
        AliasTag::Known(GenericFamily::SansSerif) => SANS,
        AliasTag::Known(GenericFamily::Serif) => SERIF,
        AliasTag::Known(GenericFamily::Monospace) => MONO,
        AliasTag::Extension(_) => EXTENSION,
    }
}

/// Random family from the pool of `alias`.
pub fn pick(alias: &AliasTag, rng: &mut StdRng) -> String {
    let families = pool(alias);
    families[rng.gen_range(0..families.len())].to_owned()
}

/// Random family for `alias` different from `current`.
pub fn pick_other(alias: &AliasTag, current: &str, rng: &mut StdRng) -> String {
    let others: Vec<&str> = pool(alias)
        .iter()
        .copied()
        .filter(|f| *f != current)
        .collect();
    if others.is_empty() {
        return format!("{current} Alt");
    }
    others[rng.gen_range(0..others.len())].to_owned()
}

/// A record resolving `alias` to `family` for one language tag.
pub fn record(tag: &str, display_name: &str, alias: &AliasTag, family: &str) -> ResolutionRecord {
    ResolutionRecord {
        language: tag.to_owned(),
        display_name: display_name.to_owned(),
        alias: alias.clone(),
        file: font_file(family),
        family: family.to_owned(),
        style: "Regular".to_owned(),
    }
}

/// Install path a capture would report for `family`.
pub fn font_file(family: &str) -> String {
    format!("/usr/share/fonts/{}.ttf", family.replace(' ', ""))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use rand::SeedableRng;

    use super::*;

    #[test]
    fn pick_other_never_returns_current() {
        let mut rng = StdRng::seed_from_u64(7);
        let alias = AliasTag::from("monospace");
        for _ in 0..50 {
            assert_ne!(pick_other(&alias, "DejaVu Sans Mono", &mut rng), "DejaVu Sans Mono");
        }
    }

    #[test]
    fn pools_contain_non_matching_families() {
        let sans = AliasTag::from("sans-serif");
        assert!(pool(&sans).iter().any(|f| !sans.family_matches(f)));
        let mono = AliasTag::from("monospace");
        assert!(pool(&mono).iter().any(|f| !mono.family_matches(f)));
    }

    #[test]
    fn file_is_derived_from_family() {
        let rec = record("en", "English", &AliasTag::from("serif"), "DejaVu Serif");
        assert_eq!(rec.file, "/usr/share/fonts/DejaVuSerif.ttf");
        assert_eq!(rec.style, "Regular");
    }
}

//! Property-based tests for normalization, grouping and the diff partition.
//!
//! Datasets are drawn from a small pool of languages (two pairs of tags share
//! a display name) and a three-family pool per alias, so collapsing, grouping
//! and every partition subset all occur frequently.
#![allow(clippy::expect_used)]

use std::collections::BTreeSet;

use fontquery_core::{
    AliasTag, Dataset, Distribution, LanguageEntry, LanguageTable, NormalizeOptions, Pattern,
    ResolutionRecord, diff, group_by_resolution, normalize,
};
use proptest::prelude::*;

/// `(tag, display name)`; `en`/`en_US` and `pt`/`pt_BR` share names.
const LANGUAGES: &[(&str, &str)] = &[
    ("de", "German"),
    ("en", "English"),
    ("en_US", "English"),
    ("fr", "French"),
    ("ja", "Japanese"),
    ("pt", "Portuguese"),
    ("pt_BR", "Portuguese"),
];

const SANS: &[&str] = &["DejaVu Sans", "Cantarell", "Noto Sans CJK JP"];
const SERIF: &[&str] = &["DejaVu Serif", "Noto Serif", "Droid"];
const MONO: &[&str] = &["DejaVu Sans Mono", "Liberation Mono", "VL Gothic"];

fn make_record(tag: &str, name: &str, alias: &str, family: &str) -> ResolutionRecord {
    ResolutionRecord {
        language: tag.to_owned(),
        display_name: name.to_owned(),
        alias: AliasTag::from(alias),
        file: format!("{}.ttf", family.replace(' ', "")),
        family: family.to_owned(),
        style: "Regular".to_owned(),
    }
}

fn build_dataset(fonts: Vec<ResolutionRecord>) -> Dataset {
    Dataset {
        distribution: Distribution {
            id: "fedora".to_owned(),
            version_id: "40".to_owned(),
        },
        pattern: Some(Pattern::Minimal),
        fq_id: "1.0".to_owned(),
        fonts,
    }
}

fn table_of(dataset: &Dataset) -> LanguageTable {
    normalize(dataset, &NormalizeOptions::default()).expect("generated datasets normalize")
}

fn record_set(records: Vec<ResolutionRecord>) -> BTreeSet<ResolutionRecord> {
    records.into_iter().collect()
}

/// Strategy: a dataset with a random subset of the language pool, each
/// language resolving to a random family per alias.
fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(
        prop::option::weighted(0.7, (0..SANS.len(), 0..SERIF.len(), 0..MONO.len())),
        LANGUAGES.len(),
    )
    .prop_map(|choices| {
        let mut fonts = Vec::new();
        for (&(tag, name), choice) in LANGUAGES.iter().zip(choices) {
            if let Some((s, r, m)) = choice {
                fonts.push(make_record(tag, name, "sans-serif", SANS[s]));
                fonts.push(make_record(tag, name, "serif", SERIF[r]));
                fonts.push(make_record(tag, name, "monospace", MONO[m]));
            }
        }
        build_dataset(fonts)
    })
}

fn names<'a>(entries: impl Iterator<Item = &'a LanguageEntry>) -> BTreeSet<&'a str> {
    entries.map(|e| e.display_name.as_str()).collect()
}

fn tags<'a>(entries: impl Iterator<Item = &'a LanguageEntry>) -> BTreeSet<&'a str> {
    entries
        .flat_map(|e| e.tags.iter().map(String::as_str))
        .collect()
}

/// Strategy: a dataset and a copy where only `en_US` changes its
/// `sans-serif` family, so the two captures split English differently.
fn arb_variant_change() -> impl Strategy<Value = (Dataset, Dataset)> {
    (arb_dataset(), 0..SANS.len()).prop_map(|(a, s)| {
        let mut b = a.clone();
        for rec in &mut b.fonts {
            if rec.language == "en_US" && rec.alias == AliasTag::from("sans-serif") {
                rec.family = SANS[s].to_owned();
                rec.file = format!("{}.ttf", SANS[s].replace(' ', ""));
            }
        }
        (a, b)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// normalize → flatten is the identity on record sets.
    #[test]
    fn normalize_flatten_round_trips(ds in arb_dataset()) {
        let table = table_of(&ds);
        prop_assert_eq!(record_set(table.flatten()), record_set(ds.fonts.clone()));
    }

    /// Grouping the flattened groups yields the same groups.
    #[test]
    fn grouping_is_idempotent(ds in arb_dataset()) {
        let groups = group_by_resolution(&table_of(&ds));
        let again = group_by_resolution(&groups.to_table());
        prop_assert_eq!(groups, again);
    }

    /// matched, changed and missing_from_b cover A's display names and tags,
    /// with no display name both compared and removed.
    #[test]
    fn partition_covers_a_disjointly(a in arb_dataset(), b in arb_dataset()) {
        let ta = table_of(&a);
        let tb = table_of(&b);
        let d = diff(&ta, &tb);

        let matched: BTreeSet<&String> = d.matched.keys().collect();
        let changed: BTreeSet<&String> = d.changed.keys().collect();
        prop_assert!(matched.is_disjoint(&changed));

        let compared_a = || d.matched.values().chain(d.changed.values().map(|c| &c.before));
        let removed = names(d.missing_from_b.values());
        prop_assert!(names(compared_a()).is_disjoint(&removed));

        let all_names: BTreeSet<&str> = names(compared_a()).union(&removed).copied().collect();
        prop_assert_eq!(all_names, names(ta.entries().values()));
        let all_tags: BTreeSet<&str> = tags(compared_a())
            .union(&tags(d.missing_from_b.values()))
            .copied()
            .collect();
        prop_assert_eq!(all_tags, tags(ta.entries().values()));

        let b_names = names(tb.entries().values());
        for entry in d.missing_from_a.values() {
            prop_assert!(b_names.contains(entry.display_name.as_str()));
            prop_assert!(!names(ta.entries().values()).contains(entry.display_name.as_str()));
        }
    }

    /// A display name present in both captures is never reported as missing,
    /// however its tags are split.
    #[test]
    fn shared_display_names_are_never_missing((a, b) in arb_variant_change()) {
        let (ta, tb) = (table_of(&a), table_of(&b));
        let d = diff(&ta, &tb);
        prop_assert!(d.missing_from_a.is_empty());
        prop_assert!(d.missing_from_b.is_empty());

        let before = tags(d.matched.values().chain(d.changed.values().map(|c| &c.before)));
        let after = tags(d.matched.values().chain(d.changed.values().map(|c| &c.after)));
        prop_assert_eq!(before, tags(ta.entries().values()));
        prop_assert_eq!(after, tags(tb.entries().values()));
    }

    /// Comparing a dataset with itself matches everything.
    #[test]
    fn self_diff_is_all_matched(a in arb_dataset()) {
        let ta = table_of(&a);
        let d = diff(&ta, &ta);
        prop_assert_eq!(d.matched.len(), ta.len());
        prop_assert!(d.is_empty());
        prop_assert_eq!(d.unchanged.member_count(), ta.len());
        prop_assert!(d.transitions.is_empty());
    }

    /// Swapping A and B swaps the missing sets and before/after.
    #[test]
    fn swapping_inputs_mirrors_the_partition(a in arb_dataset(), b in arb_dataset()) {
        let ta = table_of(&a);
        let tb = table_of(&b);
        let ab = diff(&ta, &tb);
        let ba = diff(&tb, &ta);

        prop_assert_eq!(&ab.missing_from_a, &ba.missing_from_b);
        prop_assert_eq!(&ab.missing_from_b, &ba.missing_from_a);
        prop_assert_eq!(ab.matched.len(), ba.matched.len());
        prop_assert_eq!(ab.changed.len(), ba.changed.len());
        for (key, change) in &ab.changed {
            let mirrored = ba.changed.get(key).expect("changed in both directions");
            prop_assert_eq!(&change.before, &mirrored.after);
            prop_assert_eq!(&change.after, &mirrored.before);
        }
    }

    /// Every changed entry appears in exactly one transition group.
    #[test]
    fn transitions_cover_changed_entries(a in arb_dataset(), b in arb_dataset()) {
        let d = diff(&table_of(&a), &table_of(&b));
        let grouped: usize = d.transitions.iter().map(|(_, m)| m.len()).sum();
        prop_assert_eq!(grouped, d.changed.len());
        prop_assert_eq!(d.unchanged.member_count(), d.matched.len());
    }
}

#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeSet;

use super::*;
use crate::test_helpers::{dataset, english, french, japanese, record, table, trio};

fn sorted(mut records: Vec<ResolutionRecord>) -> Vec<ResolutionRecord> {
    records.sort();
    records
}

// -----------------------------------------------------------------------------
// Happy paths
// -----------------------------------------------------------------------------

#[test]
fn single_language_produces_one_entry_with_three_aliases() {
    let t = table(english());
    assert_eq!(t.len(), 1);
    assert_eq!(t.aliases().len(), 3);
    let entry = t.get("English").expect("English entry");
    assert_eq!(entry.tags, ["en"]);
    assert_eq!(entry.family(&AliasTag::from("serif")), Some("DejaVu Serif"));
    assert_eq!(entry.label(), "English(en)");
}

#[test]
fn entries_iterate_by_display_name() {
    let mut fonts = japanese();
    fonts.extend(english());
    fonts.extend(french());
    let t = table(fonts);
    let keys: Vec<&str> = t.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["English", "French", "Japanese"]);
}

#[test]
fn tags_with_same_display_name_and_fonts_collapse() {
    let mut fonts = trio("en_US", "English", "DejaVu Sans", "DejaVu Serif", "DejaVu Sans Mono");
    fonts.extend(english());
    let t = table(fonts);
    assert_eq!(t.len(), 1);
    let entry = t.get("English").expect("English entry");
    assert_eq!(entry.tags, ["en", "en_US"]);
    assert_eq!(entry.label(), "English(en,en_US)");
    assert_eq!(t.tag_count(), 2);
}

#[test]
fn tags_with_same_display_name_but_different_fonts_stay_separate() {
    let mut fonts = english();
    fonts.extend(trio("en_GB", "English", "Cantarell", "DejaVu Serif", "DejaVu Sans Mono"));
    fonts.extend(trio("en_US", "English", "DejaVu Sans", "DejaVu Serif", "DejaVu Sans Mono"));
    let t = table(fonts);
    let keys: Vec<&str> = t.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["English [en]", "English [en_GB]"]);
    assert_eq!(t.get("English [en]").expect("en").tags, ["en", "en_US"]);
    assert_eq!(t.get("English [en_GB]").expect("en_GB").display_name, "English");
}

#[test]
fn style_difference_prevents_collapse() {
    let mut fonts = english();
    let mut other = trio("en_US", "English", "DejaVu Sans", "DejaVu Serif", "DejaVu Sans Mono");
    other[0].style = "Bold".to_owned();
    fonts.extend(other);
    let t = table(fonts);
    assert_eq!(t.len(), 2);
}

#[test]
fn extension_aliases_follow_standard_ones() {
    let mut fonts = vec![record("en", "English", "emoji", "Noto Color Emoji")];
    fonts.extend(english());
    let t = table(fonts);
    let names: Vec<&str> = t.aliases().iter().map(AliasTag::as_str).collect();
    assert_eq!(names, ["sans-serif", "serif", "monospace", "emoji"]);
}

#[test]
fn language_filter_drops_other_tags_before_checks() {
    let mut fonts = english();
    // Incomplete, but filtered out before the coverage check.
    fonts.push(record("de", "German", "sans-serif", "DejaVu Sans"));
    let options = NormalizeOptions {
        languages: Some(BTreeSet::from(["en".to_owned()])),
        ..NormalizeOptions::default()
    };
    let t = normalize(&dataset(fonts), &options).expect("filtered");
    assert_eq!(t.len(), 1);
    assert!(t.get("German").is_none());
}

#[test]
fn empty_dataset_normalizes_to_empty_table() {
    let t = table(Vec::new());
    assert!(t.is_empty());
    assert!(t.aliases().is_empty());
    assert!(t.flatten().is_empty());
}

// -----------------------------------------------------------------------------
// Errors
// -----------------------------------------------------------------------------

#[test]
fn duplicate_tag_alias_pair_is_rejected() {
    let mut fonts = english();
    fonts.push(record("en", "English", "serif", "Liberation Serif"));
    let err = normalize(&dataset(fonts), &NormalizeOptions::default()).expect_err("duplicate");
    assert_eq!(
        err,
        DatasetError::DuplicateRecord {
            language: "en".to_owned(),
            alias: "serif".to_owned(),
        }
    );
}

#[test]
fn missing_alias_names_tag_display_name_and_aliases() {
    let mut fonts = english();
    fonts.push(record("ja", "Japanese", "sans-serif", "Noto Sans CJK JP"));
    let err = normalize(&dataset(fonts), &NormalizeOptions::default()).expect_err("incomplete");
    assert_eq!(
        err,
        DatasetError::IncompleteLanguageEntry {
            language: "ja".to_owned(),
            display_name: "Japanese".to_owned(),
            missing: vec!["serif".to_owned(), "monospace".to_owned()],
        }
    );
}

#[test]
fn extension_alias_rejected_under_standard_policy() {
    let mut fonts = english();
    fonts.push(record("en", "English", "emoji", "Noto Color Emoji"));
    let err = normalize(&dataset(fonts), &NormalizeOptions::default()).expect_err("policy");
    match err {
        DatasetError::MalformedDataset { field, expected } => {
            assert_eq!(field, "fonts[3].alias");
            assert!(expected.contains("sans-serif"), "expected: {expected}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn tag_under_two_display_names_is_rejected() {
    let mut fonts = english();
    fonts[2].display_name = "Anglais".to_owned();
    let err = normalize(&dataset(fonts), &NormalizeOptions::default()).expect_err("names");
    match err {
        DatasetError::MalformedDataset { field, .. } => assert_eq!(field, "fonts[2].lang_name"),
        other => panic!("unexpected error: {other:?}"),
    }
}

// -----------------------------------------------------------------------------
// flatten
// -----------------------------------------------------------------------------

#[test]
fn flatten_round_trips_collapsed_tags() {
    let mut fonts = english();
    fonts.extend(trio("en_US", "English", "DejaVu Sans", "DejaVu Serif", "DejaVu Sans Mono"));
    fonts.extend(japanese());
    let t = table(fonts.clone());
    assert_eq!(sorted(t.flatten()), sorted(fonts));
}

#[test]
fn flatten_round_trips_split_display_names() {
    let mut fonts = english();
    fonts.extend(trio("en_GB", "English", "Cantarell", "DejaVu Serif", "DejaVu Sans Mono"));
    let t = table(fonts.clone());
    assert_eq!(sorted(t.flatten()), sorted(fonts));
}

#[test]
fn same_resolution_compares_tags_and_fonts() {
    let a = table(english());
    let b = table(english());
    let ea = a.get("English").expect("a");
    let eb = b.get("English").expect("b");
    assert!(ea.same_resolution(eb));

    let mut changed = english();
    changed[1].file = "Other.ttf".to_owned();
    let c = table(changed);
    assert!(!ea.same_resolution(c.get("English").expect("c")));
}

#[test]
fn row_label_joins_members() {
    let mut fonts = english();
    fonts.extend(french());
    let t = table(fonts);
    assert_eq!(
        row_label(t.entries().values()),
        "English(en),French(fr)"
    );
}

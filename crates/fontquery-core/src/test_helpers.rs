//! Shared test helper functions for constructing datasets.
//!
//! This module is compiled only in test builds. Integration tests in
//! `crates/fontquery-core/tests/` define their own local helpers because they
//! link against the non-test library build where this module is not
//! available.
#![allow(clippy::expect_used)]

use crate::alias::AliasTag;
use crate::normalize::{LanguageTable, NormalizeOptions, normalize};
use crate::record::{Dataset, Distribution, Pattern, ResolutionRecord};

/// Builds a record; the file name is derived from the family.
pub fn record(lang: &str, name: &str, alias: &str, family: &str) -> ResolutionRecord {
    ResolutionRecord {
        language: lang.to_owned(),
        display_name: name.to_owned(),
        alias: AliasTag::from(alias),
        file: format!("{}.ttf", family.replace(' ', "")),
        family: family.to_owned(),
        style: "Regular".to_owned(),
    }
}

/// Three records covering `sans-serif`, `serif` and `monospace`.
pub fn trio(lang: &str, name: &str, sans: &str, serif: &str, mono: &str) -> Vec<ResolutionRecord> {
    vec![
        record(lang, name, "sans-serif", sans),
        record(lang, name, "serif", serif),
        record(lang, name, "monospace", mono),
    ]
}

/// Wraps records in a `fedora 40` / `minimal` envelope.
pub fn dataset(fonts: Vec<ResolutionRecord>) -> Dataset {
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

/// Normalizes records with extension aliases accepted.
pub fn table(fonts: Vec<ResolutionRecord>) -> LanguageTable {
    normalize(&dataset(fonts), &NormalizeOptions::open()).expect("normalizable dataset")
}

/// `English(en)` with the Fedora defaults.
pub fn english() -> Vec<ResolutionRecord> {
    trio("en", "English", "DejaVu Sans", "DejaVu Serif", "DejaVu Sans Mono")
}

/// `French(fr)` with the Fedora defaults.
pub fn french() -> Vec<ResolutionRecord> {
    trio("fr", "French", "DejaVu Sans", "DejaVu Serif", "DejaVu Sans Mono")
}

/// `Japanese(ja)` resolving to Noto CJK.
pub fn japanese() -> Vec<ResolutionRecord> {
    trio("ja", "Japanese", "Noto Sans CJK JP", "Noto Serif CJK JP", "Noto Sans Mono CJK JP")
}

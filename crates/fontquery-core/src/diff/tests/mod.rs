#![allow(clippy::expect_used)]


use crate::normalize::LanguageTable;
use crate::record::ResolutionRecord;
use crate::test_helpers::table;

use super::{DatasetDiff, diff};

/// Normalizes both record lists and diffs them.
pub(crate) fn diff_records(a: Vec<ResolutionRecord>, b: Vec<ResolutionRecord>) -> DatasetDiff {
    let ta: LanguageTable = table(a);
    let tb: LanguageTable = table(b);
    diff(&ta, &tb)
}

/// Keys of a map, as `&str`, in iteration order.
pub(crate) fn keys<V>(map: &std::collections::BTreeMap<String, V>) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

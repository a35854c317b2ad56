//! Post-operation invariant checkers for correctness validation.

use std::collections::BTreeSet;

use fontquery_core::{
    Dataset, DatasetDiff, LanguageEntry, LanguageGroups, LanguageTable, ResolutionRecord, diff,
    group_by_resolution,
};

/// Verifies that flattening `table` gives back exactly the records of
/// `dataset` (normalized without a language filter).
pub fn check_round_trip(dataset: &Dataset, table: &LanguageTable) -> Result<(), String> {
    let original: BTreeSet<&ResolutionRecord> = dataset.fonts.iter().collect();
    let flattened = table.flatten();
    if flattened.len() != dataset.fonts.len() {
        return Err(format!(
            "record count mismatch: dataset={}, flattened={}",
            dataset.fonts.len(),
            flattened.len()
        ));
    }
    for rec in &flattened {
        if !original.contains(rec) {
            return Err(format!(
                "flattened record ({}, {}) not in dataset",
                rec.language, rec.alias
            ));
        }
    }
    if table.tag_count() * table.aliases().len() != dataset.fonts.len() {
        return Err(format!(
            "{} tags x {} aliases does not cover {} records",
            table.tag_count(),
            table.aliases().len(),
            dataset.fonts.len()
        ));
    }
    Ok(())
}

/// Verifies grouping invariants:
/// - every entry lands in exactly one group
/// - all members of a group share the group key
/// - ungrouping gives the table back
pub fn check_grouping(table: &LanguageTable, groups: &LanguageGroups) -> Result<(), String> {
    if groups.member_count() != table.len() {
        return Err(format!(
            "member count mismatch: groups={}, table={}",
            groups.member_count(),
            table.len()
        ));
    }
    for (key, members) in groups {
        if members.is_empty() {
            return Err(format!("group {key} is empty"));
        }
        for (name, entry) in members {
            if entry.families(table.aliases()) != key.0 {
                return Err(format!("entry {name} does not resolve to its group key {key}"));
            }
        }
    }
    if groups.to_table() != *table {
        return Err("ungrouped table differs from the input table".to_owned());
    }
    Ok(())
}

/// Verifies that comparing a table with itself reports no differences.
pub fn check_self_diff(table: &LanguageTable) -> Result<(), String> {
    let result = diff(table, table);
    if !result.is_empty() {
        return Err(format!("self diff is not empty: {}", result.summary()));
    }
    if result.matched.len() != table.len() {
        return Err(format!(
            "self diff matched {} of {} entries",
            result.matched.len(),
            table.len()
        ));
    }
    if result.unchanged.len() != group_by_resolution(table).len() {
        return Err("self diff regrouped the unchanged entries".to_owned());
    }
    Ok(())
}

/// Verifies that `result` partitions both tables by display name:
/// - no display name is both compared and one-sided
/// - matched, changed and removed entries carry exactly A's names and tags
/// - matched, changed and added entries carry exactly B's names and tags
/// - the transition groups hold every changed entry once
pub fn check_diff_accounting(
    a: &LanguageTable,
    b: &LanguageTable,
    result: &DatasetDiff,
) -> Result<(), String> {
    let compared: Vec<(&LanguageEntry, &LanguageEntry)> = result
        .matched
        .values()
        .map(|e| (e, e))
        .chain(result.changed.values().map(|c| (&c.before, &c.after)))
        .collect();

    check_side(
        "A",
        a,
        compared.iter().map(|(before, _)| *before),
        result.missing_from_b.values(),
    )?;
    check_side(
        "B",
        b,
        compared.iter().map(|(_, after)| *after),
        result.missing_from_a.values(),
    )?;

    let transitioned: usize = result.transitions.iter().map(|(_, m)| m.len()).sum();
    if transitioned != result.changed.len() {
        return Err(format!(
            "transition groups hold {transitioned} entries, {} changed",
            result.changed.len()
        ));
    }
    Ok(())
}

fn check_side<'a>(
    side: &str,
    table: &LanguageTable,
    compared: impl Iterator<Item = &'a LanguageEntry>,
    one_sided: impl Iterator<Item = &'a LanguageEntry>,
) -> Result<(), String> {
    let compared: Vec<&LanguageEntry> = compared.collect();
    let one_sided: Vec<&LanguageEntry> = one_sided.collect();

    let compared_names: BTreeSet<&str> = compared.iter().map(|e| e.display_name.as_str()).collect();
    if let Some(name) = one_sided
        .iter()
        .map(|e| e.display_name.as_str())
        .find(|n| compared_names.contains(n))
    {
        return Err(format!("{side}: {name} is both compared and one-sided"));
    }

    let covered_names: BTreeSet<&str> = compared
        .iter()
        .chain(&one_sided)
        .map(|e| e.display_name.as_str())
        .collect();
    let names: BTreeSet<&str> = table.iter().map(|(_, e)| e.display_name.as_str()).collect();
    if covered_names != names {
        return Err(format!(
            "{side}-side subsets cover {} display names, {side} has {}",
            covered_names.len(),
            names.len()
        ));
    }

    let covered_tags: BTreeSet<&str> = compared
        .iter()
        .chain(&one_sided)
        .flat_map(|e| e.tags.iter().map(String::as_str))
        .collect();
    let tags: BTreeSet<&str> = table
        .iter()
        .flat_map(|(_, e)| e.tags.iter().map(String::as_str))
        .collect();
    if covered_tags != tags {
        return Err(format!(
            "{side}-side subsets cover {} tags, {side} has {}",
            covered_tags.len(),
            tags.len()
        ));
    }
    Ok(())
}

use std::collections::{BTreeMap, BTreeSet};

use crate::alias::AliasSet;
use crate::group::group_entries;
use crate::normalize::{LanguageEntry, LanguageTable};

use super::types::{ChangedEntry, DatasetDiff, TransitionGroups, TransitionKey};

/// Entries of one display name: table key plus entry, ascending by key.
type NameEntries<'a> = Vec<(&'a String, &'a LanguageEntry)>;

/// Compares two normalized datasets and returns the partition plus the
/// grouped views.
///
/// Table A is the baseline ("before"); table B is the candidate ("after").
///
/// # Algorithm
///
/// 1. Bucket both tables by display name.
/// 2. A display name only A has is `missing_from_b`; one only B has is
///    `missing_from_a`. All entries of the name go to that subset.
/// 3. A display name both have is paired entry by entry through its tags
///    (see [`pair_by_tag`]). A pair with the same tags and identical
///    family/style/file for every alias is `matched`, anything else is
///    `changed`.
/// 4. Group `matched` by resolution and `changed` by transition, along the
///    union alias set.
pub fn diff(a: &LanguageTable, b: &LanguageTable) -> DatasetDiff {
    let aliases = a.aliases().union(b.aliases());
    let a_names = by_display_name(a);
    let b_names = by_display_name(b);

    let mut matched: BTreeMap<String, LanguageEntry> = BTreeMap::new();
    let mut changed: BTreeMap<String, ChangedEntry> = BTreeMap::new();
    let mut missing_from_b: BTreeMap<String, LanguageEntry> = BTreeMap::new();
    let mut missing_from_a: BTreeMap<String, LanguageEntry> = BTreeMap::new();

    for (name, before) in &a_names {
        let Some(after) = b_names.get(name) else {
            missing_from_b.extend(before.iter().map(|(k, e)| ((*k).clone(), (*e).clone())));
            continue;
        };
        for (key, change) in pair_by_tag(name, before, after) {
            if change.before.same_resolution(&change.after) {
                matched.insert(key, change.before);
            } else {
                changed.insert(key, change);
            }
        }
    }
    for (name, after) in &b_names {
        if !a_names.contains_key(name) {
            missing_from_a.extend(after.iter().map(|(k, e)| ((*k).clone(), (*e).clone())));
        }
    }

    let unchanged = group_entries(&aliases, &matched);
    let transitions = group_transitions(&aliases, &changed);

    tracing::debug!(
        matched = matched.len(),
        changed = changed.len(),
        missing_from_a = missing_from_a.len(),
        missing_from_b = missing_from_b.len(),
        transition_groups = transitions.len(),
        "computed dataset diff"
    );

    DatasetDiff {
        aliases,
        matched,
        changed,
        missing_from_a,
        missing_from_b,
        unchanged,
        transitions,
    }
}

fn by_display_name(table: &LanguageTable) -> BTreeMap<&str, NameEntries<'_>> {
    let mut names: BTreeMap<&str, NameEntries<'_>> = BTreeMap::new();
    for (key, entry) in table {
        names
            .entry(entry.display_name.as_str())
            .or_default()
            .push((key, entry));
    }
    names
}

/// Pairs the entries of one display name present in both datasets.
///
/// Every tag of either side maps to the entry holding it on each side; a tag
/// one side lacks maps to that side's first entry. Each distinct
/// (before, after) pair is keyed by the display name when it is the only
/// pair, otherwise by `"{name} [{smallest tag of the pair}]"`. The result is
/// the same with the sides swapped.
fn pair_by_tag(
    name: &str,
    before: &[(&String, &LanguageEntry)],
    after: &[(&String, &LanguageEntry)],
) -> Vec<(String, ChangedEntry)> {
    let tags: BTreeSet<&str> = before
        .iter()
        .chain(after)
        .flat_map(|(_, e)| e.tags.iter().map(String::as_str))
        .collect();

    let mut pairs: BTreeMap<(usize, usize), &str> = BTreeMap::new();
    for tag in tags {
        pairs
            .entry((owner(before, tag), owner(after, tag)))
            .or_insert(tag);
    }

    let single = pairs.len() == 1;
    pairs
        .into_iter()
        .filter_map(|((i, j), tag)| {
            let (_, old) = before.get(i)?;
            let (_, new) = after.get(j)?;
            let key = if single {
                name.to_owned()
            } else {
                format!("{name} [{tag}]")
            };
            let change = ChangedEntry {
                before: (*old).clone(),
                after: (*new).clone(),
            };
            Some((key, change))
        })
        .collect()
}

fn owner(side: &[(&String, &LanguageEntry)], tag: &str) -> usize {
    side.iter()
        .position(|(_, e)| e.tags.iter().any(|t| t == tag))
        .unwrap_or(0)
}

/// Groups changed entries by their (before, after) families.
pub(super) fn group_transitions(
    aliases: &AliasSet,
    changed: &BTreeMap<String, ChangedEntry>,
) -> TransitionGroups {
    let mut groups = BTreeMap::new();
    for (key, change) in changed {
        groups
            .entry(TransitionKey::of(change, aliases))
            .or_insert_with(BTreeMap::new)
            .insert(key.clone(), change.clone());
    }
    TransitionGroups { groups }
}

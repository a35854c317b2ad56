use std::collections::BTreeMap;

use serde::Serialize;

use crate::alias::{AliasSet, AliasTag};
use crate::group::{LanguageGroups, NOT_AVAILABLE};
use crate::normalize::LanguageEntry;
use crate::record::ResolutionRecord;

/// A display name present in both datasets whose entries differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedEntry {
    /// Entry in dataset A (baseline).
    pub before: LanguageEntry,
    /// Entry in dataset B (candidate).
    pub after: LanguageEntry,
}

impl ChangedEntry {
    /// Returns `true` if the resolved family for `alias` differs.
    ///
    /// An alias only one side carries counts as a difference.
    pub fn family_changed(&self, alias: &AliasTag) -> bool {
        self.before.family(alias) != self.after.family(alias)
    }

    /// Returns `true` if the entry covers different tags in B than in A.
    pub fn retagged(&self) -> bool {
        self.before.tags != self.after.tags
    }

    /// Swaps before and after.
    pub fn reversed(&self) -> ChangedEntry {
        ChangedEntry {
            before: self.after.clone(),
            after: self.before.clone(),
        }
    }
}

/// Group key of a changed entry: A's resolutions then B's, along the union
/// alias set.
///
/// A resolution is the family name, qualified as `"{family} ({style})"` or
/// `"{family} ({file})"` when the other side resolves the alias to the same
/// family through a different face. `None` marks an alias the side lacks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TransitionKey {
    /// Resolutions in dataset A.
    pub before: Vec<Option<String>>,
    /// Resolutions in dataset B.
    pub after: Vec<Option<String>>,
}

impl TransitionKey {
    /// Key of `change` along `aliases`.
    pub fn of(change: &ChangedEntry, aliases: &AliasSet) -> Self {
        let (before, after) = aliases
            .iter()
            .map(|alias| {
                let old = change.before.record(alias);
                let new = change.after.record(alias);
                (resolution_text(old, new), resolution_text(new, old))
            })
            .unzip();
        TransitionKey { before, after }
    }
}

fn resolution_text(
    rec: Option<&ResolutionRecord>,
    other: Option<&ResolutionRecord>,
) -> Option<String> {
    let rec = rec?;
    let same_family = other.filter(|o| o.family == rec.family);
    let text = match same_family {
        Some(o) if o.style != rec.style => format!("{} ({})", rec.family, rec.style),
        Some(o) if o.file != rec.file => format!("{} ({})", rec.family, rec.file),
        Some(_) | None => rec.family.clone(),
    };
    Some(text)
}

impl std::fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for family in self.before.iter().chain(&self.after) {
            write!(f, "|{}", family.as_deref().unwrap_or(NOT_AVAILABLE))?;
        }
        Ok(())
    }
}

/// Members of one transition group: entry key → change, ascending.
pub type TransitionMembers = BTreeMap<String, ChangedEntry>;

/// Changed entries grouped by [`TransitionKey`], both levels ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionGroups {
    pub(super) groups: BTreeMap<TransitionKey, TransitionMembers>,
}

impl TransitionGroups {
    /// Iterates `(key, members)` in ascending key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, TransitionKey, TransitionMembers> {
        self.groups.iter()
    }

    /// Number of transition groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a TransitionGroups {
    type Item = (&'a TransitionKey, &'a TransitionMembers);
    type IntoIter = std::collections::btree_map::Iter<'a, TransitionKey, TransitionMembers>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Counts describing a [`DatasetDiff`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    /// Entries identical in both datasets.
    pub matched: usize,
    /// Entries present in both datasets with different resolutions.
    pub changed: usize,
    /// Entries only dataset B has (added).
    pub missing_from_a: usize,
    /// Entries only dataset A has (removed).
    pub missing_from_b: usize,
    /// Display rows for the matched entries.
    pub unchanged_groups: usize,
    /// Display rows for the changed entries.
    pub transition_groups: usize,
}

impl DiffSummary {
    /// Returns `true` if anything was added, removed or changed.
    pub fn has_differences(&self) -> bool {
        self.changed + self.missing_from_a + self.missing_from_b > 0
    }
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} unchanged, {} changed, {} removed, {} added",
            self.matched, self.changed, self.missing_from_b, self.missing_from_a
        )
    }
}

/// The complete result of comparing two normalized datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetDiff {
    /// Union alias set: A's aliases, then extensions only B has.
    pub aliases: AliasSet,
    /// Entries equal in A and B (A's copy).
    pub matched: BTreeMap<String, LanguageEntry>,
    /// Entries present in both with different tags or resolutions.
    pub changed: BTreeMap<String, ChangedEntry>,
    /// Entries only B has.
    pub missing_from_a: BTreeMap<String, LanguageEntry>,
    /// Entries only A has.
    pub missing_from_b: BTreeMap<String, LanguageEntry>,
    /// `matched`, grouped by resolution.
    pub unchanged: LanguageGroups,
    /// `changed`, grouped by transition.
    pub transitions: TransitionGroups,
}

impl DatasetDiff {
    /// Returns the counts of every subset and grouped view.
    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            matched: self.matched.len(),
            changed: self.changed.len(),
            missing_from_a: self.missing_from_a.len(),
            missing_from_b: self.missing_from_b.len(),
            unchanged_groups: self.unchanged.len(),
            transition_groups: self.transitions.len(),
        }
    }

    /// Returns `true` if there are no additions, removals or changes.
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.missing_from_a.is_empty() && self.missing_from_b.is_empty()
    }

    /// The same comparison with the roles of A and B swapped.
    ///
    /// The column layout (`aliases`) is kept so both directions render with
    /// identical columns.
    pub fn reversed(&self) -> DatasetDiff {
        let changed: BTreeMap<String, ChangedEntry> = self
            .changed
            .iter()
            .map(|(k, c)| (k.clone(), c.reversed()))
            .collect();
        let transitions = super::engine::group_transitions(&self.aliases, &changed);
        DatasetDiff {
            aliases: self.aliases.clone(),
            matched: self.matched.clone(),
            changed,
            missing_from_a: self.missing_from_b.clone(),
            missing_from_b: self.missing_from_a.clone(),
            unchanged: self.unchanged.clone(),
            transitions,
        }
    }
}

/// Grouping of language entries by identical resolutions.
///
/// Languages that resolve every alias to the same family collapse into a
/// single display row. The group key is the family *vector*, so a family name
/// containing `|` can never make two different resolutions collide.
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::alias::{AliasSet, AliasTag};
use crate::normalize::{LanguageEntry, LanguageTable};

/// Placeholder rendered where an entry has no record for an alias.
pub const NOT_AVAILABLE: &str = "N/A";

/// Families resolved per alias, in alias order. `None` marks an alias the
/// entry has no record for.
///
/// Keys order family by family, not by their `|`-joined display form: a
/// family sorts before any longer family it prefixes (`"A"` before `"A B"`),
/// and a missing alias sorts before every family.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ResolutionKey(pub Vec<Option<String>>);

impl ResolutionKey {
    /// Key of `entry` along `aliases`.
    pub fn of(entry: &LanguageEntry, aliases: &AliasSet) -> Self {
        ResolutionKey(entry.families(aliases))
    }

    /// Families with missing aliases rendered as [`NOT_AVAILABLE`].
    pub fn display_families(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.as_deref().unwrap_or(NOT_AVAILABLE))
    }

    /// Aliases whose family fails the keyword match and needs a closer look.
    pub fn attention<'a>(&'a self, aliases: &'a AliasSet) -> impl Iterator<Item = &'a AliasTag> {
        aliases
            .iter()
            .zip(self.display_families())
            .filter(|(alias, family)| !alias.family_matches(family))
            .map(|(alias, _)| alias)
    }
}

impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, family) in self.display_families().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(family)?;
        }
        Ok(())
    }
}

/// Members of one group: entry key → entry, ascending.
pub type GroupMembers = BTreeMap<String, LanguageEntry>;

/// Language entries grouped by [`ResolutionKey`], both levels ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageGroups {
    aliases: AliasSet,
    groups: BTreeMap<ResolutionKey, GroupMembers>,
}

impl LanguageGroups {
    /// Alias set the keys are laid out along.
    pub fn aliases(&self) -> &AliasSet {
        &self.aliases
    }

    /// Iterates `(key, members)` in ascending key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, ResolutionKey, GroupMembers> {
        self.groups.iter()
    }

    /// Members of the group with `key`.
    pub fn get(&self, key: &ResolutionKey) -> Option<&GroupMembers> {
        self.groups.get(key)
    }

    /// Number of groups (display rows).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of member entries across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    /// Flattens the groups back into a [`LanguageTable`].
    pub fn to_table(&self) -> LanguageTable {
        let entries = self
            .groups
            .values()
            .flat_map(|members| members.iter())
            .map(|(k, e)| (k.clone(), e.clone()))
            .collect();
        LanguageTable::from_entries(self.aliases.clone(), entries)
    }
}

impl<'a> IntoIterator for &'a LanguageGroups {
    type Item = (&'a ResolutionKey, &'a GroupMembers);
    type IntoIter = std::collections::btree_map::Iter<'a, ResolutionKey, GroupMembers>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Groups the entries of `table` by their families along the table's aliases.
pub fn group_by_resolution(table: &LanguageTable) -> LanguageGroups {
    group_entries(table.aliases(), table.iter())
}

/// Groups arbitrary entries along `aliases`.
pub(crate) fn group_entries<'a, I>(aliases: &AliasSet, entries: I) -> LanguageGroups
where
    I: IntoIterator<Item = (&'a String, &'a LanguageEntry)>,
{
    let mut groups: BTreeMap<ResolutionKey, GroupMembers> = BTreeMap::new();
    for (key, entry) in entries {
        groups
            .entry(ResolutionKey::of(entry, aliases))
            .or_default()
            .insert(key.clone(), entry.clone());
    }
    tracing::debug!(groups = groups.len(), "grouped languages by resolution");
    LanguageGroups {
        aliases: aliases.clone(),
        groups,
    }
}

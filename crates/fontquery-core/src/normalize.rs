/// Restructuring of raw resolution records into a per-language table.
///
/// [`normalize`] turns the flat record list of a [`Dataset`] into a
/// [`LanguageTable`]: one [`LanguageEntry`] per display name, each carrying
/// exactly one record per alias of the dataset. Language tags that share a
/// display name and resolve to identical fonts fold into a single entry.
///
/// # Algorithm
///
/// 1. Apply the language filter and the alias policy.
/// 2. Build the [`AliasSet`] from the surviving records.
/// 3. Index records by (language tag, alias); a repeated pair is an error.
/// 4. Check that every tag covers every alias of the set.
/// 5. Fold tags into display-name entries. Tags whose resolutions differ from
///    the rest of their display name get an entry of their own, keyed
///    `"{display name} [{first tag}]"`.
use std::collections::{BTreeMap, BTreeSet};

use crate::alias::{AliasSet, AliasTag, GenericFamily};
use crate::error::DatasetError;
use crate::record::{Dataset, ResolutionRecord};

/// Which aliases a dataset may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasPolicy {
    /// Only `sans-serif`, `serif` and `monospace` are accepted.
    #[default]
    Standard,
    /// Extension aliases are accepted and laid out after the standard ones.
    Open,
}

/// Options controlling [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Alias acceptance policy.
    pub alias_policy: AliasPolicy,
    /// When set, only records whose language tag is listed are kept.
    pub languages: Option<BTreeSet<String>>,
}

impl NormalizeOptions {
    /// Options accepting extension aliases.
    pub fn open() -> Self {
        Self {
            alias_policy: AliasPolicy::Open,
            languages: None,
        }
    }

    fn keeps(&self, record: &ResolutionRecord) -> bool {
        self.languages
            .as_ref()
            .is_none_or(|langs| langs.contains(&record.language))
    }
}

// ---------------------------------------------------------------------------
// LanguageEntry
// ---------------------------------------------------------------------------

/// All language tags sharing one display name and one set of resolutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Human-readable language name.
    pub display_name: String,
    /// Language tags folded into this entry, ascending.
    pub tags: Vec<String>,
    /// One record per alias. Each record carries the first tag as `language`.
    pub records: BTreeMap<AliasTag, ResolutionRecord>,
}

impl LanguageEntry {
    /// Record resolved for `alias`, if the entry has one.
    pub fn record(&self, alias: &AliasTag) -> Option<&ResolutionRecord> {
        self.records.get(alias)
    }

    /// Family resolved for `alias`, if the entry has one.
    pub fn family(&self, alias: &AliasTag) -> Option<&str> {
        self.records.get(alias).map(|r| r.family.as_str())
    }

    /// Row label: `"{display name}({tag,tag,...})"`.
    pub fn label(&self) -> String {
        format!("{}({})", self.display_name, self.tags.join(","))
    }

    /// Families along `aliases`, `None` where the entry has no record.
    pub fn families(&self, aliases: &AliasSet) -> Vec<Option<String>> {
        aliases
            .iter()
            .map(|a| self.family(a).map(str::to_owned))
            .collect()
    }

    /// Returns `true` if both entries cover the same tags and every alias
    /// resolves to the same family, style and file.
    pub fn same_resolution(&self, other: &LanguageEntry) -> bool {
        self.tags == other.tags
            && self.records.len() == other.records.len()
            && self.records.iter().all(|(alias, rec)| {
                other
                    .records
                    .get(alias)
                    .is_some_and(|theirs| rec.same_font(theirs))
            })
    }

    /// Expands the entry back into one record per (tag, alias).
    pub fn flatten(&self) -> impl Iterator<Item = ResolutionRecord> + '_ {
        self.tags.iter().flat_map(move |tag| {
            self.records.values().map(move |rec| ResolutionRecord {
                language: tag.clone(),
                ..rec.clone()
            })
        })
    }
}

/// Joins member labels with `,` (`"English(en,en_US),Welsh(cy)"`).
pub fn row_label<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a LanguageEntry>,
{
    entries
        .into_iter()
        .map(LanguageEntry::label)
        .collect::<Vec<_>>()
        .join(",")
}

// ---------------------------------------------------------------------------
// LanguageTable
// ---------------------------------------------------------------------------

/// Normalized dataset: alias set plus display-name → entry, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    aliases: AliasSet,
    entries: BTreeMap<String, LanguageEntry>,
}

impl LanguageTable {
    /// Assembles a table from already-normalized entries.
    pub fn from_entries(aliases: AliasSet, entries: BTreeMap<String, LanguageEntry>) -> Self {
        Self { aliases, entries }
    }

    /// Alias set (column order).
    pub fn aliases(&self) -> &AliasSet {
        &self.aliases
    }

    /// Entries keyed by display name (or disambiguated display name).
    pub fn entries(&self) -> &BTreeMap<String, LanguageEntry> {
        &self.entries
    }

    /// Entry stored under `key`.
    pub fn get(&self, key: &str) -> Option<&LanguageEntry> {
        self.entries.get(key)
    }

    /// Iterates `(key, entry)` in ascending key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, LanguageEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct language tags across all entries.
    pub fn tag_count(&self) -> usize {
        self.entries.values().map(|e| e.tags.len()).sum()
    }

    /// Returns the record set back: one record per (tag, alias).
    ///
    /// Records come out ordered by entry key, then tag, then alias.
    pub fn flatten(&self) -> Vec<ResolutionRecord> {
        self.entries.values().flat_map(LanguageEntry::flatten).collect()
    }
}

impl<'a> IntoIterator for &'a LanguageTable {
    type Item = (&'a String, &'a LanguageEntry);
    type IntoIter = std::collections::btree_map::Iter<'a, String, LanguageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

/// Per-tag accumulator: display name plus alias → record.
struct TagRecords<'a> {
    display_name: &'a str,
    records: BTreeMap<&'a AliasTag, &'a ResolutionRecord>,
}

/// Normalizes a dataset into a [`LanguageTable`].
///
/// # Errors
///
/// - [`DatasetError::MalformedDataset`] on `fonts[i].alias` for an extension
///   alias under [`AliasPolicy::Standard`], or on `fonts[i].lang_name` when a
///   tag appears under two display names.
/// - [`DatasetError::DuplicateRecord`] when a (tag, alias) pair repeats.
/// - [`DatasetError::IncompleteLanguageEntry`] when a tag lacks an alias.
pub fn normalize(
    dataset: &Dataset,
    options: &NormalizeOptions,
) -> Result<LanguageTable, DatasetError> {
    let mut kept: Vec<(usize, &ResolutionRecord)> = Vec::with_capacity(dataset.fonts.len());
    for (i, rec) in dataset.fonts.iter().enumerate() {
        if !options.keeps(rec) {
            continue;
        }
        if options.alias_policy == AliasPolicy::Standard && !rec.alias.is_known() {
            return Err(DatasetError::malformed(
                format!("fonts[{i}].alias"),
                standard_alias_list(),
            ));
        }
        kept.push((i, rec));
    }

    let aliases = AliasSet::from_aliases(kept.iter().map(|(_, r)| &r.alias));

    let mut by_tag: BTreeMap<&str, TagRecords<'_>> = BTreeMap::new();
    for &(i, rec) in &kept {
        let slot = by_tag
            .entry(rec.language.as_str())
            .or_insert_with(|| TagRecords {
                display_name: rec.display_name.as_str(),
                records: BTreeMap::new(),
            });
        if slot.display_name != rec.display_name {
            return Err(DatasetError::malformed(
                format!("fonts[{i}].lang_name"),
                format!(
                    "`{}` like the other records of `{}`",
                    slot.display_name, rec.language
                ),
            ));
        }
        if slot.records.insert(&rec.alias, rec).is_some() {
            return Err(DatasetError::DuplicateRecord {
                language: rec.language.clone(),
                alias: rec.alias.to_string(),
            });
        }
    }

    for (tag, slot) in &by_tag {
        let missing: Vec<String> = aliases
            .iter()
            .filter(|a| !slot.records.contains_key(a))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::IncompleteLanguageEntry {
                language: (*tag).to_owned(),
                display_name: slot.display_name.to_owned(),
                missing,
            });
        }
    }

    let mut by_name: BTreeMap<&str, Vec<(&str, &TagRecords<'_>)>> = BTreeMap::new();
    for (tag, slot) in &by_tag {
        by_name
            .entry(slot.display_name)
            .or_default()
            .push((*tag, slot));
    }

    let mut entries: BTreeMap<String, LanguageEntry> = BTreeMap::new();
    for (name, tags) in by_name {
        let classes = resolution_classes(&tags);
        let split = classes.len() > 1;
        if split {
            tracing::debug!(
                language = name,
                variants = classes.len(),
                "language tags resolve differently; keeping separate rows"
            );
        }
        for class in classes {
            tracing::trace!(language = name, tags = ?class.tags, "folded language tags");
            let key = if split {
                format!("{name} [{}]", class.tags.first().map_or("", String::as_str))
            } else {
                name.to_owned()
            };
            entries.insert(key, class);
        }
    }

    tracing::debug!(
        records = kept.len(),
        tags = by_tag.len(),
        entries = entries.len(),
        aliases = aliases.len(),
        "normalized dataset"
    );

    Ok(LanguageTable { aliases, entries })
}

/// Splits the tags of one display name into classes of identical resolutions.
///
/// Tags arrive ascending; classes are ordered by their first tag.
fn resolution_classes(tags: &[(&str, &TagRecords<'_>)]) -> Vec<LanguageEntry> {
    let mut classes: Vec<(&TagRecords<'_>, Vec<String>)> = Vec::new();
    for &(tag, slot) in tags {
        let existing = classes
            .iter_mut()
            .find(|(rep, _)| same_records(&rep.records, &slot.records));
        match existing {
            Some((_, members)) => members.push(tag.to_owned()),
            None => classes.push((slot, vec![tag.to_owned()])),
        }
    }

    classes
        .into_iter()
        .map(|(rep, tags)| LanguageEntry {
            display_name: rep.display_name.to_owned(),
            tags,
            records: rep
                .records
                .iter()
                .map(|(alias, rec)| ((*alias).clone(), (*rec).clone()))
                .collect(),
        })
        .collect()
}

fn same_records(
    a: &BTreeMap<&AliasTag, &ResolutionRecord>,
    b: &BTreeMap<&AliasTag, &ResolutionRecord>,
) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(alias, rec)| b.get(alias).is_some_and(|theirs| rec.same_font(theirs)))
}

fn standard_alias_list() -> String {
    format!("one of {}", GenericFamily::ALL.map(GenericFamily::as_str).join(", "))
}

#[cfg(test)]
mod tests;

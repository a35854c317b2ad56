/// Generic font family aliases and their column ordering.
///
/// An alias is the generic family role (`sans-serif`, `serif`, `monospace`)
/// that a resolver maps to a concrete font. [`AliasTag`] additionally carries
/// extension aliases (`emoji`, `fantasy`, ...) via its `Extension` variant so
/// that datasets captured with extra families round-trip without loss.
///
/// [`AliasSet`] fixes the order in which aliases appear in every key, column
/// and row: the three standard aliases first, in their canonical order, then
/// extension aliases in order of first appearance.
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The three generic families every fontquery capture is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GenericFamily {
    /// `sans-serif`
    SansSerif,
    /// `serif`
    Serif,
    /// `monospace`
    Monospace,
}

impl GenericFamily {
    /// All standard families in canonical column order.
    pub const ALL: [GenericFamily; 3] = [Self::SansSerif, Self::Serif, Self::Monospace];

    /// Returns the alias string as it appears in captured JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Serif => "serif",
            Self::Monospace => "monospace",
        }
    }

    /// Short keyword expected somewhere in a family name resolved for this alias.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::SansSerif => "sans",
            Self::Serif => "serif",
            Self::Monospace => "mono",
        }
    }
}

/// The `alias` field of a resolution record: a [`GenericFamily`] or an
/// extension string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AliasTag {
    /// One of the standard generic families.
    Known(GenericFamily),
    /// Any other alias passed to the resolver.
    Extension(String),
}

impl AliasTag {
    /// Returns the alias string as it appears in captured JSON.
    pub fn as_str(&self) -> &str {
        match self {
            AliasTag::Known(family) => family.as_str(),
            AliasTag::Extension(s) => s.as_str(),
        }
    }

    /// Returns `true` for the three standard generic families.
    pub fn is_known(&self) -> bool {
        matches!(self, AliasTag::Known(_))
    }

    /// Keyword used by the "match" heuristic.
    ///
    /// Extension aliases use their own name (`emoji` matches "Noto Color Emoji").
    pub fn keyword(&self) -> &str {
        match self {
            AliasTag::Known(family) => family.keyword(),
            AliasTag::Extension(s) => s.as_str(),
        }
    }

    /// Column heading used by the table renderers (`default sans`, ...).
    pub fn column_label(&self) -> String {
        format!("default {}", self.keyword())
    }

    /// Heuristic confidence signal: does `family` mention this alias keyword?
    ///
    /// Case-insensitive substring test. A family that legitimately serves the
    /// alias without naming it (e.g. a CJK font under `monospace`) is reported
    /// as needing attention; this is an approximation, not a correctness check.
    pub fn family_matches(&self, family: &str) -> bool {
        let keyword = self.keyword().to_lowercase();
        !keyword.is_empty() && family.to_lowercase().contains(&keyword)
    }
}

impl From<&str> for AliasTag {
    fn from(s: &str) -> Self {
        match s {
            "sans-serif" => AliasTag::Known(GenericFamily::SansSerif),
            "serif" => AliasTag::Known(GenericFamily::Serif),
            "monospace" => AliasTag::Known(GenericFamily::Monospace),
            other => AliasTag::Extension(other.to_owned()),
        }
    }
}

impl From<GenericFamily> for AliasTag {
    fn from(family: GenericFamily) -> Self {
        AliasTag::Known(family)
    }
}

impl AsRef<str> for AliasTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AliasTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AliasTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AliasTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(AliasTag::from(s.as_str()))
    }
}

// ---------------------------------------------------------------------------
// AliasSet
// ---------------------------------------------------------------------------

/// Ordered, duplicate-free list of the aliases present in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasSet {
    aliases: Vec<AliasTag>,
}

impl AliasSet {
    /// The three standard aliases in canonical order.
    pub fn standard() -> Self {
        Self {
            aliases: GenericFamily::ALL.into_iter().map(AliasTag::Known).collect(),
        }
    }

    /// Builds the set from aliases in record order.
    ///
    /// Standard aliases that occur are placed first in canonical order;
    /// extension aliases follow in order of first appearance.
    pub fn from_aliases<'a, I>(aliases: I) -> Self
    where
        I: IntoIterator<Item = &'a AliasTag>,
    {
        let mut known = [false; 3];
        let mut extensions: Vec<AliasTag> = Vec::new();
        for alias in aliases {
            match alias {
                AliasTag::Known(family) => {
                    if let Some(slot) = GenericFamily::ALL.iter().position(|f| f == family) {
                        known[slot] = true;
                    }
                }
                AliasTag::Extension(_) => {
                    if !extensions.contains(alias) {
                        extensions.push(alias.clone());
                    }
                }
            }
        }

        let mut ordered: Vec<AliasTag> = GenericFamily::ALL
            .into_iter()
            .zip(known)
            .filter(|(_, present)| *present)
            .map(|(family, _)| AliasTag::Known(family))
            .collect();
        ordered.extend(extensions);
        Self { aliases: ordered }
    }

    /// Union of two sets: `self`'s order, then aliases only `other` has.
    ///
    /// Standard aliases stay in canonical order even when only `other`
    /// carries them.
    pub fn union(&self, other: &AliasSet) -> AliasSet {
        AliasSet::from_aliases(self.aliases.iter().chain(other.aliases.iter()))
    }

    /// Iterates aliases in column order.
    pub fn iter(&self) -> std::slice::Iter<'_, AliasTag> {
        self.aliases.iter()
    }

    /// Returns `true` if `alias` is part of the set.
    pub fn contains(&self, alias: &AliasTag) -> bool {
        self.aliases.contains(alias)
    }

    /// Number of aliases (columns).
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns `true` when the set holds no aliases (an empty dataset).
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Aliases as a slice, in column order.
    pub fn as_slice(&self) -> &[AliasTag] {
        &self.aliases
    }
}

impl<'a> IntoIterator for &'a AliasSet {
    type Item = &'a AliasTag;
    type IntoIter = std::slice::Iter<'a, AliasTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.aliases.iter()
    }
}

impl Serialize for AliasSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.aliases.serialize(serializer)
    }
}

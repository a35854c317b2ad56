/// Resolution records and the dataset envelope that carries them.
///
/// Field names follow the captured JSON document (`lang`, `lang_name`,
/// `file`, ...); the Rust names describe what the field holds.
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alias::AliasTag;

/// One observed font resolution for a (language, alias) pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResolutionRecord {
    /// Language tag (`en`, `zh-cn`, `und-zsye`, ...).
    #[serde(rename = "lang")]
    pub language: String,
    /// Human-readable language name; the primary grouping key.
    #[serde(rename = "lang_name")]
    pub display_name: String,
    /// Generic family that was resolved.
    pub alias: AliasTag,
    /// File name of the resolved font.
    pub file: String,
    /// Family name of the resolved font.
    pub family: String,
    /// Style name of the resolved font.
    pub style: String,
}

impl ResolutionRecord {
    /// Returns `true` if both records resolved to the same concrete font.
    pub fn same_font(&self, other: &ResolutionRecord) -> bool {
        self.family == other.family && self.style == other.style && self.file == other.file
    }
}

/// Distribution identity of a capture.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Distribution {
    /// Distribution id (`fedora`, `centos`, ...).
    pub id: String,
    /// Release (`40`, `rawhide`, ...).
    pub version_id: String,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.version_id)
    }
}

/// Font-set profile that produced a capture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Default fonts only.
    Minimal,
    /// Default fonts plus some extra fonts.
    Extra,
    /// Every font available for the distribution.
    All,
    /// Any other label, kept verbatim.
    Other(String),
}

impl Pattern {
    /// Returns the pattern label as it appears in captured JSON.
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Minimal => "minimal",
            Pattern::Extra => "extra",
            Pattern::All => "all",
            Pattern::Other(s) => s.as_str(),
        }
    }

    /// One-line description of the font set, for report footnotes.
    ///
    /// Unknown patterns have no description.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            Pattern::Minimal => Some("minimal default fonts"),
            Pattern::Extra => Some("default fonts + some extra fonts"),
            Pattern::All => Some("all the fonts available for distribution"),
            Pattern::Other(_) => None,
        }
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        match s {
            "minimal" => Pattern::Minimal,
            "extra" => Pattern::Extra,
            "all" => Pattern::All,
            other => Pattern::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Pattern::from(s.as_str()))
    }
}

/// A complete capture: distribution identity, pattern, tool version and the
/// ordered resolution records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Distribution the capture was taken on.
    #[serde(flatten)]
    pub distribution: Distribution,
    /// Font-set profile; `None` when the capture recorded `null`.
    pub pattern: Option<Pattern>,
    /// Version of the capturing tool.
    pub fq_id: String,
    /// Resolution records in capture order.
    pub fonts: Vec<ResolutionRecord>,
}

impl Dataset {
    /// Default report title: `"{id} {version_id}: {pattern}"`.
    ///
    /// A missing pattern renders as `unknown`.
    pub fn default_title(&self) -> String {
        let pattern = self.pattern.as_ref().map_or("unknown", Pattern::as_str);
        format!("{}: {pattern}", self.distribution)
    }

    /// Image label used in captions: `"{id}:{version_id}"`.
    pub fn image_label(&self) -> String {
        format!("{}:{}", self.distribution.id, self.distribution.version_id)
    }
}

use std::iter;

use serde_json::{Value, json};

use crate::alias::{AliasSet, AliasTag};
use crate::diff::DatasetDiff;
use crate::group::LanguageGroups;
use crate::normalize::LanguageEntry;

use super::{Chunks, RenderLabels, Renderer};

/// A single pretty-printed JSON document per report.
///
/// Family lists are positional and aligned with the document's `aliases`
/// array; a missing alias is `null`.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    labels: RenderLabels,
}

impl JsonRenderer {
    /// Creates a JSON renderer.
    pub fn new(labels: RenderLabels) -> Self {
        Self { labels }
    }

    fn table_document(&self, groups: &LanguageGroups) -> Value {
        let aliases = groups.aliases();
        let rows: Vec<Value> = groups
            .iter()
            .map(|(key, members)| {
                let attention: Vec<&str> = key.attention(aliases).map(AliasTag::as_str).collect();
                let members: Vec<Value> = members.iter().map(|(k, e)| member_json(k, e)).collect();
                json!({
                    "families": key.0,
                    "members": members,
                    "attention": attention,
                })
            })
            .collect();

        json!({
            "title": self.labels.title,
            "image": self.labels.image,
            "aliases": aliases,
            "groups": rows,
        })
    }

    fn diff_document(&self, diff: &DatasetDiff) -> Value {
        let aliases = &diff.aliases;
        let unchanged: Vec<Value> = diff
            .unchanged
            .iter()
            .map(|(key, members)| {
                let members: Vec<&String> = members.keys().collect();
                json!({
                    "families": key.0,
                    "members": members,
                })
            })
            .collect();
        let changed: Vec<Value> = diff
            .transitions
            .iter()
            .map(|(key, members)| {
                let members: Vec<Value> = members
                    .iter()
                    .map(|(k, c)| {
                        json!({
                            "key": k,
                            "before_tags": c.before.tags,
                            "after_tags": c.after.tags,
                        })
                    })
                    .collect();
                json!({
                    "before": key.before,
                    "after": key.after,
                    "members": members,
                })
            })
            .collect();

        json!({
            "title": self.labels.title,
            "image": self.labels.image,
            "diff_image": self.labels.diff_image,
            "aliases": aliases,
            "summary": diff.summary(),
            "unchanged": unchanged,
            "removed": entries_json(aliases, diff.missing_from_b.iter()),
            "added": entries_json(aliases, diff.missing_from_a.iter()),
            "changed": changed,
        })
    }
}

fn member_json(key: &str, entry: &LanguageEntry) -> Value {
    json!({
        "key": key,
        "display_name": entry.display_name,
        "tags": entry.tags,
    })
}

fn entries_json<'a, I>(aliases: &AliasSet, entries: I) -> Vec<Value>
where
    I: Iterator<Item = (&'a String, &'a LanguageEntry)>,
{
    entries
        .map(|(k, e)| {
            let mut value = member_json(k, e);
            value["families"] = json!(e.families(aliases));
            value
        })
        .collect()
}

impl Renderer for JsonRenderer {
    fn render_table<'a>(&'a self, groups: &'a LanguageGroups) -> Chunks<'a> {
        Box::new(iter::once_with(move || {
            format!("{:#}\n", self.table_document(groups))
        }))
    }

    fn render_diff<'a>(&'a self, diff: &'a DatasetDiff) -> Chunks<'a> {
        Box::new(iter::once_with(move || {
            format!("{:#}\n", self.diff_document(diff))
        }))
    }
}

use std::iter;

use crate::alias::{AliasSet, AliasTag};
use crate::diff::{ChangedEntry, DatasetDiff, TransitionKey, TransitionMembers};
use crate::group::{GroupMembers, LanguageGroups, NOT_AVAILABLE, ResolutionKey};
use crate::normalize::{LanguageEntry, row_label};
use crate::record::Pattern;

use super::{Chunks, RenderLabels, Renderer};

const DOCTYPE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \
                       \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">";

const BASE_STYLE: &str = "table {\n  border-collapse: collapse;\n}\n\
                          table, th, td {\n  border-style: solid;\n  border-width: 1px;\n  \
                          border-color: #000000;\n}\n";

const TABLE_STYLE: &str = ".match {\n}\n.notmatch {\n  color: orange\n}\n";

const DIFF_STYLE: &str = ".lang {\n  word-break: break-all;\n  width: 40%;\n}\n\
                          .symbol {\n  min-width: 10px;\n  width: 1%\n}\n\
                          .original {\n  color: red\n}\n.diff {\n  color: green\n}\n";

const NOTE_OPEN: &str = "<div name=\"note\" style=\"font-size: 10px; color: gray;\">";

const ATTENTION_NOTE: &str = "Note: orange colored name means needing some attention because \
                              there are no clue in family name if a font is certainly assigned \
                              to proper generic alias";

/// XHTML report with an embedded stylesheet.
///
/// Flat tables mark every family `match` or `notmatch`; diffs use
/// `original`/`diff` cells with `rowspan="2"` for values both sides share.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    labels: RenderLabels,
}

impl HtmlRenderer {
    /// Creates an HTML renderer.
    pub fn new(labels: RenderLabels) -> Self {
        Self { labels }
    }

    fn head(&self, style: &str, notes: &[String]) -> String {
        let mut out = format!(
            "{DOCTYPE}\n<html>\n<head><title>Fonts table for {}</title>\
             <style type=\"text/css\">\n{BASE_STYLE}{style}</style></head>\n<body>\n",
            escape(&self.labels.title)
        );
        for note in notes {
            out.push_str(&format!("{NOTE_OPEN}{}</div>\n", escape(note)));
        }
        out
    }

    fn footer(&self) -> String {
        format!(
            "</tbody>\n</table>\n<div name=\"footer\" style=\"text-align:right;float:right;\
             font-size:10px;color:gray;\">Generated by fontquery({} image) + fontquery-core {}\
             </div>\n</body>\n</html>\n",
            escape(&self.labels.image),
            crate::version()
        )
    }

    fn table_notes(&self) -> Vec<String> {
        let mut notes = vec![ATTENTION_NOTE.to_owned()];
        if let Some(description) = Pattern::from(self.labels.image.as_str()).description() {
            notes.push(format!("This table was generated with {description}"));
        }
        notes
    }

    fn diff_notes(&self) -> Vec<String> {
        let (image, diff_image) = (&self.labels.image, &self.labels.diff_image);
        vec![
            format!(
                "Note: No symbols at 2nd column means no difference. \
                 -/+ symbols means there are difference between {image} and {diff_image}"
            ),
            format!("Legend: - ({image}), + ({diff_image})"),
        ]
    }
}

/// Escapes text for element content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn header_row(aliases: &AliasSet, symbol_column: bool) -> String {
    let mut out = String::from("<table><thead><tr>\n<th>Language</th>\n");
    if symbol_column {
        out.push_str("<th></th>\n");
    }
    for alias in aliases {
        out.push_str(&format!("<th>{}</th>\n", escape(&alias.column_label())));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    out
}

fn table_row(aliases: &AliasSet, key: &ResolutionKey, members: &GroupMembers) -> String {
    let mut out = format!(
        "<tr>\n<td class=\"lang\">{}</td>\n",
        escape(&row_label(members.values()))
    );
    for (alias, family) in aliases.iter().zip(key.display_families()) {
        let class = if alias.family_matches(family) {
            "match"
        } else {
            "notmatch"
        };
        out.push_str(&format!("<td class=\"{class}\">{}</td>\n", escape(family)));
    }
    out.push_str("</tr>\n");
    out
}

fn unchanged_row(key: &ResolutionKey, members: &GroupMembers) -> String {
    let mut out = format!(
        "<tr>\n<td class=\"lang\">{}</td>\n<td></td>\n",
        escape(&row_label(members.values()))
    );
    for family in key.display_families() {
        out.push_str(&format!("<td>{}</td>\n", escape(family)));
    }
    out.push_str("</tr>\n");
    out
}

fn one_sided_row(aliases: &AliasSet, entry: &LanguageEntry, removed: bool) -> String {
    let present: Vec<&str> = aliases
        .iter()
        .map(|a: &AliasTag| entry.family(a).unwrap_or(NOT_AVAILABLE))
        .collect();
    let absent: Vec<&str> = vec![NOT_AVAILABLE; aliases.len()];
    let (old, new) = if removed {
        (present, absent)
    } else {
        (absent, present)
    };

    let mut out = format!(
        "<tr>\n<td class=\"lang\" rowspan=\"2\">{}</td>\n<td class=\"original symbol\">-</td>\n",
        escape(&entry.label())
    );
    for family in old {
        out.push_str(&format!("<td class=\"original\">{}</td>\n", escape(family)));
    }
    out.push_str("</tr>\n<tr>\n<td class=\"diff symbol\">+</td>\n");
    for family in new {
        out.push_str(&format!("<td class=\"diff\">{}</td>\n", escape(family)));
    }
    out.push_str("</tr>\n");
    out
}

fn transition_row(key: &TransitionKey, members: &TransitionMembers) -> String {
    let label = escape(&row_label(members.values().map(|c| &c.before)));
    let retagged = members.values().any(ChangedEntry::retagged);
    let mut out = if retagged {
        format!("<tr>\n<td class=\"lang original\">{label}</td>\n")
    } else {
        format!("<tr>\n<td class=\"lang\" rowspan=\"2\">{label}</td>\n")
    };
    out.push_str("<td class=\"original symbol\">-</td>\n");
    let mut added = String::new();
    for (old, new) in key.before.iter().zip(&key.after) {
        let old_text = escape(old.as_deref().unwrap_or(NOT_AVAILABLE));
        if old == new {
            out.push_str(&format!("<td rowspan=\"2\">{old_text}</td>\n"));
        } else {
            out.push_str(&format!("<td class=\"original\">{old_text}</td>\n"));
            added.push_str(&format!(
                "<td class=\"diff\">{}</td>\n",
                escape(new.as_deref().unwrap_or(NOT_AVAILABLE))
            ));
        }
    }
    out.push_str("</tr>\n<tr>\n");
    if retagged {
        out.push_str(&format!(
            "<td class=\"lang diff\">{}</td>\n",
            escape(&row_label(members.values().map(|c| &c.after)))
        ));
    }
    out.push_str("<td class=\"diff symbol\">+</td>\n");
    out.push_str(&added);
    out.push_str("</tr>\n");
    out
}

impl Renderer for HtmlRenderer {
    fn render_table<'a>(&'a self, groups: &'a LanguageGroups) -> Chunks<'a> {
        let aliases = groups.aliases();
        let head = self.head(TABLE_STYLE, &self.table_notes()) + &header_row(aliases, false);
        let rows = groups
            .iter()
            .map(move |(key, members)| table_row(aliases, key, members));
        Box::new(
            iter::once(head)
                .chain(rows)
                .chain(iter::once_with(move || self.footer())),
        )
    }

    fn render_diff<'a>(&'a self, diff: &'a DatasetDiff) -> Chunks<'a> {
        let aliases = &diff.aliases;
        let head = self.head(DIFF_STYLE, &self.diff_notes()) + &header_row(aliases, true);
        let unchanged = diff
            .unchanged
            .iter()
            .map(|(key, members)| unchanged_row(key, members));
        let removed = diff
            .missing_from_b
            .values()
            .map(move |entry| one_sided_row(aliases, entry, true));
        let added = diff
            .missing_from_a
            .values()
            .map(move |entry| one_sided_row(aliases, entry, false));
        let changed = diff
            .transitions
            .iter()
            .map(|(key, members)| transition_row(key, members));

        Box::new(
            iter::once(head)
                .chain(unchanged)
                .chain(removed)
                .chain(added)
                .chain(changed)
                .chain(iter::once_with(move || self.footer())),
        )
    }
}

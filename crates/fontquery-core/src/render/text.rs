use std::iter;

use crate::alias::{AliasSet, AliasTag};
use crate::diff::{ChangedEntry, DatasetDiff, TransitionKey, TransitionMembers};
use crate::group::{GroupMembers, LanguageGroups, NOT_AVAILABLE, ResolutionKey};
use crate::normalize::{LanguageEntry, row_label};

use super::layout::{Cell, format_line};
use super::palette::{Palette, Role};
use super::{Chunks, RenderLabels, Renderer};

const LANGUAGE_HEADING: &str = "Language";
const UNMARKED: &str = "  ";
const REMOVED: &str = "- ";
const ADDED: &str = "+ ";

/// Column-aligned text, styled through a [`Palette`].
///
/// Flat tables color families that need attention; diffs prefix lines with
/// two spaces, `- ` or `+ `.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    labels: RenderLabels,
    palette: Palette,
}

impl TextRenderer {
    /// Creates a text renderer.
    pub fn new(labels: RenderLabels, palette: Palette) -> Self {
        Self { labels, palette }
    }

    /// Captions this renderer was built with.
    pub fn labels(&self) -> &RenderLabels {
        &self.labels
    }

    fn heading_cells(&self, aliases: &AliasSet) -> Vec<Cell> {
        iter::once(LANGUAGE_HEADING.to_owned())
            .chain(aliases.iter().map(AliasTag::column_label))
            .map(|h| Cell::painted(self.palette, Role::Heading, &h))
            .collect()
    }

    fn table_row(&self, aliases: &AliasSet, key: &ResolutionKey, members: &GroupMembers) -> String {
        let mut cells = vec![Cell::plain(&row_label(members.values()))];
        for (alias, family) in aliases.iter().zip(key.display_families()) {
            let role = if alias.family_matches(family) {
                Role::Match
            } else {
                Role::Attention
            };
            cells.push(Cell::painted(self.palette, role, family));
        }
        lines_chunk(format_line(&cells), |l| l)
    }

    fn unchanged_row(&self, key: &ResolutionKey, members: &GroupMembers) -> String {
        let cells: Vec<Cell> = iter::once(row_label(members.values()))
            .chain(key.display_families().map(str::to_owned))
            .map(|v| Cell::plain(&v))
            .collect();
        lines_chunk(format_line(&cells), |l| format!("{UNMARKED}{l}"))
    }

    /// `present` on one side, `N/A` on the other.
    fn one_sided_row(&self, aliases: &AliasSet, entry: &LanguageEntry, removed: bool) -> String {
        let values: Vec<Cell> = iter::once(entry.label())
            .chain(
                aliases
                    .iter()
                    .map(|a| entry.family(a).unwrap_or(NOT_AVAILABLE).to_owned()),
            )
            .map(|v| Cell::plain(&v))
            .collect();
        let absent: Vec<Cell> = iter::once(Cell::blank())
            .chain(aliases.iter().map(|_| Cell::plain(NOT_AVAILABLE)))
            .collect();
        let (minus, plus) = if removed {
            (values, absent)
        } else {
            (absent, values)
        };

        let palette = self.palette;
        let mut out = lines_chunk(format_line(&minus), |l| {
            palette.paint(Role::Removed, &format!("{REMOVED}{l}"))
        });
        out.push_str(&lines_chunk(format_line(&plus), |l| {
            palette.paint(Role::Added, &format!("{ADDED}{l}"))
        }));
        out
    }

    fn transition_row(&self, key: &TransitionKey, members: &TransitionMembers) -> String {
        let label = row_label(members.values().map(|c| &c.before));
        let mut before = vec![Cell::plain(&label)];
        let mut after = if members.values().any(ChangedEntry::retagged) {
            let label = row_label(members.values().map(|c| &c.after));
            vec![Cell::painted(self.palette, Role::Added, &label)]
        } else {
            vec![Cell::blank()]
        };
        for (old, new) in key.before.iter().zip(&key.after) {
            let old_text = old.as_deref().unwrap_or(NOT_AVAILABLE);
            if old == new {
                before.push(Cell::plain(old_text));
                after.push(Cell::blank());
            } else {
                let new_text = new.as_deref().unwrap_or(NOT_AVAILABLE);
                before.push(Cell::painted(self.palette, Role::Removed, old_text));
                after.push(Cell::painted(self.palette, Role::Added, new_text));
            }
        }

        let minus = self.palette.paint(Role::Removed, REMOVED);
        let plus = self.palette.paint(Role::Added, ADDED);
        let mut out = lines_chunk(format_line(&before), |l| format!("{minus}{l}"));
        out.push_str(&lines_chunk(format_line(&after), |l| format!("{plus}{l}")));
        out
    }
}

/// Joins laid-out lines into one chunk, each line ending with `\n`.
fn lines_chunk(lines: Vec<String>, decorate: impl Fn(String) -> String) -> String {
    lines
        .into_iter()
        .map(|l| decorate(l) + "\n")
        .collect()
}

impl Renderer for TextRenderer {
    fn render_table<'a>(&'a self, groups: &'a LanguageGroups) -> Chunks<'a> {
        let aliases = groups.aliases();
        let heading = lines_chunk(format_line(&self.heading_cells(aliases)), |l| l);
        let rows = groups
            .iter()
            .map(move |(key, members)| self.table_row(aliases, key, members));
        Box::new(iter::once(heading).chain(rows))
    }

    fn render_diff<'a>(&'a self, diff: &'a DatasetDiff) -> Chunks<'a> {
        let aliases = &diff.aliases;
        let heading = lines_chunk(format_line(&self.heading_cells(aliases)), |l| {
            format!("{UNMARKED}{l}")
        });
        let unchanged = diff
            .unchanged
            .iter()
            .map(move |(key, members)| self.unchanged_row(key, members));
        let removed = diff
            .missing_from_b
            .values()
            .map(move |entry| self.one_sided_row(aliases, entry, true));
        let added = diff
            .missing_from_a
            .values()
            .map(move |entry| self.one_sided_row(aliases, entry, false));
        let changed = diff
            .transitions
            .iter()
            .map(move |(key, members)| self.transition_row(key, members));

        Box::new(
            iter::once(heading)
                .chain(unchanged)
                .chain(removed)
                .chain(added)
                .chain(changed),
        )
    }
}

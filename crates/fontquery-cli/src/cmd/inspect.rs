//! Implementation of `fontquery inspect <file>`.
//!
//! Parses a captured dataset and prints summary statistics to stdout:
//! - distribution, pattern and capture tool version
//! - record, language tag and language counts
//! - aliases seen, in report column order
//! - normalized rows, resolution groups and groups needing attention
//!
//! Normalization runs with extension aliases accepted. A dataset that fails
//! normalization is still inspected; the failure is reported as `problem`.
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = read or parse failure.
use std::collections::BTreeSet;
use std::io::Write;

use fontquery_core::{
    AliasSet, Dataset, LanguageGroups, NormalizeOptions, group_by_resolution, normalize,
};
use serde_json::json;

use super::load_dataset;
use crate::InspectFormat;
use crate::PathOrStdin;
use crate::error::CliError;

/// Statistics gathered from a parsed [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectStats {
    /// `"{id} {version_id}"`.
    pub distribution: String,
    /// Pattern name, or `"unknown"`.
    pub pattern: String,
    /// Version of the capturing tool.
    pub fq_id: String,
    /// Number of records.
    pub records: usize,
    /// Distinct language tags.
    pub language_tags: usize,
    /// Distinct display names.
    pub languages: usize,
    /// Aliases in column order.
    pub aliases: Vec<String>,
    /// Normalized rows; `None` if normalization failed.
    pub entries: Option<usize>,
    /// Resolution groups; `None` if normalization failed.
    pub groups: Option<usize>,
    /// Groups with at least one family failing the keyword match.
    pub attention_groups: Option<usize>,
    /// Normalization failure, if any.
    pub problem: Option<String>,
}

impl InspectStats {
    /// Computes statistics from a parsed [`Dataset`].
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let language_tags: BTreeSet<&str> =
            dataset.fonts.iter().map(|r| r.language.as_str()).collect();
        let languages: BTreeSet<&str> = dataset
            .fonts
            .iter()
            .map(|r| r.display_name.as_str())
            .collect();
        let aliases = AliasSet::from_aliases(dataset.fonts.iter().map(|r| &r.alias));

        let (entries, groups, attention_groups, problem) =
            match normalize(dataset, &NormalizeOptions::open()) {
                Ok(table) => {
                    let groups = group_by_resolution(&table);
                    (
                        Some(table.len()),
                        Some(groups.len()),
                        Some(attention_count(&groups)),
                        None,
                    )
                }
                Err(e) => (None, None, None, Some(e.to_string())),
            };

        Self {
            distribution: dataset.distribution.to_string(),
            pattern: dataset
                .pattern
                .as_ref()
                .map_or_else(|| "unknown".to_owned(), ToString::to_string),
            fq_id: dataset.fq_id.clone(),
            records: dataset.fonts.len(),
            language_tags: language_tags.len(),
            languages: languages.len(),
            aliases: aliases.iter().map(ToString::to_string).collect(),
            entries,
            groups,
            attention_groups,
            problem,
        }
    }
}

fn attention_count(groups: &LanguageGroups) -> usize {
    groups
        .iter()
        .filter(|(key, _)| key.attention(groups.aliases()).next().is_some())
        .count()
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the input cannot be read or
/// parsed, or stdout cannot be written.
pub fn run(file: &PathOrStdin, format: InspectFormat, max_file_size: u64) -> Result<(), CliError> {
    let dataset = load_dataset(file, max_file_size)?;
    let stats = InspectStats::from_dataset(&dataset);
    if let Some(problem) = &stats.problem {
        tracing::warn!(source = %file, %problem, "dataset does not normalize");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        InspectFormat::Human => print_human(&mut out, &stats),
        InspectFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::output("stdout", &e))
}

/// Writes inspect statistics in human-readable aligned format.
fn print_human<W: Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "distribution:     {}", stats.distribution)?;
    writeln!(w, "pattern:          {}", stats.pattern)?;
    writeln!(w, "fq_id:            {}", stats.fq_id)?;
    writeln!(w, "records:          {}", stats.records)?;
    writeln!(w, "language_tags:    {}", stats.language_tags)?;
    writeln!(w, "languages:        {}", stats.languages)?;
    writeln!(w, "aliases:          {}", stats.aliases.join(", "))?;
    match &stats.problem {
        None => {
            writeln!(w, "entries:          {}", count(stats.entries))?;
            writeln!(w, "groups:           {}", count(stats.groups))?;
            writeln!(w, "attention_groups: {}", count(stats.attention_groups))?;
        }
        Some(problem) => writeln!(w, "problem:          {problem}")?,
    }
    Ok(())
}

fn count(n: Option<usize>) -> String {
    n.map_or_else(|| "-".to_owned(), |n| n.to_string())
}

/// Writes inspect statistics as a single JSON object.
fn print_json<W: Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let value = json!({
        "distribution": stats.distribution,
        "pattern": stats.pattern,
        "fq_id": stats.fq_id,
        "records": stats.records,
        "language_tags": stats.language_tags,
        "languages": stats.languages,
        "aliases": stats.aliases,
        "entries": stats.entries,
        "groups": stats.groups,
        "attention_groups": stats.attention_groups,
        "problem": stats.problem,
    });
    let text = serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?;
    writeln!(w, "{text}")
}

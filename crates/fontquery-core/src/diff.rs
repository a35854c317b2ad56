/// Comparison of two normalized datasets.
///
/// Dataset A is the baseline ("old"); dataset B is the candidate ("new").
/// Entries pair up by display name: a name both datasets carry yields
/// `matched` or `changed` entries, one per pairing of its rows through their
/// tags, even when the two captures split the name's tags differently. Names
/// only A has land in `missing_from_b`; names only B has in `missing_from_a`.
///
/// On top of the partition the diff carries two grouped views for rendering:
///
/// - `unchanged`: matched entries grouped by their resolutions;
/// - `transitions`: changed entries grouped by (before families, after
///   families), so languages that moved from one font set to another in the
///   same way share a row.
mod engine;
mod types;

pub use engine::diff;
pub use types::{
    ChangedEntry, DatasetDiff, DiffSummary, TransitionGroups, TransitionKey, TransitionMembers,
};

#[cfg(test)]
mod tests;

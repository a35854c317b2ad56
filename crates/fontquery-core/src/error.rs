//! Errors raised while reading and normalizing a dataset.
use thiserror::Error;

/// Failure to turn captured JSON into a normalized dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The input is not syntactically valid JSON.
    #[error("invalid JSON at line {line}, column {column}: {detail}")]
    InvalidJson {
        /// 1-based line of the syntax error.
        line: usize,
        /// 1-based column of the syntax error.
        column: usize,
        /// Parser message.
        detail: String,
    },

    /// A required field is absent or has the wrong type, or a value is not
    /// accepted under the active alias policy.
    #[error("malformed dataset: `{field}` must be {expected}")]
    MalformedDataset {
        /// Path of the offending field, e.g. `fonts[3].alias`.
        field: String,
        /// What the field was expected to hold.
        expected: String,
    },

    /// Two records share the same (language tag, alias) pair.
    #[error("duplicate record for language `{language}` and alias `{alias}`")]
    DuplicateRecord {
        /// Language tag.
        language: String,
        /// Alias name.
        alias: String,
    },

    /// A language tag lacks a record for one or more aliases of the dataset.
    #[error(
        "language `{language}` ({display_name}) has no record for alias(es): {}",
        .missing.join(", ")
    )]
    IncompleteLanguageEntry {
        /// Language tag.
        language: String,
        /// Display name the tag belongs to.
        display_name: String,
        /// Aliases without a record, in alias order.
        missing: Vec<String>,
    },
}

impl DatasetError {
    pub(crate) fn malformed(field: impl Into<String>, expected: impl Into<String>) -> Self {
        DatasetError::MalformedDataset {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod alias;
pub mod diff;
pub mod error;
pub mod group;
pub mod normalize;
pub mod parse;
pub mod record;
pub mod render;
pub mod report;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use alias::{AliasSet, AliasTag, GenericFamily};
pub use diff::{
    ChangedEntry, DatasetDiff, DiffSummary, TransitionGroups, TransitionKey, TransitionMembers,
    diff,
};
pub use error::DatasetError;
pub use group::{GroupMembers, LanguageGroups, NOT_AVAILABLE, ResolutionKey, group_by_resolution};
pub use normalize::{
    AliasPolicy, LanguageEntry, LanguageTable, NormalizeOptions, normalize, row_label,
};
pub use parse::{dataset_from_value, parse_dataset};
pub use record::{Dataset, Distribution, Pattern, ResolutionRecord};
pub use render::{
    COLUMN_WIDTH, Cell, Chunks, HtmlRenderer, JsonRenderer, Palette, RenderFormat, RenderLabels,
    Renderer, Role, TextRenderer, format_line,
};
pub use report::{
    DatasetRole, ReportError, ReportMode, ReportOptions, ReportOutcome, write_report,
};

/// Returns the current version of the fontquery-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }

    #[test]
    fn parse_normalize_render_pipeline() {
        let json = r#"{
            "id": "fedora", "version_id": "40", "pattern": "minimal", "fq_id": "1.0",
            "fonts": [
                {"lang": "en", "lang_name": "English", "alias": "sans-serif",
                 "file": "DejaVuSans.ttf", "family": "DejaVu Sans", "style": "Book"},
                {"lang": "en", "lang_name": "English", "alias": "serif",
                 "file": "DejaVuSerif.ttf", "family": "DejaVu Serif", "style": "Book"},
                {"lang": "en", "lang_name": "English", "alias": "monospace",
                 "file": "DejaVuSansMono.ttf", "family": "DejaVu Sans Mono", "style": "Book"}
            ]
        }"#;
        let dataset = parse_dataset(json).expect("parse");
        let table = normalize(&dataset, &NormalizeOptions::default()).expect("normalize");
        let groups = group_by_resolution(&table);
        let renderer = RenderFormat::Text.renderer(RenderLabels::default(), Palette::Plain);
        let out: String = renderer.render_table(&groups).collect();
        assert!(out.contains("English(en)"), "output: {out}");
    }
}

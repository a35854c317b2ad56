//! Font resolution dataset generator and benchmark utilities for fontquery.
//!
//! This crate provides deterministic generation of realistic capture
//! datasets, and of later captures derived from them, for benchmarking and
//! invariant testing of `fontquery-core`.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;

pub use generator::{
    GeneratorConfig, MutationConfig, SizeTier, generate_dataset, mutate_dataset,
};

/// Returns the paths of the huge-tier baseline and candidate fixtures.
///
/// The files live under `target/bench-fixtures/` so they are automatically
/// gitignored and shared between the generator binary and the benchmark
/// harness.
pub fn huge_fixture_paths() -> (PathBuf, PathBuf) {
    let dir = huge_fixtures_dir();
    (dir.join("huge-a.json"), dir.join("huge-b.json"))
}

fn huge_fixtures_dir() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
}

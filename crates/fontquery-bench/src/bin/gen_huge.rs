//! Generates the huge-tier benchmark fixtures to disk.
//!
//! Writes a baseline capture and a mutated candidate to
//! `target/bench-fixtures/`; both are loaded by `benches/huge_dataset.rs`
//! at benchmark time.

use std::error::Error;
use std::fs;
use std::io::BufWriter;

use fontquery_bench::{
    MutationConfig, SizeTier, generate_dataset, huge_fixture_paths, mutate_dataset,
};

fn main() -> Result<(), Box<dyn Error>> {
    let (a_path, b_path) = huge_fixture_paths();
    if let Some(parent) = a_path.parent() {
        fs::create_dir_all(parent)?;
    }

    eprintln!("Generating Huge tier (~100K languages)...");
    let a = generate_dataset(&SizeTier::Huge.config(42));
    let b = mutate_dataset(
        &a,
        &MutationConfig {
            seed: 43,
            change_rate: 0.05,
            remove_rate: 0.01,
            add_languages: 500,
        },
    );
    eprintln!("Generated {} and {} records", a.fonts.len(), b.fonts.len());

    for (path, dataset) in [(&a_path, &a), (&b_path, &b)] {
        eprintln!("Writing JSON to {}...", path.display());
        let out = fs::File::create(path)?;
        serde_json::to_writer(BufWriter::new(out), dataset)?;
        let meta = fs::metadata(path)?;
        eprintln!("JSON: {:.1} MB", meta.len() as f64 / (1024.0 * 1024.0));
    }

    Ok(())
}

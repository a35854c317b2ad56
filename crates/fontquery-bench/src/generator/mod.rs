//! Font resolution dataset generator.
//!
//! Produces [`Dataset`] values that normalize cleanly under the open alias
//! policy, with realistic collapsing (region variants of one language),
//! grouping (many languages sharing a handful of resolution trios) and the
//! occasional variant that resolves differently from its siblings.
//! [`mutate_dataset`] derives a second capture from a first so that diffs
//! have a controlled mix of unchanged, changed, removed and added entries.

pub mod families;
pub mod languages;

use std::collections::BTreeMap;

use fontquery_core::{
    AliasSet, AliasTag, Dataset, Distribution, GenericFamily, Pattern, ResolutionRecord,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Number of resolution trios shared across languages.
const COMMON_RESOLUTIONS: usize = 12;

/// Configuration for the dataset generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of display names.
    pub num_languages: usize,
    /// Upper bound on tags per display name (base tag plus region variants).
    pub max_tags_per_language: usize,
    /// Fraction of languages drawing their families from the shared pool.
    pub shared_resolution: f64,
    /// Fraction of multi-tag languages whose last variant resolves
    /// differently.
    pub split_variant_rate: f64,
    /// Aliases beyond the standard three, e.g. `emoji`.
    pub extension_aliases: Vec<String>,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~40 languages, ~200 records, ~30KB JSON
    Small,
    /// ~400 languages, ~2400 records, ~400KB JSON
    Medium,
    /// ~2000 languages, ~12000 records, ~2MB JSON
    Large,
    /// ~10000 languages, ~75000 records, ~12MB JSON
    XLarge,
    /// ~100000 languages, ~750000 records, ~120MB JSON
    Huge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                num_languages: 40,
                max_tags_per_language: 2,
                shared_resolution: 0.5,
                split_variant_rate: 0.1,
                extension_aliases: Vec::new(),
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_languages: 400,
                max_tags_per_language: 3,
                shared_resolution: 0.6,
                split_variant_rate: 0.1,
                extension_aliases: Vec::new(),
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_languages: 2_000,
                max_tags_per_language: 3,
                shared_resolution: 0.7,
                split_variant_rate: 0.05,
                extension_aliases: Vec::new(),
            },
            SizeTier::XLarge => GeneratorConfig {
                seed,
                num_languages: 10_000,
                max_tags_per_language: 4,
                shared_resolution: 0.7,
                split_variant_rate: 0.05,
                extension_aliases: Vec::new(),
            },
            SizeTier::Huge => GeneratorConfig {
                seed,
                num_languages: 100_000,
                max_tags_per_language: 4,
                shared_resolution: 0.8,
                split_variant_rate: 0.05,
                extension_aliases: vec!["emoji".to_owned()],
            },
        }
    }
}

/// Generates a dataset from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. Records come
/// out shuffled, the way a capture interleaves languages.
pub fn generate_dataset(config: &GeneratorConfig) -> Dataset {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let aliases: Vec<AliasTag> = GenericFamily::ALL
        .into_iter()
        .map(AliasTag::from)
        .chain(
            config
                .extension_aliases
                .iter()
                .map(|a| AliasTag::from(a.as_str())),
        )
        .collect();

    let common: Vec<Vec<String>> = (0..COMMON_RESOLUTIONS)
        .map(|_| random_resolution(&aliases, &mut rng))
        .collect();

    let mut fonts = Vec::with_capacity(config.num_languages * aliases.len() * 2);
    for index in 0..config.num_languages {
        let base = languages::language_tag(index);
        let name = languages::display_name(&base);
        let resolution = if rng.gen_bool(config.shared_resolution) {
            common[rng.gen_range(0..common.len())].clone()
        } else {
            random_resolution(&aliases, &mut rng)
        };

        let tag_count = rng.gen_range(1..=config.max_tags_per_language.max(1));
        let variants: Vec<String> = languages::variant_tags(&base, tag_count - 1).collect();
        let split = !variants.is_empty() && rng.gen_bool(config.split_variant_rate);

        push_language(&mut fonts, &base, &name, &aliases, &resolution);
        for (i, tag) in variants.iter().enumerate() {
            if split && i + 1 == variants.len() {
                let diverged = diverge(&aliases, &resolution, &mut rng);
                push_language(&mut fonts, tag, &name, &aliases, &diverged);
            } else {
                push_language(&mut fonts, tag, &name, &aliases, &resolution);
            }
        }
    }
    fonts.shuffle(&mut rng);

    Dataset {
        distribution: Distribution {
            id: "bench".to_owned(),
            version_id: config.seed.to_string(),
        },
        pattern: Some(if config.extension_aliases.is_empty() {
            Pattern::Minimal
        } else {
            Pattern::All
        }),
        fq_id: format!("fontquery-bench {}", env!("CARGO_PKG_VERSION")),
        fonts,
    }
}

fn random_resolution(aliases: &[AliasTag], rng: &mut StdRng) -> Vec<String> {
    aliases.iter().map(|a| families::pick(a, rng)).collect()
}

/// The same resolution with the last standard alias swapped for another
/// family.
fn diverge(aliases: &[AliasTag], resolution: &[String], rng: &mut StdRng) -> Vec<String> {
    let mut out = resolution.to_vec();
    let slot = GenericFamily::ALL.len() - 1;
    if let (Some(alias), Some(family)) = (aliases.get(slot), out.get_mut(slot)) {
        *family = families::pick_other(alias, family, rng);
    }
    out
}

fn push_language(
    fonts: &mut Vec<ResolutionRecord>,
    tag: &str,
    name: &str,
    aliases: &[AliasTag],
    resolution: &[String],
) {
    for (alias, family) in aliases.iter().zip(resolution) {
        fonts.push(families::record(tag, name, alias, family));
    }
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

/// How [`mutate_dataset`] derives a second capture.
#[derive(Debug, Clone)]
pub struct MutationConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Fraction of display names whose `sans-serif` family is replaced.
    pub change_rate: f64,
    /// Fraction of display names dropped entirely.
    pub remove_rate: f64,
    /// Number of new single-tag languages appended.
    pub add_languages: usize,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            change_rate: 0.1,
            remove_rate: 0.02,
            add_languages: 10,
        }
    }
}

/// Derives a later capture from `base`.
///
/// Changes rename the `sans-serif` family of every tag of a display name
/// (`"{family} v2"`), so the entry keys of `base` survive unchanged and every
/// entry of a changed name shows up as changed. Added languages use
/// `x-` tags that never collide with generated ones.
pub fn mutate_dataset(base: &Dataset, config: &MutationConfig) -> Dataset {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let sans = AliasTag::from(GenericFamily::SansSerif);

    let mut by_name: BTreeMap<&str, Vec<&ResolutionRecord>> = BTreeMap::new();
    for rec in &base.fonts {
        by_name.entry(rec.display_name.as_str()).or_default().push(rec);
    }

    let mut fonts = Vec::with_capacity(base.fonts.len());
    for records in by_name.into_values() {
        let roll: f64 = rng.gen_range(0.0..1.0);
        if roll < config.remove_rate {
            continue;
        }
        let change = roll < config.remove_rate + config.change_rate;
        for rec in records {
            let mut rec = rec.clone();
            if change && rec.alias == sans {
                rec.family = format!("{} v2", rec.family);
                rec.file = families::font_file(&rec.family);
            }
            fonts.push(rec);
        }
    }

    let aliases = AliasSet::from_aliases(base.fonts.iter().map(|r| &r.alias));
    let aliases: Vec<AliasTag> = aliases.iter().cloned().collect();
    for index in 0..config.add_languages {
        let base_tag = languages::language_tag(index);
        let tag = format!("x-{base_tag}");
        let name = format!("Added {}", languages::display_name(&base_tag));
        let resolution = random_resolution(&aliases, &mut rng);
        push_language(&mut fonts, &tag, &name, &aliases, &resolution);
    }

    Dataset {
        distribution: Distribution {
            id: base.distribution.id.clone(),
            version_id: format!("{}-next", base.distribution.version_id),
        },
        pattern: base.pattern.clone(),
        fq_id: base.fq_id.clone(),
        fonts,
    }
}

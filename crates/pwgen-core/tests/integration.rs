//! Integration tests for pwgen-core.
//!
//! These tests verify the full generation pipeline:
//! configuration → catalog lookup → pool assembly → seeding → sampling.

use std::io::Write;

use pwgen_core::{Catalog, Error, GeneratorConfig, Sampler, Seed, SeedSource};

fn generate(config: &GeneratorConfig) -> Vec<String> {
    let pool = config.build_pool(&Catalog::predefined()).unwrap();
    let mut sampler = Sampler::from_seed(Seed::from_source(&config.seed_source));
    sampler.generate(config.count, config.length, pool.as_slice())
}

fn seed_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

#[test]
fn binary_pool_end_to_end() {
    let config = GeneratorConfig {
        literals: vec!["01".to_string()],
        length: 10,
        count: 1,
        ..Default::default()
    };
    let out = generate(&config);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].len(), 10);
    assert!(out[0].chars().all(|c| c == '0' || c == '1'), "{}", out[0]);
}

#[test]
fn same_seed_file_same_output() {
    let file = seed_file(b"reproducible seed material");
    let config = GeneratorConfig {
        literals: vec!["01".to_string()],
        length: 10,
        seed_source: SeedSource::File(file.path().to_path_buf()),
        ..Default::default()
    };
    assert_eq!(generate(&config), generate(&config));
}

#[test]
fn different_seed_file_different_output() {
    let a = seed_file(b"first seed");
    let b = seed_file(b"second seed");
    let config = |path: &std::path::Path| GeneratorConfig {
        literals: vec!["01".to_string()],
        length: 64,
        seed_source: SeedSource::File(path.to_path_buf()),
        ..Default::default()
    };
    assert_ne!(generate(&config(a.path())), generate(&config(b.path())));
}

#[test]
fn os_seeded_runs_differ() {
    let config = GeneratorConfig {
        length: 32,
        ..Default::default()
    };
    assert_ne!(generate(&config), generate(&config));
}

#[test]
fn default_pool_is_printable_without_space() {
    let config = GeneratorConfig {
        length: 2000,
        ..Default::default()
    };
    let pool = config.build_pool(&Catalog::predefined()).unwrap();
    assert_eq!(pool.len(), 94);
    let out = generate(&config);
    assert!(out[0].bytes().all(|b| (33..=126).contains(&b)));
}

#[test]
fn unknown_set_produces_no_pool() {
    let config = GeneratorConfig {
        symbol_sets: vec!["num".to_string(), "nope".to_string()],
        ..Default::default()
    };
    let err = config.build_pool(&Catalog::predefined()).unwrap_err();
    assert!(matches!(err, Error::UnknownSymbolSet(name) if name == "nope"));
}

#[test]
fn missing_seed_file_still_generates() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        length: 12,
        count: 3,
        seed_source: SeedSource::File(dir.path().join("no-such-device")),
        ..Default::default()
    };
    let seed = Seed::from_source(&config.seed_source);
    assert!(seed.is_fallback());
    let out = generate(&config);
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|s| s.len() == 12));
}

#[test]
fn every_predefined_set_generates_members_only() {
    let catalog = Catalog::predefined();
    let mut sampler = Sampler::from_seed(Seed::from_bytes(b"members"));
    for set in catalog.iter() {
        let s = sampler.fill_random(500, set.characters());
        assert!(
            s.chars().all(|c| set.characters().contains(&c)),
            "{} produced a foreign symbol",
            set.name()
        );
    }
}

#[test]
fn duplicated_slots_weigh_more() {
    let pool = ['a', 'a', 'b'];
    let mut sampler = Sampler::from_seed(Seed::from_bytes(b"weights"));
    let sample = sampler.fill_random(30_000, &pool);
    let result = pwgen_tests::symbol_frequency(&sample, &pool);
    assert!(result.p_value.unwrap() > 0.0001, "{result:?}");

    let a = sample.chars().filter(|&c| c == 'a').count() as f64;
    let share = a / sample.len() as f64;
    assert!((share - 2.0 / 3.0).abs() < 0.02, "share of 'a' = {share}");
}

#[test]
fn alnum_output_is_uniform() {
    let catalog = Catalog::predefined();
    let pool = catalog.lookup("Alnum").unwrap();
    let mut sampler = Sampler::from_seed(Seed::from_bytes(b"alnum"));
    let sample = sampler.fill_random(62 * 200, pool.characters());
    let result = pwgen_tests::symbol_frequency(&sample, pool.characters());
    assert!(result.p_value.unwrap() > 0.0001, "{result:?}");
}

#[test]
fn binary_output_passes_battery() {
    let pool = ['0', '1'];
    let mut sampler = Sampler::from_seed(Seed::from_bytes(b"battery"));
    let sample = sampler.fill_random(20_000, &pool);
    let results = pwgen_tests::run_all_tests(&sample, &pool);
    assert_eq!(results.len(), 2);
    for r in &results {
        assert!(r.p_value.unwrap() > 0.0001, "{r:?}");
    }
}

#[test]
fn uniform_index_histogram_for_non_power_of_two() {
    let mut sampler = Sampler::from_seed(Seed::from_bytes(b"histogram"));
    for bound in [3usize, 10, 85] {
        let mut counts = vec![0u64; bound];
        for _ in 0..bound * 1_000 {
            counts[sampler.uniform_index(bound)] += 1;
        }
        let result = pwgen_tests::chi_square_uniformity(&counts);
        assert!(result.p_value.unwrap() > 0.0001, "bound {bound}: {result:?}");
    }
}

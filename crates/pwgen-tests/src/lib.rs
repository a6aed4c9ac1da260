//! Statistical checks for generated passwords.
//!
//! Each check returns a [`TestResult`] with a p-value (where applicable), a
//! pass/fail determination, and a letter grade (A through F). The checks work
//! on what the generator actually emits: index histograms, strings drawn from
//! a symbol pool, and two-symbol sequences.

use statrs::distribution::{ChiSquared, ContinuousCDF};
use statrs::function::erf::erfc;
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════════════
// Core types
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of a single statistical check.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub p_value: Option<f64>,
    pub statistic: f64,
    pub details: String,
    pub grade: char,
}

impl TestResult {
    /// Assign a letter grade based on p-value.
    ///
    /// - A: p >= 0.1
    /// - B: p >= 0.01
    /// - C: p >= 0.001
    /// - D: p >= 0.0001
    /// - F: otherwise or None
    pub fn grade_from_p(p: Option<f64>) -> char {
        match p {
            Some(p) if p >= 0.1 => 'A',
            Some(p) if p >= 0.01 => 'B',
            Some(p) if p >= 0.001 => 'C',
            Some(p) if p >= 0.0001 => 'D',
            _ => 'F',
        }
    }

    /// Determine pass/fail from p-value against a threshold (default 0.01).
    pub fn pass_from_p(p: Option<f64>, threshold: f64) -> bool {
        match p {
            Some(p) => p >= threshold,
            None => false,
        }
    }

    fn from_p(name: &str, p: f64, statistic: f64, details: String) -> Self {
        TestResult {
            name: name.to_string(),
            passed: TestResult::pass_from_p(Some(p), 0.01),
            p_value: Some(p),
            statistic,
            details,
            grade: TestResult::grade_from_p(Some(p)),
        }
    }

    fn failed(name: &str, details: String) -> Self {
        TestResult {
            name: name.to_string(),
            passed: false,
            p_value: None,
            statistic: 0.0,
            details,
            grade: 'F',
        }
    }
}

/// Return a failing `TestResult` when data is too short.
fn insufficient(name: &str, needed: usize, got: usize) -> TestResult {
    TestResult::failed(name, format!("Insufficient data: need {needed}, got {got}"))
}

// ═══════════════════════════════════════════════════════════════════════════════
// 1. FREQUENCY
// ═══════════════════════════════════════════════════════════════════════════════

/// Chi-squared goodness of fit of `counts` against expected shares proportional
/// to `weights`. Both slices index the same buckets.
pub fn chi_square_weighted(counts: &[u64], weights: &[u64]) -> TestResult {
    let name = "Weighted Chi-Square";
    assert_eq!(counts.len(), weights.len(), "one weight per bucket");
    let buckets = counts.len();
    if buckets < 2 {
        return insufficient(name, 2, buckets);
    }
    let n: u64 = counts.iter().sum();
    let total_weight: u64 = weights.iter().sum();
    if total_weight == 0 || weights.contains(&0) {
        return TestResult::failed(name, "Zero-weight bucket".to_string());
    }
    let min_weight = weights.iter().copied().min().unwrap_or(1);
    let needed = 5 * total_weight / min_weight;
    if n < needed {
        return insufficient(name, needed as usize, n as usize);
    }

    let chi2: f64 = counts
        .iter()
        .zip(weights)
        .map(|(&c, &w)| {
            let expected = n as f64 * w as f64 / total_weight as f64;
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    let Ok(dist) = ChiSquared::new((buckets - 1) as f64) else {
        return TestResult::failed(name, format!("Invalid degrees of freedom: {buckets}"));
    };
    let p = dist.sf(chi2);
    TestResult::from_p(name, p, chi2, format!("n={n}, buckets={buckets}"))
}

/// Chi-squared test that every bucket of an index histogram is equally likely.
pub fn chi_square_uniformity(counts: &[u64]) -> TestResult {
    let mut result = chi_square_weighted(counts, &vec![1; counts.len()]);
    result.name = "Uniformity Chi-Square".to_string();
    result
}

/// Symbol frequency of `sample` against `pool`, where each pool slot is one
/// unit of weight. A symbol listed twice in the pool is expected twice as
/// often. Any character outside the pool fails the check.
pub fn symbol_frequency(sample: &str, pool: &[char]) -> TestResult {
    let name = "Symbol Frequency";
    let mut order: Vec<char> = Vec::new();
    let mut weights: HashMap<char, u64> = HashMap::new();
    for &c in pool {
        let w = weights.entry(c).or_insert(0);
        if *w == 0 {
            order.push(c);
        }
        *w += 1;
    }

    let mut counts: HashMap<char, u64> = HashMap::new();
    for c in sample.chars() {
        if !weights.contains_key(&c) {
            return TestResult::failed(name, format!("Symbol {c:?} is not in the pool"));
        }
        *counts.entry(c).or_insert(0) += 1;
    }

    let counts: Vec<u64> = order
        .iter()
        .map(|c| counts.get(c).copied().unwrap_or(0))
        .collect();
    let weights: Vec<u64> = order.iter().map(|c| weights[c]).collect();
    let mut result = chi_square_weighted(&counts, &weights);
    result.name = name.to_string();
    result
}

// ═══════════════════════════════════════════════════════════════════════════════
// 2. RUNS
// ═══════════════════════════════════════════════════════════════════════════════

/// Runs test -- number of uninterrupted runs of 0s or 1s in a bit sequence.
///
/// `bits` holds one bit per element (0 or 1).
pub fn runs_test(bits: &[u8]) -> TestResult {
    let name = "Runs Test";
    let n = bits.len();
    if n < 100 {
        return insufficient(name, 100, n);
    }
    let ones: usize = bits.iter().map(|&b| (b & 1) as usize).sum();
    let prop = ones as f64 / n as f64;
    if (prop - 0.5).abs() >= 2.0 / (n as f64).sqrt() {
        return TestResult {
            name: name.to_string(),
            passed: false,
            p_value: Some(0.0),
            statistic: 0.0,
            details: format!("Pre-test failed: proportion={prop:.4}"),
            grade: 'F',
        };
    }
    let runs = 1 + bits.windows(2).filter(|w| (w[0] & 1) != (w[1] & 1)).count();
    let expected = 2.0 * n as f64 * prop * (1.0 - prop) + 1.0;
    let std = 2.0 * (2.0 * n as f64).sqrt() * prop * (1.0 - prop);
    let z = (runs as f64 - expected).abs() / std;
    let p = erfc(z / 2.0_f64.sqrt());
    TestResult::from_p(
        name,
        p,
        z,
        format!("runs={runs}, expected={expected:.0}"),
    )
}

/// Map a two-symbol string onto bits: `one` becomes 1, anything else 0.
pub fn to_bits(sample: &str, one: char) -> Vec<u8> {
    sample.chars().map(|c| u8::from(c == one)).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Test battery
// ═══════════════════════════════════════════════════════════════════════════════

/// Run every check that applies to strings drawn from `pool`.
///
/// The runs test is included only for two-symbol pools.
pub fn run_all_tests(sample: &str, pool: &[char]) -> Vec<TestResult> {
    let mut results = vec![symbol_frequency(sample, pool)];

    let mut distinct = pool.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if let [_, one] = distinct.as_slice() {
        results.push(runs_test(&to_bits(sample, *one)));
    }
    results
}

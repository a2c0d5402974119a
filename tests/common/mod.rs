//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tolerance for comparing computed metrics
pub const EPSILON: f64 = 1e-9;

/// Assert that two floats agree within [`EPSILON`]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Create a credit-style DataFrame with a string target and categorical features
///
/// This DataFrame includes:
/// - `target`: "good"/"bad" labels (20 rows, 8 bad)
/// - `grade`: strongly predictive grade A-D
/// - `region`: same good/bad split in both regions (no predictive power)
/// - `income`: continuous measurement that tracks `grade`
pub fn create_credit_dataframe() -> DataFrame {
    df! {
        "target" => ["good", "good", "good", "good", "good", "good", "bad", "good", "bad", "good",
                     "good", "bad", "good", "bad", "bad", "good", "bad", "bad", "good", "bad"],
        "grade" => ["A", "A", "A", "A", "B", "B", "B", "B", "B", "A",
                    "C", "C", "C", "C", "D", "D", "D", "D", "C", "D"],
        "region" => ["north", "south", "north", "south", "north", "south", "north", "south", "north", "south",
                     "north", "south", "north", "south", "north", "south", "north", "south", "north", "south"],
        "income" => [92.0f64, 88.0, 95.0, 90.0, 71.0, 74.0, 69.0, 70.0, 72.0, 91.0,
                     55.0, 52.0, 58.0, 50.0, 31.0, 35.0, 30.0, 33.0, 57.0, 34.0],
    }
    .unwrap()
}

/// Create a binary 0/1 target DataFrame matching the reference IV scenario
pub fn create_reference_dataframe() -> DataFrame {
    df! {
        "target" => [0i32, 0, 0, 1, 1, 1],
        "category" => ["A", "A", "B", "B", "B", "A"],
    }
    .unwrap()
}

/// Random categorical data with `n_categories` labels and normal-ish measurements
pub fn random_grouped_measurements(
    rows: usize,
    n_categories: usize,
    seed: u64,
) -> (Vec<String>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let categories: Vec<String> = (0..rows)
        .map(|_| format!("cat_{}", rng.gen_range(0..n_categories)))
        .collect();
    let measurements: Vec<f64> = categories
        .iter()
        .map(|c| c.len() as f64 + rng.gen::<f64>() * 100.0 - 50.0)
        .collect();
    (categories, measurements)
}

/// Random binary 0/1 target with a categorical feature shifted towards the event
pub fn random_binary_feature(rows: usize, n_categories: usize, seed: u64) -> (Vec<i32>, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut target = Vec::with_capacity(rows);
    let mut categorical = Vec::with_capacity(rows);
    for _ in 0..rows {
        let category = rng.gen_range(0..n_categories);
        let event_rate = (category + 1) as f64 / (n_categories + 2) as f64;
        target.push(i32::from(rng.gen::<f64>() < event_rate));
        categorical.push(format!("cat_{}", category));
    }
    // Guarantee both classes are present
    target[0] = 0;
    target[1] = 1;
    (target, categorical)
}

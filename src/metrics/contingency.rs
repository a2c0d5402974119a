//! Category x target contingency tables
//!
//! Counts how often each (category, target value) pair occurs. The table is
//! exhaustive over the distinct categories and target values observed: a pair
//! that never occurs gets the smoothing count instead of being left out.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::error::{check_aligned, AssocError};

/// Smoothing count for unobserved (category, target) pairs (Laplace smoothing)
pub const SMOOTHING: f64 = 0.5;

/// Total number of occurrences of each target value across the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Ord"
))]
pub struct TargetCounts<T> {
    counts: BTreeMap<T, f64>,
}

impl<T: Ord + Clone> TargetCounts<T> {
    /// Count every distinct value of a target series
    pub fn from_target(target: &[T]) -> Self {
        let mut counts = BTreeMap::new();
        for value in target {
            *counts.entry(value.clone()).or_insert(0.0) += 1.0;
        }
        Self { counts }
    }
}

impl<T: Ord> TargetCounts<T> {
    /// Total count recorded for a target value
    pub fn get(&self, value: &T) -> Option<f64> {
        self.counts.get(value).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.counts.iter().map(|(value, &count)| (value, count))
    }
}

impl<T: Ord> FromIterator<(T, f64)> for TargetCounts<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Exhaustive (category, target) -> count table
///
/// Categories and target values are kept in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable<C, T> {
    categories: Vec<C>,
    target_values: Vec<T>,
    cells: BTreeMap<(C, T), f64>,
}

impl<C: Ord + Clone, T: Ord + Clone> ContingencyTable<C, T> {
    /// Build the table from aligned target and categorical series.
    ///
    /// Every combination of a distinct category and a distinct target value
    /// gets a cell; combinations with no observations hold [`SMOOTHING`].
    pub fn from_series(target: &[T], categorical: &[C]) -> Result<Self, AssocError> {
        check_aligned(target.len(), categorical.len())?;

        let mut observed: BTreeMap<(C, T), f64> = BTreeMap::new();
        for (value, category) in target.iter().zip(categorical.iter()) {
            *observed
                .entry((category.clone(), value.clone()))
                .or_insert(0.0) += 1.0;
        }

        let categories: Vec<C> = categorical
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let target_values: Vec<T> = target
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut cells = BTreeMap::new();
        for category in &categories {
            for value in &target_values {
                cells.insert((category.clone(), value.clone()), SMOOTHING);
            }
        }
        cells.extend(observed);

        Ok(Self {
            categories,
            target_values,
            cells,
        })
    }

    /// Count for a (category, target value) pair, or `None` if either was never observed
    pub fn count(&self, category: &C, target_value: &T) -> Option<f64> {
        self.cells
            .get(&(category.clone(), target_value.clone()))
            .copied()
    }
}

impl<C, T> ContingencyTable<C, T> {
    /// Distinct categories, ascending
    pub fn categories(&self) -> &[C] {
        &self.categories
    }

    /// Distinct target values, ascending
    pub fn target_values(&self) -> &[T] {
        &self.target_values
    }

    /// Number of cells; always `categories().len() * target_values().len()`
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&C, &T, f64)> {
        self.cells
            .iter()
            .map(|((category, value), &count)| (category, value, count))
    }
}

//! Correlation ratio (eta) between a categorical and a continuous variable
//!
//! Eta is the square root of the share of the total sum of squares explained
//! by the category means:
//!
//! ```text
//! eta = sqrt( sum_i n_i * (mean_i - mean)^2 / sum_j (y_j - mean)^2 )
//! ```

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

use super::error::{check_aligned, AssocError};

/// Size and mean of one category's measurements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats<C> {
    /// Category value
    pub category: C,
    /// Number of observations in this category
    pub count: usize,
    /// Mean measurement within this category
    pub mean: f64,
}

/// Full breakdown of a correlation ratio computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationRatioAnalysis<C> {
    /// Groups in order of first appearance of their category
    pub groups: Vec<GroupStats<C>>,
    /// Count-weighted mean of the group means
    pub grand_mean: f64,
    /// Between-group sum of squares
    pub between_ss: f64,
    /// Total sum of squares
    pub total_ss: f64,
    /// Correlation ratio in [0, 1]
    pub eta: f64,
}

/// Compute the correlation ratio of `measurements` grouped by `categories`.
///
/// Returns 0.0 when the grouping explains nothing, including a single
/// category or constant measurements, and exactly 1.0 when every category
/// is constant and the category means differ.
pub fn compute_correlation_ratio<C>(categories: &[C], measurements: &[f64]) -> Result<f64, AssocError>
where
    C: Eq + Hash + Clone,
{
    analyze_correlation_ratio(categories, measurements).map(|analysis| analysis.eta)
}

/// Compute the correlation ratio together with its group statistics.
pub fn analyze_correlation_ratio<C>(
    categories: &[C],
    measurements: &[f64],
) -> Result<CorrelationRatioAnalysis<C>, AssocError>
where
    C: Eq + Hash + Clone,
{
    check_aligned(categories.len(), measurements.len())?;
    if let Some(index) = measurements.iter().position(|y| !y.is_finite()) {
        return Err(AssocError::NonFiniteMeasurement { index });
    }

    let (groups, groups_constant) = group_means(categories, measurements);

    let total_count: f64 = groups.iter().map(|g| g.count as f64).sum();
    let grand_mean = groups
        .iter()
        .map(|g| g.count as f64 * g.mean)
        .sum::<f64>()
        / total_count;

    let between_ss: f64 = groups
        .iter()
        .map(|g| g.count as f64 * (g.mean - grand_mean).powi(2))
        .sum();
    let total_ss: f64 = measurements
        .iter()
        .map(|y| (y - grand_mean).powi(2))
        .sum();

    let constant = measurements.iter().all(|&y| y == measurements[0]);

    let eta = if groups.len() == 1 {
        log::warn!("Correlation ratio over a single category is 0.0");
        0.0
    } else if constant || between_ss == 0.0 || total_ss == 0.0 {
        log::warn!(
            "Correlation ratio is 0.0: group means do not differ (between_ss = {})",
            between_ss
        );
        0.0
    } else if groups_constant {
        // No within-group spread: between_ss and total_ss differ only by rounding
        1.0
    } else {
        // Clamp rounding overshoot
        (between_ss / total_ss).sqrt().min(1.0)
    };

    log::debug!(
        "Correlation ratio {:.6} over {} groups ({} observations)",
        eta,
        groups.len(),
        measurements.len()
    );

    Ok(CorrelationRatioAnalysis {
        groups,
        grand_mean,
        between_ss,
        total_ss,
        eta,
    })
}

/// Assign dense codes to categories in order of first appearance and
/// accumulate per-group running means.
///
/// The flag is true when every group holds a single repeated value.
fn group_means<C>(categories: &[C], measurements: &[f64]) -> (Vec<GroupStats<C>>, bool)
where
    C: Eq + Hash + Clone,
{
    let mut codes: HashMap<&C, usize> = HashMap::new();
    let mut groups: Vec<GroupStats<C>> = Vec::new();
    let mut first_values: Vec<f64> = Vec::new();
    let mut groups_constant = true;

    for (category, &y) in categories.iter().zip(measurements.iter()) {
        let code = *codes.entry(category).or_insert_with(|| {
            groups.push(GroupStats {
                category: category.clone(),
                count: 0,
                mean: 0.0,
            });
            first_values.push(y);
            groups.len() - 1
        });

        if y != first_values[code] {
            groups_constant = false;
        }

        // Running mean keeps a constant group's mean exact
        let group = &mut groups[code];
        group.count += 1;
        group.mean += (y - group.mean) / group.count as f64;
    }

    (groups, groups_constant)
}

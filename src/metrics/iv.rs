//! Information Value (IV) and Weight of Evidence (WoE) for categorical features
//!
//! For each category the share of all non-events and the share of all events
//! falling into it are compared:
//!
//! ```text
//! WoE = ln(%non_events / %events)
//! IV  = sum over categories of (%non_events - %events) * WoE
//! ```
//!
//! Categories that never see one of the target values are smoothed with a
//! count of 0.5 so the logarithm stays finite.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::contingency::{ContingencyTable, TargetCounts, SMOOTHING};
use super::error::AssocError;
use super::target::{resolve_target_roles, TargetMapping};

/// Options for an IV computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Ord"
))]
pub struct IvOptions<T> {
    /// Precomputed totals per target value; derived from the target when `None`
    #[serde(default)]
    pub target_counts: Option<TargetCounts<T>>,
    /// Explicit event / non-event roles; sort order decides when `None`
    #[serde(default)]
    pub mapping: Option<TargetMapping<T>>,
}

impl<T> Default for IvOptions<T> {
    fn default() -> Self {
        Self {
            target_counts: None,
            mapping: None,
        }
    }
}

/// WoE statistics for a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalWoeBin<C> {
    /// Category value
    pub category: C,
    /// Count of non-events in this category (0.5 if none were observed)
    pub non_events: f64,
    /// Count of events in this category (0.5 if none were observed)
    pub events: f64,
    /// Share of all non-events falling in this category
    pub non_event_pct: f64,
    /// Share of all events falling in this category
    pub event_pct: f64,
    /// Weight of Evidence for this category
    pub woe: f64,
    /// Contribution to total IV from this category
    pub iv_contribution: f64,
}

/// Complete IV analysis for a single categorical feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IvAnalysis<C> {
    /// Per-category statistics, ordered by category
    pub categories: Vec<CategoricalWoeBin<C>>,
    /// Total Information Value
    pub iv: f64,
}

/// Compute the Information Value of a categorical feature against a binary target.
///
/// # Arguments
/// * `target` - Binary target, exactly two distinct values
/// * `categorical` - Category labels aligned with `target`
/// * `target_counts` - Optional totals per target value; must cover both target values
///
/// The lower target value (by `Ord`) is the non-event. Use
/// [`analyze_information_value`] with a [`TargetMapping`] to pick the roles
/// explicitly.
pub fn compute_information_value<T, C>(
    target: &[T],
    categorical: &[C],
    target_counts: Option<&TargetCounts<T>>,
) -> Result<f64, AssocError>
where
    T: Ord + Clone + Debug,
    C: Ord + Clone,
{
    woe_breakdown(target, categorical, target_counts, None).map(|analysis| analysis.iv)
}

/// Compute per-category WoE and the total IV of a categorical feature.
pub fn analyze_information_value<T, C>(
    target: &[T],
    categorical: &[C],
    options: &IvOptions<T>,
) -> Result<IvAnalysis<C>, AssocError>
where
    T: Ord + Clone + Debug,
    C: Ord + Clone,
{
    woe_breakdown(
        target,
        categorical,
        options.target_counts.as_ref(),
        options.mapping.as_ref(),
    )
}

fn woe_breakdown<T, C>(
    target: &[T],
    categorical: &[C],
    target_counts: Option<&TargetCounts<T>>,
    mapping: Option<&TargetMapping<T>>,
) -> Result<IvAnalysis<C>, AssocError>
where
    T: Ord + Clone + Debug,
    C: Ord + Clone,
{
    let table = ContingencyTable::from_series(target, categorical)?;
    let roles = resolve_target_roles(table.target_values(), mapping)?;

    let derived;
    let counts = match target_counts {
        Some(counts) => counts,
        None => {
            derived = TargetCounts::from_target(target);
            &derived
        }
    };

    let total_non_events = target_total(counts, &roles.non_event_value)?;
    let total_events = target_total(counts, &roles.event_value)?;

    let categories: Vec<CategoricalWoeBin<C>> = table
        .categories()
        .iter()
        .map(|category| {
            let non_events = table
                .count(category, &roles.non_event_value)
                .unwrap_or(SMOOTHING);
            let events = table
                .count(category, &roles.event_value)
                .unwrap_or(SMOOTHING);
            let non_event_pct = non_events / total_non_events;
            let event_pct = events / total_events;
            let (woe, iv_contribution) = calculate_woe_iv(non_event_pct, event_pct);

            CategoricalWoeBin {
                category: category.clone(),
                non_events,
                events,
                non_event_pct,
                event_pct,
                woe,
                iv_contribution,
            }
        })
        .collect();

    let iv: f64 = categories.iter().map(|c| c.iv_contribution).sum();

    log::debug!(
        "IV {:.6} over {} categories (event {:?}, non-event {:?})",
        iv,
        categories.len(),
        roles.event_value,
        roles.non_event_value
    );

    Ok(IvAnalysis { categories, iv })
}

/// Look up the total for a target value, rejecting missing, non-positive or non-finite totals
fn target_total<T: Ord + Debug>(counts: &TargetCounts<T>, value: &T) -> Result<f64, AssocError> {
    match counts.get(value) {
        None => Err(AssocError::MissingTargetCount {
            value: format!("{:?}", value),
        }),
        Some(total) if !total.is_finite() || total <= 0.0 => Err(AssocError::InvalidTargetCount {
            value: format!("{:?}", value),
        }),
        Some(total) => Ok(total),
    }
}

/// WoE and IV contribution from the within-target proportions of one category
fn calculate_woe_iv(non_event_pct: f64, event_pct: f64) -> (f64, f64) {
    let woe = (non_event_pct / event_pct).ln();
    let iv_contrib = (non_event_pct - event_pct) * woe;

    (woe, iv_contrib)
}

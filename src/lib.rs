//! Assocstat: association metrics for feature evaluation
//!
//! Scores how strongly a categorical variable relates to a binary target
//! (Information Value via Weight of Evidence) or to a continuous measurement
//! (correlation ratio, eta).

pub mod metrics;

pub use metrics::{
    analyze_correlation_ratio, analyze_information_value, compute_correlation_ratio,
    compute_information_value, AssocError, ContingencyTable, TargetCounts, TargetMapping,
};

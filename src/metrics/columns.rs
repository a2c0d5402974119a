//! Polars column adapters
//!
//! Converts in-memory polars columns into the plain slices the metric
//! engines work on. Columns must already be clean: null values are rejected
//! rather than dropped, so the aligned series never drift apart.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::correlation_ratio::compute_correlation_ratio;
use super::iv::{analyze_information_value, IvOptions};
use super::target::TargetMapping;

/// Largest float that converts to `i64` without losing integrality
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Owned, totally ordered value read from a column
///
/// Integers, booleans (0/1) and integral floats become `Int`; everything
/// else is compared by its string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    Int(i64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(n) => write!(f, "{}", n),
            Label::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

fn float_label(value: f64) -> Label {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INT {
        Label::Int(value as i64)
    } else {
        Label::Text(format!("{}", value))
    }
}

fn reject_nulls(col: &Column) -> Result<()> {
    let nulls = col.null_count();
    if nulls > 0 {
        anyhow::bail!(
            "Column '{}' contains {} null values; drop or impute them first",
            col.name(),
            nulls
        );
    }
    Ok(())
}

/// Read a column as labels for use as a target or categorical series
pub fn column_to_labels(col: &Column) -> Result<Vec<Label>> {
    reject_nulls(col)?;

    let labels: Vec<Label> = match col.dtype() {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32 => {
            let cast = col.cast(&DataType::Int64)?;
            cast.i64()?.into_iter().flatten().map(Label::Int).collect()
        }
        DataType::UInt64 => col
            .u64()?
            .into_iter()
            .flatten()
            .map(|n| i64::try_from(n).map_or_else(|_| Label::Text(n.to_string()), Label::Int))
            .collect(),
        DataType::Float32 | DataType::Float64 => {
            let cast = col.cast(&DataType::Float64)?;
            cast.f64()?.into_iter().flatten().map(float_label).collect()
        }
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .flatten()
            .map(|b| Label::Int(i64::from(b)))
            .collect(),
        _ => {
            // Strings, categoricals and anything else castable to text
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .flatten()
                .map(|s| Label::Text(s.to_string()))
                .collect()
        }
    };

    if labels.len() != col.len() {
        anyhow::bail!("Column '{}' could not be read as labels", col.name());
    }

    Ok(labels)
}

/// Read a numeric column as measurements
pub fn column_to_measurements(col: &Column) -> Result<Vec<f64>> {
    if !col.dtype().is_primitive_numeric() {
        anyhow::bail!(
            "Measurement column '{}' must be numeric, found {}",
            col.name(),
            col.dtype()
        );
    }
    reject_nulls(col)?;

    let cast = col.cast(&DataType::Float64)?;
    let values: Vec<f64> = cast.f64()?.into_iter().flatten().collect();
    Ok(values)
}

/// Information Value of `feature` against a binary `target` column
///
/// # Arguments
/// * `target` - Binary target column (any label type)
/// * `feature` - Categorical feature column
/// * `mapping` - Optional event / non-event roles; sort order decides when `None`
pub fn information_value_for_columns(
    target: &Column,
    feature: &Column,
    mapping: Option<&TargetMapping<Label>>,
) -> Result<f64> {
    let target_labels = column_to_labels(target)
        .with_context(|| format!("Failed to read target column '{}'", target.name()))?;
    let feature_labels = column_to_labels(feature)
        .with_context(|| format!("Failed to read feature column '{}'", feature.name()))?;

    let options = IvOptions {
        target_counts: None,
        mapping: mapping.cloned(),
    };
    let analysis = analyze_information_value(&target_labels, &feature_labels, &options)
        .with_context(|| {
            format!(
                "Cannot compute IV of '{}' against target '{}'",
                feature.name(),
                target.name()
            )
        })?;

    Ok(analysis.iv)
}

/// Correlation ratio of a numeric `measurements` column grouped by `categories`
pub fn correlation_ratio_for_columns(categories: &Column, measurements: &Column) -> Result<f64> {
    let labels = column_to_labels(categories)
        .with_context(|| format!("Failed to read category column '{}'", categories.name()))?;
    let values = column_to_measurements(measurements)?;

    compute_correlation_ratio(&labels, &values).with_context(|| {
        format!(
            "Cannot compute correlation ratio of '{}' by '{}'",
            measurements.name(),
            categories.name()
        )
    })
}

/// [`information_value_for_columns`] with columns looked up by name
pub fn information_value_in_frame(df: &DataFrame, target: &str, feature: &str) -> Result<f64> {
    let target_col = df
        .column(target)
        .with_context(|| format!("Target column '{}' not found", target))?;
    let feature_col = df
        .column(feature)
        .with_context(|| format!("Feature column '{}' not found", feature))?;

    information_value_for_columns(target_col, feature_col, None)
}

/// [`correlation_ratio_for_columns`] with columns looked up by name
pub fn correlation_ratio_in_frame(df: &DataFrame, categories: &str, measurements: &str) -> Result<f64> {
    let category_col = df
        .column(categories)
        .with_context(|| format!("Category column '{}' not found", categories))?;
    let measurement_col = df
        .column(measurements)
        .with_context(|| format!("Measurement column '{}' not found", measurements))?;

    correlation_ratio_for_columns(category_col, measurement_col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_column_to_labels() {
        let col = Column::new("t".into(), [0i32, 1, 1, 0]);
        let labels = column_to_labels(&col).unwrap();
        assert_eq!(
            labels,
            vec![Label::Int(0), Label::Int(1), Label::Int(1), Label::Int(0)]
        );
    }

    #[test]
    fn test_float_column_to_labels() {
        let col = Column::new("t".into(), [0.0f64, 1.0, 2.5]);
        let labels = column_to_labels(&col).unwrap();
        assert_eq!(
            labels,
            vec![Label::Int(0), Label::Int(1), Label::Text("2.5".to_string())]
        );
    }

    #[test]
    fn test_bool_and_string_columns_to_labels() {
        let col = Column::new("b".into(), [true, false]);
        assert_eq!(
            column_to_labels(&col).unwrap(),
            vec![Label::Int(1), Label::Int(0)]
        );

        let col = Column::new("s".into(), ["G", "B"]);
        assert_eq!(
            column_to_labels(&col).unwrap(),
            vec![Label::from("G"), Label::from("B")]
        );
    }

    #[test]
    fn test_nulls_rejected() {
        let col = Column::new("t".into(), [Some(0i32), None, Some(1)]);
        let result = column_to_labels(&col);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("null"));
    }

    #[test]
    fn test_string_measurements_rejected() {
        let col = Column::new("m".into(), ["1.0", "2.0"]);
        let result = column_to_measurements(&col);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must be numeric"));
    }

    #[test]
    fn test_label_ordering() {
        assert!(Label::Int(0) < Label::Int(1));
        assert!(Label::Int(100) < Label::from("a"));
        assert_eq!(Label::Int(7).to_string(), "7");
    }
}

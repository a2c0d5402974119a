//! Target role assignment
//!
//! Information Value compares the distribution of a feature across the two
//! classes of a binary target. This module decides which observed target
//! value plays the event role and which the non-event role.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::error::AssocError;

/// Mapping of raw target values to the event / non-event roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetMapping<T> {
    /// Value treated as the event (e.g. default, churn, 1)
    pub event_value: T,
    /// Value treated as the non-event (e.g. good, retained, 0)
    pub non_event_value: T,
}

impl<T> TargetMapping<T> {
    /// Create a new target mapping
    pub fn new(event_value: T, non_event_value: T) -> Self {
        Self {
            event_value,
            non_event_value,
        }
    }
}

/// Resolve the event / non-event roles for the distinct values of a target.
///
/// `distinct_values` must hold exactly two values in ascending order. Without
/// an explicit mapping the lower value is the non-event and the higher value
/// the event, so a 0/1 target maps 1 to the event.
pub fn resolve_target_roles<T>(
    distinct_values: &[T],
    mapping: Option<&TargetMapping<T>>,
) -> Result<TargetMapping<T>, AssocError>
where
    T: PartialEq + Clone + Debug,
{
    let [low, high] = distinct_values else {
        return Err(AssocError::NonBinaryTarget {
            found: distinct_values.len(),
        });
    };

    let Some(mapping) = mapping else {
        return Ok(TargetMapping::new(high.clone(), low.clone()));
    };

    for value in [&mapping.event_value, &mapping.non_event_value] {
        if !distinct_values.contains(value) {
            return Err(AssocError::UnknownTargetValue {
                value: format!("{:?}", value),
            });
        }
    }

    if mapping.event_value == mapping.non_event_value {
        return Err(AssocError::AmbiguousTargetMapping {
            value: format!("{:?}", mapping.event_value),
        });
    }

    Ok(mapping.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roles_follow_sort_order() {
        let roles = resolve_target_roles(&[0, 1], None).unwrap();
        assert_eq!(roles.event_value, 1);
        assert_eq!(roles.non_event_value, 0);

        let roles = resolve_target_roles(&["bad", "good"], None).unwrap();
        assert_eq!(roles.event_value, "good");
        assert_eq!(roles.non_event_value, "bad");
    }

    #[test]
    fn test_explicit_mapping_overrides_order() {
        let mapping = TargetMapping::new("bad", "good");
        let roles = resolve_target_roles(&["bad", "good"], Some(&mapping)).unwrap();
        assert_eq!(roles, mapping);
    }

    #[test]
    fn test_non_binary_target_rejected() {
        assert_eq!(
            resolve_target_roles(&[0, 1, 2], None),
            Err(AssocError::NonBinaryTarget { found: 3 })
        );
        assert_eq!(
            resolve_target_roles(&[1], None),
            Err(AssocError::NonBinaryTarget { found: 1 })
        );
    }

    #[test]
    fn test_mapping_with_unknown_value_rejected() {
        let mapping = TargetMapping::new("Y", "N");
        let result = resolve_target_roles(&["N", "U"], Some(&mapping));
        assert!(matches!(result, Err(AssocError::UnknownTargetValue { .. })));
    }

    #[test]
    fn test_mapping_with_same_value_twice_rejected() {
        let mapping = TargetMapping::new(1, 1);
        let result = resolve_target_roles(&[0, 1], Some(&mapping));
        assert!(matches!(result, Err(AssocError::AmbiguousTargetMapping { .. })));
    }
}

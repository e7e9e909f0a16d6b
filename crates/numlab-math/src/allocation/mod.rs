//! Proportional allocation of a budget across weighted categories.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use numlab_math::allocation::allocate;
//!
//! let weights = BTreeMap::from([("a".to_string(), 1.0), ("b".to_string(), 3.0)]);
//! let result = allocate(&weights, 100.0).unwrap();
//!
//! assert_eq!(result.allocations["a"], 25.0);
//! assert_eq!(result.allocations["b"], 75.0);
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{MathError, MathResult};

/// Outcome of a proportional allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    /// Sum of all weights.
    pub total_weight: f64,
    /// Budget that was distributed.
    pub total_budget: f64,
    /// Amount allocated to each category.
    pub allocations: BTreeMap<String, f64>,
}

impl AllocationResult {
    /// Sum of the allocated amounts.
    pub fn allocated(&self) -> f64 {
        self.allocations.values().sum()
    }
}

/// Splits `total_budget` across categories in proportion to `weights`.
///
/// The floating-point remainder left by the division is added to the largest
/// share, so the allocations add back up to `total_budget`.
///
/// # Errors
///
/// [`MathError::InvalidWeights`] if a weight is negative or not finite, or if
/// every weight is zero (including no categories at all), or if the weights
/// sum past the largest finite `f64`;
/// [`MathError::InvalidInput`] if the budget is not finite.
pub fn allocate(
    weights: &BTreeMap<String, f64>,
    total_budget: f64,
) -> MathResult<AllocationResult> {
    if !total_budget.is_finite() {
        return Err(MathError::invalid_input(format!(
            "total budget must be finite, got {total_budget}"
        )));
    }

    if let Some((name, weight)) = weights.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
        return Err(MathError::invalid_weights(format!(
            "weight for '{name}' must be a non-negative finite number, got {weight}"
        )));
    }

    let total_weight: f64 = weights.values().sum();
    if !total_weight.is_finite() {
        return Err(MathError::invalid_weights(format!(
            "weights sum to {total_weight}, which is not a finite number"
        )));
    }
    if total_weight <= 0.0 {
        return Err(MathError::invalid_weights(
            "at least one weight must be positive",
        ));
    }

    let mut allocations: BTreeMap<String, f64> = weights
        .iter()
        .map(|(name, w)| (name.clone(), w / total_weight * total_budget))
        .collect();

    let drift = total_budget - allocations.values().sum::<f64>();
    if drift != 0.0 {
        if let Some(largest) = allocations
            .values_mut()
            .max_by(|a, b| a.abs().total_cmp(&b.abs()))
        {
            *largest += drift;
        }
        log::trace!("allocation: absorbed rounding drift {drift:e} into the largest share");
    }

    Ok(AllocationResult {
        total_weight,
        total_budget,
        allocations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn weights(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_simple_split() {
        let result = allocate(&weights(&[("a", 1.0), ("b", 3.0)]), 100.0).unwrap();

        assert_eq!(result.allocations["a"], 25.0);
        assert_eq!(result.allocations["b"], 75.0);
        assert_eq!(result.allocated(), 100.0);
        assert_eq!(result.total_weight, 4.0);
    }

    #[test]
    fn test_thirds_sum_to_budget() {
        let result =
            allocate(&weights(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]), 100.0).unwrap();

        assert_relative_eq!(result.allocations["a"], 100.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(result.allocated(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_weight_category_gets_nothing() {
        let result = allocate(&weights(&[("a", 0.0), ("b", 2.0)]), 50.0).unwrap();

        assert_eq!(result.allocations["a"], 0.0);
        assert_eq!(result.allocations["b"], 50.0);
    }

    #[test]
    fn test_all_zero_weights() {
        assert!(matches!(
            allocate(&weights(&[("a", 0.0), ("b", 0.0)]), 100.0),
            Err(MathError::InvalidWeights { .. })
        ));
        assert!(matches!(
            allocate(&BTreeMap::new(), 100.0),
            Err(MathError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn test_weight_sum_overflow() {
        assert!(matches!(
            allocate(&weights(&[("a", 1e308), ("b", 1e308)]), 100.0),
            Err(MathError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn test_negative_weight() {
        assert!(matches!(
            allocate(&weights(&[("a", -1.0), ("b", 3.0)]), 100.0),
            Err(MathError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn test_non_finite_budget() {
        assert!(matches!(
            allocate(&weights(&[("a", 1.0)]), f64::INFINITY),
            Err(MathError::InvalidInput { .. })
        ));
    }
}

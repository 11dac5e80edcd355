//! Similarity metrics between sets.
//!
//! All of these are ratios of cardinalities. Whenever the denominator vanishes the metric is
//! undefined, and [`SetError::UndefinedMetric`] is returned instead of a NaN or infinity.

use crate::prelude::*;

/// Divides two cardinalities, failing on a zero denominator.
#[allow(clippy::cast_precision_loss)]
fn ratio(num: usize, den: usize, metric: Metric) -> Result<f64, SetError> {
    if den == 0 {
        Err(SetError::UndefinedMetric(metric))
    } else {
        Ok(num as f64 / den as f64)
    }
}

/// Jaccard index J(A, B) = |A ∩ B| / |A ∪ B|, between 0 and 1.
///
/// ## Errors
///
/// Undefined when both sets are empty.
pub fn jaccard_similarity<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> Result<f64, SetError> {
    ratio(
        intersect(a, b).card(),
        union(a, b).card(),
        Metric::Jaccard,
    )
}

/// Jaccard distance 1 − J(A, B).
///
/// ## Errors
///
/// Undefined when both sets are empty.
pub fn jaccard_distance<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> Result<f64, SetError> {
    jaccard_similarity(a, b).map(|index| 1.0 - index)
}

/// Dice-Sørensen coefficient 2|A ∩ B| / (|A| + |B|).
///
/// ## Errors
///
/// Undefined when both sets are empty.
pub fn dsc<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> Result<f64, SetError> {
    ratio(
        2 * intersect(a, b).card(),
        a.card() + b.card(),
        Metric::Dice,
    )
}

/// Overlap coefficient |A ∩ B| / min(|A|, |B|).
///
/// ## Errors
///
/// Undefined when either set is empty.
pub fn overlap_coefficient<T: Eq + Hash + Clone>(
    a: &Set<T>,
    b: &Set<T>,
) -> Result<f64, SetError> {
    ratio(
        intersect(a, b).card(),
        a.card().min(b.card()),
        Metric::Overlap,
    )
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Jaccard index. See [`jaccard_similarity`].
    ///
    /// ## Errors
    ///
    /// See [`jaccard_similarity`].
    pub fn jaccard_similarity(&self, other: &Self) -> Result<f64, SetError> {
        jaccard_similarity(self, other)
    }

    /// Jaccard distance. See [`jaccard_distance`].
    ///
    /// ## Errors
    ///
    /// See [`jaccard_distance`].
    pub fn jaccard_distance(&self, other: &Self) -> Result<f64, SetError> {
        jaccard_distance(self, other)
    }

    /// Dice-Sørensen coefficient. See [`dsc`].
    ///
    /// ## Errors
    ///
    /// See [`dsc`].
    pub fn dsc(&self, other: &Self) -> Result<f64, SetError> {
        dsc(self, other)
    }

    /// Overlap coefficient. See [`overlap_coefficient`].
    ///
    /// ## Errors
    ///
    /// See [`overlap_coefficient`].
    pub fn overlap_coefficient(&self, other: &Self) -> Result<f64, SetError> {
        overlap_coefficient(self, other)
    }
}

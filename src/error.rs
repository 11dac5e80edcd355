//! Errors raised by set operations.

use derive_more::Display;

/// The similarity metrics of [`similarity`](crate::similarity).
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Jaccard index |A ∩ B| / |A ∪ B|, and the distance derived from it.
    #[display(fmt = "Jaccard index")]
    Jaccard,
    /// Dice-Sørensen coefficient 2|A ∩ B| / (|A| + |B|).
    #[display(fmt = "Dice-Sørensen coefficient")]
    Dice,
    /// Overlap coefficient |A ∩ B| / min(|A|, |B|).
    #[display(fmt = "overlap coefficient")]
    Overlap,
}

/// Error in a set operation.
///
/// Removing an absent element, checking membership of no elements, or building an empty set are
/// never errors.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum SetError {
    /// The metric divides by zero for the given operands, which happens when they are empty.
    #[display(fmt = "{} is undefined for empty sets", _0)]
    UndefinedMetric(Metric),

    /// The power set of a set with this many elements has more than [`usize::MAX`] elements.
    #[display(fmt = "power set of a set with {} elements is too large", _0)]
    PowersetOverflow(usize),

    /// A [`Value`](crate::value::Value) was not of the expected kind.
    #[display(fmt = "expected {}, found {}", expected, found)]
    TypeMismatch {
        /// The kind the caller asked for.
        expected: &'static str,
        /// The kind actually stored.
        found: &'static str,
    },
}

impl std::error::Error for SetError {}

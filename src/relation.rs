//! Relations between sets: subsets, supersets, equality and disjointness.
//!
//! None of these modify their operands.

use crate::prelude::*;

/// Subset relation A ⊆ B: every element of `a` is in `b`.
pub fn is_subset<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> bool {
    if a.card() > b.card() {
        return false;
    }

    b.contains_all(&a.to_vec())
}

/// Proper subset relation A ⊂ B: `a` is a subset of `b` and `b` has some other element.
pub fn is_proper_subset<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> bool {
    a.card() < b.card() && is_subset(a, b)
}

/// Superset relation A ⊇ B.
pub fn is_superset<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> bool {
    is_subset(b, a)
}

/// Proper superset relation A ⊃ B.
pub fn is_proper_superset<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> bool {
    is_proper_subset(b, a)
}

/// Set equivalence: both sets have the same cardinality.
///
/// This is **not** equality. The sets {1, 2} and {3, 4} are equivalent.
pub fn equivalence<T>(a: &Set<T>, b: &Set<T>) -> bool {
    a.card() == b.card()
}

/// Set equality A = B.
///
/// Two equivalent sets where one is a subset of the other must be equal.
pub fn equals<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> bool {
    std::ptr::eq(a, b) || (equivalence(a, b) && is_subset(a, b))
}

/// Whether two sets have no elements in common.
pub fn is_disjoint<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> bool {
    intersect(a, b).is_empty()
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Subset relation ⊆. See [`is_subset`].
    pub fn is_subset(&self, other: &Self) -> bool {
        is_subset(self, other)
    }

    /// Proper subset relation ⊂. See [`is_proper_subset`].
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        is_proper_subset(self, other)
    }

    /// Superset relation ⊇. See [`is_superset`].
    pub fn is_superset(&self, other: &Self) -> bool {
        is_superset(self, other)
    }

    /// Proper superset relation ⊃. See [`is_proper_superset`].
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        is_proper_superset(self, other)
    }

    /// Set equivalence, i.e. equal cardinality. See [`equivalence`].
    pub fn equivalence(&self, other: &Self) -> bool {
        equivalence(self, other)
    }

    /// Set equality. See [`equals`].
    pub fn equals(&self, other: &Self) -> bool {
        equals(self, other)
    }

    /// Whether the sets have no common elements. See [`is_disjoint`].
    pub fn is_disjoint(&self, other: &Self) -> bool {
        is_disjoint(self, other)
    }
}

impl<T: Eq + Hash + Clone> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl<T: Eq + Hash + Clone> Eq for Set<T> {}

/// Sets are partially ordered by inclusion.
impl<T: Eq + Hash + Clone> PartialOrd for Set<T> {
    fn le(&self, other: &Self) -> bool {
        is_subset(self, other)
    }

    fn ge(&self, other: &Self) -> bool {
        other.le(self)
    }

    fn lt(&self, other: &Self) -> bool {
        is_proper_subset(self, other)
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let cmp = self.card().cmp(&other.card());
        let test = match cmp {
            Ordering::Equal => self.eq(other),
            Ordering::Less => self.le(other),
            Ordering::Greater => self.ge(other),
        };

        if test {
            Some(cmp)
        } else {
            None
        }
    }
}

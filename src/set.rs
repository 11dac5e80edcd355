//! Mathematical sets [`Set`].

use crate::prelude::*;
use std::{borrow::Borrow, collections::hash_map::DefaultHasher};

/// A finite set of unique elements.
///
/// Elements may be of any type implementing [`Eq`] and [`Hash`]. Two elements are the same iff
/// they compare equal; no coercion ever takes place, so a `Set<Value>` holding the integer `1`
/// does not contain the text `"1"`.
///
/// ## Invariants
///
/// Every two elements in a [`Set`] are distinct, and [`Set::card`] is always the number of
/// elements currently present.
///
/// ## Concurrency
///
/// Each set owns a lock guarding its elements. Every method reading or writing the elements holds
/// it for the duration of its own body, which is why elements can be added and removed through a
/// shared reference. Operations on two sets never hold both locks at once: one operand is copied
/// out first, then the other is queried. If an operand is mutated concurrently with such an
/// operation, the result reflects some interleaving of the two, not an atomic snapshot.
pub struct Set<T>(Mutex<HashSet<T>>);

// -------------------- Basic traits -------------------- //

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self(Mutex::new(self.0.lock().clone()))
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashSet<T>>())
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> From<HashSet<T>> for Set<T> {
    fn from(set: HashSet<T>) -> Self {
        Self(Mutex::new(set))
    }
}

impl<T> From<Set<T>> for HashSet<T> {
    fn from(set: Set<T>) -> Self {
        set.into_inner()
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Exclusive access, no need to lock.
        self.0.get_mut().extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

/// Element hashes are combined commutatively, so that the hash of a set does not depend on the
/// order in which its elements are stored.
impl<T: Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let set = self.0.lock();
        let sum = set.iter().fold(0u64, |acc, el| {
            let mut hasher = DefaultHasher::new();
            el.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });

        state.write_usize(set.len());
        state.write_u64(sum);
    }
}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.0.lock().iter()).finish()
    }
}

/// Displays a set in roster notation `{a, b, c}`. The order of the elements is arbitrary.
impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let set = self.0.lock();
        let mut iter = set.iter();

        f.write_str("{")?;
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for el in iter {
            write!(f, ", {el}")?;
        }
        f.write_str("}")
    }
}

// -------------------- Core methods -------------------- //

impl<T> Set<T> {
    /// The empty set Ø.
    #[must_use]
    pub fn new() -> Self {
        Self::from(HashSet::new())
    }

    /// Set cardinality |A|, the number of distinct elements.
    pub fn card(&self) -> usize {
        self.0.lock().len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// Removes all elements from the set.
    pub fn clear(&self) {
        self.0.lock().clear();
    }

    /// Consumes the set, returning the underlying hash set.
    pub fn into_inner(self) -> HashSet<T> {
        self.0.into_inner()
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Inserts an element into the set. Returns whether it was absent.
    ///
    /// Adding an element that's already present does nothing.
    pub fn add(&self, el: T) -> bool {
        self.0.lock().insert(el)
    }

    /// Inserts every element of an iterator into the set.
    pub fn add_all<I: IntoIterator<Item = T>>(&self, iter: I) {
        // Drain the iterator before locking, as it could read from this very set.
        let els: SmallVec<T> = iter.into_iter().collect();
        self.0.lock().extend(els);
    }

    /// Removes an element from the set. Returns whether it was present.
    ///
    /// Removing an absent element does nothing.
    pub fn remove<Q: Eq + Hash + ?Sized>(&self, el: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.0.lock().remove(el)
    }

    /// Removes every element of an iterator from the set.
    pub fn remove_all<'a, I: IntoIterator<Item = &'a T>>(&self, iter: I)
    where
        T: 'a,
    {
        let els: SmallVec<&T> = iter.into_iter().collect();
        let mut set = self.0.lock();
        for el in els {
            set.remove(el);
        }
    }

    /// Set membership ∈.
    pub fn contains<Q: Eq + Hash + ?Sized>(&self, el: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.0.lock().contains(el)
    }

    /// Whether every element of an iterator belongs to the set.
    ///
    /// This is vacuously true for an empty iterator.
    pub fn contains_all<'a, I: IntoIterator<Item = &'a T>>(&self, iter: I) -> bool
    where
        T: 'a,
    {
        let els: SmallVec<&T> = iter.into_iter().collect();
        let set = self.0.lock();
        els.into_iter().all(|el| set.contains(el))
    }
}

impl<T: Clone> Set<T> {
    /// Copies the elements out of the set, in arbitrary order.
    pub fn to_vec(&self) -> Vec<T> {
        self.0.lock().iter().cloned().collect()
    }
}

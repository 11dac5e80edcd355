//! # Mathematical sets
//!
//! A [`Set`] stores unique elements of any type implementing [`Eq`] and [`Hash`](std::hash::Hash)
//! and supports the usual algebra of sets: membership, subset relations, union, intersection,
//! difference, complements, Cartesian products, power sets, plus a handful of similarity metrics.
//!
//! Every binary operation exists both as a free function and as a method:
//!
//! ```
//! use mathset::prelude::*;
//!
//! let a = set![1, 2, 3];
//! let b = set![2, 3, 5];
//! assert_eq!(union(&a, &b), a.union(&b));
//! assert_eq!(a.intersect(&b), set![2, 3]);
//! ```
//!
//! Heterogeneous sets are built from [`Value`], which never coerces between kinds:
//!
//! ```
//! use mathset::prelude::*;
//!
//! let a: Set<Value> = set![Value::from(1), Value::from("one"), Value::from(true)];
//! assert!(a.contains(&Value::from(1)));
//! assert!(!a.contains(&Value::from("1")));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
// Sets hash by content. Mutating a set while it sits inside another set is a logic error, exactly
// as with any other key type.
#![allow(clippy::mutable_key_type)]

pub mod algebra;
pub mod error;
pub mod prelude;
pub mod relation;
pub mod set;
pub mod similarity;
pub mod tuple;
pub mod value;


/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;

/// Builds a [`Set`](crate::set::Set) from a list of elements, discarding duplicates.
///
/// ```
/// use mathset::prelude::*;
///
/// let a = set![1, 1, 2, 3, 4, 5];
/// assert_eq!(a.card(), 5);
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => (
        $crate::set::Set::new()
    );
    ($($x: expr), + $(,)?) => (
        $crate::set::Set::from([$($x),+])
    );
}

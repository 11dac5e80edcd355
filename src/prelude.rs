//! Crate prelude.

// The actual prelude.
pub use crate::{
    algebra::{
        cartesian_product, complement, difference, disjoint_union, intersect, map, powerset,
        powerset_card, such_that, symmetric_difference, try_map, try_such_that, union, union_all,
    },
    error::{Metric, SetError},
    relation::{
        equals, equivalence, is_disjoint, is_proper_subset, is_proper_superset, is_subset,
        is_superset,
    },
    set,
    set::Set,
    similarity::{dsc, jaccard_distance, jaccard_similarity, overlap_coefficient},
    tuple::Tuple,
    value::Value,
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use bitvec::prelude::*;
pub(crate) use parking_lot::Mutex;
pub(crate) use std::{
    cmp::Ordering,
    collections::HashSet,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};

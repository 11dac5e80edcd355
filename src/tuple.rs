//! Ordered pairs [`Tuple`].

use crate::prelude::*;

/// An ordered pair (a, b).
///
/// Two tuples are equal iff both of their components are equal, so tuples can themselves be set
/// elements. These are the elements built by [`cartesian_product`] and [`disjoint_union`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tuple<A, B>(pub A, pub B);

impl<A, B> Tuple<A, B> {
    /// Builds the pair (a, b).
    pub const fn new(fst: A, snd: B) -> Self {
        Self(fst, snd)
    }

    /// The first component.
    pub const fn fst(&self) -> &A {
        &self.0
    }

    /// The second component.
    pub const fn snd(&self) -> &B {
        &self.1
    }

    /// The pair (b, a).
    #[must_use]
    pub fn swap(self) -> Tuple<B, A> {
        Tuple(self.1, self.0)
    }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    fn from((fst, snd): (A, B)) -> Self {
        Self(fst, snd)
    }
}

impl<A, B> From<Tuple<A, B>> for (A, B) {
    fn from(Tuple(fst, snd): Tuple<A, B>) -> Self {
        (fst, snd)
    }
}

impl<A: Display, B: Display> Display for Tuple<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({}, {})", self.0, self.1)
    }
}

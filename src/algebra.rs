//! Constructions on sets: unions, intersections, differences, products and power sets.
//!
//! Every operation builds a new [`Set`] and leaves its operands untouched. Each one is available
//! both as a free function and as a method; the two always agree.

use crate::prelude::*;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

// -------------------- Binary operations -------------------- //

/// Union A ∪ B: the elements in `a` or in `b`.
pub fn union<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> Set<T> {
    let mut res = a.clone();
    res.extend(b.to_vec());
    res
}

/// Union over an iterator of sets. The union of no sets is empty.
pub fn union_all<'a, T, I>(sets: I) -> Set<T>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a Set<T>>,
{
    let mut res = Set::new();
    for set in sets {
        res.extend(set.to_vec());
    }
    res
}

/// Intersection A ∩ B: the elements in both `a` and `b`.
///
/// Only the smaller of the two sets is walked through.
pub fn intersect<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> Set<T> {
    let (small, large) = if a.card() <= b.card() { (a, b) } else { (b, a) };
    small
        .to_vec()
        .into_iter()
        .filter(|el| large.contains(el))
        .collect()
}

/// Difference A − B: the elements in `a` but not in `b`. This is also called the relative
/// complement of `b` in `a`.
pub fn difference<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> Set<T> {
    a.to_vec()
        .into_iter()
        .filter(|el| !b.contains(el))
        .collect()
}

/// Symmetric difference A △ B: the elements in exactly one of `a` and `b`.
pub fn symmetric_difference<T: Eq + Hash + Clone>(a: &Set<T>, b: &Set<T>) -> Set<T> {
    union(&difference(a, b), &difference(b, a))
}

/// Complement of a universe in `a`: the elements of `a` lying outside the union of `universe`.
///
/// This is `a − (U₁ ∪ U₂ ∪ ...)`. An empty universe leaves `a` unchanged.
pub fn complement<'a, T, I>(a: &Set<T>, universe: I) -> Set<T>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a Set<T>>,
{
    difference(a, &union_all(universe))
}

/// Cartesian product A × B: every pair `(x, y)` with `x` in `a` and `y` in `b`.
///
/// The product has exactly |A| · |B| elements.
pub fn cartesian_product<T, U>(a: &Set<T>, b: &Set<U>) -> Set<Tuple<T, U>>
where
    T: Eq + Hash + Clone,
    U: Eq + Hash + Clone,
{
    let snd = b.to_vec();
    a.to_vec()
        .into_iter()
        .flat_map(|x| snd.iter().map(move |y| Tuple(x.clone(), y.clone())))
        .collect()
}

/// Disjoint union ⊔: each element is paired with the index of the set it comes from, so that the
/// same element in two different sets yields two different elements.
pub fn disjoint_union<'a, T, I>(sets: I) -> Set<Tuple<T, usize>>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a Set<T>>,
{
    sets.into_iter()
        .enumerate()
        .flat_map(|(i, set)| set.to_vec().into_iter().map(move |el| Tuple(el, i)))
        .collect()
}

// -------------------- Power sets -------------------- //

/// Computes 2ⁿ, if it fits in a `usize`.
fn pow2(n: usize) -> Result<usize, SetError> {
    u32::try_from(n)
        .ok()
        .and_then(|exp| 1usize.checked_shl(exp))
        .ok_or(SetError::PowersetOverflow(n))
}

/// Cardinality of the power set |P(A)| = 2^|A|, computed without building the power set.
///
/// ## Errors
///
/// Returns [`SetError::PowersetOverflow`] if the result doesn't fit in a `usize`.
pub fn powerset_card<T>(a: &Set<T>) -> Result<usize, SetError> {
    pow2(a.card())
}

/// Power set P(A): the set of all subsets of `a`, including Ø and `a` itself.
///
/// The elements of `a` are laid out in some order, and the subset for the integer `i` contains
/// the `j`-th element iff the `j`-th bit of `i` is set.
///
/// ## Errors
///
/// Returns [`SetError::PowersetOverflow`] if 2^|A| doesn't fit in a `usize`.
pub fn powerset<T: Eq + Hash + Clone>(a: &Set<T>) -> Result<Set<Set<T>>, SetError> {
    let els = a.to_vec();
    let card = pow2(els.len())?;

    Ok((0..card)
        .map(|mask| {
            mask.view_bits::<Lsb0>()
                .iter_ones()
                .map(|j| els[j].clone())
                .collect::<Set<T>>()
        })
        .collect())
}

// -------------------- Specification and replacement -------------------- //

/// Set-builder notation {x : P(x)}: the candidates satisfying the predicate.
///
/// The predicate should be a pure function of its argument.
pub fn such_that<T, P, I>(pred: P, candidates: I) -> Set<T>
where
    T: Eq + Hash,
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
{
    candidates.into_iter().filter(pred).collect()
}

/// Set-builder notation with a fallible predicate.
///
/// ## Errors
///
/// Stops at and returns the first error raised by the predicate.
pub fn try_such_that<T, E, P, I>(mut pred: P, candidates: I) -> Result<Set<T>, E>
where
    T: Eq + Hash,
    P: FnMut(&T) -> Result<bool, E>,
    I: IntoIterator<Item = T>,
{
    let mut res = HashSet::new();
    for el in candidates {
        if pred(&el)? {
            res.insert(el);
        }
    }

    Ok(Set::from(res))
}

/// Applies a function to every element of `a`. Elements mapped to the same output collapse.
pub fn map<T, U, F>(a: &Set<T>, func: F) -> Set<U>
where
    T: Clone,
    U: Eq + Hash,
    F: FnMut(T) -> U,
{
    a.to_vec().into_iter().map(func).collect()
}

/// Applies a fallible function to every element of `a`.
///
/// ## Errors
///
/// Stops at and returns the first error raised by the function.
pub fn try_map<T, U, E, F>(a: &Set<T>, func: F) -> Result<Set<U>, E>
where
    T: Clone,
    U: Eq + Hash,
    F: FnMut(T) -> Result<U, E>,
{
    a.to_vec().into_iter().map(func).collect()
}

// -------------------- Methods -------------------- //

impl<T> Set<T> {
    /// Power set cardinality. See [`powerset_card`].
    ///
    /// ## Errors
    ///
    /// See [`powerset_card`].
    pub fn powerset_card(&self) -> Result<usize, SetError> {
        powerset_card(self)
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Union ∪. See [`union`].
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        union(self, other)
    }

    /// Intersection ∩. See [`intersect`].
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        intersect(self, other)
    }

    /// Difference −. See [`difference`].
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        difference(self, other)
    }

    /// Symmetric difference △. See [`symmetric_difference`].
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        symmetric_difference(self, other)
    }

    /// The elements of the set outside a universe. See [`complement`].
    #[must_use]
    pub fn complement<'a, I: IntoIterator<Item = &'a Self>>(&self, universe: I) -> Self
    where
        T: 'a,
    {
        complement(self, universe)
    }

    /// Cartesian product ×. See [`cartesian_product`].
    pub fn cartesian_product<U: Eq + Hash + Clone>(&self, other: &Set<U>) -> Set<Tuple<T, U>> {
        cartesian_product(self, other)
    }

    /// Disjoint union of two sets. The elements of `self` are tagged with 0, those of `other` with
    /// 1. See [`disjoint_union`].
    pub fn disjoint_union(&self, other: &Self) -> Set<Tuple<T, usize>> {
        disjoint_union([self, other])
    }

    /// Power set. See [`powerset`].
    ///
    /// ## Errors
    ///
    /// See [`powerset`].
    pub fn powerset(&self) -> Result<Set<Self>, SetError> {
        powerset(self)
    }

    /// The elements of the set satisfying a predicate. See [`such_that`].
    #[must_use]
    pub fn select<P: FnMut(&T) -> bool>(&self, pred: P) -> Self {
        such_that(pred, self.to_vec())
    }

    /// The elements of the set satisfying a fallible predicate. See [`try_such_that`].
    ///
    /// ## Errors
    ///
    /// See [`try_such_that`].
    pub fn try_select<E, P: FnMut(&T) -> Result<bool, E>>(&self, pred: P) -> Result<Self, E> {
        try_such_that(pred, self.to_vec())
    }

    /// Replaces each element by its image. See [`map`].
    pub fn map<U: Eq + Hash, F: FnMut(T) -> U>(&self, func: F) -> Set<U> {
        map(self, func)
    }

    /// Replaces each element by its image under a fallible function. See [`try_map`].
    ///
    /// ## Errors
    ///
    /// See [`try_map`].
    pub fn try_map<U: Eq + Hash, E, F: FnMut(T) -> Result<U, E>>(
        &self,
        func: F,
    ) -> Result<Set<U>, E> {
        try_map(self, func)
    }
}

// -------------------- Operators -------------------- //

impl<T: Eq + Hash + Clone> BitOr for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: Self) -> Set<T> {
        union(self, rhs)
    }
}

impl<T: Eq + Hash + Clone> BitAnd for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: Self) -> Set<T> {
        intersect(self, rhs)
    }
}

impl<T: Eq + Hash + Clone> Sub for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: Self) -> Set<T> {
        difference(self, rhs)
    }
}

impl<T: Eq + Hash + Clone> BitXor for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: Self) -> Set<T> {
        symmetric_difference(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Whether `n` is a prime number.
    fn is_prime(n: u32) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn union_basic() {
        let a = set![1, 2];
        let b = set![2, 3, 5];
        assert_eq!(union(&a, &b), set![1, 2, 3, 5]);
        assert_eq!(&a | &b, set![1, 2, 3, 5]);

        // Operands are untouched.
        assert_eq!(a, set![1, 2]);
        assert_eq!(b, set![2, 3, 5]);
    }

    #[test]
    fn union_all_basic() {
        let sets = [set![1], set![2, 3], set![3, 4]];
        assert_eq!(union_all(&sets), set![1, 2, 3, 4]);
        assert!(union_all::<i32, _>([]).is_empty());
    }

    #[test]
    fn intersect_basic() {
        let a = set![1, 2];
        let b = set![2, 3, 5];
        assert_eq!(intersect(&a, &b), set![2]);
        assert_eq!(&b & &a, set![2]);
        assert!(intersect(&a, &Set::new()).is_empty());
    }

    #[test]
    fn difference_basic() {
        let a = set![1, 2, 3, 4];
        let b = set![2, 3, 5, 8];
        assert_eq!(difference(&a, &b), set![1, 4]);
        assert_eq!(&b - &a, set![5, 8]);
    }

    #[test]
    fn symmetric_difference_basic() {
        let a = set![1, 2, 3, 4];
        let b = set![2, 3, 5, 8];
        assert_eq!(symmetric_difference(&a, &b), set![1, 4, 5, 8]);
        assert_eq!(&a ^ &b, &b ^ &a);
    }

    #[test]
    fn complement_basic() {
        let a = set![1, 2, 3, 7];
        let u1 = set![1, 2];
        let u2 = set![3, 4];
        assert_eq!(complement(&a, [&u1, &u2]), set![7]);
        assert_eq!(a.complement([&u1]), set![3, 7]);
        assert_eq!(complement(&a, []), a);

        // Operands are untouched.
        assert_eq!(u1, set![1, 2]);
        assert_eq!(a.card(), 4);
    }

    #[test]
    fn complement_outside_universe() {
        let a: Set<i32> = (1..=15).collect();
        let u1: Set<i32> = (1..=5).collect();
        let u2: Set<i32> = (6..=10).collect();

        let c = complement(&a, [&u1, &u2]);
        assert_eq!(c.card(), 5);
        assert_eq!(c, (11..=15).collect::<Set<_>>());
        assert_eq!(a.complement([&u1, &u2]), c);
        assert_eq!(difference(&a, &union(&u1, &u2)), c);

        // A set inside its universe has an empty complement.
        assert!(complement(&u1, [&u1, &u2]).is_empty());
    }

    #[test]
    fn powerset_large_snapshot() {
        // More elements than fit inline in a small vector.
        let a: Set<i32> = (0..12).collect();
        let p = a.powerset().unwrap();
        assert_eq!(p.card(), 1 << 12);
        assert!(p.contains(&a));
        assert!(p.contains(&Set::<i32>::new()));
    }

    #[test]
    fn cartesian_product_basic() {
        let a = set![1, 2];
        let b = set![3, 4];
        assert_eq!(
            cartesian_product(&a, &b),
            set![Tuple(1, 3), Tuple(2, 3), Tuple(1, 4), Tuple(2, 4)]
        );
        assert_eq!(
            b.cartesian_product(&a),
            set![Tuple(3, 1), Tuple(3, 2), Tuple(4, 1), Tuple(4, 2)]
        );

        let names = set!["x", "y", "z"];
        assert_eq!(a.cartesian_product(&names).card(), 6);
        assert!(a.cartesian_product(&Set::<u8>::new()).is_empty());
    }

    #[test]
    fn disjoint_union_basic() {
        let a = set![1, 2];
        let b = set![2, 3];
        let c = disjoint_union([&a, &b]);

        assert_eq!(c.card(), 4);
        assert!(c.contains(&Tuple(2, 0)));
        assert!(c.contains(&Tuple(2, 1)));
        assert_eq!(a.disjoint_union(&b), c);
        assert_eq!(disjoint_union([&a, &a, &a]).card(), 6);
    }

    #[test]
    fn powerset_basic() {
        let a = set![1, 2, 3];
        let p = powerset(&a).unwrap();

        assert_eq!(p.card(), 8);
        assert_eq!(a.powerset_card(), Ok(8));
        for subset in [
            set![],
            set![1],
            set![2],
            set![3],
            set![1, 2],
            set![1, 3],
            set![2, 3],
            set![1, 2, 3],
        ] {
            assert!(p.contains(&subset), "{subset} missing from {p}");
        }

        assert_eq!(
            Set::<i32>::new().powerset().unwrap(),
            set![Set::<i32>::new()]
        );
    }

    #[test]
    fn powerset_overflow() {
        let bits = usize::BITS as usize;
        let big: Set<usize> = (0..bits).collect();
        assert_eq!(big.powerset_card(), Err(SetError::PowersetOverflow(bits)));
        assert_eq!(
            big.powerset().map(|p| p.card()),
            Err(SetError::PowersetOverflow(bits))
        );

        big.remove(&0);
        assert_eq!(big.powerset_card(), Ok(1 << (bits - 1)));
    }

    #[test]
    fn such_that_basic() {
        let primes = such_that(|&x| is_prime(x), 0..30);
        assert_eq!(primes, set![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);

        let evens = primes.select(|x| x % 2 == 0);
        assert_eq!(evens, set![2]);
        assert!(such_that(|_: &u32| true, []).is_empty());
    }

    #[test]
    fn try_such_that_basic() {
        let small: Result<Set<u32>, String> =
            try_such_that(|&x| Ok(x < 3), [1, 2, 3, 4]);
        assert_eq!(small, Ok(set![1, 2]));

        let fail = try_such_that(
            |&x: &u32| if x == 3 { Err(x) } else { Ok(true) },
            [1, 2, 3, 4],
        );
        assert_eq!(fail, Err(3));

        let a = set![1, 2, 3];
        assert_eq!(a.try_select(|&x| Ok::<_, ()>(x > 1)), Ok(set![2, 3]));
    }

    #[test]
    fn map_basic() {
        let a = set![1, 2, 3, 4];
        assert_eq!(map(&a, |x| x % 2), set![0, 1]);
        assert_eq!(a.map(|x| x.to_string()).card(), 4);

        let halves = a.try_map(|x| if x % 2 == 0 { Ok(x / 2) } else { Err(x) });
        assert!(matches!(halves, Err(1 | 3)));
        assert_eq!(
            set![2, 4].try_map(|x| Ok::<_, ()>(x / 2)),
            Ok(set![1, 2])
        );
    }

    #[test]
    fn self_operand() {
        // A set used as both operands must not deadlock.
        let a = set![1, 2, 3];
        assert_eq!(a.union(&a), a);
        assert_eq!(a.intersect(&a), a);
        assert!(a.difference(&a).is_empty());
        assert!(a.symmetric_difference(&a).is_empty());
        assert_eq!(a.cartesian_product(&a).card(), 9);
    }
}

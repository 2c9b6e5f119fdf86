//! The `Isomorphism` construct: a pair of mutually inverse functions.

use std::convert;
use std::fmt;
use std::marker::PhantomData;

/// A pair of total, pure functions `to: A -> B` and `from: B -> A`.
///
/// The pair is expected to be a bijection:
///
/// ```text
/// from(to(a)) == a    for every a: A
/// to(from(b)) == b    for every b: B
/// ```
///
/// Nothing checks this at runtime. Operations built on an `Isomorphism`,
/// such as [`derive_semigroup`](super::derive_semigroup), silently lose their
/// guarantees when handed a pair that is not a bijection.
///
/// # Type Parameters
///
/// - `A`, `B`: The two isomorphic types
/// - `T`: The `to` function type
/// - `F`: The `from` function type
///
/// # Example
///
/// ```
/// use lambars_iso::isomorphism::Isomorphism;
///
/// let bit = Isomorphism::new(
///     |flag: bool| if flag { 1_u8 } else { 0 },
///     |digit: u8| digit == 1,
/// );
///
/// assert_eq!(bit.to(true), 1);
/// assert!(!bit.from(0));
/// ```
pub struct Isomorphism<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    to_function: T,
    from_function: F,
    _marker: PhantomData<fn(A) -> B>,
}

impl<A, B, T, F> Isomorphism<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    /// Creates an isomorphism from its two arrows.
    #[must_use]
    pub const fn new(to_function: T, from_function: F) -> Self {
        Self {
            to_function,
            from_function,
            _marker: PhantomData,
        }
    }

    /// Maps a value of `A` to `B`.
    pub fn to(&self, source: A) -> B {
        (self.to_function)(source)
    }

    /// Maps a value of `B` back to `A`.
    pub fn from(&self, value: B) -> A {
        (self.from_function)(value)
    }

    /// Consumes the isomorphism and returns its `(to, from)` functions.
    pub fn into_parts(self) -> (T, F) {
        (self.to_function, self.from_function)
    }

    /// Swaps the two arrows, producing an `Isomorphism<B, A>`.
    ///
    /// Reversing twice gives back the original arrows.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::isomorphism::Isomorphism;
    ///
    /// let chars = Isomorphism::new(
    ///     |s: String| s.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    ///
    /// let string = chars.reverse();
    /// assert_eq!(string.to(vec!['o', 'k']), "ok");
    /// ```
    #[must_use]
    pub fn reverse(self) -> Isomorphism<B, A, F, T> {
        Isomorphism::new(self.from_function, self.to_function)
    }

    /// Chains this isomorphism with one from `B` to `C`.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::isomorphism::Isomorphism;
    ///
    /// let negate = Isomorphism::new(|x: i64| -x, |x: i64| -x);
    /// let shift = Isomorphism::new(|x: i64| x + 10, |x: i64| x - 10);
    ///
    /// let composed = negate.compose(shift);
    /// assert_eq!(composed.to(3), 7);
    /// assert_eq!(composed.from(7), 3);
    /// ```
    pub fn compose<C, T2, F2>(
        self,
        other: Isomorphism<B, C, T2, F2>,
    ) -> Isomorphism<A, C, impl Fn(A) -> C, impl Fn(C) -> A>
    where
        T2: Fn(B) -> C,
        F2: Fn(C) -> B,
    {
        let (first_to, first_from) = self.into_parts();
        let (second_to, second_from) = other.into_parts();

        Isomorphism::new(
            move |source: A| second_to(first_to(source)),
            move |value: C| first_from(second_from(value)),
        )
    }

    /// Applies `function` on the `B` side: `from(function(to(source)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::isomorphism::Isomorphism;
    ///
    /// let chars = Isomorphism::new(
    ///     |s: String| s.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    ///
    /// let upper = chars.modify("iso".to_string(), |letters| {
    ///     letters.into_iter().map(|c| c.to_ascii_uppercase()).collect()
    /// });
    /// assert_eq!(upper, "ISO");
    /// ```
    pub fn modify<G>(&self, source: A, function: G) -> A
    where
        G: FnOnce(B) -> B,
    {
        self.from(function(self.to(source)))
    }

    /// Checks both round-trip laws at one sampled pair of values.
    ///
    /// Returns `true` when `from(to(source)) == source` and
    /// `to(from(value)) == value`. Nothing in this crate calls it; it is
    /// meant for tests of caller-supplied isomorphisms.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::isomorphism::Isomorphism;
    ///
    /// let lossy = Isomorphism::new(|x: i32| x / 2, |x: i32| x * 2);
    /// assert!(lossy.round_trips(&4, &2));
    /// assert!(!lossy.round_trips(&5, &2));
    /// ```
    pub fn round_trips(&self, source: &A, value: &B) -> bool
    where
        A: Clone + PartialEq,
        B: Clone + PartialEq,
    {
        self.from(self.to(source.clone())) == *source && self.to(self.from(value.clone())) == *value
    }
}

impl<A, B, T, F> Clone for Isomorphism<A, B, T, F>
where
    T: Fn(A) -> B + Clone,
    F: Fn(B) -> A + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.to_function.clone(), self.from_function.clone())
    }
}

impl<A, B, T, F> Copy for Isomorphism<A, B, T, F>
where
    T: Fn(A) -> B + Copy,
    F: Fn(B) -> A + Copy,
{
}

impl<A, B, T, F> fmt::Debug for Isomorphism<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Isomorphism").finish_non_exhaustive()
    }
}

/// Swaps the arrows of `isomorphism`. Same as [`Isomorphism::reverse`].
#[must_use]
pub fn reverse<A, B, T, F>(isomorphism: Isomorphism<A, B, T, F>) -> Isomorphism<B, A, F, T>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    isomorphism.reverse()
}

/// An isomorphism from `T` to itself with function-pointer arrows.
pub type Automorphism<T> = Isomorphism<T, T, fn(T) -> T, fn(T) -> T>;

/// The identity isomorphism on `T`.
///
/// # Example
///
/// ```
/// use lambars_iso::isomorphism::identity;
///
/// let same = identity::<String>();
/// assert_eq!(same.to("x".to_string()), "x");
/// assert_eq!(same.from("y".to_string()), "y");
/// ```
#[must_use]
pub fn identity<T>() -> Automorphism<T> {
    let arrow: fn(T) -> T = convert::identity;
    Isomorphism::new(arrow, arrow)
}

/// Creates an [`Isomorphism`] from `to` and `from` functions.
///
/// # Example
///
/// ```
/// use lambars_iso::isomorphism;
///
/// let wrap = isomorphism!(|x: u8| (x,), |(x,): (u8,)| x);
/// assert_eq!(wrap.to(9), (9,));
/// ```
#[macro_export]
macro_rules! isomorphism {
    ($to:expr, $from:expr) => {
        $crate::isomorphism::Isomorphism::new($to, $from)
    };
}

static_assertions::assert_impl_all!(
    Isomorphism<bool, u8, fn(bool) -> u8, fn(u8) -> bool>: Send, Sync, Copy
);

//! Iso optics: lossless, bidirectional conversions.
//!
//! An Iso is the total accessor of the optics hierarchy. Its two arrows are
//! named `get` and `reverse_get`; the [`Isomorphism`](crate::isomorphism::Isomorphism)
//! construct carries the same pair under the names `to` and `from`.
//!
//! # Laws
//!
//! 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`
//!
//! # Examples
//!
//! ```
//! use lambars_iso::optics::{FunctionIso, Iso};
//!
//! let celsius_kelvin = FunctionIso::new(|celsius: i64| celsius + 273, |kelvin: i64| kelvin - 273);
//!
//! assert_eq!(celsius_kelvin.get(27), 300);
//! assert_eq!(celsius_kelvin.reverse_get(0), -273);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// An isomorphism between `S` and `A`, in optic form.
///
/// # Laws
///
/// 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
/// 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`
pub trait Iso<S, A> {
    /// Converts from the source type to the target type.
    fn get(&self, source: S) -> A;

    /// Converts from the target type back to the source type.
    fn reverse_get(&self, value: A) -> S;

    /// Swaps the two directions.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::optics::{FunctionIso, Iso};
    ///
    /// let negate = FunctionIso::new(|x: i32| -x, |x: i32| -x);
    /// let reversed = negate.reverse();
    /// assert_eq!(reversed.get(5), -5);
    /// ```
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Applies `function` on the target side: `reverse_get(function(get(source)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::optics::{FunctionIso, Iso};
    ///
    /// let chars = FunctionIso::new(
    ///     |s: String| s.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    /// let sorted = chars.modify("optic".to_string(), |mut letters| {
    ///     letters.sort_unstable();
    ///     letters
    /// });
    /// assert_eq!(sorted, "ciopt");
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(function(self.get(source)))
    }

    /// Chains this Iso with one from `A` to `B`.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::optics::{FunctionIso, Iso};
    ///
    /// let widen = FunctionIso::new(|x: i32| i64::from(x), |x: i64| x as i32);
    /// let shift = FunctionIso::new(|x: i64| x + 1, |x: i64| x - 1);
    ///
    /// let composed = widen.compose(shift);
    /// assert_eq!(composed.get(41), 42_i64);
    /// assert_eq!(composed.reverse_get(42), 41);
    /// ```
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }
}

// =============================================================================
// FunctionIso
// =============================================================================

/// An Iso built from a pair of functions.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The get function type
/// - `Rg`: The `reverse_get` function type
pub struct FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    get_function: G,
    reverse_get_function: Rg,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, Rg> FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    /// Creates a new `FunctionIso` from get and `reverse_get` functions.
    #[must_use]
    pub const fn new(get_function: G, reverse_get_function: Rg) -> Self {
        Self {
            get_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }

    /// Consumes the Iso and returns its `(get, reverse_get)` functions.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::optics::FunctionIso;
    ///
    /// let double = FunctionIso::new(|x: i32| x * 2, |x: i32| x / 2);
    /// let (get, reverse_get) = double.into_parts();
    /// assert_eq!(reverse_get(get(21)), 21);
    /// ```
    pub fn into_parts(self) -> (G, Rg) {
        (self.get_function, self.reverse_get_function)
    }
}

impl<S, A, G, Rg> Iso<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.get_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }
}

impl<S, A, G, Rg> Clone for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A + Clone,
    Rg: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_function: self.get_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> fmt::Debug for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionIso").finish_non_exhaustive()
    }
}

// =============================================================================
// ReversedIso
// =============================================================================

/// An Iso with its directions swapped. Created by [`Iso::reverse`].
#[derive(Clone, Debug)]
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Wraps `inner`, swapping its directions.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Returns the wrapped Iso.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.inner.get(value)
    }
}

// =============================================================================
// ComposedIso
// =============================================================================

/// Two Isos chained through the intermediate type `A`. Created by [`Iso::compose`].
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<fn(A) -> A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Chains `first` (S to A) with `second` (A to B).
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        self.second.get(self.first.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<I1: fmt::Debug, I2: fmt::Debug, A> fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a [`FunctionIso`] from get and `reverse_get` functions.
///
/// # Example
///
/// ```
/// use lambars_iso::iso;
/// use lambars_iso::optics::Iso;
///
/// let swap = iso!(|(a, b): (i32, char)| (b, a), |(b, a): (char, i32)| (a, b));
/// assert_eq!(swap.get((1, 'x')), ('x', 1));
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr) => {
        $crate::optics::FunctionIso::new($get, $reverse_get)
    };
}

static_assertions::assert_impl_all!(FunctionIso<u8, u16, fn(u8) -> u16, fn(u16) -> u8>: Send, Sync, Clone);

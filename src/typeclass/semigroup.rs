//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup when there is a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! No identity element is required.
//!
//! # Examples
//!
//! ```rust
//! use lambars_iso::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(String::from("iso").combine(String::from("morphism")), "isomorphism");
//! assert_eq!(Sum::new(2).combine(Sum::new(40)), Sum::new(42));
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{All, Any, Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// To pass a semigroup around as a value instead of resolving it by type,
/// lift it with [`semigroup_of`](super::semigroup_of).
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_iso::typeclass::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, leaving both available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_iso::typeclass::Semigroup;
    ///
    /// let left = String::from("iso");
    /// let right = String::from("morphism");
    /// assert_eq!(left.combine_ref(&right), "isomorphism");
    /// assert_eq!(left, "iso");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_iso::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        (1..count).fold(self.clone(), |accumulator, _| {
            accumulator.combine(self.clone())
        })
    }

    /// Reduces an iterator with `combine`, or returns `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_iso::typeclass::{Max, Semigroup};
    ///
    /// let values = vec![Max::new(3), Max::new(9), Max::new(4)];
    /// assert_eq!(Max::reduce_all(values), Some(Max::new(9)));
    /// assert_eq!(Max::<i32>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.append(&mut self.clone());
        result.append(&mut other.clone());
        result
    }
}

/// `None` is absorbed: `Some(a).combine(None) == Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

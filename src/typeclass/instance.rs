//! Semigroup instances as first-class values.
//!
//! [`Semigroup`] resolves the combining operation from the type. A
//! [`SemigroupInstance`] carries it as a value instead, which allows more
//! than one operation per type (`bool` under both `&&` and `||`) and lets an
//! operation be built at runtime, for example by transporting it across an
//! isomorphism.
//!
//! # Laws
//!
//! ```text
//! s.concat(s.concat(x, y), z) == s.concat(x, s.concat(y, z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_iso::typeclass::{SemigroupInstance, semigroup_all, semigroup_any};
//!
//! assert!(!semigroup_all().concat(true, false));
//! assert!(semigroup_any().concat(true, false));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul};

use super::Semigroup;

/// A type paired with an associative binary operation, held as a value.
///
/// # Laws
///
/// `concat` must be associative:
///
/// ```text
/// s.concat(s.concat(x, y), z) == s.concat(x, s.concat(y, z))
/// ```
pub trait SemigroupInstance<T> {
    /// Combines two values.
    fn concat(&self, left: T, right: T) -> T;

    /// Folds `rest` into `start` from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_iso::typeclass::{SemigroupInstance, semigroup_sum};
    ///
    /// assert_eq!(semigroup_sum::<i32>().concat_all(1, vec![2, 3, 4]), 10);
    /// ```
    fn concat_all<I>(&self, start: T, rest: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        rest.into_iter()
            .fold(start, |accumulator, element| self.concat(accumulator, element))
    }
}

impl<T, S> SemigroupInstance<T> for &S
where
    S: SemigroupInstance<T> + ?Sized,
{
    fn concat(&self, left: T, right: T) -> T {
        (**self).concat(left, right)
    }
}

// =============================================================================
// FunctionSemigroup
// =============================================================================

/// A semigroup instance backed by a binary function.
///
/// The caller is responsible for the function being associative.
///
/// # Examples
///
/// ```rust
/// use lambars_iso::typeclass::{FunctionSemigroup, SemigroupInstance};
///
/// let gcd = FunctionSemigroup::new(|mut left: u32, mut right: u32| {
///     while right != 0 {
///         (left, right) = (right, left % right);
///     }
///     left
/// });
/// assert_eq!(gcd.concat(12, 18), 6);
/// ```
pub struct FunctionSemigroup<T, C>
where
    C: Fn(T, T) -> T,
{
    concat_function: C,
    _marker: PhantomData<fn(T, T) -> T>,
}

impl<T, C> FunctionSemigroup<T, C>
where
    C: Fn(T, T) -> T,
{
    /// Creates a new `FunctionSemigroup` from an associative binary function.
    #[must_use]
    pub const fn new(concat_function: C) -> Self {
        Self {
            concat_function,
            _marker: PhantomData,
        }
    }
}

impl<T, C> SemigroupInstance<T> for FunctionSemigroup<T, C>
where
    C: Fn(T, T) -> T,
{
    fn concat(&self, left: T, right: T) -> T {
        (self.concat_function)(left, right)
    }
}

impl<T, C> Clone for FunctionSemigroup<T, C>
where
    C: Fn(T, T) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            concat_function: self.concat_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, C> Copy for FunctionSemigroup<T, C> where C: Fn(T, T) -> T + Copy {}

impl<T, C> fmt::Debug for FunctionSemigroup<T, C>
where
    C: Fn(T, T) -> T,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionSemigroup")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TypeclassSemigroup
// =============================================================================

/// The [`Semigroup`] implementation of `T`, lifted into a value.
///
/// Obtain one with [`semigroup_of`].
pub struct TypeclassSemigroup<T> {
    _marker: PhantomData<fn(T, T) -> T>,
}

impl<T: Semigroup> SemigroupInstance<T> for TypeclassSemigroup<T> {
    fn concat(&self, left: T, right: T) -> T {
        left.combine(right)
    }
}

impl<T> Clone for TypeclassSemigroup<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeclassSemigroup<T> {}

impl<T> Default for TypeclassSemigroup<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for TypeclassSemigroup<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("TypeclassSemigroup")
    }
}

// =============================================================================
// Standard Instances
// =============================================================================

/// Lifts the [`Semigroup`] implementation of `T` into a [`SemigroupInstance`].
///
/// # Examples
///
/// ```rust
/// use lambars_iso::typeclass::{SemigroupInstance, semigroup_of};
///
/// let strings = semigroup_of::<String>();
/// assert_eq!(strings.concat("foo".into(), "bar".into()), "foobar");
/// ```
#[must_use]
pub fn semigroup_of<T: Semigroup>() -> TypeclassSemigroup<T> {
    TypeclassSemigroup::default()
}

/// Logical conjunction over `bool`.
#[must_use]
pub fn semigroup_all() -> impl SemigroupInstance<bool> + Copy + Send + Sync {
    FunctionSemigroup::new(|left: bool, right: bool| left && right)
}

/// Logical disjunction over `bool`.
#[must_use]
pub fn semigroup_any() -> impl SemigroupInstance<bool> + Copy + Send + Sync {
    FunctionSemigroup::new(|left: bool, right: bool| left || right)
}

/// Keeps the left operand.
///
/// # Examples
///
/// ```rust
/// use lambars_iso::typeclass::{SemigroupInstance, semigroup_first};
///
/// assert_eq!(semigroup_first::<char>().concat_all('a', ['b', 'c']), 'a');
/// ```
#[must_use]
pub fn semigroup_first<T>() -> impl SemigroupInstance<T> + Copy + Send + Sync {
    FunctionSemigroup::new(|left: T, _right: T| left)
}

/// Keeps the right operand.
#[must_use]
pub fn semigroup_last<T>() -> impl SemigroupInstance<T> + Copy + Send + Sync {
    FunctionSemigroup::new(|_left: T, right: T| right)
}

/// Keeps the smaller operand; the left one on ties.
#[must_use]
pub fn semigroup_min<T: Ord>() -> impl SemigroupInstance<T> + Copy + Send + Sync {
    FunctionSemigroup::new(|left: T, right: T| if right < left { right } else { left })
}

/// Keeps the larger operand; the left one on ties.
#[must_use]
pub fn semigroup_max<T: Ord>() -> impl SemigroupInstance<T> + Copy + Send + Sync {
    FunctionSemigroup::new(|left: T, right: T| if right > left { right } else { left })
}

/// Addition.
#[must_use]
pub fn semigroup_sum<T: Add<Output = T>>() -> impl SemigroupInstance<T> + Copy + Send + Sync {
    FunctionSemigroup::new(|left: T, right: T| left + right)
}

/// Multiplication.
#[must_use]
pub fn semigroup_product<T: Mul<Output = T>>() -> impl SemigroupInstance<T> + Copy + Send + Sync {
    FunctionSemigroup::new(|left: T, right: T| left * right)
}

static_assertions::assert_impl_all!(TypeclassSemigroup<String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(FunctionSemigroup<i32, fn(i32, i32) -> i32>: Send, Sync, Copy);

//! Transporting a semigroup across an isomorphism.
//!
//! Given `Isomorphism<A, B>` and a semigroup over `A`, the derived semigroup
//! over `B` is
//!
//! ```text
//! concat(x, y) = to(source.concat(from(x), from(y)))
//! ```
//!
//! It is associative whenever the source is and the isomorphism is a
//! bijection.

use std::fmt;
use std::sync::Arc;

use super::Isomorphism;
use crate::typeclass::SemigroupInstance;

/// An isomorphism bound once, ready to lift any number of semigroups over `A`
/// into semigroups over `B`. Created by [`derive_semigroup`].
///
/// The isomorphism is shared with every semigroup derived from it.
pub struct SemigroupDeriver<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    isomorphism: Arc<Isomorphism<A, B, T, F>>,
}

impl<A, B, T, F> SemigroupDeriver<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    /// Binds `isomorphism`.
    #[must_use]
    pub fn new(isomorphism: Isomorphism<A, B, T, F>) -> Self {
        Self {
            isomorphism: Arc::new(isomorphism),
        }
    }

    /// Lifts `source` into a semigroup over `B`.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::isomorphism::{Isomorphism, derive_semigroup};
    /// use lambars_iso::typeclass::{SemigroupInstance, semigroup_all, semigroup_any};
    ///
    /// let bit = Isomorphism::new(|flag: bool| u8::from(flag), |digit: u8| digit == 1);
    /// let deriver = derive_semigroup(bit);
    ///
    /// let and = deriver.derive(semigroup_all());
    /// let or = deriver.derive(semigroup_any());
    /// assert_eq!(and.concat(0, 1), 0);
    /// assert_eq!(or.concat(0, 1), 1);
    /// ```
    pub fn derive<S>(&self, source: S) -> DerivedSemigroup<A, B, T, F, S>
    where
        S: SemigroupInstance<A>,
    {
        DerivedSemigroup {
            isomorphism: Arc::clone(&self.isomorphism),
            source,
        }
    }

    /// The bound isomorphism.
    #[must_use]
    pub fn isomorphism(&self) -> &Isomorphism<A, B, T, F> {
        &self.isomorphism
    }
}

impl<A, B, T, F> Clone for SemigroupDeriver<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    fn clone(&self) -> Self {
        Self {
            isomorphism: Arc::clone(&self.isomorphism),
        }
    }
}

impl<A, B, T, F> fmt::Debug for SemigroupDeriver<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SemigroupDeriver")
            .field("isomorphism", &self.isomorphism)
            .finish()
    }
}

/// A semigroup over `B` obtained from a semigroup `S` over `A`.
pub struct DerivedSemigroup<A, B, T, F, S>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    isomorphism: Arc<Isomorphism<A, B, T, F>>,
    source: S,
}

impl<A, B, T, F, S> DerivedSemigroup<A, B, T, F, S>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    /// The semigroup over `A` this one was derived from.
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<A, B, T, F, S> SemigroupInstance<B> for DerivedSemigroup<A, B, T, F, S>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
    S: SemigroupInstance<A>,
{
    fn concat(&self, left: B, right: B) -> B {
        let isomorphism = &self.isomorphism;
        let combined = self
            .source
            .concat(isomorphism.from(left), isomorphism.from(right));
        isomorphism.to(combined)
    }
}

impl<A, B, T, F, S> Clone for DerivedSemigroup<A, B, T, F, S>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            isomorphism: Arc::clone(&self.isomorphism),
            source: self.source.clone(),
        }
    }
}

impl<A, B, T, F, S> fmt::Debug for DerivedSemigroup<A, B, T, F, S>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
    S: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DerivedSemigroup")
            .field("isomorphism", &self.isomorphism)
            .field("source", &self.source)
            .finish()
    }
}

impl<A, B, T, F> Isomorphism<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    /// Lifts a single semigroup over `A` into one over `B`.
    ///
    /// Use [`derive_semigroup`] instead to lift several semigroups with the
    /// same isomorphism.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_iso::isomorphism::Isomorphism;
    /// use lambars_iso::typeclass::{SemigroupInstance, semigroup_of};
    ///
    /// let chars = Isomorphism::new(
    ///     |s: String| s.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    ///
    /// let append = chars.derive_semigroup_with(semigroup_of::<String>());
    /// assert_eq!(append.concat(vec!['a'], vec!['b']), vec!['a', 'b']);
    /// ```
    pub fn derive_semigroup_with<S>(self, source: S) -> DerivedSemigroup<A, B, T, F, S>
    where
        S: SemigroupInstance<A>,
    {
        SemigroupDeriver::new(self).derive(source)
    }
}

/// Binds an isomorphism from `A` to `B` for deriving semigroups over `B`.
///
/// This is the curried form: the returned [`SemigroupDeriver`] takes the
/// source semigroup in a second step and can be reused.
///
/// # Example
///
/// ```
/// use lambars_iso::isomorphism::{Isomorphism, derive_semigroup};
/// use lambars_iso::typeclass::{SemigroupInstance, semigroup_all};
///
/// let bit = Isomorphism::new(|flag: bool| if flag { 1_u8 } else { 0 }, |digit: u8| digit == 1);
///
/// let and = derive_semigroup(bit).derive(semigroup_all());
/// assert_eq!(and.concat(0, 1), 0);
/// assert_eq!(and.concat(1, 1), 1);
/// ```
#[must_use]
pub fn derive_semigroup<A, B, T, F>(
    isomorphism: Isomorphism<A, B, T, F>,
) -> SemigroupDeriver<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    SemigroupDeriver::new(isomorphism)
}

static_assertions::assert_impl_all!(
    SemigroupDeriver<bool, u8, fn(bool) -> u8, fn(u8) -> bool>: Send, Sync, Clone
);

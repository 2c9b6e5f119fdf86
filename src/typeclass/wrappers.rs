//! Newtype wrappers selecting a particular semigroup for a type.
//!
//! The same underlying type often admits more than one associative
//! operation. Integers combine by addition or by multiplication, booleans by
//! conjunction or by disjunction. Each wrapper picks one of them so that the
//! type can implement [`Semigroup`](super::Semigroup) unambiguously.
//!
//! | Wrapper        | `combine`         |
//! |----------------|-------------------|
//! | [`Sum`]        | `a + b`           |
//! | [`Product`]    | `a * b`           |
//! | [`Max`]        | larger of the two |
//! | [`Min`]        | smaller of the two|
//! | [`All`]        | `a && b`          |
//! | [`Any`]        | `a \|\| b`        |
//!
//! Every wrapper is itself isomorphic to the type it wraps: `new` and
//! `into_inner` are mutually inverse.

macro_rules! define_wrapper {
    ($(#[$meta:meta])* $name:ident<$param:ident>) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<$param>(pub $param);

        impl<$param> $name<$param> {
            #[doc = concat!("Wraps `value` in a `", stringify!($name), "`.")]
            #[inline]
            pub const fn new(value: $param) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> $param {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &$param {
                &self.0
            }
        }

        impl<$param> From<$param> for $name<$param> {
            fn from(value: $param) -> Self {
                Self::new(value)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub bool);

        impl $name {
            #[doc = concat!("Wraps `value` in a `", stringify!($name), "`.")]
            #[inline]
            pub const fn new(value: bool) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner flag.
            #[inline]
            pub const fn into_inner(self) -> bool {
                self.0
            }
        }

        impl From<bool> for $name {
            fn from(value: bool) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for bool {
            fn from(wrapper: $name) -> Self {
                wrapper.0
            }
        }
    };
}

define_wrapper! {
    /// The additive semigroup: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_iso::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
    /// ```
    Sum<A>
}

define_wrapper! {
    /// The multiplicative semigroup: `Product(a).combine(Product(b)) == Product(a * b)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_iso::typeclass::{Product, Semigroup};
    ///
    /// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
    /// ```
    Product<A>
}

define_wrapper! {
    /// The maximum semigroup: keeps the larger value.
    Max<A>
}

define_wrapper! {
    /// The minimum semigroup: keeps the smaller value.
    Min<A>
}

define_wrapper! {
    /// The conjunction semigroup over `bool`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_iso::typeclass::{All, Semigroup};
    ///
    /// assert_eq!(All::new(true).combine(All::new(false)), All::new(false));
    /// ```
    All
}

define_wrapper! {
    /// The disjunction semigroup over `bool`.
    Any
}

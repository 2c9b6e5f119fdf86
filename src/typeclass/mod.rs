//! Algebraic type classes.
//!
//! - [`Semigroup`]: an associative binary operation resolved by type (`combine`)
//! - [`SemigroupInstance`]: an associative binary operation held as a value (`concat`)
//!
//! ## Wrappers
//!
//! - [`Sum`], [`Product`]: numeric semigroups
//! - [`Max`], [`Min`]: ordering semigroups
//! - [`All`], [`Any`]: boolean semigroups
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use lambars_iso::typeclass::{Semigroup, Sum};
//!
//! let total = Sum::reduce_all(vec![Sum::new(1), Sum::new(2), Sum::new(3)]);
//! assert_eq!(total, Some(Sum::new(6)));
//! ```
//!
//! ## Using `SemigroupInstance`
//!
//! ```rust
//! use lambars_iso::typeclass::{SemigroupInstance, semigroup_max, semigroup_of};
//!
//! assert_eq!(semigroup_max::<i32>().concat_all(3, [9, 4]), 9);
//! assert_eq!(semigroup_of::<Vec<u8>>().concat(vec![1], vec![2]), vec![1, 2]);
//! ```

mod instance;
mod semigroup;
mod wrappers;

pub use instance::{
    FunctionSemigroup, SemigroupInstance, TypeclassSemigroup, semigroup_all, semigroup_any,
    semigroup_first, semigroup_last, semigroup_max, semigroup_min, semigroup_of,
    semigroup_product, semigroup_sum,
};
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Max, Min, Product, Sum};

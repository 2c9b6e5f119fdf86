//! Isomorphisms between types.
//!
//! An [`Isomorphism<A, B>`](Isomorphism) is a pair of total, pure functions
//! `to: A -> B` and `from: B -> A` that undo each other. The caller
//! guarantees the round-trip laws; nothing is verified at runtime.
//!
//! # Operations
//!
//! - [`to_iso`] / [`from_iso`]: convert to and from the optic form
//!   [`FunctionIso`](crate::optics::FunctionIso) (`get` / `reverse_get`)
//! - [`reverse`]: swap the two arrows
//! - [`derive_semigroup`]: transport a semigroup over `A` to one over `B`
//! - [`from_optic`], [`identity`], [`Isomorphism::compose`],
//!   [`Isomorphism::modify`]
//!
//! # Laws
//!
//! 1. **`ToFrom` Law**: `iso.from(iso.to(a)) == a`
//! 2. **`FromTo` Law**: `iso.to(iso.from(b)) == b`
//!
//! # Example
//!
//! ```
//! use lambars_iso::isomorphism::{Isomorphism, derive_semigroup, from_iso, reverse, to_iso};
//! use lambars_iso::optics::Iso;
//! use lambars_iso::typeclass::{SemigroupInstance, semigroup_all};
//!
//! let bit = Isomorphism::new(|flag: bool| if flag { 1_u8 } else { 0 }, |digit: u8| digit == 1);
//!
//! // Optic form, and back again.
//! let optic = to_iso(bit);
//! assert_eq!(optic.get(true), 1);
//! let bit = from_iso(optic);
//!
//! // Reversal.
//! let flag = reverse(bit);
//! assert!(flag.to(1));
//!
//! // Logical AND over binary digits.
//! let and = derive_semigroup(flag.reverse()).derive(semigroup_all());
//! assert_eq!(and.concat(0, 1), 0);
//! assert_eq!(and.concat(1, 1), 1);
//! ```
//!
//! # Thread Safety
//!
//! Every operation is a pure function of its arguments. An `Isomorphism`,
//! a [`SemigroupDeriver`] and a [`DerivedSemigroup`] are `Send` and `Sync`
//! whenever their functions are.

mod bijection;
mod conversion;
mod derive;

pub use bijection::Automorphism;
pub use bijection::Isomorphism;
pub use bijection::identity;
pub use bijection::reverse;

pub use conversion::from_iso;
pub use conversion::from_optic;
pub use conversion::to_iso;

pub use derive::DerivedSemigroup;
pub use derive::SemigroupDeriver;
pub use derive::derive_semigroup;

//! # lambars-iso
//!
//! Isomorphisms between types for Rust.
//!
//! ## Overview
//!
//! An isomorphism is a pair of total, pure, mutually inverse functions
//! `to: A -> B` and `from: B -> A`. This crate provides:
//!
//! - **Isomorphism**: the [`Isomorphism`](isomorphism::Isomorphism) construct with
//!   reversal, composition and conversion to and from the `Iso` optic
//! - **Optics**: the `Iso` total accessor (`get` / `reverse_get`)
//! - **Type Classes**: `Semigroup` and its dictionary form `SemigroupInstance`,
//!   which an isomorphism can transport from one type to another
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup type class and semigroup instances
//! - `optics`: Iso optics and the isomorphism module
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_iso::prelude::*;
//!
//! let bit = Isomorphism::new(
//!     |flag: bool| if flag { 1_u8 } else { 0 },
//!     |digit: u8| digit == 1,
//! );
//!
//! let and_on_bits = derive_semigroup(bit).derive(semigroup_all());
//! assert_eq!(and_on_bits.concat(0, 1), 0);
//! assert_eq!(and_on_bits.concat(1, 1), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use lambars_iso::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "optics")]
    pub use crate::isomorphism::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "optics")]
pub mod isomorphism;

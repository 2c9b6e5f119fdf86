//! Optics for lossless conversions.
//!
//! The only optic this crate needs is the total accessor [`Iso`], an
//! isomorphism with arrows named `get` and `reverse_get`. Any
//! [`Isomorphism`](crate::isomorphism::Isomorphism) converts to and from a
//! [`FunctionIso`] without changing behavior.
//!
//! # Example
//!
//! ```
//! use lambars_iso::iso;
//! use lambars_iso::optics::{Iso, iso_swap};
//!
//! let shift = iso!(|x: i32| x.wrapping_add(10), |x: i32| x.wrapping_sub(10));
//! assert_eq!(shift.get(3), 13);
//! assert_eq!(shift.reverse().get(13), 3);
//!
//! let swap = iso_swap::<u8, bool>();
//! assert_eq!(swap.get((1, true)), (true, 1));
//! ```
//!
//! # Iso Laws
//!
//! 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`

mod iso;
mod standard_optics;

pub use iso::ComposedIso;
pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::ReversedIso;

pub use standard_optics::iso_identity;
pub use standard_optics::iso_swap;

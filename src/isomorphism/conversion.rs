//! Conversions between [`Isomorphism`] and the [`Iso`] optic.
//!
//! The two are the same bijection with differently named arrows:
//!
//! | `Isomorphism` | `FunctionIso`  |
//! |---------------|----------------|
//! | `to`          | `get`          |
//! | `from`        | `reverse_get`  |
//!
//! [`to_iso`] and [`from_iso`] move the arrows across unchanged, so each is
//! the inverse of the other.

use std::sync::Arc;

use super::Isomorphism;
use crate::optics::{FunctionIso, Iso};

impl<A, B, T, F> Isomorphism<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    /// Relabels the arrows as an optic: `get = to`, `reverse_get = from`.
    #[must_use]
    pub fn into_iso(self) -> FunctionIso<A, B, T, F> {
        let (to_function, from_function) = self.into_parts();
        FunctionIso::new(to_function, from_function)
    }

    /// Relabels an optic's arrows: `to = get`, `from = reverse_get`.
    #[must_use]
    pub fn from_function_iso(iso: FunctionIso<A, B, T, F>) -> Self {
        let (get_function, reverse_get_function) = iso.into_parts();
        Self::new(get_function, reverse_get_function)
    }
}

/// Converts an [`Isomorphism`] into the equivalent [`FunctionIso`].
///
/// # Example
///
/// ```
/// use lambars_iso::isomorphism::{Isomorphism, to_iso};
/// use lambars_iso::optics::Iso;
///
/// let bit = Isomorphism::new(|flag: bool| u8::from(flag), |digit: u8| digit == 1);
/// let optic = to_iso(bit);
///
/// assert_eq!(optic.get(true), 1);
/// assert!(!optic.reverse_get(0));
/// ```
#[must_use]
pub fn to_iso<A, B, T, F>(isomorphism: Isomorphism<A, B, T, F>) -> FunctionIso<A, B, T, F>
where
    T: Fn(A) -> B,
    F: Fn(B) -> A,
{
    isomorphism.into_iso()
}

/// Converts a [`FunctionIso`] into the equivalent [`Isomorphism`].
///
/// # Example
///
/// ```
/// use lambars_iso::isomorphism::{from_iso, to_iso};
/// use lambars_iso::optics::FunctionIso;
///
/// let optic = FunctionIso::new(|x: i32| x.wrapping_neg(), |x: i32| x.wrapping_neg());
/// let negate = from_iso(optic);
/// assert_eq!(negate.to(4), -4);
///
/// let back = from_iso(to_iso(negate));
/// assert_eq!(back.from(-4), 4);
/// ```
#[must_use]
pub fn from_iso<A, B, G, Rg>(iso: FunctionIso<A, B, G, Rg>) -> Isomorphism<A, B, G, Rg>
where
    G: Fn(A) -> B,
    Rg: Fn(B) -> A,
{
    Isomorphism::from_function_iso(iso)
}

/// Adopts any [`Iso`] implementation as an [`Isomorphism`].
///
/// Both arrows share the optic through an `Arc`, so the result is `Clone`,
/// and `Send`/`Sync` whenever the optic is.
///
/// # Example
///
/// ```
/// use lambars_iso::isomorphism::from_optic;
/// use lambars_iso::optics::{Iso, iso_swap};
///
/// let unswap = from_optic(iso_swap::<u8, char>().reverse());
/// assert_eq!(unswap.to(('a', 1)), (1, 'a'));
/// ```
pub fn from_optic<A, B, I>(
    optic: I,
) -> Isomorphism<A, B, impl Fn(A) -> B + Clone, impl Fn(B) -> A + Clone>
where
    I: Iso<A, B>,
{
    let forward = Arc::new(optic);
    let backward = Arc::clone(&forward);

    Isomorphism::new(
        move |source: A| forward.get(source),
        move |value: B| backward.reverse_get(value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::iso_swap;
    use rstest::rstest;

    fn celsius_kelvin() -> Isomorphism<i64, i64, impl Fn(i64) -> i64, impl Fn(i64) -> i64> {
        Isomorphism::new(|celsius: i64| celsius + 273, |kelvin: i64| kelvin - 273)
    }

    #[rstest]
    #[case(0, 273)]
    #[case(-273, 0)]
    #[case(100, 373)]
    fn to_iso_relabels_the_arrows(#[case] celsius: i64, #[case] kelvin: i64) {
        let optic = to_iso(celsius_kelvin());
        assert_eq!(optic.get(celsius), kelvin);
        assert_eq!(optic.reverse_get(kelvin), celsius);
    }

    #[rstest]
    fn from_iso_relabels_the_arrows() {
        let isomorphism = from_iso(FunctionIso::new(
            |s: String| s.chars().collect::<Vec<_>>(),
            |chars: Vec<char>| chars.into_iter().collect::<String>(),
        ));
        assert_eq!(isomorphism.to("abc".to_string()), vec!['a', 'b', 'c']);
        assert_eq!(isomorphism.from(vec!['o', 'k']), "ok");
    }

    #[rstest]
    fn conversions_are_mutually_inverse() {
        let there_and_back = from_iso(to_iso(celsius_kelvin()));
        assert_eq!(there_and_back.to(20), celsius_kelvin().to(20));
        assert_eq!(there_and_back.from(300), celsius_kelvin().from(300));

        let optic = FunctionIso::new(|x: i64| x * 3, |x: i64| x / 3);
        let back_and_there = to_iso(from_iso(optic.clone()));
        assert_eq!(back_and_there.get(7), optic.get(7));
        assert_eq!(back_and_there.reverse_get(21), optic.reverse_get(21));
    }

    #[rstest]
    fn from_optic_accepts_composed_optics() {
        let composed = iso_swap::<u8, bool>().compose(iso_swap::<bool, u8>());
        let isomorphism = from_optic(composed);
        assert_eq!(isomorphism.to((1, true)), (1, true));

        let copy = isomorphism.clone();
        assert_eq!(copy.from((2, false)), (2, false));
    }
}

//! Standard Isos that are commonly used.

use super::{FunctionIso, Iso};

/// The identity Iso: both directions return their argument.
///
/// # Example
///
/// ```
/// use lambars_iso::optics::{Iso, iso_identity};
///
/// let identity = iso_identity::<&str>();
/// assert_eq!(identity.get("same"), "same");
/// assert_eq!(identity.reverse_get("same"), "same");
/// ```
#[must_use]
pub fn iso_identity<T>() -> impl Iso<T, T> + Clone + Send + Sync {
    FunctionIso::new(|value: T| value, |value: T| value)
}

/// Swaps the elements of a pair: `(A, B)` to `(B, A)` and back.
///
/// # Example
///
/// ```
/// use lambars_iso::optics::{Iso, iso_swap};
///
/// let swap = iso_swap::<i32, char>();
/// assert_eq!(swap.get((1, 'a')), ('a', 1));
/// assert_eq!(swap.reverse_get(('a', 1)), (1, 'a'));
/// ```
#[must_use]
pub fn iso_swap<A, B>() -> impl Iso<(A, B), (B, A)> + Clone + Send + Sync {
    FunctionIso::new(|(a, b): (A, B)| (b, a), |(b, a): (B, A)| (a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-17)]
    #[case(i32::MAX)]
    fn identity_returns_its_argument(#[case] value: i32) {
        let identity = iso_identity::<i32>();
        assert_eq!(identity.get(value), value);
        assert_eq!(identity.reverse_get(value), value);
    }

    #[rstest]
    fn swap_round_trips() {
        let swap = iso_swap::<u8, String>();
        let pair = (1, "one".to_string());
        assert_eq!(swap.reverse_get(swap.get(pair.clone())), pair);
    }
}

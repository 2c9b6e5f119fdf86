#![cfg(feature = "optics")]
//! Property-based tests for Isomorphism laws.
//!
//! Tests that conversions, reversal and semigroup derivation preserve the
//! behavior of the isomorphisms they are applied to.

use lambars_iso::isomorphism::{
    Isomorphism, derive_semigroup, from_iso, from_optic, reverse, to_iso,
};
use lambars_iso::optics::{FunctionIso, Iso, iso_swap};
use lambars_iso::typeclass::{
    SemigroupInstance, semigroup_all, semigroup_any, semigroup_first, semigroup_max, semigroup_of,
};
use proptest::prelude::*;

fn string_chars() -> Isomorphism<
    String,
    Vec<char>,
    impl Fn(String) -> Vec<char> + Clone,
    impl Fn(Vec<char>) -> String + Clone,
> {
    Isomorphism::new(
        |s: String| s.chars().collect::<Vec<_>>(),
        |chars: Vec<char>| chars.into_iter().collect::<String>(),
    )
}

fn wrapping_shift() -> Isomorphism<i32, i32, impl Fn(i32) -> i32 + Clone, impl Fn(i32) -> i32 + Clone> {
    Isomorphism::new(|x: i32| x.wrapping_add(1_000), |x: i32| x.wrapping_sub(1_000))
}

fn bit() -> Isomorphism<bool, u8, impl Fn(bool) -> u8 + Clone, impl Fn(u8) -> bool + Clone> {
    Isomorphism::new(|flag: bool| u8::from(flag), |digit: u8| digit == 1)
}

proptest! {
    // =========================================================================
    // Round-Trip Laws
    // =========================================================================

    #[test]
    fn prop_to_from_law_string_chars(source in ".*") {
        let isomorphism = string_chars();
        prop_assert_eq!(isomorphism.from(isomorphism.to(source.clone())), source);
    }

    #[test]
    fn prop_from_to_law_string_chars(chars in prop::collection::vec(any::<char>(), 0..64)) {
        let isomorphism = string_chars();
        prop_assert!(isomorphism.round_trips(&String::new(), &chars));
    }

    // =========================================================================
    // Optic Conversion Laws
    // =========================================================================

    #[test]
    fn prop_from_iso_to_iso_preserves_isomorphism(source in ".*", chars in prop::collection::vec(any::<char>(), 0..64)) {
        let original = string_chars();
        let converted = from_iso(to_iso(string_chars()));

        prop_assert_eq!(converted.to(source.clone()), original.to(source));
        prop_assert_eq!(converted.from(chars.clone()), original.from(chars));
    }

    #[test]
    fn prop_to_iso_from_iso_preserves_optic(value: i32) {
        let optic = FunctionIso::new(|x: i32| x.wrapping_mul(-1), |x: i32| x.wrapping_mul(-1));
        let converted = to_iso(from_iso(optic.clone()));

        prop_assert_eq!(converted.get(value), optic.get(value));
        prop_assert_eq!(converted.reverse_get(value), optic.reverse_get(value));
    }

    #[test]
    fn prop_from_optic_agrees_with_optic(first in any::<u16>(), second in ".*") {
        let isomorphism = from_optic(iso_swap::<u16, String>());
        let swap = iso_swap::<u16, String>();

        let pair = (first, second);
        prop_assert_eq!(isomorphism.to(pair.clone()), swap.get(pair.clone()));
        prop_assert_eq!(isomorphism.from(swap.get(pair.clone())), pair);
    }

    // =========================================================================
    // Reversal Laws
    // =========================================================================

    #[test]
    fn prop_reverse_swaps_arrows(value: i32) {
        let reversed = reverse(wrapping_shift());
        prop_assert_eq!(reversed.to(value), wrapping_shift().from(value));
        prop_assert_eq!(reversed.from(value), wrapping_shift().to(value));
    }

    #[test]
    fn prop_reverse_is_involution(value: i32) {
        let twice = reverse(reverse(wrapping_shift()));
        prop_assert_eq!(twice.to(value), wrapping_shift().to(value));
        prop_assert_eq!(twice.from(value), wrapping_shift().from(value));
    }

    // =========================================================================
    // Composition Laws
    // =========================================================================

    #[test]
    fn prop_compose_with_reverse_is_identity(value: i32) {
        let round_trip = wrapping_shift().compose(reverse(wrapping_shift()));
        prop_assert_eq!(round_trip.to(value), value);
        prop_assert_eq!(round_trip.from(value), value);
    }

    // =========================================================================
    // Semigroup Derivation Laws
    // =========================================================================

    #[test]
    fn prop_derived_semigroup_is_associative(x: i32, y: i32, z: i32) {
        let derived = derive_semigroup(wrapping_shift()).derive(semigroup_max::<i32>());

        let left = derived.concat(derived.concat(x, y), z);
        let right = derived.concat(x, derived.concat(y, z));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_derived_string_semigroup_is_associative(
        x in prop::collection::vec(any::<char>(), 0..16),
        y in prop::collection::vec(any::<char>(), 0..16),
        z in prop::collection::vec(any::<char>(), 0..16),
    ) {
        let derived = derive_semigroup(string_chars()).derive(semigroup_of::<String>());

        let left = derived.concat(derived.concat(x.clone(), y.clone()), z.clone());
        let right = derived.concat(x, derived.concat(y, z));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_derived_concat_matches_definition(x: i32, y: i32) {
        let isomorphism = wrapping_shift();
        let source = semigroup_first::<i32>();
        let derived = derive_semigroup(wrapping_shift()).derive(source);

        let expected = isomorphism.to(source.concat(isomorphism.from(x), isomorphism.from(y)));
        prop_assert_eq!(derived.concat(x, y), expected);
    }

    #[test]
    fn prop_derived_boolean_semigroups_are_associative(x in 0_u8..=1, y in 0_u8..=1, z in 0_u8..=1) {
        let deriver = derive_semigroup(bit());

        let and = deriver.derive(semigroup_all());
        prop_assert_eq!(and.concat(and.concat(x, y), z), and.concat(x, and.concat(y, z)));

        let or = deriver.derive(semigroup_any());
        prop_assert_eq!(or.concat(or.concat(x, y), z), or.concat(x, or.concat(y, z)));
    }
}

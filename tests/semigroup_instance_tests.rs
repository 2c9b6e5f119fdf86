#![cfg(feature = "typeclass")]
//! Tests for semigroup instances held as values.

use lambars_iso::typeclass::{
    All, Any, FunctionSemigroup, Max, Min, Product, Semigroup, SemigroupInstance, Sum,
    semigroup_all, semigroup_any, semigroup_first, semigroup_last, semigroup_max, semigroup_min,
    semigroup_of, semigroup_product, semigroup_sum,
};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Standard Instances
// =============================================================================

#[rstest]
fn test_boolean_instances_agree_with_wrappers() {
    for left in [true, false] {
        for right in [true, false] {
            assert_eq!(
                semigroup_all().concat(left, right),
                All(left).combine(All(right)).into_inner()
            );
            assert_eq!(
                semigroup_any().concat(left, right),
                Any(left).combine(Any(right)).into_inner()
            );
        }
    }
}

#[rstest]
#[case(3, 8)]
#[case(8, 3)]
#[case(-4, -4)]
fn test_ordering_instances_agree_with_wrappers(#[case] left: i64, #[case] right: i64) {
    assert_eq!(
        semigroup_max::<i64>().concat(left, right),
        Max(left).combine(Max(right)).into_inner()
    );
    assert_eq!(
        semigroup_min::<i64>().concat(left, right),
        Min(left).combine(Min(right)).into_inner()
    );
}

#[rstest]
fn test_numeric_instances_agree_with_wrappers() {
    assert_eq!(
        semigroup_sum::<i32>().concat(6, 7),
        Sum(6).combine(Sum(7)).into_inner()
    );
    assert_eq!(
        semigroup_product::<i32>().concat(6, 7),
        Product(6).combine(Product(7)).into_inner()
    );
}

#[rstest]
fn test_first_and_last_over_concat_all() {
    let words = ["beta", "gamma"];
    assert_eq!(semigroup_first::<&str>().concat_all("alpha", words), "alpha");
    assert_eq!(semigroup_last::<&str>().concat_all("alpha", words), "gamma");
}

#[rstest]
fn test_semigroup_of_option_absorbs_none() {
    let options = semigroup_of::<Option<String>>();
    let combined = options.concat_all(None, [Some("a".to_string()), None, Some("b".to_string())]);
    assert_eq!(combined, Some("ab".to_string()));
}

#[rstest]
fn test_function_semigroup_is_clone_when_function_is() {
    let separator = String::from(", ");
    let join = FunctionSemigroup::new(move |left: String, right: String| {
        format!("{left}{separator}{right}")
    });
    let cloned = join.clone();
    drop(join);
    assert_eq!(
        cloned.concat_all("a".to_string(), ["b".to_string(), "c".to_string()]),
        "a, b, c"
    );
}

// =============================================================================
// Associativity
// =============================================================================

proptest! {
    #[test]
    fn prop_sum_is_associative(x in -1000_i64..1000, y in -1000_i64..1000, z in -1000_i64..1000) {
        let sum = semigroup_sum::<i64>();
        prop_assert_eq!(sum.concat(sum.concat(x, y), z), sum.concat(x, sum.concat(y, z)));
    }

    #[test]
    fn prop_vec_is_associative(
        x in prop::collection::vec(any::<u8>(), 0..8),
        y in prop::collection::vec(any::<u8>(), 0..8),
        z in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let vectors = semigroup_of::<Vec<u8>>();
        let left = vectors.concat(vectors.concat(x.clone(), y.clone()), z.clone());
        let right = vectors.concat(x, vectors.concat(y, z));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_concat_all_matches_reduce_all(values in prop::collection::vec(any::<i16>(), 1..16)) {
        let maximum = semigroup_max::<i16>().concat_all(values[0], values[1..].iter().copied());
        let expected = Max::reduce_all(values.iter().copied().map(Max)).map(Max::into_inner);
        prop_assert_eq!(Some(maximum), expected);
    }
}

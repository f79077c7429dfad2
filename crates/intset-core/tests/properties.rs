//! Algebraic laws checked against randomly generated sets.

use std::collections::BTreeSet;

use intset_core::{
    IntSet, contains, difference, equals, format, intersect, is_subset_of, parse,
    symmetric_difference, union,
};
use proptest::prelude::*;

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..24)
}

fn arb_set() -> impl Strategy<Value = IntSet> {
    elements().prop_map(|v| v.into_iter().collect::<IntSet>())
}

fn model(set: &IntSet) -> BTreeSet<i32> {
    set.iter().collect()
}

fn render_loose(elems: &[i32]) -> String {
    let body: Vec<String> = elems.iter().map(|e| format!(" {e} ")).collect();
    format!(" {{{}}} ", body.join(","))
}

proptest! {
    #[test]
    fn parse_canonicalizes_any_order(elems in elements()) {
        let parsed = parse(&render_loose(&elems)).unwrap();
        let expected: BTreeSet<i32> = elems.iter().copied().collect();
        prop_assert_eq!(model(&parsed), expected);
        prop_assert!(parsed.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn format_then_parse_is_identity(a in arb_set()) {
        prop_assert_eq!(parse(&format(&a)).unwrap(), a);
    }

    #[test]
    fn union_commutes(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(union(&a, &b), union(&b, &a));
    }

    #[test]
    fn intersect_commutes(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
    }

    #[test]
    fn operations_match_btreeset(a in arb_set(), b in arb_set()) {
        let (ma, mb) = (model(&a), model(&b));
        prop_assert_eq!(model(&union(&a, &b)), &ma | &mb);
        prop_assert_eq!(model(&intersect(&a, &b)), &ma & &mb);
        prop_assert_eq!(model(&difference(&a, &b)), &ma - &mb);
        prop_assert_eq!(model(&symmetric_difference(&a, &b)), &ma ^ &mb);
        prop_assert_eq!(is_subset_of(&a, &b), ma.is_subset(&mb));
    }

    #[test]
    fn subset_reflexive_and_antisymmetric(a in arb_set(), b in arb_set()) {
        prop_assert!(is_subset_of(&a, &a));
        if is_subset_of(&a, &b) && is_subset_of(&b, &a) {
            prop_assert!(equals(&a, &b));
        }
    }

    #[test]
    fn membership_matches_model(a in arb_set(), x in -60i32..60) {
        prop_assert_eq!(contains(&a, x), model(&a).contains(&x));
    }

    #[test]
    fn results_are_subsets_of_union(a in arb_set(), b in arb_set()) {
        let u = union(&a, &b);
        prop_assert!(is_subset_of(&intersect(&a, &b), &u));
        prop_assert!(is_subset_of(&difference(&a, &b), &a));
        prop_assert!(is_subset_of(&symmetric_difference(&a, &b), &u));
    }
}

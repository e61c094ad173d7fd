//! Property-based tests for type normalization and the relations.
//!
//! Generated inputs are small descriptor trees over a fixed name set:
//! 1. Canonicalization: permuted and nested intersections collapse to one
//!    instance with one rendering, independent of creation order
//! 2. Membership: an intersection admits exactly what all components admit
//! 3. Tuples: subtyping is pointwise over equal arity, and the hash never
//!    changes once constructed

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use contra_types::{Idx, Pool, Value};
use proptest::prelude::*;

// -- Strategies --

const NAMES: &[&str] = &[
    "Integer", "Float", "Numeric", "String", "Symbol", "Object", "Array", "Hash",
];

/// A named leaf: kind selector and name index.
#[derive(Clone, Copy, Debug)]
struct Leaf {
    kind: u8,
    name: usize,
}

fn leaf_strategy() -> impl Strategy<Value = Leaf> {
    (0u8..3, 0..NAMES.len()).prop_map(|(kind, name)| Leaf { kind, name })
}

fn nominal_strategy() -> impl Strategy<Value = Leaf> {
    (0..NAMES.len()).prop_map(|name| Leaf { kind: 0, name })
}

/// A list of leaves paired with a permutation of itself.
fn permuted_leaves() -> impl Strategy<Value = (Vec<Leaf>, Vec<Leaf>)> {
    prop::collection::vec(leaf_strategy(), 0..6)
        .prop_flat_map(|leaves| (Just(leaves.clone()), Just(leaves).prop_shuffle()))
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<i64>().prop_map(Value::Int),
        Just(Value::Float(0.5)),
        "[a-z]{0,4}".prop_map(Value::Str),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Array(vec![Value::Int(1)])),
    ]
}

fn build(pool: &mut Pool, leaf: Leaf) -> Idx {
    let name = NAMES[leaf.name];
    match leaf.kind {
        0 => pool.nominal(name),
        1 => pool.symbol(name),
        _ => pool.var(name),
    }
}

fn build_all(pool: &mut Pool, leaves: &[Leaf]) -> Vec<Idx> {
    leaves.iter().map(|&leaf| build(pool, leaf)).collect()
}

// -- Canonicalization --

proptest! {
    #[test]
    fn intersection_ignores_argument_order((leaves, shuffled) in permuted_leaves()) {
        let mut pool = Pool::new();
        let types = build_all(&mut pool, &leaves);
        let permuted = build_all(&mut pool, &shuffled);

        let first = pool.intersection(&types).unwrap();
        let second = pool.intersection(&permuted).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(pool.format_type(first), pool.format_type(second));
    }

    #[test]
    fn nesting_and_nil_do_not_change_the_intersection(
        left in prop::collection::vec(leaf_strategy(), 1..4),
        right in prop::collection::vec(leaf_strategy(), 1..4),
    ) {
        let mut pool = Pool::new();
        let left = build_all(&mut pool, &left);
        let right = build_all(&mut pool, &right);

        let inner = pool.intersection(&left).unwrap();
        let mut nested = vec![inner, Idx::NIL];
        nested.extend_from_slice(&right);
        let mut flat = left.clone();
        flat.extend_from_slice(&right);

        prop_assert_eq!(
            pool.intersection(&nested).unwrap(),
            pool.intersection(&flat).unwrap()
        );
    }

    #[test]
    fn rendering_is_independent_of_creation_order((leaves, shuffled) in permuted_leaves()) {
        let mut first_pool = Pool::new();
        let mut second_pool = Pool::new();
        // Intern in a different order in the second pool.
        build_all(&mut second_pool, &shuffled);

        let first = build_all(&mut first_pool, &leaves);
        let second = build_all(&mut second_pool, &leaves);
        let first = first_pool.union(&first).unwrap();
        let second = second_pool.union(&second).unwrap();

        prop_assert_eq!(first_pool.format_type(first), second_pool.format_type(second));
    }
}

// -- Membership --

proptest! {
    #[test]
    fn intersection_membership_is_conjunction(
        leaves in prop::collection::vec(nominal_strategy(), 1..4),
        value in value_strategy(),
    ) {
        let mut pool = Pool::new();
        let types = build_all(&mut pool, &leaves);
        let both = pool.intersection(&types).unwrap();

        let expected = types.iter().all(|&ty| pool.member(ty, &value));
        prop_assert_eq!(pool.member(both, &value), expected);
    }

    #[test]
    fn union_membership_is_disjunction(
        leaves in prop::collection::vec(nominal_strategy(), 1..4),
        value in value_strategy(),
    ) {
        let mut pool = Pool::new();
        let types = build_all(&mut pool, &leaves);
        let either = pool.union(&types).unwrap();

        let expected = types.iter().any(|&ty| pool.member(ty, &value));
        prop_assert_eq!(pool.member(either, &value), expected);
    }
}

// -- Tuples --

proptest! {
    #[test]
    fn tuple_subtyping_is_pointwise(
        pairs in prop::collection::vec((nominal_strategy(), nominal_strategy()), 0..4),
    ) {
        let mut pool = Pool::new();
        let (lower, upper): (Vec<Leaf>, Vec<Leaf>) = pairs.into_iter().unzip();
        let lower = build_all(&mut pool, &lower);
        let upper = build_all(&mut pool, &upper);

        let expected = lower
            .iter()
            .zip(&upper)
            .all(|(&l, &u)| pool.subtype(l, u));
        let left = pool.tuple(&lower).unwrap();
        let right = pool.tuple(&upper).unwrap();

        prop_assert_eq!(pool.subtype(left, right), expected);
        prop_assert_eq!(!pool.tuple_upper_bounds(left).is_empty(), expected);
    }

    #[test]
    fn tuple_hash_survives_promotion(leaves in prop::collection::vec(leaf_strategy(), 0..5)) {
        let mut pool = Pool::new();
        let params = build_all(&mut pool, &leaves);
        let tuple = pool.tuple(&params).unwrap();
        let copy = pool.tuple(&params).unwrap();
        let before = pool.type_hash(tuple);

        prop_assert_eq!(pool.type_hash(copy), before);
        prop_assert!(pool.promote(tuple));
        prop_assert_eq!(pool.type_hash(tuple), before);
        prop_assert_eq!(pool.tuple_params(tuple), Some(params.as_slice()));
    }
}

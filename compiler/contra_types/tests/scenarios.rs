//! End-to-end scenarios: a contract layer building signature types,
//! checking observed values, and sharing one pool across threads.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::thread;

use contra_types::{Idx, Pool, SharedPool, Substitution, Value};
use pretty_assertions::assert_eq;

fn init_tracing() {
    // Several tests race to install the subscriber; only the first wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("contra_types=trace"))
        .with_test_writer()
        .try_init();
}

#[test]
fn heterogeneous_tuple_widens_to_array() {
    init_tracing();
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let string = pool.nominal("String");
    let pair = pool.tuple(&[int, string]).unwrap();
    let before = pool.type_hash(pair);

    let elem = pool.union(&[int, string]).unwrap();
    let array = pool.array(elem).unwrap();

    assert!(pool.subtype(pair, array));
    assert_eq!(pool.canonical(pair), array);
    assert!(pool.equal(pair, array));
    assert_eq!(pool.type_hash(pair), before);
    assert_eq!(pool.format_type(pair), "Array<(Integer or String)>");

    // After widening, any mix of the element types is accepted.
    let values = Value::Array(vec![
        Value::Str("a".into()),
        Value::Int(1),
        Value::Int(2),
    ]);
    assert!(pool.member(pair, &values));
}

#[test]
fn intersection_normalization_round_trip() {
    let mut pool = Pool::new();
    let a = pool.nominal("A");
    let b = pool.nominal("B");

    let ab = pool.intersection(&[a, b]).unwrap();
    let nested = pool.intersection(&[ab, Idx::NIL, a]).unwrap();
    let ba = pool.intersection(&[b, a]).unwrap();

    assert_eq!(nested, ab);
    assert_eq!(ba, ab);
    assert_eq!(pool.format_type(ab), "(A and B)");
    assert_eq!(pool.type_hash(nested), pool.type_hash(ab));
}

#[test]
fn generic_method_signature_is_instantiated_per_call() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let string = pool.nominal("String");
    let t = pool.var("t");

    // first: (Array<t> items) -> t
    let items = pool.array(t).unwrap();
    let arg = pool.annotated("items", items).unwrap();
    assert_eq!(pool.format_type(arg), "Array<:t> items");

    let mut subst = Substitution::default();
    subst.insert(pool.names().intern("t"), int);
    let concrete = pool.instantiate(arg, &subst).unwrap();
    let ret = pool.instantiate(t, &subst).unwrap();

    assert_eq!(pool.format_type(concrete), "Array<Integer> items");
    assert_eq!(ret, int);

    let ints = Value::Array(vec![Value::Int(1), Value::Int(2)]);
    let strings = Value::Array(vec![Value::Str("x".into())]);
    assert!(pool.member(concrete, &ints));
    assert!(!pool.member(concrete, &strings));
    assert!(!pool.member(arg, &ints));

    subst.insert(pool.names().intern("t"), string);
    let for_strings = pool.instantiate(arg, &subst).unwrap();
    assert!(pool.member(for_strings, &strings));
}

#[test]
fn query_with_wildcards_finds_signatures() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let string = pool.nominal("String");
    let hash = pool.hash_base();

    let signatures = [
        pool.generic(hash, &[string, int]).unwrap(),
        pool.array(int).unwrap(),
        pool.tuple(&[string, int]).unwrap(),
    ];
    let query = pool.generic(hash, &[Idx::WILD, int]).unwrap();

    let found: Vec<Idx> = signatures
        .iter()
        .copied()
        .filter(|&sig| pool.matches(sig, query))
        .collect();

    assert_eq!(found, vec![signatures[0]]);
}

#[test]
fn shared_pool_canonicalizes_across_threads() {
    let shared = SharedPool::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                shared.with(|pool| {
                    let a = pool.nominal("A");
                    let b = pool.nominal("B");
                    let c = pool.nominal("C");
                    let args = if i % 2 == 0 { [a, b, c] } else { [c, b, a] };
                    pool.intersection(&args).unwrap()
                })
            })
        })
        .collect();

    let results: Vec<Idx> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(shared.read().format_type(results[0]), "(A and B and C)");
}

#[test]
fn shared_pool_promotes_a_tuple_once() {
    init_tracing();
    let shared = SharedPool::new();
    let (pair, array) = shared.with(|pool| {
        let int = pool.nominal("Integer");
        let float = pool.nominal("Float");
        let pair = pool.tuple(&[int, float]).unwrap();
        let elem = pool.union(&[int, float]).unwrap();
        (pair, pool.array(elem).unwrap())
    });

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || shared.with(|pool| pool.subtype(pair, array)))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    let pool = shared.read();
    assert_eq!(pool.canonical(pair), array);
    assert!(pool.tuple_is_promoted(pair));
}

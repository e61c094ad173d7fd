use crate::{Idx, Pool, Tag, TypeError, TypeFlags};
use pretty_assertions::assert_eq;

#[test]
fn named_leaves_are_hash_consed_per_kind() {
    let mut pool = Pool::new();

    let nominal = pool.nominal("T");
    let symbol = pool.symbol("T");
    let var = pool.var("T");

    assert_eq!(pool.nominal("T"), nominal);
    assert_eq!(pool.symbol("T"), symbol);
    assert_eq!(pool.var("T"), var);
    assert_ne!(nominal, symbol);
    assert_ne!(nominal, var);
    assert_ne!(symbol, var);
    assert_eq!(pool.name_of(nominal), pool.name_of(var));
}

#[test]
fn named_constructors_accept_interned_names() {
    let mut pool = Pool::new();
    let name = pool.names().intern("Widget");

    assert_eq!(pool.nominal_named(name), pool.nominal("Widget"));
    assert_eq!(pool.symbol_named(name), pool.symbol("Widget"));
    assert_eq!(pool.var_named(name), pool.var("Widget"));
}

#[test]
fn leaf_flags() {
    let mut pool = Pool::new();
    let nominal = pool.nominal("Integer");
    let var = pool.var("t");

    assert_eq!(pool.flags(nominal), TypeFlags::empty());
    assert_eq!(pool.flags(var), TypeFlags::HAS_VAR);
}

#[test]
fn generic_requires_nominal_base() {
    let mut pool = Pool::new();
    let var = pool.var("t");
    let int = pool.nominal("Integer");

    assert_eq!(
        pool.generic(var, &[int]),
        Err(TypeError::NotNominal { idx: var })
    );
    assert_eq!(
        pool.generic(Idx::NONE, &[int]),
        Err(TypeError::InvalidTypeParam {
            position: 0,
            idx: Idx::NONE,
        })
    );
}

#[test]
fn generic_rejects_foreign_params() {
    let mut pool = Pool::new();
    let hash = pool.hash_base();
    let string = pool.nominal("String");

    assert_eq!(
        pool.generic(hash, &[string, Idx::NONE]),
        Err(TypeError::InvalidTypeParam {
            position: 1,
            idx: Idx::NONE,
        })
    );
}

#[test]
fn generic_is_hash_consed_and_propagates_flags() {
    let mut pool = Pool::new();
    let hash = pool.hash_base();
    let string = pool.nominal("String");
    let t = pool.var("t");

    let first = pool.generic(hash, &[string, t]).unwrap();
    let second = pool.generic(hash, &[string, t]).unwrap();

    assert_eq!(first, second);
    assert_eq!(pool.tag(first), Tag::Generic);
    assert!(pool.flags(first).contains(TypeFlags::HAS_VAR));
    assert!(!pool.flags(first).contains(TypeFlags::HAS_TUPLE));
}

#[test]
fn array_is_a_generic_over_the_array_base() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let base = pool.array_base();

    let array = pool.array(int).unwrap();

    assert_eq!(pool.generic(base, &[int]).unwrap(), array);
    assert_eq!(pool.generic_parts(array), Some((base, &[int][..])));
    assert!(pool.is_array(array));
    assert!(!pool.is_array(int));
}

#[test]
fn annotated_wraps_a_type_with_a_name() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let t = pool.var("t");

    let count = pool.annotated("count", int).unwrap();
    let size = pool.annotated("size", int).unwrap();
    let item = pool.annotated("item", t).unwrap();

    assert_eq!(pool.annotated("count", int).unwrap(), count);
    assert_ne!(count, size);
    assert_eq!(pool.annotated_inner(count), Some(int));
    assert_eq!(pool.lookup_name(pool.name_of(count).unwrap()), "count");
    assert!(pool.flags(item).contains(TypeFlags::HAS_VAR));
    assert_eq!(
        pool.annotated("x", Idx::NONE),
        Err(TypeError::InvalidTypeParam {
            position: 0,
            idx: Idx::NONE,
        })
    );
}

#[test]
fn union_normalizes_its_components() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let string = pool.nominal("String");
    let sym = pool.symbol("red");

    let union = pool.union(&[string, int]).unwrap();
    let nested = pool.union(&[int, Idx::NIL, union, sym]).unwrap();

    assert_eq!(pool.union(&[int, string]).unwrap(), union);
    assert_eq!(pool.components(union), &[int, string]);
    assert_eq!(pool.components(nested), &[int, string, sym]);
}

#[test]
fn union_degenerate_cases() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");

    assert_eq!(pool.union(&[]).unwrap(), Idx::NIL);
    assert_eq!(pool.union(&[Idx::NIL, Idx::NIL]).unwrap(), Idx::NIL);
    assert_eq!(pool.union(&[int, int]).unwrap(), int);
    assert_eq!(pool.union(&[int, Idx::TOP]).unwrap(), Idx::TOP);
}

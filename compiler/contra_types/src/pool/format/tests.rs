use crate::{Idx, Pool};
use pretty_assertions::assert_eq;

#[test]
fn leaves() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let sym = pool.symbol("red");
    let t = pool.var("t");

    assert_eq!(pool.format_type(int), "Integer");
    assert_eq!(pool.format_type(sym), "red");
    assert_eq!(pool.format_type(t), ":t");
    assert_eq!(pool.format_type(Idx::TOP), "%any");
    assert_eq!(pool.format_type(Idx::NIL), "nil");
    assert_eq!(pool.format_type(Idx::WILD), "*");
}

#[test]
fn composites() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let string = pool.nominal("String");
    let hash_base = pool.hash_base();

    let hash = pool.generic(hash_base, &[string, int]).unwrap();
    let union = pool.union(&[string, int]).unwrap();
    let count = pool.annotated("count", int).unwrap();

    assert_eq!(pool.format_type(hash), "Hash<String, Integer>");
    assert_eq!(pool.format_type(union), "(Integer or String)");
    assert_eq!(pool.format_type(count), "Integer count");
}

#[test]
fn tuple_renders_its_current_form() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let string = pool.nominal("String");
    let tuple = pool.tuple(&[int, string]).unwrap();

    assert_eq!(pool.format_type(tuple), "[Integer, String]");

    pool.promote(tuple);

    assert_eq!(pool.format_type(tuple), "Array<(Integer or String)>");
}

#[test]
fn nested_types() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let t = pool.var("t");
    let array = pool.array(t).unwrap();
    let tuple = pool.tuple(&[array, Idx::NIL]).unwrap();
    let both = pool.intersection(&[tuple, int]).unwrap();

    assert_eq!(pool.format_type(both), "(Integer and [Array<:t>, nil])");
}

#[test]
fn format_into_appends() {
    let mut pool = Pool::new();
    let int = pool.nominal("Integer");
    let mut buf = String::from("x: ");

    pool.format_type_into(int, &mut buf);

    assert_eq!(buf, "x: Integer");
}

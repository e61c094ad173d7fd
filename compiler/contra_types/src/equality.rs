//! Structural equality and hashing.
//!
//! For hash-consed kinds, `Idx` equality already is structural equality;
//! the structural walk matters only once tuples, which are allocated fresh
//! every time, appear somewhere in the tree.
//!
//! Unions and intersections are sets: equality and hashing ignore the order
//! of their components, so two lists that sorted differently still agree.
//!
//! Hashes follow equality with one deliberate exception: a tuple's hash is
//! fixed from its params at construction, so after promotion it stays the
//! pre-promotion value even though the tuple now equals its array form.
//! Containers keyed before promotion remain valid.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::pool::TypeData;
use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool, Tag};

/// Seed mixed into intersection hashes.
const INTERSECTION_SEED: u64 = 47;
/// Seed mixed into union hashes.
const UNION_SEED: u64 = 31;

fn fx_hash<T: Hash>(value: T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

impl Pool {
    /// Structural equality.
    ///
    /// A promoted tuple is equal to whatever its array form is equal to.
    /// Tuples of different arity are never equal.
    pub fn equal(&self, a: Idx, b: Idx) -> bool {
        if a == b {
            return true;
        }
        // Hash-consing makes distinct leaves different types.
        if self.tag(a).is_leaf() && self.tag(b).is_leaf() {
            return false;
        }

        ensure_sufficient_stack(|| match (self.data(a), self.data(b)) {
            (TypeData::Tuple(slot), _) => self.tuple_equal(*slot as usize, b),
            (_, TypeData::Tuple(_)) => {
                let other = self.canonical(b);
                other != b && self.equal(a, other)
            }
            (
                TypeData::Generic {
                    base: base_a,
                    params: params_a,
                },
                TypeData::Generic {
                    base: base_b,
                    params: params_b,
                },
            ) => base_a == base_b && self.equal_lists(params_a, params_b),
            (TypeData::Union(x), TypeData::Union(y))
            | (TypeData::Intersection(x), TypeData::Intersection(y)) => self.equal_sets(x, y),
            (
                TypeData::Annotated { name: name_a, ty: ty_a },
                TypeData::Annotated { name: name_b, ty: ty_b },
            ) => name_a == name_b && self.equal(*ty_a, *ty_b),
            _ => false,
        })
    }

    pub(crate) fn equal_lists(&self, a: &[Idx], b: &[Idx]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.equal(x, y))
    }

    /// Every member of each side is equal to some member of the other.
    pub(crate) fn equal_sets(&self, a: &[Idx], b: &[Idx]) -> bool {
        let covered = |from: &[Idx], into: &[Idx]| {
            from.iter()
                .all(|&x| into.iter().any(|&y| self.equal(x, y)))
        };
        covered(a, b) && covered(b, a)
    }

    /// Structural hash, stable for the life of the pool.
    ///
    /// Named leaves hash by name alone, so `Foo` and `:Foo` collide;
    /// equality still tells them apart.
    pub fn type_hash(&self, idx: Idx) -> u64 {
        ensure_sufficient_stack(|| match self.data(idx) {
            TypeData::Top => fx_hash(Tag::Top),
            TypeData::Nil => fx_hash(Tag::Nil),
            TypeData::Wild => fx_hash(Tag::Wild),
            TypeData::Nominal(name) | TypeData::Symbol(name) | TypeData::Var(name) => {
                fx_hash(name)
            }
            TypeData::Generic { base, params } => {
                fx_hash((self.type_hash(*base), self.list_hash(params)))
            }
            TypeData::Tuple(slot) => self.tuples[*slot as usize].hash,
            TypeData::Union(types) => self.union_hash(types),
            TypeData::Intersection(types) => self.intersection_hash(types),
            TypeData::Annotated { name, ty } => fx_hash((name, self.type_hash(*ty))),
        })
    }

    pub(crate) fn union_hash(&self, types: &[Idx]) -> u64 {
        UNION_SEED.wrapping_add(self.set_hash(types))
    }

    pub(crate) fn intersection_hash(&self, types: &[Idx]) -> u64 {
        INTERSECTION_SEED.wrapping_add(self.set_hash(types))
    }

    fn set_hash(&self, types: &[Idx]) -> u64 {
        types
            .iter()
            .fold(0, |acc: u64, &ty| acc.wrapping_add(self.type_hash(ty)))
    }

    pub(crate) fn list_hash(&self, types: &[Idx]) -> u64 {
        let mut hasher = FxHasher::default();
        types.len().hash(&mut hasher);
        for &ty in types {
            self.type_hash(ty).hash(&mut hasher);
        }
        hasher.finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

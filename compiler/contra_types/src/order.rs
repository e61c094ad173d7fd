//! Deterministic structural order over types.
//!
//! Normalizing an intersection or union sorts its components so that the
//! same multiset always yields the same registry key. The order compares
//! kind tags first, then names by their text, then children
//! lexicographically. It never looks at allocation order, so normalized
//! types render identically across runs.
//!
//! The order reads only what never changes after construction. A tuple is
//! ordered by its own params even once promoted, so a normalized component
//! list stays sorted, and rebuilding it gives the same list. The price is
//! that a promoted tuple and its equal array form sort apart, so
//! [`Pool::sort_dedup`] checks each type against everything kept so far
//! rather than only its neighbour.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::pool::TypeData;
use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool};

impl Pool {
    /// Total order over types, independent of allocation order and of
    /// tuple promotion.
    pub fn cmp_types(&self, a: Idx, b: Idx) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        ensure_sufficient_stack(|| self.cmp_structure(a, b))
    }

    fn cmp_structure(&self, a: Idx, b: Idx) -> Ordering {
        self.tag(a).cmp(&self.tag(b)).then_with(|| {
            match (self.data(a), self.data(b)) {
                (TypeData::Nominal(x), TypeData::Nominal(y))
                | (TypeData::Symbol(x), TypeData::Symbol(y))
                | (TypeData::Var(x), TypeData::Var(y)) => {
                    self.lookup_name(*x).cmp(self.lookup_name(*y))
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
                ) => self
                    .cmp_types(*base_a, *base_b)
                    .then_with(|| self.cmp_lists(params_a, params_b)),
                (TypeData::Tuple(x), TypeData::Tuple(y)) => self.cmp_lists(
                    &self.tuples[*x as usize].params,
                    &self.tuples[*y as usize].params,
                ),
                (TypeData::Union(x), TypeData::Union(y))
                | (TypeData::Intersection(x), TypeData::Intersection(y)) => self.cmp_lists(x, y),
                (
                    TypeData::Annotated { name: name_a, ty: ty_a },
                    TypeData::Annotated { name: name_b, ty: ty_b },
                ) => self
                    .cmp_types(*ty_a, *ty_b)
                    .then_with(|| self.lookup_name(*name_a).cmp(self.lookup_name(*name_b))),
                // Same sentinel kind.
                _ => Ordering::Equal,
            }
        })
    }

    fn cmp_lists(&self, a: &[Idx], b: &[Idx]) -> Ordering {
        a.iter()
            .zip(b)
            .map(|(&x, &y)| self.cmp_types(x, y))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    }

    /// Sort by [`Pool::cmp_types`] and drop structural duplicates, keeping
    /// the first occurrence.
    pub(crate) fn sort_dedup(&self, types: &mut SmallVec<[Idx; 8]>) {
        types.sort_by(|&a, &b| self.cmp_types(a, b));
        let mut kept: SmallVec<[Idx; 8]> = SmallVec::with_capacity(types.len());
        for &ty in types.iter() {
            if !kept.iter().any(|&seen| self.equal(seen, ty)) {
                kept.push(ty);
            }
        }
        *types = kept;
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

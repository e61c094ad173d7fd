//! Intersection types.
//!
//! An intersection is canonical by its normalized component list:
//! nested intersections are spliced in, `nil` arguments are dropped as
//! absent constraints, and the remainder is sorted by the structural type
//! order and deduplicated. So `(A and B)`, `(B and A)` and
//! `((A and B) and A)` are all the same handle.
//!
//! The registry matches component lists structurally, so members that are
//! equal tuples from separate constructions still find the existing
//! intersection.

use smallvec::SmallVec;

use crate::pool::TypeData;
use crate::{Idx, Pool, TypeError};

impl Pool {
    /// Intersection of `types`.
    ///
    /// No components left after normalization gives `nil`; exactly one
    /// gives that component itself.
    ///
    /// # Errors
    /// `TypeError::InvalidTypeParam` for the first argument that is not a
    /// type of this pool.
    pub fn intersection(&mut self, types: &[Idx]) -> Result<Idx, TypeError> {
        self.check_params(types)?;
        Ok(self.intersection_unchecked(types))
    }

    pub(crate) fn intersection_unchecked(&mut self, types: &[Idx]) -> Idx {
        let mut flat: SmallVec<[Idx; 8]> = SmallVec::new();
        for &ty in types {
            match self.data(ty) {
                TypeData::Nil => {}
                // Already flat: nested intersections are normalized too.
                TypeData::Intersection(members) => flat.extend_from_slice(members),
                _ => flat.push(ty),
            }
        }

        self.sort_dedup(&mut flat);
        match flat.as_slice() {
            [] => Idx::NIL,
            [single] => *single,
            _ => self.intern_intersection(flat.as_slice().into()),
        }
    }

    /// Normalized components of an intersection; empty for other kinds.
    pub fn intersection_components(&self, idx: Idx) -> &[Idx] {
        match self.data(idx) {
            TypeData::Intersection(types) => types,
            _ => &[],
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

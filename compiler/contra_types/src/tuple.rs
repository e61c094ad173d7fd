//! Fixed-length heterogeneous sequence types.
//!
//! Tuples are the one kind that is not hash-consed. Each construction gets
//! its own slot in `Pool::tuples` because a tuple carries mutable state:
//!
//! - while `Fixed`, it remembers every type it was proven a subtype of
//!   (upper bounds) and every tuple proven a subtype of it (lower bounds);
//! - once `Promoted`, it has become the homogeneous `Array<Union(params)>`
//!   and every operation delegates to that array.
//!
//! Promotion happens when a tuple is checked against an array type. The
//! recorded bounds are then re-checked against the new form, since
//! widening can break a relation that held before.
//!
//! All mutation goes through `&mut Pool`, so bound recording and promotion
//! are serialized per pool.

use crate::pool::{TupleEntry, TupleState, TypeData};
use crate::{Idx, Pool, Substitution, TypeError, TypeFlags};
use contra_ir::Value;

/// Multiplier applied to the params hash of every tuple.
const TUPLE_HASH_FACTOR: u64 = 73;

impl Pool {
    /// A fresh fixed tuple `[params...]`.
    ///
    /// Two calls with the same params give two distinct tuples. They are
    /// equal and hash alike, but bounds and promotion are tracked
    /// separately for each.
    ///
    /// # Errors
    /// `TypeError::InvalidTypeParam` for the first param that is not a type
    /// of this pool.
    pub fn tuple(&mut self, params: &[Idx]) -> Result<Idx, TypeError> {
        self.check_params(params)?;
        Ok(self.tuple_unchecked(params.into()))
    }

    pub(crate) fn tuple_unchecked(&mut self, params: Box<[Idx]>) -> Idx {
        let hash = TUPLE_HASH_FACTOR.wrapping_mul(self.list_hash(&params));
        let flags = TypeFlags::HAS_TUPLE | self.flags_of(&params);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "tuple slots are bounded by pool slots, which fit in u32"
        )]
        let slot = self.tuples.len() as u32;
        self.tuples.push(TupleEntry {
            params,
            hash,
            state: TupleState::Fixed {
                ubounds: Vec::new(),
                lbounds: Vec::new(),
            },
        });
        self.alloc(TypeData::Tuple(slot), flags)
    }

    pub(crate) fn tuple_slot(&self, idx: Idx) -> Option<usize> {
        match *self.data(idx) {
            TypeData::Tuple(slot) => Some(slot as usize),
            _ => None,
        }
    }

    fn fixed_entry(&self, idx: Idx) -> Option<&TupleEntry> {
        let entry = &self.tuples[self.tuple_slot(idx)?];
        matches!(entry.state, TupleState::Fixed { .. }).then_some(entry)
    }

    // === Queries ===

    /// The current representative of `idx`: the array form of a promoted
    /// tuple, `idx` itself otherwise.
    pub fn canonical(&self, idx: Idx) -> Idx {
        match self.tuple_slot(idx).map(|slot| &self.tuples[slot].state) {
            Some(TupleState::Promoted { array }) => *array,
            _ => idx,
        }
    }

    /// Params of a tuple, promoted or not.
    pub fn tuple_params(&self, idx: Idx) -> Option<&[Idx]> {
        self.tuple_slot(idx).map(|slot| &*self.tuples[slot].params)
    }

    /// Check if `idx` is a tuple that has been promoted.
    pub fn tuple_is_promoted(&self, idx: Idx) -> bool {
        self.canonical(idx) != idx
    }

    /// Recorded upper bounds of a fixed tuple; empty otherwise.
    pub fn tuple_upper_bounds(&self, idx: Idx) -> &[Idx] {
        match self.fixed_entry(idx).map(|entry| &entry.state) {
            Some(TupleState::Fixed { ubounds, .. }) => ubounds,
            _ => &[],
        }
    }

    /// Recorded lower bounds of a fixed tuple; empty otherwise.
    pub fn tuple_lower_bounds(&self, idx: Idx) -> &[Idx] {
        match self.fixed_entry(idx).map(|entry| &entry.state) {
            Some(TupleState::Fixed { lbounds, .. }) => lbounds,
            _ => &[],
        }
    }

    // === Promotion ===

    /// Turn a fixed tuple into `Array<Union(params)>`.
    ///
    /// Returns whether every recorded bound still holds against the
    /// promoted form. A tuple that is already promoted, or a type that is
    /// not a tuple, is left alone and reported consistent.
    pub fn promote(&mut self, idx: Idx) -> bool {
        let Some(slot) = self.tuple_slot(idx) else {
            return true;
        };
        if matches!(self.tuples[slot].state, TupleState::Promoted { .. }) {
            return true;
        }

        let params = self.tuples[slot].params.clone();
        let elem = self.union_unchecked(&params);
        let array = self.array_unchecked(elem);
        let previous = std::mem::replace(
            &mut self.tuples[slot].state,
            TupleState::Promoted { array },
        );
        tracing::debug!(tuple = ?idx, ?array, "promoted tuple to array");

        let TupleState::Fixed { ubounds, lbounds } = previous else {
            return true;
        };
        let consistent = lbounds.iter().all(|&lower| self.subtype(lower, idx))
            && ubounds.iter().all(|&upper| self.subtype(idx, upper));
        if !consistent {
            tracing::debug!(tuple = ?idx, "recorded bound broken by promotion");
        }
        consistent
    }

    // === Relations ===

    /// `tuple <= other` for the tuple in `slot`.
    pub(crate) fn tuple_subtype(&mut self, idx: Idx, slot: usize, other: Idx) -> bool {
        if let TupleState::Promoted { array } = self.tuples[slot].state {
            return self.subtype(array, other);
        }

        let other = self.canonical(other);
        if other == Idx::TOP {
            return true;
        }

        if let Some(other_slot) = self.tuple_slot(other) {
            let params = self.tuples[slot].params.clone();
            let other_params = self.tuples[other_slot].params.clone();
            if params.len() != other_params.len() {
                return false;
            }
            let holds = params
                .iter()
                .zip(other_params.iter())
                .all(|(&left, &right)| self.subtype(left, right));
            if holds {
                self.record_bounds(idx, slot, other, other_slot);
            }
            return holds;
        }

        if self.is_array(other) {
            let consistent = self.promote(idx);
            return self.subtype(idx, other) && consistent;
        }

        false
    }

    /// Remember `lower <= upper` on both sides, for whichever is still
    /// fixed. Either may have been promoted while checking components.
    fn record_bounds(&mut self, lower: Idx, lower_slot: usize, upper: Idx, upper_slot: usize) {
        if let TupleState::Fixed { ubounds, .. } = &mut self.tuples[lower_slot].state {
            if !ubounds.contains(&upper) {
                ubounds.push(upper);
            }
        }
        if let TupleState::Fixed { lbounds, .. } = &mut self.tuples[upper_slot].state {
            if !lbounds.contains(&lower) {
                lbounds.push(lower);
            }
        }
    }

    pub(crate) fn tuple_equal(&self, slot: usize, other: Idx) -> bool {
        let entry = &self.tuples[slot];
        if let TupleState::Promoted { array } = entry.state {
            return self.equal(array, other);
        }

        match self.fixed_entry(self.canonical(other)) {
            Some(other_entry) => self.equal_lists(&entry.params, &other_entry.params),
            None => false,
        }
    }

    pub(crate) fn tuple_matches(&self, slot: usize, other: Idx) -> bool {
        let entry = &self.tuples[slot];
        if let TupleState::Promoted { array } = entry.state {
            return self.matches(array, other);
        }

        let mut other = self.canonical(other);
        if let Some(inner) = self.annotated_inner(other) {
            other = self.canonical(inner);
        }
        if other == Idx::WILD {
            return true;
        }

        match self.fixed_entry(other) {
            Some(other_entry) => {
                entry.params.len() == other_entry.params.len()
                    && entry
                        .params
                        .iter()
                        .zip(other_entry.params.iter())
                        .all(|(&left, &right)| self.matches(left, right))
            }
            None => false,
        }
    }

    pub(crate) fn tuple_member(&self, slot: usize, value: &Value) -> bool {
        let entry = &self.tuples[slot];
        if let TupleState::Promoted { array } = entry.state {
            return self.member(array, value);
        }

        match value.as_array() {
            Some(items) => {
                items.len() == entry.params.len()
                    && entry
                        .params
                        .iter()
                        .zip(items)
                        .all(|(&ty, item)| self.member(ty, item))
            }
            None => false,
        }
    }

    pub(crate) fn tuple_instantiate(&mut self, slot: usize, subst: &Substitution) -> Idx {
        if let TupleState::Promoted { array } = self.tuples[slot].state {
            return self.instantiate_unchecked(array, subst);
        }

        let params = self.tuples[slot].params.clone();
        let params = self.instantiate_all(&params, subst);
        self.tuple_unchecked(params)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

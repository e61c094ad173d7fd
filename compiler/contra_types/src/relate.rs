//! Subtyping.
//!
//! `subtype` is the one relation in the core that mutates: a tuple checked
//! against another tuple records the bound on both sides, and a tuple
//! checked against an array is promoted. That is why it takes `&mut self`.
//!
//! Rules, first match wins:
//!
//! 1. identical handles, except tuples
//! 2. tuple on the left: the tuple algorithm in `tuple.rs`
//! 3. promoted tuple on the right: its array form
//! 4. top on the right, `nil` on the left
//! 5. annotated argument on either side: the wrapped type
//! 6. union on the left: every component
//! 7. intersection on the right: every component
//! 8. union on the right: some component
//! 9. intersection on the left: some component
//! 10. class hierarchy for nominals, symbols and generic bases
//!
//! Generic params are invariant.

use smallvec::SmallVec;

use crate::pool::TypeData;
use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool, Tag};

impl Pool {
    /// Check `sub <= sup`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn subtype(&mut self, sub: Idx, sup: Idx) -> bool {
        // A tuple checked against itself still records itself as a bound.
        if sub == sup && self.tuple_slot(sub).is_none() {
            return true;
        }
        ensure_sufficient_stack(|| self.subtype_inner(sub, sup))
    }

    fn subtype_inner(&mut self, sub: Idx, sup: Idx) -> bool {
        if let Some(slot) = self.tuple_slot(sub) {
            return self.tuple_subtype(sub, slot, sup);
        }

        let sup = self.canonical(sup);
        if sub == sup || sup == Idx::TOP || sub == Idx::NIL {
            return true;
        }

        if let Some(inner) = self.annotated_inner(sub) {
            return self.subtype(inner, sup);
        }
        if let Some(inner) = self.annotated_inner(sup) {
            return self.subtype(sub, inner);
        }

        match (self.tag(sub), self.tag(sup)) {
            (Tag::Union, _) => {
                let members: Box<[Idx]> = self.components(sub).into();
                members.iter().all(|&member| self.subtype(member, sup))
            }
            (_, Tag::Intersection) => {
                let members: Box<[Idx]> = self.components(sup).into();
                members.iter().all(|&member| self.subtype(sub, member))
            }
            (_, Tag::Union) => {
                let members: Box<[Idx]> = self.components(sup).into();
                members.iter().any(|&member| self.subtype(sub, member))
            }
            (Tag::Intersection, _) => {
                let members: Box<[Idx]> = self.components(sub).into();
                members.iter().any(|&member| self.subtype(member, sup))
            }
            (Tag::Generic, Tag::Generic) => self.generic_subtype(sub, sup),
            (Tag::Nominal | Tag::Symbol | Tag::Generic, Tag::Nominal) => self.class_subtype(sub, sup),
            _ => false,
        }
    }

    /// Same base, same arity, and mutually related params.
    fn generic_subtype(&mut self, sub: Idx, sup: Idx) -> bool {
        let (Some((sub_base, sub_params)), Some((sup_base, sup_params))) =
            (self.generic_parts(sub), self.generic_parts(sup))
        else {
            return false;
        };
        if sub_base != sup_base || sub_params.len() != sup_params.len() {
            return false;
        }

        let pairs: SmallVec<[(Idx, Idx); 4]> = sub_params
            .iter()
            .copied()
            .zip(sup_params.iter().copied())
            .collect();
        pairs
            .into_iter()
            .all(|(left, right)| self.subtype(left, right) && self.subtype(right, left))
    }

    /// Class of `sub` inherits from the nominal `sup`.
    fn class_subtype(&self, sub: Idx, sup: Idx) -> bool {
        let Some(ancestor) = self.name_of(sup) else {
            return false;
        };
        let class = match *self.data(sub) {
            TypeData::Nominal(name) => name,
            TypeData::Symbol(_) => self.names().intern("Symbol"),
            TypeData::Generic { base, .. } => match self.name_of(base) {
                Some(name) => name,
                None => return false,
            },
            _ => return false,
        };
        self.is_descendant(class, ancestor)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

//! Type variable substitution.
//!
//! Composites are rebuilt through their smart constructors, so the result
//! is normalized again: substituting `t := nil` into `(t and String)`
//! yields `String`. Types whose flags show neither a variable nor a tuple
//! come back unchanged without a walk.

use contra_ir::Name;
use rustc_hash::FxHashMap;

use crate::pool::TypeData;
use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool, TypeError};

/// Binding of type variable names to types.
pub type Substitution = FxHashMap<Name, Idx>;

impl Pool {
    /// Replace every variable bound in `subst`.
    ///
    /// Unbound variables are kept. Tuples are copied into fresh tuples with
    /// empty bounds; a promoted tuple instantiates as its array form.
    ///
    /// # Errors
    /// `TypeError::InvalidTypeParam` if `idx` or a bound type is not a type
    /// of this pool.
    pub fn instantiate(&mut self, idx: Idx, subst: &Substitution) -> Result<Idx, TypeError> {
        self.check_param(0, idx)?;
        for (position, &bound) in subst.values().enumerate() {
            self.check_param(position + 1, bound)?;
        }
        Ok(self.instantiate_unchecked(idx, subst))
    }

    pub(crate) fn instantiate_unchecked(&mut self, idx: Idx, subst: &Substitution) -> Idx {
        if self.flags(idx).is_inert() {
            return idx;
        }

        ensure_sufficient_stack(|| match self.data(idx).clone() {
            TypeData::Var(name) => subst.get(&name).copied().unwrap_or(idx),
            TypeData::Generic { base, params } => {
                let params = self.instantiate_all(&params, subst);
                self.generic_unchecked(base, params)
            }
            TypeData::Tuple(slot) => self.tuple_instantiate(slot as usize, subst),
            TypeData::Union(types) => {
                let types = self.instantiate_all(&types, subst);
                self.union_unchecked(&types)
            }
            TypeData::Intersection(types) => {
                let types = self.instantiate_all(&types, subst);
                self.intersection_unchecked(&types)
            }
            TypeData::Annotated { name, ty } => {
                let ty = self.instantiate_unchecked(ty, subst);
                self.annotated_unchecked(name, ty)
            }
            TypeData::Top
            | TypeData::Nil
            | TypeData::Wild
            | TypeData::Nominal(_)
            | TypeData::Symbol(_) => idx,
        })
    }

    pub(crate) fn instantiate_all(&mut self, types: &[Idx], subst: &Substitution) -> Box<[Idx]> {
        types
            .iter()
            .map(|&ty| self.instantiate_unchecked(ty, subst))
            .collect()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

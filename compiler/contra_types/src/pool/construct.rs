//! Smart constructors for the hash-consed kinds.
//!
//! Leaf constructors are infallible: a name is always a valid descriptor.
//! Composite constructors validate their components first and report the
//! first foreign handle as `TypeError::InvalidTypeParam`.

use contra_ir::Name;
use smallvec::SmallVec;

use super::{push_item, Pool, TypeData};
use crate::{Idx, TypeError, TypeFlags};

impl Pool {
    // === Named Leaves ===

    /// Nominal (class) type `name`.
    pub fn nominal(&mut self, name: &str) -> Idx {
        let name = self.names.intern(name);
        self.nominal_named(name)
    }

    /// Nominal type for an already interned name.
    pub fn nominal_named(&mut self, name: Name) -> Idx {
        let items = &mut self.items;
        self.nominals.intern_with(name, |&name| {
            push_item(items, TypeData::Nominal(name), TypeFlags::empty())
        })
    }

    /// Singleton symbol type `:name`.
    pub fn symbol(&mut self, name: &str) -> Idx {
        let name = self.names.intern(name);
        self.symbol_named(name)
    }

    /// Symbol type for an already interned name.
    pub fn symbol_named(&mut self, name: Name) -> Idx {
        let items = &mut self.items;
        self.symbols.intern_with(name, |&name| {
            push_item(items, TypeData::Symbol(name), TypeFlags::empty())
        })
    }

    /// Type variable `name`.
    pub fn var(&mut self, name: &str) -> Idx {
        let name = self.names.intern(name);
        self.var_named(name)
    }

    /// Type variable for an already interned name.
    pub fn var_named(&mut self, name: Name) -> Idx {
        let items = &mut self.items;
        self.vars.intern_with(name, |&name| {
            push_item(items, TypeData::Var(name), TypeFlags::HAS_VAR)
        })
    }

    // === Generic ===

    /// Generic type `base<params...>`. `base` must be a nominal type.
    pub fn generic(&mut self, base: Idx, params: &[Idx]) -> Result<Idx, TypeError> {
        self.check_param(0, base)?;
        if !matches!(self.data(base), TypeData::Nominal(_)) {
            return Err(TypeError::NotNominal { idx: base });
        }
        self.check_params(params)?;
        Ok(self.generic_unchecked(base, params.into()))
    }

    pub(crate) fn generic_unchecked(&mut self, base: Idx, params: Box<[Idx]>) -> Idx {
        let flags = self.flags_of(&params);
        let items = &mut self.items;
        self.generics.intern_with((base, params), |(base, params)| {
            push_item(
                items,
                TypeData::Generic {
                    base: *base,
                    params: params.clone(),
                },
                flags,
            )
        })
    }

    /// Homogeneous sequence type `Array<elem>`.
    pub fn array(&mut self, elem: Idx) -> Result<Idx, TypeError> {
        self.check_param(0, elem)?;
        Ok(self.array_unchecked(elem))
    }

    pub(crate) fn array_unchecked(&mut self, elem: Idx) -> Idx {
        let base = self.array_base;
        self.generic_unchecked(base, Box::new([elem]))
    }

    // === Annotated Argument ===

    /// Argument annotation `ty name`, e.g. `Integer count`.
    pub fn annotated(&mut self, name: &str, ty: Idx) -> Result<Idx, TypeError> {
        self.check_param(0, ty)?;
        let name = self.names.intern(name);
        Ok(self.annotated_unchecked(name, ty))
    }

    pub(crate) fn annotated_unchecked(&mut self, name: Name, ty: Idx) -> Idx {
        let flags = self.flags_of(&[ty]);
        let items = &mut self.items;
        self.annotated.intern_with((name, ty), |&(name, ty)| {
            push_item(items, TypeData::Annotated { name, ty }, flags)
        })
    }

    // === Union ===

    /// Union of `types`.
    ///
    /// Nested unions are flattened and `nil` components dropped; a top
    /// component absorbs the whole union. The rest is sorted by the
    /// structural type order and deduplicated. No components left gives
    /// `nil`, one gives that component.
    pub fn union(&mut self, types: &[Idx]) -> Result<Idx, TypeError> {
        self.check_params(types)?;
        Ok(self.union_unchecked(types))
    }

    pub(crate) fn union_unchecked(&mut self, types: &[Idx]) -> Idx {
        let mut flat: SmallVec<[Idx; 8]> = SmallVec::new();
        for &ty in types {
            match self.data(ty) {
                TypeData::Top => return Idx::TOP,
                TypeData::Nil => {}
                TypeData::Union(members) => flat.extend_from_slice(members),
                _ => flat.push(ty),
            }
        }

        self.sort_dedup(&mut flat);
        match flat.as_slice() {
            [] => Idx::NIL,
            [single] => *single,
            _ => self.intern_union(flat.as_slice().into()),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;

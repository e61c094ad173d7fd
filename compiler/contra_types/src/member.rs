//! Runtime value membership.

use contra_ir::{Name, Value};

use crate::pool::TypeData;
use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool};

impl Pool {
    /// Check if the runtime `value` belongs to type `idx`.
    ///
    /// `nil` is a member of every nominal and generic type, as in the
    /// dynamic language these contracts guard. Type variables have no
    /// members until instantiated.
    pub fn member(&self, idx: Idx, value: &Value) -> bool {
        ensure_sufficient_stack(|| match self.data(idx) {
            TypeData::Top | TypeData::Wild => true,
            TypeData::Nil => value.is_nil(),
            TypeData::Nominal(class) => value.is_nil() || self.instance_of(value, *class),
            TypeData::Symbol(name) => matches!(value, Value::Symbol(sym) if sym == name),
            TypeData::Var(_) => false,
            TypeData::Union(types) => types.iter().any(|&ty| self.member(ty, value)),
            TypeData::Intersection(types) => types.iter().all(|&ty| self.member(ty, value)),
            TypeData::Generic { base, params } => self.generic_member(*base, params, value),
            TypeData::Tuple(slot) => self.tuple_member(*slot as usize, value),
            TypeData::Annotated { ty, .. } => self.member(*ty, value),
        })
    }

    fn instance_of(&self, value: &Value, class: Name) -> bool {
        self.is_descendant(value.class_name(self.names()), class)
    }

    fn generic_member(&self, base: Idx, params: &[Idx], value: &Value) -> bool {
        match (value, params) {
            (Value::Nil, _) => true,
            (Value::Array(elems), [elem]) if base == self.array_base() => {
                elems.iter().all(|item| self.member(*elem, item))
            }
            (Value::Hash(pairs), [key, val]) if base == self.hash_base() => pairs
                .iter()
                .all(|(k, v)| self.member(*key, k) && self.member(*val, v)),
            _ => self
                .name_of(base)
                .is_some_and(|class| self.instance_of(value, class)),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

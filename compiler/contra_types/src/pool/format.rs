//! Human-readable rendering of types.
//!
//! | Kind          | Rendering          |
//! |---------------|--------------------|
//! | nominal       | `Integer`          |
//! | symbol        | `sym`              |
//! | variable      | `:t`               |
//! | generic       | `Hash<K, V>`       |
//! | tuple         | `[Integer, String]`|
//! | union         | `(A or B)`         |
//! | intersection  | `(A and B)`        |
//! | annotated     | `Integer count`    |
//! | top / nil / * | `%any` `nil` `*`   |
//!
//! A promoted tuple renders as its array form.

use super::{Pool, TupleState, TypeData};
use crate::stack::ensure_sufficient_stack;
use crate::Idx;

impl Pool {
    /// Render a type as a string.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::with_capacity(32);
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Render a type into an existing buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        ensure_sufficient_stack(|| match self.data(idx) {
            TypeData::Top => buf.push_str("%any"),
            TypeData::Nil => buf.push_str("nil"),
            TypeData::Wild => buf.push('*'),
            TypeData::Nominal(name) | TypeData::Symbol(name) => {
                buf.push_str(self.lookup_name(*name));
            }
            TypeData::Var(name) => {
                buf.push(':');
                buf.push_str(self.lookup_name(*name));
            }
            TypeData::Generic { base, params } => {
                self.format_type_into(*base, buf);
                buf.push('<');
                self.format_list(params, ", ", buf);
                buf.push('>');
            }
            TypeData::Tuple(slot) => {
                let entry = &self.tuples[*slot as usize];
                match entry.state {
                    TupleState::Promoted { array } => self.format_type_into(array, buf),
                    TupleState::Fixed { .. } => {
                        buf.push('[');
                        self.format_list(&entry.params, ", ", buf);
                        buf.push(']');
                    }
                }
            }
            TypeData::Union(types) => {
                buf.push('(');
                self.format_list(types, " or ", buf);
                buf.push(')');
            }
            TypeData::Intersection(types) => {
                buf.push('(');
                self.format_list(types, " and ", buf);
                buf.push(')');
            }
            TypeData::Annotated { name, ty } => {
                self.format_type_into(*ty, buf);
                buf.push(' ');
                buf.push_str(self.lookup_name(*name));
            }
        });
    }

    fn format_list(&self, types: &[Idx], sep: &str, buf: &mut String) {
        for (i, &ty) in types.iter().enumerate() {
            if i > 0 {
                buf.push_str(sep);
            }
            self.format_type_into(ty, buf);
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;

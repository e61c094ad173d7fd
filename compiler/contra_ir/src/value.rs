//! Runtime values checked by type membership.
//!
//! The contract layer converts the concrete values it observes at a call
//! boundary into `Value` before asking a type whether the value belongs to
//! it. Only the shape matters here: every value reports the name of its
//! runtime class, and containers expose their elements.

use crate::{Name, StringInterner};

/// A runtime value as seen by membership checks.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The nil value.
    Nil,
    /// `true` or `false`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(String),
    /// Symbol value, e.g. `:name`.
    Symbol(Name),
    /// Ordered, variable-length array.
    Array(Vec<Value>),
    /// Hash as ordered key/value pairs.
    Hash(Vec<(Value, Value)>),
    /// Instance of a user-defined class.
    Object {
        /// Runtime class of the instance.
        class: Name,
    },
}

impl Value {
    /// Name of the runtime class of this value.
    pub fn class_name(&self, interner: &StringInterner) -> Name {
        let builtin = match self {
            Value::Nil => "NilClass",
            Value::Bool(true) => "TrueClass",
            Value::Bool(false) => "FalseClass",
            Value::Int(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Str(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Array(_) => "Array",
            Value::Hash(_) => "Hash",
            Value::Object { class } => return *class,
        };
        interner.intern(builtin)
    }

    /// Check if this is the nil value.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Elements of an array value.
    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elems) => Some(elems),
            _ => None,
        }
    }
}
